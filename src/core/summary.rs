use crate::core::CourseRecord;
use std::collections::BTreeMap;
use std::fmt;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionCount {
    pub institution_id: String,
    pub institution_name: String,
    pub count: usize,
}

/// Aggregate counts over a finished catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    /// In order of first appearance.
    pub institutions: Vec<InstitutionCount>,
    /// Keyed by `"<institution_id> - <department_name>"`.
    pub departments: BTreeMap<String, usize>,
}

pub fn summarize(records: &[CourseRecord]) -> CatalogSummary {
    let mut summary = CatalogSummary {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        match summary
            .institutions
            .iter_mut()
            .find(|i| i.institution_id == record.institution_id)
        {
            Some(entry) => entry.count += 1,
            None => summary.institutions.push(InstitutionCount {
                institution_id: record.institution_id.clone(),
                institution_name: record.institution_name.clone(),
                count: 1,
            }),
        }

        let label = format!("{} - {}", record.institution_id, record.department_name);
        *summary.departments.entry(label).or_insert(0) += 1;
    }

    summary
}

#[cfg(test)]
impl CatalogSummary {
    pub fn institution_count(&self, institution_id: &str) -> usize {
        self.institutions
            .iter()
            .find(|i| i.institution_id == institution_id)
            .map(|i| i.count)
            .unwrap_or(0)
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "COURSE SCRAPING SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total Courses: {}", self.total)?;
        for institution in &self.institutions {
            writeln!(
                f,
                "  - {}: {}",
                institution.institution_name, institution.count
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Departments covered:")?;
        for (label, count) in &self.departments {
            writeln!(f, "  {}: {} courses", label, count)?;
        }
        write!(f, "{}", rule)
    }
}
