use serde::{Deserialize, Serialize};

/// One course offered by an institution.
///
/// Field order is the column order of the CSV export, and the serde names are
/// the keys used by both exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "university")]
    pub institution_id: String,
    #[serde(rename = "university_name")]
    pub institution_name: String,
    pub department_code: String,
    pub department_name: String,
    pub course_code: String,
    pub course_number: String,
    pub title: String,
    #[serde(rename = "credits")]
    pub credit_hours: u32,
    pub description: String,
}

impl CourseRecord {
    /// Builds a record, deriving `course_code` and `description`.
    pub fn new(
        institution_id: &str,
        institution_name: &str,
        department_code: &str,
        department_name: &str,
        course_number: &str,
        title: &str,
        credit_hours: u32,
    ) -> Self {
        Self {
            institution_id: institution_id.to_string(),
            institution_name: institution_name.to_string(),
            department_code: department_code.to_string(),
            department_name: department_name.to_string(),
            course_code: format!("{} {}", department_code, course_number),
            course_number: course_number.to_string(),
            title: title.to_string(),
            credit_hours,
            description: format!(
                "{} - {} course at {}",
                title, department_name, institution_name
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentOutcome {
    Collected { count: usize },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReport {
    pub institution_id: String,
    pub department_code: String,
    pub department_name: String,
    pub outcome: DepartmentOutcome,
}

/// Per-department outcomes of one catalog build, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub departments: Vec<DepartmentReport>,
}

impl RunReport {
    pub fn push(&mut self, report: DepartmentReport) {
        self.departments.push(report);
    }

    pub fn collected(&self) -> impl Iterator<Item = &DepartmentReport> {
        self.departments
            .iter()
            .filter(|d| matches!(d.outcome, DepartmentOutcome::Collected { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &DepartmentReport> {
        self.departments
            .iter()
            .filter(|d| matches!(d.outcome, DepartmentOutcome::Skipped { .. }))
    }

    pub fn record_count(&self) -> usize {
        self.departments
            .iter()
            .map(|d| match d.outcome {
                DepartmentOutcome::Collected { count } => count,
                DepartmentOutcome::Skipped { .. } => 0,
            })
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub records: Vec<CourseRecord>,
    pub report: RunReport,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<CourseRecord>,
    pub report: RunReport,
    pub summary: crate::core::summary::CatalogSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularExport {
    Written { rows: usize },
    Skipped,
}

#[derive(Debug, Clone)]
pub struct LoadResult {
    pub json_path: String,
    pub json_records: usize,
    pub csv_path: String,
    pub csv: TabularExport,
}
