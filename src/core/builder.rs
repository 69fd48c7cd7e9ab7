use crate::config::catalog_config::{CatalogConfig, DepartmentEntry, InstitutionConfig};
use crate::core::{CourseRecord, CourseSource};
use crate::domain::model::{CatalogBuild, DepartmentOutcome, DepartmentReport, RunReport};
use std::time::Duration;

/// Walks every configured institution and department and collects course
/// records in declaration order.
pub struct CatalogBuilder<'a, S: CourseSource> {
    catalog: &'a CatalogConfig,
    source: &'a S,
    delay: Duration,
}

impl<'a, S: CourseSource> CatalogBuilder<'a, S> {
    pub fn new(catalog: &'a CatalogConfig, source: &'a S) -> Self {
        Self {
            catalog,
            source,
            delay: catalog.delay(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Builds the whole catalog. Department failures are recorded in the
    /// report and never abort the build.
    pub async fn build(&self) -> CatalogBuild {
        let mut records = Vec::new();
        let mut report = RunReport::default();

        for institution in &self.catalog.institutions {
            self.build_institution(institution, &mut records, &mut report)
                .await;
        }

        CatalogBuild { records, report }
    }

    async fn build_institution(
        &self,
        institution: &InstitutionConfig,
        records: &mut Vec<CourseRecord>,
        report: &mut RunReport,
    ) {
        tracing::info!("Scraping {} courses...", institution.name);
        let before = records.len();

        for department in &institution.departments {
            tracing::info!("  Fetching {} ({})...", department.name, department.code);

            let outcome = self
                .collect_department(institution, department, records)
                .await;

            if let DepartmentOutcome::Skipped { reason } = &outcome {
                tracing::warn!("  ⏭️ Skipping {}: {}", department.code, reason);
            }

            report.push(DepartmentReport {
                institution_id: institution.id.clone(),
                department_code: department.code.clone(),
                department_name: department.name.clone(),
                outcome,
            });

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        tracing::info!(
            "Scraped {} {} courses",
            records.len() - before,
            institution.id
        );
    }

    async fn collect_department(
        &self,
        institution: &InstitutionConfig,
        department: &DepartmentEntry,
        records: &mut Vec<CourseRecord>,
    ) -> DepartmentOutcome {
        match self.source.fetch_department(institution, department).await {
            Ok(courses) => {
                records.extend(courses.iter().map(|course| {
                    CourseRecord::new(
                        &institution.id,
                        &institution.name,
                        &department.code,
                        &department.name,
                        &course.number,
                        &course.title,
                        course.credits,
                    )
                }));
                DepartmentOutcome::Collected {
                    count: courses.len(),
                }
            }
            Err(e) => DepartmentOutcome::Skipped {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog_config::CourseEntry;
    use crate::core::source::StaticCourseSource;
    use crate::utils::error::{CatalogError, Result};
    use async_trait::async_trait;

    fn single_course_catalog() -> CatalogConfig {
        CatalogConfig::from_toml_str(
            r#"
[scrape]
delay_ms = 0

[[institutions]]
id = "UH"
name = "University of Houston"
departments = [{ code = "MATH", name = "Mathematics" }]

[institutions.courses]
MATH = [{ number = "1431", title = "Calculus I", credits = 4 }]
"#,
        )
        .unwrap()
    }

    struct FailingSource {
        failing_department: &'static str,
    }

    #[async_trait]
    impl CourseSource for FailingSource {
        async fn fetch_department(
            &self,
            institution: &InstitutionConfig,
            department: &DepartmentEntry,
        ) -> Result<Vec<CourseEntry>> {
            if department.code == self.failing_department {
                return Err(CatalogError::FetchError {
                    department: department.code.clone(),
                    message: "connection reset".to_string(),
                });
            }
            StaticCourseSource
                .fetch_department(institution, department)
                .await
        }
    }

    #[tokio::test]
    async fn test_single_course_catalog() {
        let catalog = single_course_catalog();
        let build = CatalogBuilder::new(&catalog, &StaticCourseSource)
            .build()
            .await;

        assert_eq!(
            build.records,
            vec![CourseRecord {
                institution_id: "UH".to_string(),
                institution_name: "University of Houston".to_string(),
                department_code: "MATH".to_string(),
                department_name: "Mathematics".to_string(),
                course_code: "MATH 1431".to_string(),
                course_number: "1431".to_string(),
                title: "Calculus I".to_string(),
                credit_hours: 4,
                description: "Calculus I - Mathematics course at University of Houston"
                    .to_string(),
            }]
        );
        assert_eq!(
            build.report.departments[0].outcome,
            DepartmentOutcome::Collected { count: 1 }
        );
    }

    #[tokio::test]
    async fn test_department_without_table_is_skipped() {
        let catalog = CatalogConfig::from_toml_str(
            r#"
[scrape]
delay_ms = 0

[[institutions]]
id = "UH"
name = "University of Houston"
departments = [
    { code = "ARTS", name = "Art" },
    { code = "MATH", name = "Mathematics" },
]

[institutions.courses]
MATH = [
    { number = "1431", title = "Calculus I", credits = 4 },
    { number = "1432", title = "Calculus II", credits = 4 },
]
"#,
        )
        .unwrap();

        let build = CatalogBuilder::new(&catalog, &StaticCourseSource)
            .build()
            .await;

        assert_eq!(build.records.len(), 2);
        assert_eq!(build.report.departments.len(), 2);
        assert!(matches!(
            build.report.departments[0].outcome,
            DepartmentOutcome::Skipped { .. }
        ));
        assert_eq!(build.report.skipped().count(), 1);
        assert_eq!(build.report.record_count(), 2);
    }

    #[tokio::test]
    async fn test_source_failure_does_not_abort_build() {
        let catalog = CatalogConfig::embedded().unwrap();
        let source = FailingSource {
            failing_department: "COSC",
        };

        let build = CatalogBuilder::new(&catalog, &source)
            .with_delay(Duration::ZERO)
            .build()
            .await;

        // COSC fails for both institutions: 17 UH + 6 HCCS courses missing
        assert_eq!(build.records.len(), 125 - 17 - 6);
        let skipped: Vec<_> = build.report.skipped().collect();
        assert_eq!(skipped.len(), 2);
        assert!(skipped.iter().all(|d| d.department_code == "COSC"));
        match &skipped[0].outcome {
            DepartmentOutcome::Skipped { reason } => assert!(reason.contains("connection reset")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_records_follow_declaration_order() {
        let catalog = CatalogConfig::embedded().unwrap();
        let build = CatalogBuilder::new(&catalog, &StaticCourseSource)
            .with_delay(Duration::ZERO)
            .build()
            .await;

        assert_eq!(build.records.len(), 125);
        assert_eq!(build.records[0].course_code, "COSC 1306");
        assert_eq!(build.records[66].institution_id, "UH");
        assert_eq!(build.records[66].course_code, "ECON 2305");
        assert_eq!(build.records[67].institution_id, "HCCS");
        assert_eq!(build.records[67].course_code, "COSC 1301");
        assert_eq!(build.records[124].course_code, "ECON 2302");

        for record in &build.records {
            assert_eq!(
                record.course_code,
                format!("{} {}", record.department_code, record.course_number)
            );
            assert!(record.credit_hours > 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_between_departments() {
        let catalog = single_course_catalog();
        let start = tokio::time::Instant::now();

        CatalogBuilder::new(&catalog, &StaticCourseSource)
            .with_delay(Duration::from_secs(1))
            .build()
            .await;

        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
