use crate::config::catalog_config::{CourseEntry, DepartmentEntry, InstitutionConfig};
use crate::core::CourseSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;

/// Serves the course tables embedded in the catalog configuration.
///
/// No request is ever sent to `catalog_url`; the URL is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCourseSource;

#[async_trait]
impl CourseSource for StaticCourseSource {
    async fn fetch_department(
        &self,
        institution: &InstitutionConfig,
        department: &DepartmentEntry,
    ) -> Result<Vec<CourseEntry>> {
        if let Some(url) = &institution.catalog_url {
            tracing::debug!(
                "Catalog fetch disabled for {}, using static table instead of {}",
                department.code,
                url
            );
        }

        institution
            .course_table(&department.code)
            .map(<[CourseEntry]>::to_vec)
            .ok_or_else(|| CatalogError::MissingCourseTable {
                institution: institution.id.clone(),
                department: department.code.clone(),
            })
    }
}
