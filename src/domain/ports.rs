use crate::config::catalog_config::{CourseEntry, DepartmentEntry, InstitutionConfig};
use crate::domain::model::{CatalogBuild, LoadResult, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn json_filename(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn delay_override(&self) -> Option<Duration>;
}

/// Where a department's course tuples come from.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_department(
        &self,
        institution: &InstitutionConfig,
        department: &DepartmentEntry,
    ) -> Result<Vec<CourseEntry>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<CatalogBuild>;
    async fn transform(&self, build: CatalogBuild) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<LoadResult>;
}
