use crate::config::catalog_config::CatalogConfig;
use crate::core::builder::CatalogBuilder;
use crate::core::exporter::{export_structured, export_tabular};
use crate::core::summary::summarize;
use crate::core::{CatalogBuild, ConfigProvider, CourseSource, Pipeline, Storage, TransformResult};
use crate::domain::model::LoadResult;
use crate::utils::error::Result;
use std::path::Path;

pub struct CatalogPipeline<S: Storage, C: ConfigProvider, Src: CourseSource> {
    storage: S,
    config: C,
    catalog: CatalogConfig,
    source: Src,
}

impl<S: Storage, C: ConfigProvider, Src: CourseSource> CatalogPipeline<S, C, Src> {
    pub fn new(storage: S, config: C, catalog: CatalogConfig, source: Src) -> Self {
        Self {
            storage,
            config,
            catalog,
            source,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, Src: CourseSource> Pipeline for CatalogPipeline<S, C, Src> {
    async fn extract(&self) -> Result<CatalogBuild> {
        let mut builder = CatalogBuilder::new(&self.catalog, &self.source);
        if let Some(delay) = self.config.delay_override() {
            builder = builder.with_delay(delay);
        }

        Ok(builder.build().await)
    }

    async fn transform(&self, build: CatalogBuild) -> Result<TransformResult> {
        let summary = summarize(&build.records);
        tracing::debug!(
            "Summarized {} records across {} departments",
            summary.total,
            summary.departments.len()
        );

        Ok(TransformResult {
            records: build.records,
            report: build.report,
            summary,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<LoadResult> {
        let json_file = self.config.json_filename();
        let csv_file = self.config.csv_filename();

        let json_records = export_structured(&self.storage, &result.records, json_file).await?;
        let csv = export_tabular(&self.storage, &result.records, csv_file).await?;

        let output_path = Path::new(self.config.output_path());
        Ok(LoadResult {
            json_path: output_path.join(json_file).display().to_string(),
            json_records,
            csv_path: output_path.join(csv_file).display().to_string(),
            csv,
        })
    }
}
