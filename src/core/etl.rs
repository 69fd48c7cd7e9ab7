use crate::core::{Pipeline, TransformResult};
use crate::domain::model::LoadResult;
use crate::utils::error::Result;

#[derive(Debug)]
pub struct RunOutcome {
    pub result: TransformResult,
    pub load: LoadResult,
}

pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🚀 Building course catalog");
        let build = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Collected {} courses from {} departments ({} skipped)",
            build.records.len(),
            build.report.collected().count(),
            build.report.skipped().count()
        );

        let result = self.pipeline.transform(build).await?;

        tracing::info!("💾 Exporting {} courses", result.records.len());
        let load = self.pipeline.load(&result).await?;

        Ok(RunOutcome { result, load })
    }
}
