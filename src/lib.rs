pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, LocalStorage};

pub use crate::config::catalog_config::CatalogConfig;
pub use crate::core::{
    builder::CatalogBuilder, etl::CatalogEngine, pipeline::CatalogPipeline,
    source::StaticCourseSource, summary::{summarize, CatalogSummary},
};
pub use crate::domain::model::{CourseRecord, DepartmentOutcome, RunReport, TabularExport};
pub use crate::utils::error::{CatalogError, Result};
