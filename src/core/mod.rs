pub mod builder;
pub mod etl;
pub mod exporter;
pub mod pipeline;
pub mod source;
pub mod summary;

pub use crate::domain::model::{CatalogBuild, CourseRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, CourseSource, Pipeline, Storage};
pub use crate::utils::error::Result;
