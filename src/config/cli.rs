use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-scraper")]
#[command(about = "Builds the course catalog dataset and exports it to JSON and CSV")]
pub struct CliConfig {
    /// Catalog TOML to use instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "courses.json")]
    pub json_file: String,

    #[arg(long, default_value = "courses.csv")]
    pub csv_file: String,

    /// Pause between departments, overrides the catalog setting
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn json_filename(&self) -> &str {
        &self.json_file
    }

    fn csv_filename(&self) -> &str {
        &self.csv_file
    }

    fn delay_override(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_path("json_file", &self.json_file)?;
        validate_path("csv_file", &self.csv_file)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
