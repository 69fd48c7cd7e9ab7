use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// The catalog shipped with the binary.
pub const EMBEDDED_CATALOG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/catalog.toml"));

const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub scrape: Option<ScrapeConfig>,
    #[serde(default)]
    pub institutions: Vec<InstitutionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionConfig {
    pub id: String,
    pub name: String,
    pub catalog_url: Option<String>,
    #[serde(default)]
    pub departments: Vec<DepartmentEntry>,
    /// Course tables keyed by department code.
    #[serde(default)]
    pub courses: BTreeMap<String, Vec<CourseEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub number: String,
    pub title: String,
    pub credits: u32,
}

impl CatalogConfig {
    /// 載入內建的課程目錄
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// 從 TOML 檔案載入課程目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析課程目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 各科系之間的等待時間
    pub fn delay(&self) -> Duration {
        let ms = self
            .scrape
            .as_ref()
            .and_then(|s| s.delay_ms)
            .unwrap_or(DEFAULT_DELAY_MS);
        Duration::from_millis(ms)
    }

    pub fn institution(&self, id: &str) -> Option<&InstitutionConfig> {
        self.institutions.iter().find(|i| i.id == id)
    }
}

impl InstitutionConfig {
    pub fn course_table(&self, department_code: &str) -> Option<&[CourseEntry]> {
        self.courses.get(department_code).map(Vec::as_slice)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        if self.institutions.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "institutions".to_string(),
            });
        }

        for institution in &self.institutions {
            institution.validate()?;
        }

        Ok(())
    }
}

impl Validate for InstitutionConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("institutions.id", &self.id)?;
        validate_non_empty_string("institutions.name", &self.name)?;

        if let Some(url) = &self.catalog_url {
            validate_url(&format!("{}.catalog_url", self.id), url)?;
        }

        for department in &self.departments {
            validate_non_empty_string(&format!("{}.departments.code", self.id), &department.code)?;
            validate_non_empty_string(&format!("{}.departments.name", self.id), &department.name)?;
        }

        for (code, table) in &self.courses {
            for course in table {
                let field = format!("{}.courses.{}", self.id, code);
                validate_non_empty_string(&format!("{}.number", field), &course.number)?;
                validate_non_empty_string(&format!("{}.title", field), &course.title)?;
                validate_positive_number(&format!("{}.credits", field), course.credits, 1)?;
            }
        }

        Ok(())
    }
}
