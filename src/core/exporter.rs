use crate::core::{CourseRecord, Storage};
use crate::domain::model::TabularExport;
use crate::utils::error::{CatalogError, Result};

/// Renders the records as an indented JSON array.
pub fn render_structured(records: &[CourseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Renders the records as CSV with a header row, or `None` when there is
/// nothing to write.
pub fn render_tabular(records: &[CourseRecord]) -> Result<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;
    let output = String::from_utf8(data).map_err(|e| {
        CatalogError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    Ok(Some(output))
}

pub async fn export_structured<S: Storage>(
    storage: &S,
    records: &[CourseRecord],
    destination: &str,
) -> Result<usize> {
    let json = render_structured(records)?;
    storage.write_file(destination, json.as_bytes()).await?;

    tracing::info!("Exported {} courses to {}", records.len(), destination);
    Ok(records.len())
}

pub async fn export_tabular<S: Storage>(
    storage: &S,
    records: &[CourseRecord],
    destination: &str,
) -> Result<TabularExport> {
    let Some(csv) = render_tabular(records)? else {
        tracing::info!("No courses to export, skipping {}", destination);
        return Ok(TabularExport::Skipped);
    };

    storage.write_file(destination, csv.as_bytes()).await?;

    tracing::info!("Exported {} courses to {}", records.len(), destination);
    Ok(TabularExport::Written {
        rows: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn calculus() -> CourseRecord {
        CourseRecord::new(
            "UH",
            "University of Houston",
            "MATH",
            "Mathematics",
            "1431",
            "Calculus I",
            4,
        )
    }

    fn foundations() -> CourseRecord {
        CourseRecord::new(
            "HCCS",
            "Houston Community College",
            "MATH",
            "Mathematics",
            "0308",
            "Foundations of Mathematics",
            3,
        )
    }

    #[test]
    fn test_render_structured_single_record() {
        let json = render_structured(&[calculus()]).unwrap();

        let expected = r#"[
  {
    "university": "UH",
    "university_name": "University of Houston",
    "department_code": "MATH",
    "department_name": "Mathematics",
    "course_code": "MATH 1431",
    "course_number": "1431",
    "title": "Calculus I",
    "credits": 4,
    "description": "Calculus I - Mathematics course at University of Houston"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_structured_keeps_non_ascii() {
        let record = CourseRecord::new(
            "UH",
            "University of Houston",
            "SPAN",
            "Español",
            "2301",
            "Intermedio Español I",
            3,
        );

        let json = render_structured(&[record]).unwrap();
        assert!(json.contains("Intermedio Español I"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_render_structured_empty() {
        assert_eq!(render_structured(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_tabular_header_and_rows() {
        let csv = render_tabular(&[calculus()]).unwrap().unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "university,university_name,department_code,department_name,course_code,course_number,title,credits,description"
        );
        assert_eq!(
            lines[1],
            "UH,University of Houston,MATH,Mathematics,MATH 1431,1431,Calculus I,4,Calculus I - Mathematics course at University of Houston"
        );
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn test_render_tabular_quotes_commas() {
        let record = CourseRecord::new(
            "UH",
            "University of Houston",
            "HIST",
            "History",
            "2390",
            "War, Peace, and Society",
            3,
        );

        let csv = render_tabular(&[record]).unwrap().unwrap();
        assert!(csv.contains("\"War, Peace, and Society\""));
    }

    #[test]
    fn test_render_tabular_empty_is_none() {
        assert!(render_tabular(&[]).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_tabular_empty_writes_nothing() {
        let storage = MockStorage::new();

        let outcome = export_tabular(&storage, &[], "courses.csv").await.unwrap();

        assert_eq!(outcome, TabularExport::Skipped);
        assert!(storage.get_file("courses.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_export_structured_round_trip() {
        let storage = MockStorage::new();
        let records = vec![calculus(), foundations()];

        let written = export_structured(&storage, &records, "courses.json")
            .await
            .unwrap();
        assert_eq!(written, 2);

        let data = storage.get_file("courses.json").await.unwrap();
        let parsed: Vec<CourseRecord> = serde_json::from_slice(&data).unwrap();
        assert_eq!(parsed, records);
    }

    #[tokio::test]
    async fn test_export_tabular_keeps_collection_order() {
        let storage = MockStorage::new();
        let records = vec![foundations(), calculus()];

        let outcome = export_tabular(&storage, &records, "courses.csv")
            .await
            .unwrap();
        assert_eq!(outcome, TabularExport::Written { rows: 2 });

        let data = storage.get_file("courses.csv").await.unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(1).unwrap().starts_with("HCCS,"));
        assert!(text.lines().nth(2).unwrap().starts_with("UH,"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let parsed: Vec<CourseRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(parsed, records);
    }
}
