use crate::domain::model::{RawRecord, RecordFormat};
use crate::utils::error::{DirectoryError, Result};
use serde::Deserialize;

pub const CSV_DEPARTMENT_SEPARATOR: char = ';';

/// Object form of a JSON document; `null` entries are kept so they can be skipped later.
#[derive(Debug, Deserialize)]
struct WrappedDocument {
    #[serde(default, alias = "employee")]
    employees: Option<Vec<Option<RawRecord>>>,
}

/// `<employees><employee><name/><department/>…</employee></employees>`; the root name is not checked.
#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(default, rename = "employee")]
    employees: Vec<XmlEmployee>,
}

#[derive(Debug, Deserialize)]
struct XmlEmployee {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "department")]
    departments: Vec<String>,
}

impl From<XmlEmployee> for RawRecord {
    fn from(employee: XmlEmployee) -> Self {
        RawRecord {
            name: employee.name,
            departments: Some(employee.departments.into_iter().map(Some).collect()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "department")]
    departments: Option<String>,
}

impl From<CsvRow> for RawRecord {
    fn from(row: CsvRow) -> Self {
        let departments = row.departments.map(|joined| {
            joined
                .split(CSV_DEPARTMENT_SEPARATOR)
                .map(|department| Some(department.to_string()))
                .collect()
        });
        RawRecord {
            name: row.name,
            departments,
        }
    }
}

pub fn decode_records(bytes: &[u8], format: RecordFormat, location: &str) -> Result<Vec<RawRecord>> {
    let records = match format {
        RecordFormat::Json => decode_json(bytes, location)?,
        RecordFormat::Csv => decode_csv(bytes)?,
        RecordFormat::Xml => decode_xml(bytes, location)?,
    };
    tracing::debug!("Decoded {} raw records from {}", records.len(), location);
    Ok(records)
}

fn format_error(location: &str, message: impl Into<String>) -> DirectoryError {
    DirectoryError::SourceFormat {
        location: location.to_string(),
        message: message.into(),
    }
}

fn decode_json(bytes: &[u8], location: &str) -> Result<Vec<RawRecord>> {
    // the first token picks the shape, so parser errors keep their line and column
    let first = bytes.iter().copied().find(|b| !b.is_ascii_whitespace());

    let entries = match first {
        Some(b'[') => serde_json::from_slice::<Vec<Option<RawRecord>>>(bytes)
            .map_err(|e| format_error(location, format!("invalid employee array: {}", e)))?,
        Some(b'{') => {
            let document: WrappedDocument = serde_json::from_slice(bytes)
                .map_err(|e| format_error(location, format!("invalid employee document: {}", e)))?;
            match document.employees {
                Some(entries) => entries,
                None => {
                    tracing::warn!("No employee entries found in {}", location);
                    Vec::new()
                }
            }
        }
        _ => {
            return Err(format_error(
                location,
                "expected an array of employees or an object with 'employees'",
            ))
        }
    };

    Ok(entries.into_iter().map(Option::unwrap_or_default).collect())
}

fn decode_xml(bytes: &[u8], location: &str) -> Result<Vec<RawRecord>> {
    let document: XmlDocument = quick_xml::de::from_reader(bytes)
        .map_err(|e| format_error(location, format!("invalid employee XML: {}", e)))?;

    if document.employees.is_empty() {
        tracing::warn!("No employee entries found in {}", location);
    }
    Ok(document.employees.into_iter().map(RawRecord::from).collect())
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(RawRecord::from(row?));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_message(err: DirectoryError) -> String {
        match err {
            DirectoryError::SourceFormat { message, .. } => message,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_json_array() {
        let json = br#"[
            {"name": "Dale Miller", "departments": ["finance"]},
            {"name": "George Smith", "departments": []},
            {"departments": ["it"]}
        ]"#;
        let records = decode_records(json, RecordFormat::Json, "inline").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], RawRecord::new("Dale Miller", &["finance"]));
        assert_eq!(records[2].name, None);
    }

    #[test]
    fn test_decode_json_wrapped() {
        let json = br#"{"employee": [{"name": "Dale Miller", "department": "finance"}]}"#;
        let records = decode_records(json, RecordFormat::Json, "inline").unwrap();
        assert_eq!(records, vec![RawRecord::new("Dale Miller", &["finance"])]);
    }

    #[test]
    fn test_decode_json_null_entries_become_empty_records() {
        let wrapped =
            br#"{"employees": [null, {"name": "Dale Miller", "departments": ["finance"]}]}"#;
        let records = decode_records(wrapped, RecordFormat::Json, "inline").unwrap();
        assert_eq!(
            records,
            vec![RawRecord::default(), RawRecord::new("Dale Miller", &["finance"])]
        );

        let bare = br#"  [{"name": "George Smith"}, null]"#;
        let records = decode_records(bare, RecordFormat::Json, "inline").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], RawRecord::default());
    }

    #[test]
    fn test_decode_json_wrapper_without_employees() {
        let records = decode_records(br#"{"title": "staff"}"#, RecordFormat::Json, "inline").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_decode_json_malformed() {
        let inputs: [&[u8]; 4] = [b"{", b"\"employees\"", b"[1, 2]", b""];
        for input in inputs {
            let err = decode_records(input, RecordFormat::Json, "inline").unwrap_err();
            assert!(matches!(err, DirectoryError::SourceFormat { .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_decode_json_error_reports_position() {
        let json = b"[\n  {\"name\": \"Dale Miller\"},\n  {\"name\": }\n]";
        let message = format_message(decode_records(json, RecordFormat::Json, "inline").unwrap_err());
        assert!(message.contains("line 3"), "{}", message);

        let json = b"{\"employees\": [\n  {\"name\": 7}\n]}";
        let message = format_message(decode_records(json, RecordFormat::Json, "inline").unwrap_err());
        assert!(message.contains("line 2"), "{}", message);
    }

    #[test]
    fn test_decode_xml() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<employees>
    <employee>
        <name>Dale Miller</name>
        <department>finance</department>
        <department>packaging</department>
    </employee>
    <employee>
        <name>Michael Smith</name>
        <department>it</department>
    </employee>
    <employee>
        <name>George Smith</name>
    </employee>
    <employee>
        <department>it</department>
    </employee>
</employees>"#;
        let records = decode_records(xml, RecordFormat::Xml, "inline").unwrap();
        assert_eq!(
            records,
            vec![
                RawRecord::new("Dale Miller", &["finance", "packaging"]),
                RawRecord::new("Michael Smith", &["it"]),
                RawRecord::new("George Smith", &[]),
                RawRecord {
                    name: None,
                    departments: Some(vec![Some("it".to_string())]),
                },
            ]
        );
    }

    #[test]
    fn test_decode_xml_without_employees() {
        let records = decode_records(b"<employees/>", RecordFormat::Xml, "inline").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_decode_xml_malformed() {
        let err = decode_records(
            b"<employees><employee><name>Dale</employee>",
            RecordFormat::Xml,
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, DirectoryError::SourceFormat { .. }));
    }

    #[test]
    fn test_decode_csv() {
        let csv = b"name,departments\nDale Miller,finance; packaging\nGeorge Smith,\n,it\n";
        let records = decode_records(csv, RecordFormat::Csv, "inline").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].departments,
            Some(vec![Some("finance".to_string()), Some(" packaging".to_string())])
        );
        assert_eq!(records[1].name.as_deref(), Some("George Smith"));
        assert!(records[2].name.as_deref().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_decode_csv_without_department_column() {
        let records = decode_records(b"name\nDale Miller\n", RecordFormat::Csv, "inline").unwrap();
        assert_eq!(records[0].departments, None);
    }
}
