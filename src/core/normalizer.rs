use crate::domain::model::RawRecord;

/// A raw record that passed normalization and is ready to merge into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub first_name: String,
    pub last_name: String,
    pub departments: Vec<String>,
}

impl NormalizedRecord {
    /// The merge key. Same concatenation as [`crate::domain::model::Employee::full_name`].
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Splits a name on its first whitespace run. `None` for blank input.
pub fn split_name(raw: &str) -> Option<(&str, &str)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => Some((first, rest.trim_start())),
        None => Some((trimmed, "")),
    }
}

/// Trims every entry, drops absent or blank ones and exact duplicates. Case is preserved.
pub fn clean_departments(raw: Option<&[Option<String>]>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for department in raw.unwrap_or_default().iter().flatten() {
        let department = department.trim();
        if department.is_empty() || cleaned.iter().any(|d| d == department) {
            continue;
        }
        cleaned.push(department.to_string());
    }
    cleaned
}

/// Returns `None` when the record has no usable name; the caller skips it.
pub fn normalize(record: &RawRecord) -> Option<NormalizedRecord> {
    let (first_name, last_name) = split_name(record.name.as_deref()?)?;

    Some(NormalizedRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        departments: clean_departments(record.departments.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("Dale Miller"), Some(("Dale", "Miller")));
        assert_eq!(split_name("  Dale   Miller  "), Some(("Dale", "Miller")));
        assert_eq!(split_name("Mary Ann\tJones"), Some(("Mary", "Ann\tJones")));
        assert_eq!(split_name("Cher"), Some(("Cher", "")));
        assert_eq!(split_name("   "), None);
        assert_eq!(split_name(""), None);
    }

    #[test]
    fn test_clean_departments() {
        let raw = vec![
            Some(" finance ".to_string()),
            None,
            Some("   ".to_string()),
            Some("finance".to_string()),
            Some("IT".to_string()),
            Some("it".to_string()),
        ];
        assert_eq!(clean_departments(Some(&raw)), vec!["finance", "IT", "it"]);
        assert!(clean_departments(None).is_empty());
    }

    #[test]
    fn test_normalize_skips_missing_or_blank_names() {
        assert_eq!(normalize(&RawRecord::default()), None);
        assert_eq!(normalize(&RawRecord::new("  ", &["finance"])), None);
    }

    #[test]
    fn test_normalize_record() {
        let record = RawRecord {
            name: Some(" George  Smith ".to_string()),
            departments: None,
        };
        let normalized = normalize(&record).unwrap();
        assert_eq!(normalized.first_name, "George");
        assert_eq!(normalized.last_name, "Smith");
        assert!(normalized.departments.is_empty());
        assert_eq!(normalized.full_name(), "George Smith");
    }

    #[test]
    fn test_single_token_name_keeps_trailing_space() {
        let normalized = normalize(&RawRecord::new("Cher", &[])).unwrap();
        assert_eq!(normalized.full_name(), "Cher ");
    }
}
