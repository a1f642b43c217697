use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One unprocessed entry from a record source. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "department", deserialize_with = "one_or_many")]
    pub departments: Option<Vec<Option<String>>>,
}

/// Accepts a single department as well as a list of them.
fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<Option<String>>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(department)) => Some(vec![Some(department)]),
        Some(OneOrMany::Many(departments)) => Some(departments),
    })
}

impl RawRecord {
    pub fn new(name: &str, departments: &[&str]) -> Self {
        Self {
            name: Some(name.to_string()),
            departments: Some(departments.iter().map(|d| Some(d.to_string())).collect()),
        }
    }
}

/// A deduplicated person. Identity is the full name.
#[derive(Debug, Clone)]
pub struct Employee {
    first_name: String,
    last_name: String,
    full_name: String,
    departments: BTreeSet<String>,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let full_name = format!("{} {}", first_name, last_name);
        Self {
            first_name,
            last_name,
            full_name,
            departments: BTreeSet::new(),
        }
    }

    /// Adds a trimmed department. Blank values are ignored; returns whether the set grew.
    pub fn add_department(&mut self, department: &str) -> bool {
        let department = department.trim();
        if department.is_empty() {
            return false;
        }
        self.departments.insert(department.to_string())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn departments(&self) -> &BTreeSet<String> {
        &self.departments
    }

    /// `normalized` must already be trimmed and lowercased.
    pub fn belongs_to(&self, normalized: &str) -> bool {
        self.departments
            .iter()
            .any(|department| department.to_lowercase() == normalized)
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

/// A department with the ordered full names of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentGroup {
    pub department: String,
    pub employees: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Json,
    Csv,
    Xml,
}

impl RecordFormat {
    pub fn from_extension(location: &str) -> Option<Self> {
        // query strings never carry the extension
        let path = location.split(|c: char| c == '?' || c == '#').next().unwrap_or(location);
        let extension = std::path::Path::new(path).extension()?.to_str()?;
        extension.parse().ok()
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            other => Err(format!("unsupported record format: {}", other)),
        }
    }
}
