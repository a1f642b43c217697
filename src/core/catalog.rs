use crate::core::normalizer::normalize;
use crate::core::ordering::sort_employees;
use crate::domain::model::{DepartmentGroup, Employee, RawRecord};
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records_seen: usize,
    pub records_skipped: usize,
    pub unique_employees: usize,
}

/// Deduplicated, sorted employee snapshot. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct EmployeeCatalog {
    employees: Vec<Employee>,
    stats: IngestStats,
}

impl EmployeeCatalog {
    /// Fetches every record from `source` and builds the catalog.
    ///
    /// Any source error aborts construction; no partial catalog is returned.
    pub async fn load<S: RecordSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::info!("Loading employee records from {}", source.location());
        let records = source.fetch_records().await?;
        let catalog = Self::from_records(records);
        tracing::info!(
            "Loaded {} unique employees from {} records ({} skipped)",
            catalog.stats.unique_employees,
            catalog.stats.records_seen,
            catalog.stats.records_skipped
        );
        Ok(catalog)
    }

    /// Merges records by full name in source order. The first record seen for a
    /// name decides its first/last split; later ones only contribute departments.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut stats = IngestStats::default();
        let mut employees: Vec<Employee> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            stats.records_seen += 1;
            let Some(normalized) = normalize(&record) else {
                stats.records_skipped += 1;
                tracing::debug!("Skipping record #{} without a usable name", stats.records_seen);
                continue;
            };

            let position = *index.entry(normalized.full_name()).or_insert_with(|| {
                employees.push(Employee::new(
                    normalized.first_name.as_str(),
                    normalized.last_name.as_str(),
                ));
                employees.len() - 1
            });

            let employee = &mut employees[position];
            for department in &normalized.departments {
                employee.add_department(department);
            }
        }

        if stats.records_seen == 0 {
            tracing::warn!("No employee records supplied by the source");
        }

        sort_employees(&mut employees);
        stats.unique_employees = employees.len();

        Self { employees, stats }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Every full name, ordered by first then last name ignoring case.
    pub fn list_all(&self) -> Vec<String> {
        tracing::debug!("Listing all employees without department filtering");
        self.employees
            .iter()
            .map(|employee| employee.full_name().to_string())
            .collect()
    }

    /// Employees holding `department`, compared trimmed and case-insensitively.
    ///
    /// An absent or blank filter matches nothing, as does an unknown department.
    pub fn list_by_department(&self, department: Option<&str>) -> Vec<String> {
        let Some(normalized) = normalize_department(department) else {
            tracing::debug!("No department provided, returning empty list");
            return Vec::new();
        };

        tracing::debug!("Listing employees for department '{}'", normalized);
        self.employees
            .iter()
            .filter(|employee| employee.belongs_to(&normalized))
            .map(|employee| employee.full_name().to_string())
            .collect()
    }

    /// One group per department, ordered by department name ignoring case.
    ///
    /// Spellings that differ only by case share a group, labelled with the first
    /// spelling met in roster order.
    pub fn group_by_department(&self) -> Vec<DepartmentGroup> {
        let mut grouped: BTreeMap<String, DepartmentGroup> = BTreeMap::new();

        for employee in &self.employees {
            for department in employee.departments() {
                let group = grouped
                    .entry(department.to_lowercase())
                    .or_insert_with(|| DepartmentGroup {
                        department: department.clone(),
                        employees: Vec::new(),
                    });
                // "IT" and "it" on one employee must not list them twice
                if group.employees.last().map(String::as_str) != Some(employee.full_name()) {
                    group.employees.push(employee.full_name().to_string());
                }
            }
        }

        tracing::debug!("Grouping employees across {} departments", grouped.len());
        grouped.into_values().collect()
    }
}

fn normalize_department(department: Option<&str>) -> Option<String> {
    let trimmed = department?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}
