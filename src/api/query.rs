use crate::core::catalog::EmployeeCatalog;
use crate::domain::model::DepartmentGroup;
use crate::utils::error::{DirectoryError, Result};
use serde::Serialize;
use url::Url;

pub const EMPLOYEES_ROUTE: &str = "/rest/employees";
pub const GROUP_BY_DEPARTMENT_ROUTE: &str = "/rest/employees/groupby/department";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryQuery {
    ListAll,
    ByDepartment(Option<String>),
    GroupByDepartment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Names(Vec<String>),
    Groups(Vec<DepartmentGroup>),
}

impl DirectoryQuery {
    /// Parses a path with optional query string, e.g. `/rest/employees?department=it`.
    pub fn from_route(route: &str) -> Result<Self> {
        // only the path and query matter; the base is a placeholder
        let url = Url::parse("http://directory.local")
            .and_then(|base| base.join(route.trim()))
            .map_err(|_| DirectoryError::RouteError {
                route: route.to_string(),
            })?;

        let path = url.path().trim_end_matches('/');
        match path {
            EMPLOYEES_ROUTE => {
                let department = url
                    .query_pairs()
                    .find(|(key, _)| key == "department")
                    .map(|(_, value)| value.into_owned());
                Ok(match department {
                    Some(department) => Self::ByDepartment(Some(department)),
                    None => Self::ListAll,
                })
            }
            GROUP_BY_DEPARTMENT_ROUTE => Ok(Self::GroupByDepartment),
            _ => Err(DirectoryError::RouteError {
                route: route.to_string(),
            }),
        }
    }

    pub fn execute(&self, catalog: &EmployeeCatalog) -> QueryResponse {
        match self {
            Self::ListAll => {
                tracing::info!("Handling request for all employees");
                QueryResponse::Names(catalog.list_all())
            }
            Self::ByDepartment(department) => {
                tracing::info!(
                    "Handling request for employees in department '{}'",
                    department.as_deref().unwrap_or_default()
                );
                QueryResponse::Names(catalog.list_by_department(department.as_deref()))
            }
            Self::GroupByDepartment => {
                tracing::info!("Handling request for employees grouped by department");
                QueryResponse::Groups(catalog.group_by_department())
            }
        }
    }
}

impl QueryResponse {
    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Groups(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
