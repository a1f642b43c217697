pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::{open_source, FileRecordSource, HttpRecordSource, LocalStorage};
pub use crate::api::{DirectoryQuery, QueryResponse};
pub use crate::config::{toml_config::TomlConfig, DirectorySettings};
pub use crate::core::catalog::{EmployeeCatalog, IngestStats};
pub use crate::domain::model::{DepartmentGroup, Employee, RawRecord, RecordFormat};
pub use crate::utils::error::{DirectoryError, Result};
