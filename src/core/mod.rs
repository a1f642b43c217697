pub mod catalog;
pub mod normalizer;
pub mod ordering;

pub use crate::domain::model::{DepartmentGroup, Employee, RawRecord, RecordFormat};
pub use crate::domain::ports::{ConfigProvider, RecordSource, Storage};
pub use crate::utils::error::Result;
