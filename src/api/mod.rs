//! Maps REST-style routes onto catalog queries and renders the answers as JSON.
//!
//! Only the mapping lives here; serving HTTP is left to whatever embeds the crate.

pub mod query;

pub use query::{DirectoryQuery, QueryResponse};
