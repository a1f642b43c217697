use crate::api::DirectoryQuery;
use crate::config::toml_config::TomlConfig;
use crate::config::DirectorySettings;
use crate::core::RecordFormat;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "employee-directory")]
#[command(about = "Query a read-only employee directory loaded from a JSON/CSV file or URL")]
pub struct CliConfig {
    /// Record file path or http(s) URL
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Record format; inferred from the extension when omitted
    #[arg(long, value_enum, global = true)]
    pub format: Option<RecordFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// HTTP timeout for remote sources
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Pretty-print the JSON answer
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every employee
    List,
    /// List employees of one department (no name matches nobody)
    Department { name: Option<String> },
    /// Group employees by department
    Groups,
    /// Resolve a REST route such as `/rest/employees?department=it`
    Route { path: String },
}

impl Command {
    pub fn to_query(&self) -> Result<DirectoryQuery> {
        match self {
            Self::List => Ok(DirectoryQuery::ListAll),
            Self::Department { name } => Ok(DirectoryQuery::ByDepartment(name.clone())),
            Self::Groups => Ok(DirectoryQuery::GroupByDepartment),
            Self::Route { path } => DirectoryQuery::from_route(path),
        }
    }
}

impl CliConfig {
    /// 依序套用: 預設值 → TOML 檔案 → 命令列參數
    pub fn settings(&self, toml: Option<&TomlConfig>) -> DirectorySettings {
        let mut settings = DirectorySettings::default();
        if let Some(toml) = toml {
            settings = settings.with_toml(toml);
        }

        if let Some(source) = &self.source {
            settings.source_location = source.clone();
        }
        if let Some(format) = self.format {
            settings.source_format = Some(format);
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(log_format) = self.log_format {
            settings.log_format = log_format;
        }
        settings.verbose = self.verbose;
        settings
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            validation::validate_source_location("--source", source)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("--timeout-seconds", timeout, 1)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("--config", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
