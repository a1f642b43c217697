use clap::Parser;
use employee_directory::utils::error::ErrorSeverity;
use employee_directory::utils::{logger, validation::Validate};
use employee_directory::{open_source, CliConfig, DirectoryError, EmployeeCatalog, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 先載入 TOML，日誌設定可能來自其中
    let toml = match config.config.as_ref().map(TomlConfig::from_file).transpose() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };
    let settings = config.settings(toml.as_ref());

    logger::init_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );

    tracing::info!("Starting employee-directory");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let validation = config
        .validate()
        .and_then(|_| toml.as_ref().map_or(Ok(()), Validate::validate))
        .and_then(|_| settings.validate());
    if let Err(e) = validation {
        fail(e);
    }

    if let Err(e) = run(&config, &settings).await {
        fail(e);
    }
}

async fn run(
    config: &CliConfig,
    settings: &employee_directory::DirectorySettings,
) -> employee_directory::Result<()> {
    let query = config.command.to_query()?;

    // 啟動時建立目錄，失敗則不回應任何查詢
    let source = open_source(settings)?;
    let catalog = EmployeeCatalog::load(source.as_ref()).await?;

    let response = query.execute(&catalog);
    tracing::debug!("Query returned {} entries", response.len());
    println!("{}", response.to_json(config.pretty)?);
    Ok(())
}

fn fail(e: DirectoryError) -> ! {
    tracing::error!(
        "❌ employee-directory failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
