use clap::Parser;
use zer_api_testkit::utils::logger::{self, LogFormat};
use zer_api_testkit::utils::validation::Validate;
use zer_api_testkit::core::suite::finalize_report;
use zer_api_testkit::{CliConfig, SystemProcessRunner, TestSuite};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_json_flag(cli.log_json), cli.verbose);

    tracing::info!("Starting zer-api-testkit");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let suite = TestSuite::new(SystemProcessRunner::new(), config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no tools will be executed");
        suite.write_plan(&mut std::io::stdout())?;
        return Ok(());
    }

    let report = suite.run().await?;

    let exit_code = finalize_report(&report, cli.report.as_deref()).await;

    if exit_code != 0 {
        tracing::warn!("Suite finished with exit code {}", exit_code);
    }
    std::process::exit(exit_code);
}
