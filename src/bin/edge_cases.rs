use clap::Parser;
use zer_api_testkit::core::probes::{probes_exit_code, EDGE_CASE_PROBES};
use zer_api_testkit::utils::logger::{self, LogFormat};
use zer_api_testkit::utils::validation::Validate;
use zer_api_testkit::{ProbeRunner, SuiteConfig};

#[derive(Parser)]
#[command(name = "edge_cases")]
#[command(about = "Send hand-picked edge-case requests to the ZER search endpoint")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(LogFormat::Compact, args.verbose);

    let mut config = match &args.config {
        Some(path) => match SuiteConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => SuiteConfig::default(),
    };

    if let Some(base_url) = args.base_url {
        config.target.base_url = base_url;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "Probing {} with {} edge cases",
        config.base_url(),
        EDGE_CASE_PROBES.len()
    );

    let runner = ProbeRunner::new(config.base_url());
    let results = runner.run_all(&mut std::io::stdout()).await?;

    std::process::exit(probes_exit_code(&results));
}
