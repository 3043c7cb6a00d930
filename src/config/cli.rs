use crate::config::suite_config::SuiteConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "zer-api-testkit")]
#[command(about = "Run Schemathesis and Dredd against the ZER OpenAPI specification")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the OpenAPI schema path
    #[arg(long)]
    pub schema: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the number of Schemathesis examples per operation
    #[arg(long)]
    pub max_examples: Option<usize>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of both runs to this file
    #[arg(long)]
    pub report: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<SuiteConfig> {
        let mut config = match &self.config {
            Some(path) => SuiteConfig::from_file(path)?,
            None => SuiteConfig::default(),
        };

        if let Some(schema) = &self.schema {
            config.target.schema = schema.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.target.base_url = base_url.clone();
        }
        if let Some(max_examples) = self.max_examples {
            config.fuzz.max_examples = max_examples;
        }

        Ok(config)
    }
}
