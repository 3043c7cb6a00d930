use crate::config::SuiteConfig;
use crate::core::tools;
use crate::domain::model::{SuiteReport, ToolCommand, ToolKind, ToolOutcome};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{Result, SuiteError};
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// 找不到執行檔時記錄的 exit code（同 shell 慣例）
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

const BANNER_WIDTH: usize = 60;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// 依序執行 Schemathesis 與 Dredd
pub struct TestSuite<R: ProcessRunner> {
    runner: R,
    config: SuiteConfig,
}

impl<R: ProcessRunner> TestSuite<R> {
    pub fn new(runner: R, config: SuiteConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// 兩個工具實際會執行的命令
    pub fn planned_commands(&self) -> Vec<ToolCommand> {
        vec![
            tools::fuzz_command(&self.config),
            tools::contract_command(&self.config),
        ]
    }

    /// dry run：每個命令一行，不執行任何工具
    pub fn write_plan<W: Write>(&self, out: &mut W) -> Result<()> {
        for command in self.planned_commands() {
            writeln!(out, "{}", command)?;
        }
        Ok(())
    }

    pub async fn run_fuzz(&self) -> Result<ToolOutcome> {
        println!("{}", banner());
        println!("Running Schemathesis Tests (Property-based fuzzing)");
        println!("{}", banner());

        let command = tools::fuzz_command(&self.config);
        let started = Instant::now();
        tracing::debug!("Spawning: {}", command);

        let (exit_code, skipped) = match self.runner.run(&command).await {
            Ok(code) => (code, false),
            Err(SuiteError::ToolNotFound { program }) => {
                tracing::error!("Fuzzing tool '{}' not found on PATH", program);
                println!("{}", tools::fuzz_install_instructions());
                (NOT_FOUND_EXIT_CODE, true)
            }
            Err(e) => return Err(e),
        };

        tracing::info!("Schemathesis finished with exit code {}", exit_code);
        Ok(ToolOutcome {
            tool: ToolKind::Fuzz,
            exit_code,
            skipped,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// `dredd --version` 成功才視為已安裝；否則印出安裝說明
    pub async fn contract_tool_available(&self) -> Result<bool> {
        let command = tools::contract_version_command(&self.config);

        let available = match self.runner.probe(&command).await {
            Ok(ok) => ok,
            Err(SuiteError::ToolNotFound { .. }) => false,
            Err(e) => return Err(e),
        };

        if !available {
            tracing::warn!("Contract tool '{}' is not installed", self.config.contract.program);
            println!("{}", tools::contract_install_instructions(&self.config));
        }
        Ok(available)
    }

    pub async fn run_contract(&self) -> Result<ToolOutcome> {
        println!("\n{}", banner());
        println!("Running Dredd Tests (Contract validation)");
        println!("{}", banner());

        let started = Instant::now();

        if !self.contract_tool_available().await? {
            return Ok(ToolOutcome {
                tool: ToolKind::Contract,
                exit_code: 1,
                skipped: true,
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        let command = tools::contract_command(&self.config);
        tracing::debug!("Spawning: {}", command);
        let exit_code = self.runner.run(&command).await?;

        tracing::info!("Dredd finished with exit code {}", exit_code);
        Ok(ToolOutcome {
            tool: ToolKind::Contract,
            exit_code,
            skipped: false,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    pub async fn run(&self) -> Result<SuiteReport> {
        let started_at = Utc::now();

        println!("OpenAPI Testing Suite for ZER API");
        println!("{}", banner());

        let fuzz = self.run_fuzz().await?;
        let contract = self.run_contract().await?;

        let report = SuiteReport {
            started_at,
            schema: self.config.schema().to_string(),
            base_url: self.config.base_url().to_string(),
            fuzz,
            contract,
        };

        print_summary(&report);
        Ok(report)
    }
}

pub fn print_summary(report: &SuiteReport) {
    println!("\n{}", banner());
    println!("Test Summary:");
    println!("{}", banner());
    println!("{}: {}", report.fuzz.tool, report.fuzz.status_label());
    println!("{}: {}", report.contract.tool, report.contract.status_label());
}

/// 以 pretty JSON 寫出報告
pub async fn write_report_json<P: AsRef<Path>>(report: &SuiteReport, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// 寫出報告（若有指定）並回傳最終 exit code。
/// 報告寫入失敗時至少回傳 1，但不會蓋掉工具本身較大的 exit code。
pub async fn finalize_report(report: &SuiteReport, report_path: Option<&str>) -> i32 {
    let exit_code = report.exit_code();

    let Some(path) = report_path else {
        return exit_code;
    };

    match write_report_json(report, path).await {
        Ok(()) => {
            tracing::info!("📁 Report saved to: {}", path);
            exit_code
        }
        Err(e) => {
            tracing::error!("❌ Failed to write report '{}': {}", path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            exit_code.max(1)
        }
    }
}
