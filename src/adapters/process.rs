use crate::domain::model::ToolCommand;
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{Result, SuiteError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// 透過 tokio::process 執行真正的外部工具
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn spawn_error(command: &ToolCommand, e: std::io::Error) -> SuiteError {
        if e.kind() == std::io::ErrorKind::NotFound {
            SuiteError::ToolNotFound {
                program: command.program.clone(),
            }
        } else {
            SuiteError::IoError(e)
        }
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<i32> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Self::spawn_error(command, e))?;

        // 被 signal 終止時沒有 exit code
        Ok(status.code().unwrap_or_else(|| {
            tracing::warn!("'{}' was terminated by a signal", command.program);
            1
        }))
    }

    async fn probe(&self, command: &ToolCommand) -> Result<bool> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Self::spawn_error(command, e))?;

        tracing::debug!(
            "Probe '{}' exited with {:?}: {}",
            command,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(output.status.success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> ToolCommand {
        ToolCommand::new("sh").arg("-c").arg(script)
    }

    #[tokio::test]
    async fn test_run_returns_exit_code() {
        let runner = SystemProcessRunner::new();

        assert_eq!(runner.run(&sh("exit 0")).await.unwrap(), 0);
        assert_eq!(runner.run(&sh("exit 3")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_run_killed_by_signal_maps_to_one() {
        let runner = SystemProcessRunner::new();

        assert_eq!(runner.run(&sh("kill -9 $$")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_run_missing_program_is_tool_not_found() {
        let runner = SystemProcessRunner::new();
        let result = runner
            .run(&ToolCommand::new("zer-testkit-no-such-binary"))
            .await;

        match result {
            Err(SuiteError::ToolNotFound { program }) => {
                assert_eq!(program, "zer-testkit-no-such-binary")
            }
            other => panic!("expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_reports_success() {
        let runner = SystemProcessRunner::new();

        assert!(tokio_test::block_on(runner.probe(&sh("echo 14.1.0"))).unwrap());
        assert!(!tokio_test::block_on(runner.probe(&sh("exit 1"))).unwrap());
    }

    #[tokio::test]
    async fn test_probe_missing_program_is_tool_not_found() {
        let runner = SystemProcessRunner::new();
        let result = runner
            .probe(&ToolCommand::new("zer-testkit-no-such-binary").arg("--version"))
            .await;
        assert!(matches!(result, Err(SuiteError::ToolNotFound { .. })));
    }
}
