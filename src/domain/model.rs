use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Schemathesis property-based fuzzing
    Fuzz,
    /// Dredd contract validation
    Contract,
}

impl ToolKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Fuzz => "Schemathesis",
            ToolKind::Contract => "Dredd",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutcome {
    pub tool: ToolKind,
    pub exit_code: i32,
    /// 工具未安裝，沒有實際執行
    pub skipped: bool,
    pub duration_ms: u64,
}

impl ToolOutcome {
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }

    pub fn status_label(&self) -> &'static str {
        if self.passed() {
            "PASSED"
        } else {
            "FAILED"
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub started_at: DateTime<Utc>,
    pub schema: String,
    pub base_url: String,
    pub fuzz: ToolOutcome,
    pub contract: ToolOutcome,
}

impl SuiteReport {
    /// 兩個工具 exit code 的最大值；0 代表全部通過
    pub fn exit_code(&self) -> i32 {
        self.fuzz.exit_code.max(self.contract.exit_code)
    }

    pub fn all_passed(&self) -> bool {
        self.exit_code() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeCaseProbe {
    pub label: &'static str,
    /// 原樣附加在 `?` 後面，不做任何編碼
    pub query: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Status(u16),
    TransportError(String),
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub label: String,
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Status(code) => write!(f, "{}: Status {}", self.label, code),
            ProbeOutcome::TransportError(message) => write!(f, "{}: Error {}", self.label, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(tool: ToolKind, exit_code: i32) -> ToolOutcome {
        ToolOutcome {
            tool,
            exit_code,
            skipped: false,
            duration_ms: 0,
        }
    }

    fn report(fuzz: i32, contract: i32) -> SuiteReport {
        SuiteReport {
            started_at: Utc::now(),
            schema: "zer_search_openapi.yaml".to_string(),
            base_url: "https://zer.bzst.de/api/v1".to_string(),
            fuzz: outcome(ToolKind::Fuzz, fuzz),
            contract: outcome(ToolKind::Contract, contract),
        }
    }

    #[test]
    fn test_exit_code_is_max_of_both_tools() {
        assert_eq!(report(0, 0).exit_code(), 0);
        assert_eq!(report(1, 0).exit_code(), 1);
        assert_eq!(report(0, 1).exit_code(), 1);
        assert_eq!(report(2, 1).exit_code(), 2);
        assert_eq!(report(1, 127).exit_code(), 127);
        assert!(report(0, 0).all_passed());
        assert!(!report(0, 3).all_passed());
    }

    #[test]
    fn test_status_label() {
        assert_eq!(outcome(ToolKind::Fuzz, 0).status_label(), "PASSED");
        assert_eq!(outcome(ToolKind::Fuzz, 1).status_label(), "FAILED");
    }

    #[test]
    fn test_command_display() {
        let cmd = ToolCommand::new("dredd").arg("--version");
        assert_eq!(cmd.to_string(), "dredd --version");
    }

    #[test]
    fn test_probe_result_display() {
        let ok = ProbeResult {
            label: "Negative zwecke".to_string(),
            url: "http://x/search?zwecke=-1".to_string(),
            outcome: ProbeOutcome::Status(422),
        };
        assert_eq!(ok.to_string(), "Negative zwecke: Status 422");

        let failed = ProbeResult {
            label: "Empty postal code".to_string(),
            url: "http://x/search?plz=".to_string(),
            outcome: ProbeOutcome::TransportError("connection refused".to_string()),
        };
        assert_eq!(failed.to_string(), "Empty postal code: Error connection refused");
    }

    #[test]
    fn test_report_serializes_tool_kind_snake_case() {
        let json = serde_json::to_value(report(0, 1)).unwrap();
        assert_eq!(json["fuzz"]["tool"], "fuzz");
        assert_eq!(json["contract"]["exit_code"], 1);
    }
}
