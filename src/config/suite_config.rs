use crate::utils::error::{Result, SuiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SCHEMA: &str = "zer_search_openapi.yaml";
pub const DEFAULT_BASE_URL: &str = "https://zer.bzst.de/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub target: TargetConfig,
    pub fuzz: FuzzConfig,
    pub contract: ContractConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub schema: String,
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    pub program: String,
    pub checks: String,
    pub max_examples: usize,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            program: "schemathesis".to_string(),
            checks: "all".to_string(),
            max_examples: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    pub program: String,
    pub sorted: bool,
    pub details: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            program: "dredd".to_string(),
            sorted: true,
            details: true,
        }
    }
}

impl SuiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SuiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SuiteError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZER_BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SuiteError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn schema(&self) -> &str {
        &self.target.schema
    }

    pub fn base_url(&self) -> &str {
        &self.target.base_url
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("target.base_url", &self.target.base_url)?;
        validation::validate_schema_path("target.schema", &self.target.schema)?;
        validation::validate_program("fuzz.program", &self.fuzz.program)?;
        validation::validate_cli_token("fuzz.checks", &self.fuzz.checks)?;
        validation::validate_at_least("fuzz.max_examples", self.fuzz.max_examples, 1)?;
        validation::validate_program("contract.program", &self.contract.program)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_hard_coded_values() {
        let config = SuiteConfig::default();

        assert_eq!(config.schema(), "zer_search_openapi.yaml");
        assert_eq!(config.base_url(), "https://zer.bzst.de/api/v1");
        assert_eq!(config.fuzz.program, "schemathesis");
        assert_eq!(config.fuzz.checks, "all");
        assert_eq!(config.fuzz.max_examples, 50);
        assert_eq!(config.contract.program, "dredd");
        assert!(config.contract.sorted);
        assert!(config.contract.details);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SuiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.fuzz.max_examples, 50);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml_content = r#"
[target]
base_url = "http://localhost:8080/api/v1"

[fuzz]
max_examples = 10

[contract]
details = false
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(config.schema(), DEFAULT_SCHEMA);
        assert_eq!(config.fuzz.max_examples, 10);
        assert_eq!(config.fuzz.checks, "all");
        assert!(config.contract.sorted);
        assert!(!config.contract.details);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZER_TESTKIT_BASE_URL", "https://staging.example.com/api/v1");

        let toml_content = r#"
[target]
base_url = "${ZER_TESTKIT_BASE_URL}"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://staging.example.com/api/v1");

        std::env::remove_var("ZER_TESTKIT_BASE_URL");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[target]
schema = "${ZER_TESTKIT_UNSET_VARIABLE}"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.schema(), "${ZER_TESTKIT_UNSET_VARIABLE}");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = SuiteConfig::from_toml_str("[target\nbase_url = 1");
        assert!(matches!(result, Err(SuiteError::ConfigParseError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let mut config = SuiteConfig::default();
        config.target.base_url = "invalid-url".to_string();
        assert!(config.validate().is_err());

        let mut config = SuiteConfig::default();
        config.fuzz.max_examples = 0;
        assert!(config.validate().is_err());

        let mut config = SuiteConfig::default();
        config.contract.program = String::new();
        assert!(config.validate().is_err());

        // /search?... 會接在後面
        let mut config = SuiteConfig::default();
        config.target.base_url = "https://zer.bzst.de/api/v1?page=1".to_string();
        assert!(config.validate().is_err());

        let mut config = SuiteConfig::default();
        config.target.schema = "zer_search_openapi.txt".to_string();
        assert!(config.validate().is_err());

        let mut config = SuiteConfig::default();
        config.fuzz.checks = "all --hypothesis-seed 1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[target]
schema = "specs/zer.yaml"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SuiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.schema(), "specs/zer.yaml");
    }
}
