use crate::config::SuiteConfig;
use crate::domain::model::ToolCommand;

/// `schemathesis run <schema> --url=<base> --checks <checks> --max-examples <n>`
pub fn fuzz_command(config: &SuiteConfig) -> ToolCommand {
    ToolCommand::new(config.fuzz.program.as_str())
        .arg("run")
        .arg(config.schema())
        .arg(format!("--url={}", config.base_url()))
        .arg("--checks")
        .arg(config.fuzz.checks.as_str())
        .arg("--max-examples")
        .arg(config.fuzz.max_examples.to_string())
}

/// `dredd <schema> <base> [--sorted] [--details]`
pub fn contract_command(config: &SuiteConfig) -> ToolCommand {
    let mut command = ToolCommand::new(config.contract.program.as_str())
        .arg(config.schema())
        .arg(config.base_url());

    if config.contract.sorted {
        command = command.arg("--sorted");
    }
    if config.contract.details {
        command = command.arg("--details");
    }
    command
}

pub fn contract_version_command(config: &SuiteConfig) -> ToolCommand {
    ToolCommand::new(config.contract.program.as_str()).arg("--version")
}

/// Dredd 未安裝時顯示的安裝說明
pub fn contract_install_instructions(config: &SuiteConfig) -> String {
    format!(
        "\nDredd is not installed. To install it, run:\n  npm install -g dredd\n  or\n  npx dredd {} {}",
        config.schema(),
        config.base_url()
    )
}

pub fn fuzz_install_instructions() -> &'static str {
    "\nSchemathesis is not installed. To install it, run:\n  pip install schemathesis"
}
