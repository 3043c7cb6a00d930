use crate::domain::model::ToolCommand;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部工具的執行介面
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// 繼承 stdio 執行並等待結束，回傳 exit code
    async fn run(&self, command: &ToolCommand) -> Result<i32>;

    /// 擷取並丟棄輸出，只回報是否成功結束（用於 `--version` 檢查）
    async fn probe(&self, command: &ToolCommand) -> Result<bool>;
}
