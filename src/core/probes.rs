use crate::domain::model::{EdgeCaseProbe, ProbeOutcome, ProbeResult};
use crate::utils::error::Result;
use reqwest::Client;
use std::io::Write;

const REPORT_HEADER: &str = "Testing specific edge cases:";
const REPORT_FOOTER: &str =
    "Note: Schemathesis would generate hundreds of such test cases automatically!";

/// 手動挑選的 /search 邊界案例
pub const EDGE_CASE_PROBES: [EdgeCaseProbe; 5] = [
    EdgeCaseProbe {
        label: "Empty postal code",
        query: "plz=",
    },
    EdgeCaseProbe {
        label: "Invalid postal code",
        query: "plz=ABCDE",
    },
    EdgeCaseProbe {
        label: "Negative zwecke",
        query: "zwecke=-1",
    },
    EdgeCaseProbe {
        label: "Large page number",
        query: "page=999999",
    },
    EdgeCaseProbe {
        label: "Combined parameters",
        query: "plz=10115&bundesland=BE&zwecke=57",
    },
];

pub fn probe_url(base_url: &str, probe: &EdgeCaseProbe) -> String {
    format!("{}/search?{}", base_url.trim_end_matches('/'), probe.query)
}

pub struct ProbeRunner {
    client: Client,
    base_url: String,
}

impl ProbeRunner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 傳輸錯誤不中斷，記錄後繼續下一個
    pub async fn run_probe(&self, probe: &EdgeCaseProbe) -> ProbeResult {
        let url = probe_url(&self.base_url, probe);
        tracing::debug!("GET {}", url);

        let outcome = match self.client.get(&url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) => {
                tracing::warn!("Request for '{}' failed: {}", probe.label, e);
                ProbeOutcome::TransportError(e.to_string())
            }
        };

        ProbeResult {
            label: probe.label.to_string(),
            url,
            outcome,
        }
    }

    /// 依序送出所有案例，每完成一個就寫出一行結果
    pub async fn run_all<W: Write>(&self, out: &mut W) -> Result<Vec<ProbeResult>> {
        writeln!(out, "{}", REPORT_HEADER)?;
        writeln!(out, "{}", "-".repeat(40))?;

        let mut results = Vec::with_capacity(EDGE_CASE_PROBES.len());
        for probe in &EDGE_CASE_PROBES {
            let result = self.run_probe(probe).await;
            writeln!(out, "{}", result)?;
            out.flush()?;
            results.push(result);
        }

        writeln!(out, "\n{}", REPORT_FOOTER)?;
        Ok(results)
    }
}

/// 有任何傳輸錯誤回傳 1；HTTP 狀態碼本身不算失敗
pub fn probes_exit_code(results: &[ProbeResult]) -> i32 {
    let failed = results
        .iter()
        .any(|r| matches!(r.outcome, ProbeOutcome::TransportError(_)));
    if failed {
        1
    } else {
        0
    }
}
