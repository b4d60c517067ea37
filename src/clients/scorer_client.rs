//! 评分服务 HTTP 客户端
//!
//! 以 JSON 形式调用远程的 `generate_report_card`

use crate::config::Config;
use crate::error::ScorerError;
use crate::models::{ReportCard, SubmissionPayload};
use crate::services::Scorer;
use serde_json::Value;
use tracing::{debug, warn};

/// 评分服务客户端
pub struct HttpScorer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScorer {
    /// 根据配置创建客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(format!(
            "{}/{}",
            config.scorer_base_url.trim_end_matches('/'),
            config.scorer_method.trim_start_matches('/')
        ))
    }

    /// 使用完整的接口地址创建客户端
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// 使用自定义的 `reqwest::Client`（代理、TLS 等）
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Scorer for HttpScorer {
    async fn generate_report_card(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ReportCard, ScorerError> {
        debug!("调用评分服务 {}: {:?}", self.endpoint, payload);

        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("评分服务返回错误状态 {}: {}", status, body);
            return Err(ScorerError::new(error_message(status, &body)));
        }

        let report: ReportCard = response.json().await?;
        debug!("评分服务返回: {:?}", report);
        Ok(report)
    }
}

/// 从错误响应中提取展示给用户的文本
///
/// 优先使用 JSON 中的 `message` / `error` 字段，其次是原始响应体，最后是状态码
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}
