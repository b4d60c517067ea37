//! 评分能力
//!
//! 平均分和等级的计算由外部评分服务负责，这里只描述调用接口

use std::future::Future;

use crate::error::ScorerError;
use crate::models::{ReportCard, SubmissionPayload};

/// 外部评分服务
///
/// 对应远程过程 `generate_report_card(name, total_marks, total_max_marks, num_subjects)`
pub trait Scorer: Send + Sync {
    fn generate_report_card(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<ReportCard, ScorerError>> + Send;
}
