use serde::{Deserialize, Serialize};

/// 提交给评分服务的汇总数据
///
/// 每次提交时根据表单重新计算，不做保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub total_marks: f64,
    pub total_max_marks: f64,
    pub num_subjects: u32,
}

/// 评分服务返回的成绩单，只用于展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    pub name: String,
    pub total_marks: f64,
    pub num_subjects: u32,
    pub average: f64,
    pub grade: String,
}
