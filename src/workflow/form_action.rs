//! 表单动作
//!
//! 界面上的每一次操作都对应一个 [`FormAction`]，由 [`reduce`] 统一应用到状态上

use crate::error::ValidationError;
use crate::models::{ReportCard, SubjectField};
use crate::workflow::form_state::FormState;

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// 修改学生姓名
    SetStudentName(String),
    /// 修改某一行的某个字段
    UpdateSubject {
        index: usize,
        field: SubjectField,
        value: String,
    },
    /// 追加空行
    AddSubject,
    /// 删除一行
    RemoveSubject(usize),
    /// 本地校验失败
    SubmissionRejected(ValidationError),
    /// 评分服务返回成绩单
    ReportReceived(ReportCard),
    /// 评分服务出错
    ScorerFailed(String),
}

/// 把动作应用到状态上，返回新状态
pub fn reduce(state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetStudentName(name) => state.with_student_name(name),
        FormAction::UpdateSubject {
            index,
            field,
            value,
        } => state.update_subject(index, field, value),
        FormAction::AddSubject => state.add_subject(),
        FormAction::RemoveSubject(index) => state.remove_subject(index),
        FormAction::SubmissionRejected(error) => state.reject(error),
        FormAction::ReportReceived(report) => state.accept_report(report),
        FormAction::ScorerFailed(message) => state.fail(message),
    }
}
