//! 表单状态
//!
//! 整个表单只有这一份状态。所有转换都是纯函数：接收旧状态，返回新状态，
//! 不做任何 IO，方便在没有界面的情况下测试。

use crate::error::ValidationError;
use crate::models::{ReportCard, ScoredSubject, SubjectEntry, SubjectField, SubmissionPayload};
use crate::services::ReportDocument;

/// 最近一次提交的展示结果
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// 还没有提交过
    #[default]
    Pending,
    /// 评分服务返回了成绩单
    Report(ReportCard),
    /// 校验失败或评分服务出错，保存展示给用户的文本
    Error(String),
}

/// 表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub student_name: String,
    /// 至少有一行
    pub subjects: Vec<SubjectEntry>,
    pub outcome: Outcome,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            student_name: String::new(),
            subjects: vec![SubjectEntry::default()],
            outcome: Outcome::Pending,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student_name(self, name: impl Into<String>) -> Self {
        Self {
            student_name: name.into(),
            ..self
        }
    }

    /// 替换某一行的某个字段，下标越界时不变
    pub fn update_subject(self, index: usize, field: SubjectField, value: impl Into<String>) -> Self {
        let Some(entry) = self.subjects.get(index) else {
            return self;
        };
        let updated = entry.with_field(field, value);
        let mut subjects = self.subjects;
        subjects[index] = updated;
        Self { subjects, ..self }
    }

    /// 末尾追加一行空科目
    pub fn add_subject(self) -> Self {
        let mut subjects = self.subjects;
        subjects.push(SubjectEntry::default());
        Self { subjects, ..self }
    }

    /// 删除某一行；只剩一行或下标越界时不变
    pub fn remove_subject(self, index: usize) -> Self {
        if self.subjects.len() <= 1 || index >= self.subjects.len() {
            return self;
        }
        let subjects = self
            .subjects
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, entry)| entry)
            .collect();
        Self { subjects, ..self }
    }

    /// 通过校验的科目行，保留原来的下标
    pub fn valid_subjects(&self) -> impl Iterator<Item = (usize, &SubjectEntry, ScoredSubject)> {
        self.subjects
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.scored().map(|scored| (index, entry, scored)))
    }

    /// 校验表单并汇总出提交数据
    ///
    /// 姓名为空白、没有任何有效科目，或总分溢出时返回 [`ValidationError`]
    pub fn prepare_submission(&self) -> Result<SubmissionPayload, ValidationError> {
        if self.student_name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }

        let (total_marks, total_max_marks, num_subjects) = self.valid_subjects().fold(
            (0.0, 0.0, 0u32),
            |(marks, max_marks, count), (_, _, scored)| {
                (marks + scored.marks, max_marks + scored.max_marks, count + 1)
            },
        );

        if num_subjects == 0 {
            return Err(ValidationError::NoValidSubjects);
        }
        // 每行都是有限值，但求和仍可能溢出成 inf，序列化后会变成 null
        if !total_marks.is_finite() || !total_max_marks.is_finite() {
            return Err(ValidationError::TotalOutOfRange);
        }

        Ok(SubmissionPayload {
            name: self.student_name.clone(),
            total_marks,
            total_max_marks,
            num_subjects,
        })
    }

    /// 校验失败：展示提示，隐藏旧的成绩单
    pub fn reject(self, error: ValidationError) -> Self {
        Self {
            outcome: Outcome::Error(error.to_string()),
            ..self
        }
    }

    /// 评分成功：保存成绩单，清掉旧的错误
    pub fn accept_report(self, report: ReportCard) -> Self {
        Self {
            outcome: Outcome::Report(report),
            ..self
        }
    }

    /// 评分服务出错：原样展示错误信息，清掉旧的成绩单
    pub fn fail(self, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error(message.into()),
            ..self
        }
    }

    pub fn report(&self) -> Option<&ReportCard> {
        match &self.outcome {
            Outcome::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(message) => Some(message),
            _ => None,
        }
    }

    /// 生成待导出的成绩单文档；没有成绩单时返回 `None`
    pub fn report_document(&self) -> Option<ReportDocument> {
        self.report()
            .map(|report| ReportDocument::build(report, &self.subjects))
    }
}
