use std::path::PathBuf;

use thiserror::Error;

/// 表单校验失败时展示给用户的提示
pub const VALIDATION_MESSAGE: &str =
    "Please enter student name and at least one valid subject with marks and maximum marks.";

/// 表单校验错误
///
/// 在调用评分服务之前本地产生，两种情况给用户的提示相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 学生姓名为空或只有空白
    #[error("{}", VALIDATION_MESSAGE)]
    BlankName,
    /// 没有任何一行科目通过校验
    #[error("{}", VALIDATION_MESSAGE)]
    NoValidSubjects,
    /// 总分超出 `f64` 的有限范围
    #[error("{}", VALIDATION_MESSAGE)]
    TotalOutOfRange,
}

/// 评分服务返回的错误
///
/// `message` 原样展示给用户
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScorerError {
    pub message: String,
}

impl ScorerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ScorerError {
    fn from(err: reqwest::Error) -> Self {
        ScorerError::new(err.to_string())
    }
}

/// 提交流程的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Scorer(#[from] ScorerError),
}

impl SubmitError {
    /// 展示在表单上的错误文本
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// 导出 PDF 的错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF 渲染失败
    #[error("PDF rendering failed: {0}")]
    Render(String),
    /// 文件名带有目录部分
    #[error("invalid report file name: {0:?}")]
    InvalidFileName(String),
    /// 写入文件失败
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn save_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Save {
            path: path.into(),
            source,
        }
    }
}
