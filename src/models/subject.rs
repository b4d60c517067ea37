use serde::{Deserialize, Serialize};

/// 表单中的一行科目
///
/// 三个字段都以用户输入的原始文本保存，编辑时不做任何校验
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    pub name: String,
    pub marks: String,
    pub max_marks: String,
}

/// 科目行中可编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubjectField {
    /// 科目名
    Name,
    /// 得分
    Marks,
    /// 满分
    MaxMarks,
}

/// 通过校验的科目行的数值部分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSubject {
    pub marks: f64,
    pub max_marks: f64,
}

impl SubjectEntry {
    pub fn new(
        name: impl Into<String>,
        marks: impl Into<String>,
        max_marks: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            marks: marks.into(),
            max_marks: max_marks.into(),
        }
    }

    /// 读取某个字段的原始文本
    pub fn get(&self, field: SubjectField) -> &str {
        match field {
            SubjectField::Name => &self.name,
            SubjectField::Marks => &self.marks,
            SubjectField::MaxMarks => &self.max_marks,
        }
    }

    /// 返回替换了某个字段后的新行
    pub fn with_field(&self, field: SubjectField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        let value = value.into();
        match field {
            SubjectField::Name => updated.name = value,
            SubjectField::Marks => updated.marks = value,
            SubjectField::MaxMarks => updated.max_marks = value,
        }
        updated
    }

    /// 校验并取出数值
    ///
    /// 名称去掉首尾空白后非空，且得分与满分都能解析为数字时返回 `Some`
    pub fn scored(&self) -> Option<ScoredSubject> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(ScoredSubject {
            marks: parse_mark(&self.marks)?,
            max_marks: parse_mark(&self.max_marks)?,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.scored().is_some()
    }
}

/// 解析分数文本
///
/// 去掉首尾空白后必须非空，并且是有限的浮点数
pub fn parse_mark(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl SubjectField {
    /// 字段的标准名称
    pub fn name(self) -> &'static str {
        match self {
            SubjectField::Name => "name",
            SubjectField::Marks => "marks",
            SubjectField::MaxMarks => "max",
        }
    }

    /// 从命令行输入解析字段（忽略大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "subject" => Some(SubjectField::Name),
            "marks" | "mark" | "score" => Some(SubjectField::Marks),
            "max" | "maxmarks" | "max_marks" | "max-marks" => Some(SubjectField::MaxMarks),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubjectField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
