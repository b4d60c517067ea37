//! 成绩单文档排版
//!
//! 固定版式：标题、成绩信息、逐科成绩。坐标单位为毫米，原点在页面左上角。

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ReportCard, SubjectEntry};

pub const DOCUMENT_TITLE: &str = "Student Report Card";

const TITLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 12.0;
const LEFT_MARGIN: f32 = 20.0;
const SUBJECT_INDENT: f32 = 25.0;
const TITLE_Y: f32 = 20.0;
const BODY_START_Y: f32 = 40.0;
const LINE_STEP: f32 = 10.0;
const SUBJECT_LINE_STEP: f32 = 8.0;

/// 一条文字放置指令
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

/// 待渲染的成绩单
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub file_name: String,
    pub placements: Vec<TextPlacement>,
}

impl ReportDocument {
    /// 根据成绩单和当前的科目行排版
    ///
    /// 只输出通过校验的科目行，序号使用该行在表单中的位置
    pub fn build(report: &ReportCard, subjects: &[SubjectEntry]) -> Self {
        let mut placements = vec![TextPlacement {
            text: DOCUMENT_TITLE.to_string(),
            x: LEFT_MARGIN,
            y: TITLE_Y,
            font_size: TITLE_FONT_SIZE,
        }];

        let mut y = BODY_START_Y;
        let summary = [
            format!("Student Name: {}", report.name),
            format!("Total Marks: {}", report.total_marks),
            format!("Number of Subjects: {}", report.num_subjects),
            format!("Average Marks: {}", report.average),
            format!("Grade: {}", report.grade),
            "Subject-wise Marks:".to_string(),
        ];
        for text in summary {
            placements.push(TextPlacement {
                text,
                x: LEFT_MARGIN,
                y,
                font_size: BODY_FONT_SIZE,
            });
            y += LINE_STEP;
        }

        for (index, entry) in subjects.iter().enumerate() {
            if !entry.is_valid() {
                continue;
            }
            placements.push(TextPlacement {
                text: subject_line(index, entry),
                x: SUBJECT_INDENT,
                y,
                font_size: BODY_FONT_SIZE,
            });
            y += SUBJECT_LINE_STEP;
        }

        Self {
            title: DOCUMENT_TITLE.to_string(),
            file_name: report_file_name(&report.name),
            placements,
        }
    }
}

/// 逐科成绩的一行，`index` 从 0 开始
pub fn subject_line(index: usize, entry: &SubjectEntry) -> String {
    format!(
        "{}. {}: {} / {}",
        index + 1,
        entry.name,
        entry.marks,
        entry.max_marks
    )
}

/// 导出文件名：姓名中的连续空白替换为下划线
///
/// 路径分隔符同样替换为下划线，并去掉开头的 `.`，保证结果只是一个文件名
pub fn report_file_name(student_name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex is valid"));
    let stem = re.replace_all(student_name, "_").replace(['/', '\\'], "_");
    format!("{}_report_card.pdf", stem.trim_start_matches('.'))
}
