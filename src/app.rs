//! 终端表单
//!
//! 逐行读取命令，转换为表单动作，每条命令执行后重新绘制表单。
//! 也支持一次性模式：由命令行参数填好表单，提交、导出 PDF 后退出。

use std::fmt::Write as _;

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

use crate::clients::HttpScorer;
use crate::config::Config;
use crate::models::{SubjectEntry, SubjectField};
use crate::services::report_document::subject_line;
use crate::services::{DirectorySaver, PdfRenderer, PrintPdfRenderer, ReportSaver, Scorer};
use crate::utils::logging::{log_shutdown, log_startup};
use crate::workflow::{ExportedReport, FormAggregator, FormState, Outcome};

pub const HELP: &str = "\
Commands:
  name <text>                     set the student name
  add                             add an empty subject row
  remove <row>                    remove a subject row (at least one stays)
  set <row> <name|marks|max> [v]  edit one field of a row
  show                            redraw the form
  submit                          generate the report card
  pdf                             download the report card as PDF
  help                            show this help
  quit                            exit";

/// 终端命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Name(String),
    Add,
    /// 行下标，从 0 开始
    Remove(usize),
    Set {
        index: usize,
        field: SubjectField,
        value: String,
    },
    Show,
    Submit,
    Pdf,
    Help,
    Quit,
}

/// 解析一行输入，失败时返回提示文本
pub fn parse_command(line: &str) -> Result<Command, String> {
    let (keyword, rest) = split_word(line.trim());

    match keyword.to_ascii_lowercase().as_str() {
        "name" => Ok(Command::Name(rest.trim_end().to_string())),
        "add" => Ok(Command::Add),
        "remove" | "rm" => parse_row(rest).map(Command::Remove),
        "set" => {
            let (row, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            let index = parse_row(row)?;
            let field = SubjectField::from_str(field)
                .ok_or_else(|| format!("unknown field '{}', expected name, marks or max", field))?;
            Ok(Command::Set {
                index,
                field,
                value: value.trim_end().to_string(),
            })
        }
        "show" | "" => Ok(Command::Show),
        "submit" | "generate" => Ok(Command::Submit),
        "pdf" | "download" => Ok(Command::Pdf),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}', type 'help'", other)),
    }
}

/// 切出第一个单词，返回（单词，剩余部分）
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

/// 行号从 1 开始，转换成下标
fn parse_row(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("invalid row '{}', rows start at 1", raw)),
    }
}

/// 解析 `NAME:MARKS:MAX` 形式的科目参数
///
/// 从右侧切分，科目名本身可以带 `:`。分数原样保留，是否有效由表单规则决定
pub fn parse_subject_arg(raw: &str) -> Result<SubjectEntry, String> {
    let mut parts = raw.rsplitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(max_marks), Some(marks), Some(name)) => {
            Ok(SubjectEntry::new(name, marks, max_marks))
        }
        _ => Err(format!("invalid subject '{}', expected NAME:MARKS:MAX", raw)),
    }
}

/// 绘制表单
pub fn render_form(state: &FormState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Student Report Card");
    let _ = writeln!(out, "Student Name: {}", state.student_name);
    let _ = writeln!(out, "Subjects, Marks & Max Marks");
    for (index, entry) in state.subjects.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{}] {:<16} {:>6} / {:<6}",
            index + 1,
            entry.name,
            entry.marks,
            entry.max_marks
        );
    }

    match &state.outcome {
        Outcome::Pending => {}
        Outcome::Report(report) => {
            let _ = writeln!(out, "\nReport Card");
            let _ = writeln!(out, "Student Name: {}", report.name);
            let _ = writeln!(out, "Total Marks: {}", report.total_marks);
            let _ = writeln!(out, "Number of Subjects: {}", report.num_subjects);
            let _ = writeln!(out, "Average Marks: {}", report.average);
            let _ = writeln!(out, "Grade: {}", report.grade);
            let _ = writeln!(out, "Subject-wise Marks:");
            for (index, entry, _) in state.valid_subjects() {
                let _ = writeln!(out, "  {}", subject_line(index, entry));
            }
            let _ = writeln!(out, "(type 'pdf' to download)");
        }
        Outcome::Error(message) => {
            let _ = writeln!(out, "\nError: {}", message);
        }
    }
    out
}

/// 一条命令执行后的去向
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// 继续读取命令，附带要输出的文本
    Continue(String),
    Quit,
}

/// 应用主结构
pub struct App<S, R, W> {
    aggregator: FormAggregator<S, R, W>,
    submissions: usize,
    exports: usize,
}

impl App<HttpScorer, PrintPdfRenderer, DirectorySaver> {
    /// 按配置组装真实的评分服务与 PDF 导出
    pub fn initialize(config: &Config) -> Self {
        log_startup(config);
        Self::new(FormAggregator::new(
            HttpScorer::new(config),
            PrintPdfRenderer::new(),
            DirectorySaver::new(&config.output_dir),
        ))
    }
}

impl<S, R, W> App<S, R, W>
where
    S: Scorer,
    R: PdfRenderer,
    W: ReportSaver,
{
    pub fn new(aggregator: FormAggregator<S, R, W>) -> Self {
        Self {
            aggregator,
            submissions: 0,
            exports: 0,
        }
    }

    pub fn aggregator(&self) -> &FormAggregator<S, R, W> {
        &self.aggregator
    }

    /// 执行一条命令
    pub async fn execute(&mut self, command: Command) -> Step {
        let state = match command {
            Command::Name(name) => self.aggregator.set_student_name(name),
            Command::Add => self.aggregator.add_subject(),
            Command::Remove(index) => self.aggregator.remove_subject(index),
            Command::Set {
                index,
                field,
                value,
            } => self.aggregator.update_subject(index, field, value),
            Command::Show => self.aggregator.state(),
            Command::Submit => {
                self.submissions += 1;
                // 结果已经写进状态，这里只需要重新绘制
                if let Err(e) = self.aggregator.submit().await {
                    debug!("提交未成功，错误已写入表单: {}", e);
                }
                self.aggregator.state()
            }
            Command::Pdf => {
                let notice = match self.aggregator.export_pdf() {
                    Ok(Some(exported)) => {
                        self.exports += 1;
                        format!("Saved {}", exported.location.display())
                    }
                    Ok(None) => String::new(),
                    Err(e) => {
                        error!("❌ PDF 导出失败: {}", e);
                        format!("Export failed: {}", e)
                    }
                };
                return Step::Continue(notice);
            }
            Command::Help => return Step::Continue(HELP.to_string()),
            Command::Quit => return Step::Quit,
        };
        Step::Continue(render_form(&state))
    }

    /// 运行主循环，直到 `quit` 或输入结束
    pub async fn run<I>(&mut self, input: I) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        println!("{}", render_form(&self.aggregator.state()));
        println!("{}", HELP);

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let step = match parse_command(&line) {
                Ok(command) => self.execute(command).await,
                Err(hint) => Step::Continue(hint),
            };
            match step {
                Step::Continue(output) if output.is_empty() => {}
                Step::Continue(output) => println!("{}", output),
                Step::Quit => break,
            }
        }

        info!("输入结束");
        log_shutdown(self.submissions, self.exports);
        Ok(())
    }

    /// 一次性模式：填好表单，提交并导出 PDF
    ///
    /// 校验或评分失败时返回表单上显示的同一条错误
    pub async fn run_once(
        &mut self,
        student_name: &str,
        subjects: &[SubjectEntry],
    ) -> Result<ExportedReport> {
        info!("📝 一次性模式: {} ({} 行科目)", student_name, subjects.len());

        self.aggregator.set_student_name(student_name);
        for (index, entry) in subjects.iter().enumerate() {
            if index > 0 {
                self.aggregator.add_subject();
            }
            for field in [SubjectField::Name, SubjectField::Marks, SubjectField::MaxMarks] {
                self.aggregator.update_subject(index, field, entry.get(field));
            }
        }

        self.submissions += 1;
        let submitted = self.aggregator.submit().await;
        println!("{}", render_form(&self.aggregator.state()));
        submitted?;

        let exported = self
            .aggregator
            .export_pdf()?
            .ok_or_else(|| anyhow!("没有可导出的成绩单"))?;
        self.exports += 1;
        println!("Saved {}", exported.location.display());

        log_shutdown(self.submissions, self.exports);
        Ok(exported)
    }
}
