//! # Report Card
//!
//! 录入学生姓名和各科成绩，提交给外部评分服务生成成绩单，并导出为 PDF
//!
//! ## 架构设计
//!
//! ### ① 模型（Models）
//! - `models/` - 科目行、提交数据、成绩单
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 描述"我能做什么"：评分、排版、渲染 PDF、保存文件
//! - `clients/` - `HttpScorer`，通过 HTTP 调用远程评分服务
//!
//! ### ③ 流程层（Workflow）
//! - `FormState` - 唯一的表单状态，所有转换都是纯函数
//! - `FormAction` / `reduce` - 受控的状态更新入口
//! - `FormAggregator` - 编排提交与导出（validate → score → render）
//!
//! ### ④ 界面（App）
//! - `app` - 终端表单，逐行读取命令
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::HttpScorer;
pub use config::Config;
pub use error::{ExportError, ScorerError, SubmitError, ValidationError};
pub use models::{ReportCard, SubjectEntry, SubjectField, SubmissionPayload};
pub use services::{DirectorySaver, PdfRenderer, PrintPdfRenderer, ReportSaver, Scorer};
pub use workflow::{reduce, ExportedReport, FormAction, FormAggregator, FormState, Outcome};
