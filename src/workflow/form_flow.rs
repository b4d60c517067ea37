//! 表单流程 - 流程层
//!
//! 核心职责：持有唯一的表单状态，编排"提交"与"导出 PDF"两条流程
//!
//! 提交流程：
//! 1. 本地校验并汇总 → 失败则展示提示
//! 2. 调用评分服务 → 成功展示成绩单 / 失败展示错误信息
//!
//! 导出流程：
//! 1. 没有成绩单时什么都不做
//! 2. 排版 → 渲染 PDF → 保存

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::error::{ExportError, SubmitError};
use crate::models::{ReportCard, SubjectField};
use crate::services::{PdfRenderer, ReportSaver, Scorer};
use crate::utils::logging::log_submission;
use crate::workflow::form_action::{reduce, FormAction};
use crate::workflow::form_state::FormState;

/// 一次成功导出的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub file_name: String,
    pub location: PathBuf,
    pub size: usize,
}

/// 表单聚合器
///
/// - 评分服务、PDF 渲染、文件保存都通过构造参数注入
/// - 状态锁不会跨越对评分服务的等待，重叠的两次提交以最后返回的为准
pub struct FormAggregator<S, R, W> {
    scorer: S,
    renderer: R,
    saver: W,
    state: Mutex<FormState>,
}

impl<S, R, W> FormAggregator<S, R, W>
where
    S: Scorer,
    R: PdfRenderer,
    W: ReportSaver,
{
    pub fn new(scorer: S, renderer: R, saver: W) -> Self {
        Self::with_state(scorer, renderer, saver, FormState::new())
    }

    pub fn with_state(scorer: S, renderer: R, saver: W, state: FormState) -> Self {
        Self {
            scorer,
            renderer,
            saver,
            state: Mutex::new(state),
        }
    }

    /// 当前状态的快照
    pub fn state(&self) -> FormState {
        self.lock().clone()
    }

    /// 应用一个动作，返回新状态
    pub fn dispatch(&self, action: FormAction) -> FormState {
        let mut guard = self.lock();
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, action);
        guard.clone()
    }

    pub fn set_student_name(&self, name: impl Into<String>) -> FormState {
        self.dispatch(FormAction::SetStudentName(name.into()))
    }

    pub fn update_subject(
        &self,
        index: usize,
        field: SubjectField,
        value: impl Into<String>,
    ) -> FormState {
        self.dispatch(FormAction::UpdateSubject {
            index,
            field,
            value: value.into(),
        })
    }

    pub fn add_subject(&self) -> FormState {
        self.dispatch(FormAction::AddSubject)
    }

    pub fn remove_subject(&self, index: usize) -> FormState {
        self.dispatch(FormAction::RemoveSubject(index))
    }

    /// 提交表单
    pub async fn submit(&self) -> Result<ReportCard, SubmitError> {
        let prepared = self.lock().prepare_submission();

        let payload = match prepared {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ 表单校验失败: {:?}", e);
                self.dispatch(FormAction::SubmissionRejected(e));
                return Err(e.into());
            }
        };

        log_submission(&payload);

        match self.scorer.generate_report_card(&payload).await {
            Ok(report) => {
                info!(
                    "✓ 评分完成: {} | 平均分 {} | 等级 {}",
                    report.name, report.average, report.grade
                );
                self.dispatch(FormAction::ReportReceived(report.clone()));
                Ok(report)
            }
            Err(e) => {
                error!("❌ 评分服务调用失败: {}", e);
                self.dispatch(FormAction::ScorerFailed(e.message.clone()));
                Err(e.into())
            }
        }
    }

    /// 导出 PDF；没有成绩单时返回 `Ok(None)`
    pub fn export_pdf(&self) -> Result<Option<ExportedReport>, ExportError> {
        let Some(document) = self.lock().report_document() else {
            debug!("没有成绩单，跳过导出");
            return Ok(None);
        };

        let bytes = self.renderer.render(&document.title, &document.placements)?;
        let location = self.saver.save(&document.file_name, &bytes)?;

        info!("✓ PDF 已导出: {}", location.display());

        Ok(Some(ExportedReport {
            file_name: document.file_name,
            location,
            size: bytes.len(),
        }))
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
