//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::SubmissionPayload;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 成绩单程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📡 评分服务: {}/{}", config.scorer_base_url, config.scorer_method);
    info!("📁 PDF 保存目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录提交内容
pub fn log_submission(payload: &SubmissionPayload) {
    info!(
        "📤 提交成绩: {} | 总分 {}/{} | 科目数 {}",
        truncate_text(&payload.name, 40),
        payload.total_marks,
        payload.total_max_marks,
        payload.num_subjects
    );
}

/// 记录退出信息
pub fn log_shutdown(submissions: usize, exports: usize) {
    info!("{}", "─".repeat(60));
    info!(
        "👋 程序结束 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 提交 {} 次，导出 PDF {} 份", submissions, exports);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Asha", 10), "Asha");
        assert_eq!(truncate_text("Asha Rao", 4), "Asha...");
        assert_eq!(truncate_text("阿莎·饶", 2), "阿莎...");
    }
}
