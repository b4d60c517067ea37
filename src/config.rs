use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 评分服务地址
    pub scorer_base_url: String,
    /// 评分服务的方法名
    pub scorer_method: String,
    /// PDF 保存目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer_base_url: "http://127.0.0.1:4943".to_string(),
            scorer_method: "generate_report_card".to_string(),
            output_dir: "reports".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取，文件中缺少的项使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 配置文件（可选）+ 环境变量
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 用环境变量覆盖已有的值
    pub fn with_env_overrides(self) -> Self {
        Self {
            scorer_base_url: std::env::var("SCORER_BASE_URL").unwrap_or(self.scorer_base_url),
            scorer_method: std::env::var("SCORER_METHOD").unwrap_or(self.scorer_method),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(self.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            scorer_base_url = "http://scorer.local:8080"
            verbose_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.scorer_base_url, "http://scorer.local:8080");
        assert!(config.verbose_logging);
        assert_eq!(config.scorer_method, "generate_report_card");
        assert_eq!(config.output_dir, "reports");
    }

    #[test]
    fn test_toml_rejects_wrong_types() {
        assert!(Config::from_toml_str("verbose_logging = \"yes please\"").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Config::from_toml_file(Path::new("/definitely/not/here/report_card.toml"));
        assert!(result.is_err());
    }
}
