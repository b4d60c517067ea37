//! 成绩单保存能力 - 相当于浏览器里的"下载"
//!
//! 只负责把渲染好的文件放到目标位置，不关心文件内容

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExportError;

pub trait ReportSaver: Send + Sync {
    /// 保存文件，返回保存后的位置
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// 把文件写到指定目录，目录不存在时自动创建
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    output_dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportSaver for DirectorySaver {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        // 只接受单个文件名，不允许带目录或跳出保存目录
        if Path::new(file_name).file_name() != Some(OsStr::new(file_name)) {
            return Err(ExportError::InvalidFileName(file_name.to_string()));
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| ExportError::save_failed(&self.output_dir, e))?;

        let path = self.output_dir.join(file_name);
        fs::write(&path, bytes).map_err(|e| ExportError::save_failed(&path, e))?;

        debug!("写入文件: {} ({} 字节)", path.display(), bytes.len());
        Ok(path)
    }
}
