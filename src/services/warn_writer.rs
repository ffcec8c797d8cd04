//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力：记录被丢弃的题目块，不关心流程

use crate::error::{AppError, AppResult};
use crate::parser::DroppedBlock;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 每次运行开始时清空 warn.txt
/// - 逐个来源追加被丢弃的题目块及原因
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 清空警告文件（必要时创建父目录）
    pub async fn reset(&self) -> AppResult<()> {
        ensure_parent_dir(&self.warn_file_path).await?;
        fs::write(&self.warn_file_path, "")
            .await
            .map_err(|e| AppError::write_failed(&self.warn_file_path, e))
    }

    /// 写入一个来源的丢弃记录
    ///
    /// # 参数
    /// - `source_id`: 来源ID
    /// - `dropped`: 被丢弃的题目块
    pub async fn write(&self, source_id: &str, dropped: &[DroppedBlock]) -> AppResult<()> {
        if dropped.is_empty() {
            return Ok(());
        }

        debug!("写入警告: 来源 {} | {} 条", source_id, dropped.len());

        let mut warn_msg = String::new();
        for block in dropped {
            warn_msg.push_str(&format!(
                "来源 {} | 题目 {} | {}\n",
                source_id, block.number, block.reason
            ));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await
            .map_err(|e| AppError::write_failed(&self.warn_file_path, e))?;

        file.write_all(warn_msg.as_bytes())
            .await
            .map_err(|e| AppError::write_failed(&self.warn_file_path, e))?;

        Ok(())
    }
}

/// 创建文件所在目录
pub(crate) async fn ensure_parent_dir(path: &str) -> AppResult<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::write_failed(parent.display().to_string(), e))?;
        }
    }
    Ok(())
}
