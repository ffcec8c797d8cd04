use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::fs;

/// 读取一个来源的提取文本
///
/// 文件不存在时返回 `SourceNotFound`，该来源无法继续处理。
pub async fn load_source_text(path: &Path) -> AppResult<String> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(AppError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::read_failed(path.display().to_string(), e))?;

    tracing::debug!(
        "已读取 {} ({} 行)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        content.lines().count()
    );

    Ok(content)
}
