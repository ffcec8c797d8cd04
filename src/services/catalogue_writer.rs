//! 目录写入服务 - 业务能力层

use super::warn_writer::ensure_parent_dir;
use crate::error::{AppError, AppResult};
use crate::models::Catalogue;
use tokio::fs;
use tracing::debug;

/// 序列化目录为格式化的 JSON（非 ASCII 字符原样保留）
pub fn render_catalogue(catalogue: &Catalogue) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(catalogue)?;
    json.push('\n');
    Ok(json)
}

/// 将目录写入输出文件
pub async fn write_catalogue(catalogue: &Catalogue, output_path: &str) -> AppResult<()> {
    let json = render_catalogue(catalogue)?;
    ensure_parent_dir(output_path).await?;
    fs::write(output_path, &json)
        .await
        .map_err(|e| AppError::write_failed(output_path, e))?;
    debug!("已写入 {} 字节到 {}", json.len(), output_path);
    Ok(())
}
