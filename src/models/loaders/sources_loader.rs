use crate::error::{AppError, AppResult};
use crate::models::source::SourceSpec;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 来源列表文件的结构
///
/// ```toml
/// [[sources]]
/// id = "computer1"
/// name = "Computer (1)"
/// path = "data/computer1_raw.txt"
/// strategy = "keyed"
/// ```
#[derive(Debug, Deserialize)]
struct SourcesFile {
    #[serde(default)]
    group_size: Option<usize>,
    sources: Vec<SourceSpec>,
}

/// 从 TOML 文件加载来源列表，返回 (可选的分组大小, 来源列表)
pub async fn load_sources_file(path: &Path) -> AppResult<(Option<usize>, Vec<SourceSpec>)> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::read_failed(&shown, e))?;

    let parsed = parse_sources(&content).map_err(|source| AppError::ConfigParse {
        path: shown.clone(),
        source,
    })?;

    tracing::info!("从 {} 加载了 {} 个来源", shown, parsed.sources.len());

    Ok((parsed.group_size, parsed.sources))
}

fn parse_sources(content: &str) -> Result<SourcesFile, toml::de::Error> {
    toml::from_str(content)
}
