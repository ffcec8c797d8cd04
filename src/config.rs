use crate::catalogue::DEFAULT_GROUP_SIZE;
use crate::error::{AppError, AppResult};
use crate::models::{load_sources_file, ParserStrategy, SourceSpec};
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 每个练习的题目数
    pub group_size: usize,
    /// 输出 JSON 路径
    pub output_path: String,
    /// 丢弃题目报告
    pub warn_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否逐条输出被丢弃的题目
    pub verbose_logging: bool,
    /// 覆盖默认来源列表的 TOML 文件
    pub sources_file: Option<String>,
    /// 按顺序处理的来源
    pub sources: Vec<SourceSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            output_path: "data/questions.json".to_string(),
            warn_file: "data/warn.txt".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            sources_file: None,
            sources: default_sources(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            group_size: std::env::var("GROUP_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.group_size),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(default.output_path),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            sources_file: std::env::var("SOURCES_FILE").ok(),
            sources: default.sources,
        }
    }

    /// 如果设置了来源文件，用其中的来源（以及可选的分组大小）替换默认值
    pub async fn load_sources(mut self) -> AppResult<Self> {
        if let Some(path) = self.sources_file.clone() {
            let (group_size, sources) = load_sources_file(Path::new(&path)).await?;
            if let Some(size) = group_size {
                self.group_size = size;
            }
            self.sources = sources;
        }
        Ok(self)
    }

    /// 检查分组大小
    pub fn validate(&self) -> AppResult<()> {
        if self.group_size == 0 {
            return Err(AppError::InvalidGroupSize(self.group_size));
        }
        Ok(())
    }
}

/// 已知的三个来源
fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "computer1",
            "Computer (1)",
            "data/computer1_raw.txt",
            ParserStrategy::Keyed,
        ),
        SourceSpec::new(
            "computer",
            "Computer",
            "data/computer_raw.txt",
            ParserStrategy::Generic,
        ),
        SourceSpec::new(
            "general",
            "General",
            "data/general_raw.txt",
            ParserStrategy::Generic,
        ),
    ]
}
