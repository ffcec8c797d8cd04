//! 批量来源处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，按配置顺序处理所有来源并输出目录。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、加载来源列表、校验配置
//! 2. **顺序处理**：逐个来源委托 `source_processor`
//! 3. **组装目录**：跳过没有题目的来源
//! 4. **输出**：写 questions.json 和 warn.txt
//! 5. **全局统计**：汇总每个来源的结果

use crate::catalogue::CatalogueAssembler;
use crate::config::Config;
use crate::models::Catalogue;
use crate::orchestrator::source_processor::{self, SourceStats};
use crate::services::{write_catalogue, WarnWriter};
use crate::utils::logging::{
    init_log_file, log_source_complete, log_source_start, log_startup, print_final_stats,
};
use anyhow::{Context, Result};
use tracing::info;

/// 一次运行的汇总
#[derive(Debug, Default)]
pub struct RunSummary {
    /// (来源ID, 统计)，按处理顺序
    pub sources: Vec<(String, SourceStats)>,
    /// 没有题目而被跳过的来源ID
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn total_questions(&self) -> usize {
        self.sources.iter().map(|(_, s)| s.questions).sum()
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    warn_writer: WarnWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let config = config.load_sources().await?;
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        log_startup(config.sources.len(), config.group_size);

        let warn_writer = WarnWriter::with_path(&config.warn_file);
        warn_writer.reset().await?;

        Ok(Self {
            config,
            warn_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let (catalogue, summary) = self.build_catalogue().await?;

        write_catalogue(&catalogue, &self.config.output_path).await?;

        let rows: Vec<_> = self
            .config
            .sources
            .iter()
            .zip(&summary.sources)
            .map(|(spec, (_, s))| (spec.name.clone(), s.questions, s.exercises, s.dropped))
            .collect();
        print_final_stats(&rows, &self.config.output_path);
        info!("丢弃记录已保存至: {}", self.warn_writer.path());

        Ok(summary)
    }

    /// 处理所有来源并组装目录
    pub async fn build_catalogue(&self) -> Result<(Catalogue, RunSummary)> {
        let total = self.config.sources.len();
        let mut assembler = CatalogueAssembler::new();
        let mut summary = RunSummary::default();

        for (index, source) in self.config.sources.iter().enumerate() {
            log_source_start(index + 1, total, &source.name, source.strategy);

            let outcome = source_processor::process_source(
                source,
                self.config.group_size,
                self.config.verbose_logging,
            )
            .await?;

            self.warn_writer.write(&source.id, &outcome.dropped).await?;

            let stats = outcome.stats;
            log_source_complete(&source.name, stats.questions, stats.exercises, stats.dropped);

            assembler.push(source.id.clone(), source.name.clone(), outcome.exercises);
            summary.sources.push((source.id.clone(), stats));
        }

        summary.skipped = assembler.skipped().to_vec();
        Ok((assembler.finish(), summary))
    }
}
