//! 单个来源处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **读取文本**：来源文件不存在即中止
//! 2. **解析题目**：按来源策略选择带答案表或通用解析
//! 3. **分组**：把题目切分为练习
//! 4. **统计输出**：记录题目、练习和丢弃数量

use crate::catalogue::group_into_exercises;
use crate::models::{load_source_text, Exercise, SourceSpec};
use crate::parser::{self, DroppedBlock, ParseReport};
use crate::utils::logging::truncate_text;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 单个来源的处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceStats {
    pub questions: usize,
    pub exercises: usize,
    pub dropped: usize,
    pub missing_answer_key: bool,
}

/// 单个来源的处理结果
#[derive(Debug)]
pub struct SourceOutcome {
    pub exercises: Vec<Exercise>,
    pub dropped: Vec<DroppedBlock>,
    pub stats: SourceStats,
}

/// 处理单个来源：读取、解析、分组
///
/// # 参数
/// - `source`: 来源配置
/// - `group_size`: 每个练习的题目数
/// - `verbose`: 是否逐条输出被丢弃的题目
pub async fn process_source(
    source: &SourceSpec,
    group_size: usize,
    verbose: bool,
) -> Result<SourceOutcome> {
    let text = load_source_text(Path::new(&source.path))
        .await
        .with_context(|| format!("无法读取来源 {} ({})", source.name, source.path))?;

    process_text(source, &text, group_size, verbose)
}

/// 处理已读取的文本
pub fn process_text(
    source: &SourceSpec,
    text: &str,
    group_size: usize,
    verbose: bool,
) -> Result<SourceOutcome> {
    let report = parser::parse_source(text, &source.id, source.strategy);
    log_report(source, &report, verbose);

    let ParseReport {
        questions,
        dropped,
        missing_answer_key,
    } = report;

    let exercises = group_into_exercises(&questions, group_size)
        .with_context(|| format!("无法为来源 {} 分组", source.id))?;

    let stats = SourceStats {
        questions: questions.len(),
        exercises: exercises.len(),
        dropped: dropped.len(),
        missing_answer_key,
    };

    Ok(SourceOutcome {
        exercises,
        dropped,
        stats,
    })
}

/// 因数据错误（而非格式不完整）被拒绝的题目块，总是以警告输出
fn integrity_rejects(report: &ParseReport) -> impl Iterator<Item = &DroppedBlock> {
    report
        .dropped
        .iter()
        .filter(|block| block.reason.is_data_integrity())
}

// ========== 日志辅助函数 ==========

fn log_report(source: &SourceSpec, report: &ParseReport, verbose: bool) {
    if report.missing_answer_key {
        warn!("[{}] ⚠️ 缺少答案表，所有题目均被丢弃", source.id);
    }

    for block in integrity_rejects(report) {
        warn!("[{}] ⚠️ 题目 {} 被拒绝: {}", source.id, block.number, block.reason);
    }

    if verbose {
        for block in report.dropped.iter().filter(|b| !b.reason.is_data_integrity()) {
            info!("[{}]   丢弃题目 {}: {}", source.id, block.number, block.reason);
        }
        if let Some(first) = report.questions.first() {
            info!("[{}]   第一题: {}", source.id, truncate_text(&first.text, 60));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParserStrategy;

    fn generic_source() -> SourceSpec {
        SourceSpec::new("general", "General", "unused.txt", ParserStrategy::Generic)
    }

    #[test]
    fn test_process_text_counts() {
        let mut text = String::new();
        for n in 1..=30 {
            text.push_str(&format!("{}. Question {}\nA) a\nB) b\nC) c\nD) d\n", n, n));
        }
        text.push_str("31. Short\nA) a\n");

        let outcome = process_text(&generic_source(), &text, 25, false).unwrap();
        assert_eq!(
            outcome.stats,
            SourceStats {
                questions: 30,
                exercises: 2,
                dropped: 1,
                missing_answer_key: false,
            }
        );
        assert_eq!(outcome.exercises[1].total_questions, 5);
    }

    #[test]
    fn test_out_of_range_answers_are_singled_out() {
        let source = SourceSpec::new("computer1", "Computer (1)", "unused.txt", ParserStrategy::Keyed);
        let text = "1. Q1\nA) a\nB) b\n2. Q2\nA) a\n3. Q3\nA) a\nB) b\nANSWERS:\n1. 4  3. 2\n";
        let report = parser::parse_source(text, &source.id, source.strategy);

        let rejected: Vec<_> = integrity_rejects(&report).map(|b| b.number).collect();
        assert_eq!(rejected, vec![1]);
        assert_eq!(report.dropped.len(), 2);
        assert_eq!(report.questions.len(), 1);

        let outcome = process_text(&source, text, 25, false).unwrap();
        assert_eq!(outcome.stats.dropped, 2);
    }

    #[tokio::test]
    async fn test_missing_source_aborts() {
        let source = SourceSpec::new("x", "X", "/nonexistent/x_raw.txt", ParserStrategy::Keyed);
        let err = process_source(&source, 25, false).await.unwrap_err();
        assert!(format!("{:#}", err).contains("x_raw.txt"));
    }
}
