//! 题目块状态机
//!
//! 逐行扫描，遇到题干起始行时关闭当前块并尝试提交，再打开新块。
//! 两种解析器共用同一个循环，差异全部在 [`BlockRules`] 中。

use super::line::{option_ordinal, Grammar, LineKind};
use crate::models::{AnswerKey, Question, QuestionId};
use std::fmt;
use tracing::debug;

/// 每道题最多保留的选项数（通用解析）
pub const MAX_OPTIONS: usize = 4;

/// 题目块被丢弃的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// 没有任何选项
    NoOptions,
    /// 选项不足
    TooFewOptions { found: usize },
    /// 答案表中没有该题号
    MissingAnswer,
    /// 答案序号超出选项范围
    AnswerOutOfRange { answer: u32, options: usize },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::NoOptions => write!(f, "没有选项"),
            DropReason::TooFewOptions { found } => {
                write!(f, "选项不足 ({}/{})", found, MAX_OPTIONS)
            }
            DropReason::MissingAnswer => write!(f, "答案表中没有该题"),
            DropReason::AnswerOutOfRange { answer, options } => {
                write!(f, "答案 {} 超出范围 [1, {}]", answer, options)
            }
        }
    }
}

impl DropReason {
    /// 数据本身有误（答案表与选项不一致），而不是题目块不完整
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, DropReason::AnswerOutOfRange { .. })
    }
}

/// 被丢弃的题目块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBlock {
    pub number: u32,
    pub reason: DropReason,
}

/// 一次解析的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// 按出现顺序提交的题目
    pub questions: Vec<Question>,
    /// 按出现顺序丢弃的题目块
    pub dropped: Vec<DroppedBlock>,
    /// 带答案表的来源缺少答案表
    pub missing_answer_key: bool,
}

/// 块提交规则
#[derive(Debug, Clone, Copy)]
pub enum BlockRules<'a> {
    /// 以答案表为准，答案已核实
    Keyed(&'a AnswerKey),
    /// 无答案表，答案默认为 0 且标记为未核实
    Generic { source_id: &'a str },
}

impl BlockRules<'_> {
    fn grammar(&self) -> Grammar {
        match self {
            BlockRules::Keyed(_) => Grammar::Strict,
            BlockRules::Generic { .. } => Grammar::Loose,
        }
    }

    fn accepts_option(&self, accumulated: usize) -> bool {
        match self {
            BlockRules::Keyed(_) => true,
            BlockRules::Generic { .. } => accumulated < MAX_OPTIONS,
        }
    }

    fn commit(&self, block: OpenBlock) -> Result<Question, DropReason> {
        if block.options.is_empty() {
            return Err(DropReason::NoOptions);
        }

        match self {
            BlockRules::Keyed(key) => {
                let answer = key.get(block.number).ok_or(DropReason::MissingAnswer)?;
                let options = block.options.len();
                if answer == 0 || answer as usize > options {
                    return Err(DropReason::AnswerOutOfRange { answer, options });
                }
                Ok(Question {
                    id: QuestionId::Number(block.number),
                    number: block.number,
                    text: block.text,
                    options: block.options,
                    correct_answer: answer as usize - 1,
                    answer_verified: true,
                })
            }
            BlockRules::Generic { source_id } => {
                let found = block.options.len();
                if found < MAX_OPTIONS {
                    return Err(DropReason::TooFewOptions { found });
                }
                let mut options = block.options;
                options.truncate(MAX_OPTIONS);
                Ok(Question {
                    id: QuestionId::composite(source_id, block.number),
                    number: block.number,
                    text: block.text,
                    options,
                    correct_answer: 0,
                    answer_verified: false,
                })
            }
        }
    }
}

/// 当前打开的题目块
#[derive(Debug)]
struct OpenBlock {
    number: u32,
    text: String,
    options: Vec<String>,
}

/// 按给定规则把文本行切分为题目
pub fn parse_blocks<'t, I>(lines: I, rules: BlockRules<'_>) -> ParseReport
where
    I: IntoIterator<Item = &'t str>,
{
    let grammar = rules.grammar();
    let mut report = ParseReport::default();
    let mut open: Option<OpenBlock> = None;

    for line in lines {
        match grammar.classify(line) {
            LineKind::QuestionStart { number, text } => {
                if let Some(block) = open.take() {
                    close_block(block, &rules, &mut report);
                }
                open = Some(OpenBlock {
                    number,
                    text,
                    options: Vec::new(),
                });
            }
            LineKind::Option { label, text } => {
                let Some(block) = open.as_mut() else {
                    continue;
                };
                if !rules.accepts_option(block.options.len()) {
                    continue;
                }
                if option_ordinal(label) != Some(block.options.len()) {
                    debug!(
                        "题目 {} 的选项 {} 出现在第 {} 位",
                        block.number,
                        label,
                        block.options.len() + 1
                    );
                }
                block.options.push(text);
            }
            LineKind::AnswerKeyEntry { .. } | LineKind::Other => {}
        }
    }

    if let Some(block) = open.take() {
        close_block(block, &rules, &mut report);
    }

    report
}

fn close_block(block: OpenBlock, rules: &BlockRules<'_>, report: &mut ParseReport) {
    let number = block.number;
    match rules.commit(block) {
        Ok(question) => report.questions.push(question),
        Err(reason) => {
            debug!("丢弃题目 {}: {}", number, reason);
            report.dropped.push(DroppedBlock { number, reason });
        }
    }
}
