//! 文本解析层
//!
//! 行分类 -> 块状态机 -> 题目列表。`keyed` 以答案表为准，`generic` 只做结构识别。

pub mod answer_key;
pub mod block;
pub mod generic;
pub mod keyed;
pub mod line;

pub use answer_key::{extract_answer_key, ANSWER_KEY_MARKER};
pub use block::{parse_blocks, BlockRules, DropReason, DroppedBlock, ParseReport};
pub use generic::parse_generic;
pub use keyed::{parse_keyed, parse_keyed_with};
pub use line::{Grammar, LineKind};

use crate::models::ParserStrategy;

/// 按来源配置的策略解析文本
pub fn parse_source(text: &str, source_id: &str, strategy: ParserStrategy) -> ParseReport {
    match strategy {
        ParserStrategy::Keyed => parse_keyed(text),
        ParserStrategy::Generic => parse_generic(text, source_id),
    }
}
