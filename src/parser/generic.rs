//! 通用解析器
//!
//! 没有答案表的来源使用。所有题目的 `correct_answer` 都是默认值 0，
//! 并标记 `answer_verified = false`，调用方不能把它当作真实答案。

use super::block::{parse_blocks, BlockRules, ParseReport};

/// 按结构启发式解析题目，题目ID为 `{source_id}_{题号}`
pub fn parse_generic(text: &str, source_id: &str) -> ParseReport {
    parse_blocks(text.lines(), BlockRules::Generic { source_id })
}
