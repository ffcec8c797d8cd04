//! 答案表提取

use super::line::{find_answer_marker, key_entries, LineKind};
use crate::models::AnswerKey;
use tracing::{debug, warn};

/// 答案表起始标记
pub const ANSWER_KEY_MARKER: &str = "ANSWERS:";

/// 在第一个单独成行的答案表标记处切分文本，返回 (题目正文, 答案表部分)
pub fn split_answer_section(text: &str) -> (&str, Option<&str>) {
    match find_answer_marker(text) {
        Some((start, end)) => (&text[..start], Some(&text[end..])),
        None => (text, None),
    }
}

/// 从完整文本中提取答案表
///
/// 没有答案表时返回 `None` 并输出警告；同一题号出现多次时以最后一次为准。
pub fn extract_answer_key(text: &str) -> Option<AnswerKey> {
    let (_, section) = split_answer_section(text);
    let Some(section) = section else {
        warn!("⚠️ 未找到答案表 ({})", ANSWER_KEY_MARKER);
        return None;
    };

    let key = parse_key_section(section);
    debug!("答案表共 {} 条", key.len());
    Some(key)
}

/// 解析答案表部分
pub fn parse_key_section(section: &str) -> AnswerKey {
    let mut key = AnswerKey::new();
    for line in section.lines() {
        for entry in key_entries(line) {
            if let LineKind::AnswerKeyEntry { number, answer } = entry {
                key.insert(number, answer);
            }
        }
    }
    key
}
