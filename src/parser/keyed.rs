//! 带答案表的解析器

use super::answer_key::{extract_answer_key, split_answer_section};
use super::block::{parse_blocks, BlockRules, ParseReport};
use crate::models::AnswerKey;

/// 以文末答案表为准解析题目
///
/// 只解析答案表标记之前的正文。没有答案表时所有题目块都因缺少答案被丢弃，
/// 并在结果中标记 `missing_answer_key`。
pub fn parse_keyed(text: &str) -> ParseReport {
    let (body, _) = split_answer_section(text);
    match extract_answer_key(text) {
        Some(key) => parse_keyed_with(body, &key),
        None => ParseReport {
            missing_answer_key: true,
            ..parse_keyed_with(body, &AnswerKey::new())
        },
    }
}

/// 使用外部提供的答案表解析正文
pub fn parse_keyed_with(body: &str, key: &AnswerKey) -> ParseReport {
    parse_blocks(body.lines(), BlockRules::Keyed(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;
    use crate::parser::block::DropReason;

    #[test]
    fn test_single_question_with_key() {
        let text = "1. What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\n...\nANSWERS:\n1. 2";
        let report = parse_keyed(text);

        assert!(!report.missing_answer_key);
        assert_eq!(report.questions.len(), 1);
        let q = &report.questions[0];
        assert_eq!(q.id, QuestionId::Number(1));
        assert_eq!(q.number, 1);
        assert_eq!(q.text, "What is 2+2?");
        assert_eq!(q.options, vec!["3", "4", "5", "6"]);
        assert_eq!(q.correct_answer, 1);
        assert!(q.answer_verified);
    }

    #[test]
    fn test_without_key_nothing_is_emitted() {
        let text = "1. What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\n...";
        let report = parse_keyed(text);

        assert!(report.missing_answer_key);
        assert!(report.questions.is_empty());
        assert_eq!(report.dropped[0].reason, DropReason::MissingAnswer);
    }

    #[test]
    fn test_unanswered_question_is_dropped() {
        let text = "3. Q3\nA) a\nB) b\n5. Q5\nA) a\nB) b\nANSWERS:\n5. 2";
        let report = parse_keyed(text);
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].number, 5);
        assert_eq!(report.dropped[0].number, 3);
    }

    #[test]
    fn test_marker_inside_question_text_keeps_later_questions() {
        let text = "1. Which heading lists ANSWERS: at the end?\nA) top\nB) bottom\n\
                    2. Next\nA) x\nB) y\nANSWERS:\n1. 2  2. 1\n";
        let report = parse_keyed(text);

        assert!(report.dropped.is_empty());
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].text, "Which heading lists ANSWERS: at the end?");
        assert_eq!(report.questions[0].correct_answer, 1);
        assert_eq!(report.questions[1].number, 2);
        assert_eq!(report.questions[1].correct_answer, 0);
    }

    #[test]
    fn test_key_rows_never_open_blocks() {
        let text = "1. Q\nA) a\nB) b\nANSWERS:\n1.  2  2.  1\nA) stray";
        let report = parse_keyed(text);
        assert_eq!(report.questions.len(), 1);
        assert!(report.dropped.is_empty());
    }
}
