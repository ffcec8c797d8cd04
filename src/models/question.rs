use serde::{Deserialize, Serialize};
use std::fmt;

/// 题目ID
///
/// 带答案表的来源直接使用题号；通用解析的来源使用 `{来源ID}_{题号}`，
/// 保证多个来源合并后仍然唯一。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u32),
    Composite(String),
}

impl QuestionId {
    /// 由来源ID和题号组合生成ID
    pub fn composite(source_id: &str, number: u32) -> Self {
        QuestionId::Composite(format!("{}_{}", source_id, number))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Composite(s) => write!(f, "{}", s),
        }
    }
}

/// 单道选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub number: u32,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    /// 正确选项下标（0-based），始终小于 `options.len()`
    pub correct_answer: usize,
    /// `false` 表示答案未经核实，`correct_answer` 只是默认值 0
    pub answer_verified: bool,
}
