use serde::{Deserialize, Serialize};
use std::fmt;

/// 来源文本使用的解析策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserStrategy {
    /// 文末带答案表，答案以答案表为准
    Keyed,
    /// 无答案表，按结构启发式解析，答案默认为第一个选项
    Generic,
}

impl fmt::Display for ParserStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserStrategy::Keyed => write!(f, "keyed"),
            ParserStrategy::Generic => write!(f, "generic"),
        }
    }
}

/// 一个待处理的来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// 稳定的来源ID，也用于生成通用解析的题目ID
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 提取后的文本路径
    pub path: String,
    pub strategy: ParserStrategy,
}

impl SourceSpec {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        strategy: ParserStrategy,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            strategy,
        }
    }
}
