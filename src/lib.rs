//! # Exam Catalogue
//!
//! 把从 PDF 提取出的试卷文本解析为选择题，按固定大小分组为练习，输出 JSON 题库目录
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - Question / Exercise / SourceFile / Catalogue / AnswerKey
//! - `models/loaders` - 读取来源文本和来源列表（TOML）
//!
//! ### ② 解析层（Parser）
//! - `parser/line` - 行分类：题干、选项、答案表条目、其他
//! - `parser/answer_key` - 文末答案表提取
//! - `parser/block` - 题目块状态机，`BlockRules` 区分带答案表和通用解析
//!
//! ### ③ 目录层（Catalogue）
//! - `catalogue/grouper` - 题目按固定大小分组为练习
//! - `catalogue/assembler` - 各来源合并为目录
//!
//! ### ④ 能力层与编排层
//! - `services/` - 写 questions.json、写 warn.txt
//! - `orchestrator/` - 按配置顺序处理来源并汇总统计
//!
//! 通用解析的题目没有真实答案：`correctAnswer` 固定为 0，`answerVerified` 为 false。

pub mod catalogue;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use catalogue::{assemble_catalogue, group_into_exercises, CatalogueAssembler};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, Catalogue, Exercise, Question, QuestionId, SourceFile, SourceSpec};
pub use orchestrator::{App, RunSummary};
pub use parser::{extract_answer_key, parse_generic, parse_keyed, ParseReport};
