//! 行分类器
//!
//! 把一行提取文本归类为题干起始、选项、答案表条目或其他。
//! 两种语法：严格（带答案表的来源）和宽松（通用来源）。

use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;

/// 选项标签 -> 0-based 序号
static OPTION_ORDINALS: phf::Map<char, usize> = phf_map! {
    'A' => 0, 'B' => 1, 'C' => 2, 'D' => 3,
    'a' => 0, 'b' => 1, 'c' => 2, 'd' => 3,
    '1' => 0, '2' => 1, '3' => 2, '4' => 3,
};

static STRICT_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("valid regex"));
static STRICT_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])\)\s+(.+)$").expect("valid regex"));
static LOOSE_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[.)]\s+(.+)$").expect("valid regex"));
static LOOSE_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Da-d1-4])[.)]\s+(.+)$").expect("valid regex"));
static KEY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.\s+(\d+)").expect("valid regex"));
static ANSWER_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*ANSWERS:[ \t]*\r?$").expect("valid regex"));

/// 一行文本的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    QuestionStart { number: u32, text: String },
    Option { label: char, text: String },
    AnswerKeyEntry { number: u32, answer: u32 },
    Other,
}

/// 题干/选项的识别语法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `12. 题干` / `A) 选项`
    Strict,
    /// `12. 题干` 或 `12) 题干`；选项 `A-D`、`a-d`、`1-4` 后跟 `.` 或 `)`
    Loose,
}

impl Grammar {
    /// 分类题目正文中的一行
    ///
    /// 同时满足题干和选项格式的行（如宽松语法下的 `2) ...`）按题干处理，
    /// 因此宽松语法里的数字标签 `1`-`4` 实际上永远不会成为选项。
    pub fn classify(self, line: &str) -> LineKind {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Other;
        }

        let (question, option) = match self {
            Grammar::Strict => (&*STRICT_QUESTION, &*STRICT_OPTION),
            Grammar::Loose => (&*LOOSE_QUESTION, &*LOOSE_OPTION),
        };

        if let Some(caps) = question.captures(line) {
            // 题号溢出 u32 的行不视为题干
            if let Ok(number) = caps[1].parse::<u32>() {
                return LineKind::QuestionStart {
                    number,
                    text: caps[2].trim().to_string(),
                };
            }
        }

        if let Some(caps) = option.captures(line) {
            if let Some(label) = caps[1].chars().next() {
                return LineKind::Option {
                    label,
                    text: caps[2].trim().to_string(),
                };
            }
        }

        LineKind::Other
    }
}

/// 提取答案表中一行的所有 `题号. 答案` 条目
///
/// 一行可以包含多对，中间的空白数量不限。
pub fn key_entries(line: &str) -> impl Iterator<Item = LineKind> + '_ {
    KEY_PAIR.captures_iter(line).filter_map(|caps| {
        let number = caps[1].parse::<u32>().ok()?;
        let answer = caps[2].parse::<u32>().ok()?;
        Some(LineKind::AnswerKeyEntry { number, answer })
    })
}

/// 查找单独成行的答案表标记，返回 (标记行起始, 标记行结束) 的字节位置
///
/// 题干或选项中顺带出现的 `ANSWERS:` 不算。
pub fn find_answer_marker(text: &str) -> Option<(usize, usize)> {
    ANSWER_SECTION.find(text).map(|m| (m.start(), m.end()))
}

/// 选项标签对应的 0-based 序号
pub fn option_ordinal(label: char) -> Option<usize> {
    OPTION_ORDINALS.get(&label).copied()
}
