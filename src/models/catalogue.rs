use super::question::Question;
use serde::{Deserialize, Serialize};

/// 练习：一组连续的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: usize,
    pub name: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl Exercise {
    /// 由序号和题目切片构建练习，名称和题目数由此推导
    pub fn new(id: usize, questions: Vec<Question>) -> Self {
        Self {
            id,
            name: format!("Exercise {}", id),
            total_questions: questions.len(),
            questions,
        }
    }
}

/// 单个来源文件的输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl SourceFile {
    pub fn question_count(&self) -> usize {
        self.exercises.iter().map(|e| e.total_questions).sum()
    }
}

/// 最终输出的题库目录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub files: Vec<SourceFile>,
}
