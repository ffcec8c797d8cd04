use std::collections::BTreeMap;

/// 答案表：题号 -> 选项序号（1-based）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    entries: BTreeMap<u32, u32>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条答案，同一题号后出现的覆盖先出现的
    pub fn insert(&mut self, number: u32, answer: u32) {
        self.entries.insert(number, answer);
    }

    pub fn get(&self, number: u32) -> Option<u32> {
        self.entries.get(&number).copied()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.entries.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, u32)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut key = AnswerKey::new();
        for (number, answer) in iter {
            key.insert(number, answer);
        }
        key
    }
}
