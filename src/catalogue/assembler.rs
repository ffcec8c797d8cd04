use crate::models::{Catalogue, Exercise, SourceFile};
use tracing::warn;

/// 按调用方顺序收集各来源的练习，生成最终目录
///
/// 没有任何练习的来源会被跳过并记录在 `skipped` 中。
#[derive(Debug, Default)]
pub struct CatalogueAssembler {
    files: Vec<SourceFile>,
    skipped: Vec<String>,
}

impl CatalogueAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一个来源；返回是否被收录
    pub fn push(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> bool {
        let id = id.into();
        if exercises.is_empty() {
            warn!("⚠️ 来源 {} 没有解析出任何题目，已跳过", id);
            self.skipped.push(id);
            return false;
        }

        self.files.push(SourceFile {
            id,
            name: name.into(),
            exercises,
        });
        true
    }

    /// 被跳过的来源ID
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn finish(self) -> Catalogue {
        Catalogue { files: self.files }
    }
}

/// 一次性组装：输入为 (来源ID, 显示名称, 练习列表)
pub fn assemble_catalogue<I>(entries: I) -> Catalogue
where
    I: IntoIterator<Item = (String, String, Vec<Exercise>)>,
{
    let mut assembler = CatalogueAssembler::new();
    for (id, name, exercises) in entries {
        assembler.push(id, name, exercises);
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sources_are_skipped_and_order_kept() {
        let ex = |id| Exercise::new(id, Vec::new());
        let catalogue = assemble_catalogue(vec![
            ("b".to_string(), "B".to_string(), vec![ex(1)]),
            ("empty".to_string(), "Empty".to_string(), vec![]),
            ("a".to_string(), "A".to_string(), vec![ex(1), ex(2)]),
        ]);

        let ids: Vec<_> = catalogue.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalogue.files[1].exercises.len(), 2);
    }

    #[test]
    fn test_skipped_sources_are_recorded() {
        let mut assembler = CatalogueAssembler::new();
        assert!(!assembler.push("general", "General", Vec::new()));
        assert_eq!(assembler.skipped(), ["general".to_string()]);
        assert!(assembler.finish().files.is_empty());
    }
}
