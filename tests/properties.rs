//! 解析与分组的性质测试

use exam_catalogue::parser::{parse_blocks, BlockRules};
use exam_catalogue::{extract_answer_key, group_into_exercises, parse_generic, AnswerKey};
use exam_catalogue::{Question, QuestionId};
use proptest::prelude::*;
use std::collections::HashMap;

/// 生成一行任意的题目文本（题干、选项或噪声）
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..40, "[a-zA-Z ?]{1,20}").prop_map(|(n, t)| format!("{}. {}", n, t)),
        (1u32..40, "[a-zA-Z ?]{1,20}").prop_map(|(n, t)| format!("{}) {}", n, t)),
        ("[A-Da-d1-4]", "[.)]", "[a-zA-Z0-9]{1,10}")
            .prop_map(|(l, d, t)| format!("{}{} {}", l, d, t)),
        "[a-zA-Z =]{0,30}",
    ]
}

fn question(n: u32) -> Question {
    Question {
        id: QuestionId::Number(n),
        number: n,
        text: format!("Q{}", n),
        options: vec!["a".into(), "b".into()],
        correct_answer: 0,
        answer_verified: true,
    }
}

proptest! {
    #[test]
    fn answer_key_keeps_last_occurrence(pairs in prop::collection::vec((1u32..30, 1u32..5), 0..40)) {
        let mut table = String::from("ANSWERS:\n");
        for chunk in pairs.chunks(3) {
            let row: Vec<_> = chunk.iter().map(|(n, a)| format!("{}.  {}", n, a)).collect();
            table.push_str(&row.join("   "));
            table.push('\n');
        }

        let mut expected = HashMap::new();
        for (n, a) in &pairs {
            expected.insert(*n, *a);
        }

        let key = extract_answer_key(&table).unwrap();
        prop_assert_eq!(key.len(), expected.len());
        for (n, a) in expected {
            prop_assert_eq!(key.get(n), Some(a));
        }
    }

    #[test]
    fn keyed_questions_respect_key(
        lines in prop::collection::vec(line_strategy(), 0..60),
        pairs in prop::collection::vec((1u32..40, 0u32..6), 0..40),
    ) {
        let key: AnswerKey = pairs.into_iter().collect();
        let text = lines.join("\n");
        let report = parse_blocks(text.lines(), BlockRules::Keyed(&key));
        for q in &report.questions {
            prop_assert!(key.contains(q.number));
            prop_assert!(q.correct_answer < q.options.len());
            prop_assert!(q.answer_verified);
        }
    }

    #[test]
    fn generic_questions_have_four_options(lines in prop::collection::vec(line_strategy(), 0..60)) {
        let report = parse_generic(&lines.join("\n"), "src");
        for q in &report.questions {
            prop_assert_eq!(q.options.len(), 4);
            prop_assert_eq!(q.correct_answer, 0);
            prop_assert!(!q.answer_verified);
            prop_assert_eq!(&q.id, &QuestionId::composite("src", q.number));
        }
    }

    #[test]
    fn grouping_is_a_lossless_partition(len in 0u32..200, size in 1usize..40) {
        let questions: Vec<_> = (1..=len).map(question).collect();
        let exercises = group_into_exercises(&questions, size).unwrap();

        prop_assert_eq!(exercises.len(), questions.len().div_ceil(size));
        for (i, ex) in exercises.iter().enumerate() {
            prop_assert_eq!(ex.id, i + 1);
            prop_assert_eq!(ex.total_questions, ex.questions.len());
            if i + 1 < exercises.len() {
                prop_assert_eq!(ex.questions.len(), size);
            }
        }
        let flat: Vec<_> = exercises.into_iter().flat_map(|e| e.questions).collect();
        prop_assert_eq!(flat, questions);
    }
}
