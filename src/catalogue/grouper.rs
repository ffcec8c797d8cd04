use crate::error::{AppError, AppResult};
use crate::models::{Exercise, Question};

/// 默认每个练习的题目数
pub const DEFAULT_GROUP_SIZE: usize = 25;

/// 把有序题目列表按固定大小切分为练习
///
/// 练习ID从 1 开始连续编号，只有最后一个练习可能不足 `group_size`。
pub fn group_into_exercises(questions: &[Question], group_size: usize) -> AppResult<Vec<Exercise>> {
    if group_size == 0 {
        return Err(AppError::InvalidGroupSize(group_size));
    }

    Ok(questions
        .chunks(group_size)
        .enumerate()
        .map(|(i, chunk)| Exercise::new(i + 1, chunk.to_vec()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    fn questions(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|i| Question {
                id: QuestionId::Number(i),
                number: i,
                text: format!("Q{}", i),
                options: vec!["a".into(), "b".into()],
                correct_answer: 0,
                answer_verified: true,
            })
            .collect()
    }

    #[test]
    fn test_47_questions_make_two_exercises() {
        let exercises = group_into_exercises(&questions(47), DEFAULT_GROUP_SIZE).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].id, 1);
        assert_eq!(exercises[0].total_questions, 25);
        assert_eq!(exercises[1].id, 2);
        assert_eq!(exercises[1].name, "Exercise 2");
        assert_eq!(exercises[1].total_questions, 22);
        assert_eq!(exercises[1].questions[0].number, 26);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_into_exercises(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn test_zero_group_size_is_rejected() {
        let err = group_into_exercises(&questions(3), 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidGroupSize(0)));
    }
}
