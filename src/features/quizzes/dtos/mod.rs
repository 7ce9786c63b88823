mod quiz_dto;

pub use quiz_dto::{QuizCategoryDto, QuizQuestionDto, QuizRequestDto, QuizResponseDto};
