mod question_dto;

pub use question_dto::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionDto, DeleteQuestionResponseDto,
    QuestionPageResponseDto, QuestionResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
