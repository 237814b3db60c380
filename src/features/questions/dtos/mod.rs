pub mod question_dto;

pub use question_dto::{
    QuestionCreatedDto, QuestionFieldsDto, QuestionListDto, QuestionRequestDto,
    QuestionResponseDto, QuestionSearchDto,
};
