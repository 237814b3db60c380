pub mod category_dto;

pub use category_dto::{
    CategoryCreatedDto, CategoryListDto, CategoryQuestionsDto, CategoryResponseDto,
    CreateCategoryDto,
};
