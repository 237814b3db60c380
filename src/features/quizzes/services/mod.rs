pub mod quiz_service;
pub mod selector;

pub use quiz_service::QuizService;
pub use selector::QuizCriteria;
