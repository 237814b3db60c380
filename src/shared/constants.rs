/// Number of questions per page on the question list
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id sent by the quiz screen for "all categories"
pub const ALL_CATEGORIES_ID: &str = "0";
