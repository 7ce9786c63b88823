/// Number of questions on one page of `GET /questions`
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `quiz_category.id` meaning "draw from every category"
pub const ALL_CATEGORIES_ID: i32 = 0;
