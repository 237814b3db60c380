use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Values for a category insert
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub kind: String,
}
