use uuid::Uuid;

/// A joke as stored in the `jokes` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct JokeRecord {
    pub id: Uuid,
    pub jokester_id: Uuid,
    pub name: String,
    pub content: String,
}
