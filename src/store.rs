use std::future::Future;

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    authentication::UserId,
    domain::{JokeRecord, NewJoke},
};

/// Persistence boundary for jokes. The handlers are generic over it so a
/// test double can stand in for Postgres.
pub trait JokeStore {
    /// Stores a validated joke and returns its id. Called exactly once per
    /// accepted submission.
    fn insert_joke(
        &self,
        joke: &NewJoke,
        jokester_id: UserId,
    ) -> impl Future<Output = Result<Uuid, anyhow::Error>>;

    fn find_joke(
        &self,
        joke_id: Uuid,
    ) -> impl Future<Output = Result<Option<JokeRecord>, anyhow::Error>>;
}

impl JokeStore for PgPool {
    #[tracing::instrument(
        name = "Saving new joke in the database",
        skip(self, joke),
        fields(joke_name = %joke.name.as_ref())
    )]
    async fn insert_joke(&self, joke: &NewJoke, jokester_id: UserId) -> Result<Uuid, anyhow::Error> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO jokes (id, jokester_id, name, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            "#,
        )
        .bind(id)
        .bind(*jokester_id)
        .bind(joke.name.as_ref())
        .bind(joke.content.as_ref())
        .execute(self)
        .await
        .context("Failed to insert a new joke in the database.")?;

        Ok(id)
    }

    #[tracing::instrument(name = "Fetching a joke by id", skip(self))]
    async fn find_joke(&self, joke_id: Uuid) -> Result<Option<JokeRecord>, anyhow::Error> {
        sqlx::query_as::<_, JokeRecord>(
            r#"
            SELECT id, jokester_id, name, content FROM jokes WHERE id = $1
            "#,
        )
        .bind(joke_id)
        .fetch_optional(self)
        .await
        .context("Failed to read a joke from the database.")
    }
}
