use sqlx::{Sqlite, SqlitePool};

use crate::{
    errors::StoreError,
    models::{Post, User},
};

mod comment_helpers;
mod follower_helpers;
mod media_helpers;
mod post_helpers;
mod user_helpers;

pub use comment_helpers::*;
pub use follower_helpers::*;
pub use media_helpers::*;
pub use post_helpers::*;
pub use user_helpers::*;

/// Assembles an `UPDATE .. SET` statement from the subset of columns a
/// partial-update request actually carried. Parameters are numbered in the
/// order they are pushed and must be bound in the same order.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
}

impl QueryBuilder {
    fn new(table: &str) -> Self {
        Self {
            query: format!("UPDATE {} SET ", table),
            params: Vec::new(),
        }
    }

    fn set(mut self, column: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            if !self.params.is_empty() {
                self.query.push_str(", ");
            }
            self.query.push_str(column);
            self.query.push_str(&format!(" = ${}", self.params.len() + 1));
            self.params.push(value);
        }
        self
    }

    /// Returns `None` when no column was set, so callers can skip the
    /// statement entirely.
    fn build(mut self, id: i64) -> Option<(String, Vec<String>)> {
        if self.params.is_empty() {
            return None;
        }
        self.query
            .push_str(&format!(" WHERE id = ${}", self.params.len() + 1));
        self.params.push(id.to_string());
        Some((self.query, self.params))
    }
}

// ----------------- Shared Getters -----------------

pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, StoreError> {
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT id, username, email, firstname, lastname, is_active, created_at
        FROM users WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, StoreError> {
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT id, username, email, firstname, lastname, is_active, created_at
        FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, StoreError> {
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT id, username, email, firstname, lastname, is_active, created_at
        FROM users WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Post>(
        r#"
        SELECT id, user_to_id FROM posts WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}
