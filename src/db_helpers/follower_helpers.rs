use sqlx::{Sqlite, SqlitePool};

use crate::{errors::StoreError, models::Follower};

pub async fn follow_user_in_db(
    pool: &SqlitePool,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<Follower, StoreError> {
    let mut tx = pool.begin().await?;
    let edge = sqlx::query_as::<Sqlite, Follower>(
        r#"
        INSERT INTO followers (user_from_id, user_to_id)
        VALUES ($1, $2)
        RETURNING id, user_from_id, user_to_id
        "#,
    )
    .bind(user_from_id)
    .bind(user_to_id)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(edge)
}

/// Removes every edge between the pair; the schema allows duplicates.
pub async fn unfollow_user_in_db(
    pool: &SqlitePool,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM followers WHERE user_from_id = $1 AND user_to_id = $2
        "#,
    )
    .bind(user_from_id)
    .bind(user_to_id)
    .execute(&mut tx)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("follow edge"));
    }
    tx.commit().await?;
    Ok(())
}

/// Edges where the given user is followed.
pub async fn get_followers_of_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Follower>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Follower>(
        r#"
        SELECT id, user_from_id, user_to_id FROM followers
        WHERE user_to_id = $1 ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

/// Edges where the given user is the follower.
pub async fn get_following_of_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Follower>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Follower>(
        r#"
        SELECT id, user_from_id, user_to_id FROM followers
        WHERE user_from_id = $1 ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn is_following(
    pool: &SqlitePool,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<bool, StoreError> {
    let result = sqlx::query(
        r#"
        SELECT id FROM followers WHERE user_from_id = $1 AND user_to_id = $2
        "#,
    )
    .bind(user_from_id)
    .bind(user_to_id)
    .fetch_optional(pool)
    .await?;
    Ok(result.is_some())
}
