use sqlx::{Sqlite, SqlitePool};

use crate::{data_formats::CommentRequest, errors::StoreError, models::Comment};

pub async fn add_comment_to_post_in_db(
    pool: &SqlitePool,
    author_id: i64,
    post_id: i64,
    CommentRequest { comment_text }: CommentRequest,
) -> Result<Comment, StoreError> {
    let mut tx = pool.begin().await?;
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (comment_text, author_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, comment_text, author_id, post_id
        "#,
    )
    .bind(comment_text)
    .bind(author_id)
    .bind(post_id)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(comment)
}

pub async fn get_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT id, comment_text, author_id, post_id FROM comments
        WHERE post_id = $1 ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn get_comments_of_user(
    pool: &SqlitePool,
    author_id: i64,
) -> Result<Vec<Comment>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT id, comment_text, author_id, post_id FROM comments
        WHERE author_id = $1 ORDER BY id
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn delete_comment_in_db(
    pool: &SqlitePool,
    author_id: i64,
    comment_id: i64,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM comments WHERE author_id = $1 AND id = $2
        "#,
    )
    .bind(author_id)
    .bind(comment_id)
    .execute(&mut tx)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("comment"));
    }
    tx.commit().await?;
    Ok(())
}
