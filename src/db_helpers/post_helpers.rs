use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::{CreatePostRequest, PostDetailResponse},
    errors::StoreError,
    models::Post,
};

use super::{get_comments_for_post, get_media_for_post, get_post_by_id};

/// Inserts the post and any attached media in one transaction.
pub async fn create_post_in_db(
    pool: &SqlitePool,
    user_id: i64,
    CreatePostRequest { media }: CreatePostRequest,
) -> Result<Post, StoreError> {
    let mut tx = pool.begin().await?;

    let post = sqlx::query_as::<Sqlite, Post>(
        r#"
        INSERT INTO posts (user_to_id)
        VALUES ($1)
        RETURNING id, user_to_id
        "#,
    )
    .bind(user_id)
    .fetch_one(&mut tx)
    .await?;

    if let Some(media) = media {
        for item in media {
            sqlx::query(
                r#"
                INSERT INTO media (type, url, post_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(item.media_type)
            .bind(&item.url)
            .bind(post.id)
            .execute(&mut tx)
            .await?;
        }
    }
    tx.commit().await?;

    Ok(post)
}

pub async fn get_posts_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Post>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Post>(
        r#"
        SELECT id, user_to_id FROM posts WHERE user_to_id = $1 ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

/// Removes the post; its media and comments go with it through the cascading
/// foreign keys.
pub async fn delete_post_in_db(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM posts WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut tx)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("post"));
    }
    tx.commit().await?;
    tracing::debug!(post_id = id, "deleted post and dependent rows");
    Ok(())
}

/// Loads the post together with its media and comment collections.
pub async fn get_post_detail_in_db(
    pool: &SqlitePool,
    id: i64,
) -> Result<PostDetailResponse, StoreError> {
    let post = match get_post_by_id(pool, id).await? {
        Some(post) => post,
        None => return Err(StoreError::NotFound("post")),
    };
    let media = get_media_for_post(pool, post.id).await?;
    let comments = get_comments_for_post(pool, post.id).await?;
    Ok(PostDetailResponse::new(post, media, comments))
}
