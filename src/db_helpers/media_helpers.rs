use sqlx::{Sqlite, SqlitePool};

use crate::{data_formats::MediaRequest, errors::StoreError, models::Media};

pub async fn add_media_to_post_in_db(
    pool: &SqlitePool,
    post_id: i64,
    MediaRequest { media_type, url }: MediaRequest,
) -> Result<Media, StoreError> {
    let mut tx = pool.begin().await?;
    let media = sqlx::query_as::<Sqlite, Media>(
        r#"
        INSERT INTO media (type, url, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, type, url, post_id
        "#,
    )
    .bind(media_type)
    .bind(url)
    .bind(post_id)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(media)
}

pub async fn get_media_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<Media>, StoreError> {
    let result = sqlx::query_as::<Sqlite, Media>(
        r#"
        SELECT id, type, url, post_id FROM media WHERE post_id = $1 ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn delete_media_in_db(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM media WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut tx)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("media"));
    }
    tx.commit().await?;
    Ok(())
}
