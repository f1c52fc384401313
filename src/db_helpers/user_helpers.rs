use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::{RegisterRequest, UpdateUserRequest, UserWithCountsResponse},
    errors::StoreError,
    models::User,
};

use super::{
    get_followers_of_user, get_following_of_user, get_posts_for_user, get_user_by_id, QueryBuilder,
};

pub async fn insert_user(pool: &SqlitePool, user: &RegisterRequest) -> Result<User, StoreError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, User>(
        r#"
        INSERT INTO users (username, email, firstname, lastname, is_active)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, email, firstname, lastname, is_active, created_at
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.firstname)
    .bind(&user.lastname)
    .bind(user.is_active)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, StoreError> {
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT id, username, email, firstname, lastname, is_active, created_at
        FROM users ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn update_user_in_db(
    pool: &SqlitePool,
    id: i64,
    UpdateUserRequest {
        username,
        email,
        firstname,
        lastname,
        is_active,
    }: UpdateUserRequest,
) -> Result<User, StoreError> {
    let built = QueryBuilder::new("users")
        .set("username", username)
        .set("email", email)
        .set("firstname", firstname)
        .set("lastname", lastname)
        // SQLite coerces "1"/"0" back to an integer in this column
        .set(
            "is_active",
            is_active.map(|active| String::from(if active { "1" } else { "0" })),
        )
        .build(id);

    if let Some((query, params)) = built {
        let mut tx = pool.begin().await?;
        let mut query = sqlx::query(&query);
        for param in params {
            query = query.bind(param);
        }
        query.execute(&mut tx).await?;
        tx.commit().await?;
    }

    match get_user_by_id(pool, id).await? {
        Some(user) => Ok(user),
        None => Err(StoreError::NotFound("user")),
    }
}

/// Removes the user row; posts, comments and follow edges hanging off it go
/// with it through the cascading foreign keys.
pub async fn delete_user_in_db(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM users WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut tx)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("user"));
    }
    tx.commit().await?;
    tracing::debug!(user_id = id, "deleted user and dependent rows");
    Ok(())
}

/// Loads the user's related collections and counts them in memory.
pub async fn get_user_with_counts(
    pool: &SqlitePool,
    id: i64,
) -> Result<UserWithCountsResponse, StoreError> {
    let user = match get_user_by_id(pool, id).await? {
        Some(user) => user,
        None => return Err(StoreError::NotFound("user")),
    };
    let posts = get_posts_for_user(pool, user.id).await?;
    let followers = get_followers_of_user(pool, user.id).await?;
    let following = get_following_of_user(pool, user.id).await?;
    Ok(UserWithCountsResponse::new(
        user, &posts, &followers, &following,
    ))
}
