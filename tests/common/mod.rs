use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use socialnet::{insert_user, RegisterRequest, User};

/// Fresh in-memory database with the schema applied. A single connection
/// keeps every query on the same in-memory instance.
pub async fn setup_db() -> SqlitePool {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid connection string")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("could not open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");
    pool
}

#[allow(dead_code)]
pub async fn register_test_user(pool: &SqlitePool, username: &str) -> User {
    insert_user(
        pool,
        &RegisterRequest {
            username: username.to_owned(),
            email: format!("{}@example.com", username),
            firstname: "Test".to_owned(),
            lastname: "User".to_owned(),
            is_active: true,
        },
    )
    .await
    .expect("could not insert user")
}
