use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of attachment a post can carry. Stored as its lowercase string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Gif,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
            MediaType::Gif => "gif",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// A directed follow edge: `user_from` follows `user_to`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Follower {
    pub id: i64,
    pub user_from_id: i64,
    pub user_to_id: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    // Column name kept from the original schema; this is the owning user.
    pub user_to_id: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Media {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}
