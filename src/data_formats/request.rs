use serde::{Deserialize, Serialize};

use crate::models::MediaType;

// ----------------- User Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub is_active: Option<bool>,
}

// ----------------- Post Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreatePostRequest {
    pub media: Option<Vec<MediaRequest>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MediaRequest {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentRequest {
    pub comment_text: String,
}
