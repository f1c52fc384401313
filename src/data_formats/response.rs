use serde::{Deserialize, Serialize};

use crate::models::{Comment, Follower, Media, MediaType, Post, User};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UserWithCountsResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts_count: usize,
    pub followers_count: usize,
    pub following_count: usize,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct FollowerResponse {
    pub id: i64,
    pub user_from_id: i64,
    pub user_to_id: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub media: Vec<MediaResponse>,
    pub comments_count: usize,
    pub comments: Vec<CommentResponse>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MediaResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub post_id: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommentResponse {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

impl UserResponse {
    pub fn new(
        User {
            id,
            username,
            email,
            firstname,
            lastname,
            is_active,
            created_at,
        }: User,
    ) -> Self {
        UserResponse {
            id,
            email,
            username,
            firstname,
            lastname,
            is_active,
            created_at: created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

impl UserWithCountsResponse {
    /// Counts are taken from the collections handed in, not re-queried.
    pub fn new(user: User, posts: &[Post], followers: &[Follower], following: &[Follower]) -> Self {
        UserWithCountsResponse {
            user: UserResponse::new(user),
            posts_count: posts.len(),
            followers_count: followers.len(),
            following_count: following.len(),
        }
    }
}

impl FollowerResponse {
    pub fn new(
        Follower {
            id,
            user_from_id,
            user_to_id,
        }: Follower,
    ) -> Self {
        FollowerResponse {
            id,
            user_from_id,
            user_to_id,
        }
    }
}

impl PostResponse {
    pub fn new(Post { id, user_to_id }: Post) -> Self {
        PostResponse {
            id,
            user_id: user_to_id,
        }
    }
}

impl PostDetailResponse {
    pub fn new(post: Post, media: Vec<Media>, comments: Vec<Comment>) -> Self {
        let comments_count = comments.len();
        PostDetailResponse {
            post: PostResponse::new(post),
            media: media.into_iter().map(MediaResponse::new).collect(),
            comments_count,
            comments: comments.into_iter().map(CommentResponse::new).collect(),
        }
    }
}

impl MediaResponse {
    pub fn new(
        Media {
            id,
            media_type,
            url,
            post_id,
        }: Media,
    ) -> Self {
        MediaResponse {
            id,
            media_type,
            url,
            post_id,
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            id,
            comment_text,
            author_id,
            post_id,
        }: Comment,
    ) -> Self {
        CommentResponse {
            id,
            comment_text,
            author_id,
            post_id,
        }
    }
}
