//! Response shapes assembled from the entity graph.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Category, PostView, UserSummary};

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDetail {
    pub id: Uuid,
    pub user: UserSummary,
    pub profile_image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDetail {
    pub id: Uuid,
    pub user: UserSummary,
    pub timestamp: DateTime<Utc>,
    pub content: String,
}

/// A post with its author, categories, comments, counters and linked posts.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub overview: String,
    pub timestamp: DateTime<Utc>,
    pub author: AuthorDetail,
    pub thumbnail: Option<String>,
    pub categories: Vec<Category>,
    pub featured: bool,
    pub content: String,
    pub previous_post: Option<Box<PostDetail>>,
    pub next_post: Option<Box<PostDetail>>,
    pub comments: Vec<CommentDetail>,
    pub view_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user: UserSummary,
    pub my_posts: Vec<PostDetail>,
    pub reading_list: Vec<PostView>,
}
