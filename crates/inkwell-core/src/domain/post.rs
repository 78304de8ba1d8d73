use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

pub const POST_TITLE_MAX_LEN: usize = 100;

/// Post entity - a blog article with optional editorial links to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub overview: String,
    /// Rich text, stored and returned untouched.
    pub content: String,
    pub thumbnail: Option<String>,
    pub featured: bool,
    pub previous_post_id: Option<Uuid>,
    pub next_post_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, unlinked and unfeatured post.
    pub fn new(author_id: Uuid, draft: &NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: draft.title.clone(),
            overview: draft.overview.clone(),
            content: draft.content.clone(),
            thumbnail: draft.thumbnail.clone(),
            featured: false,
            previous_post_id: None,
            next_post_id: None,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable text fields. `created_at` is never touched.
    pub fn apply(&mut self, changes: &PostChanges) {
        self.title = changes.title.clone();
        self.overview = changes.overview.clone();
        self.content = changes.content.clone();
    }
}

/// Input for creating a post. `categories` holds category titles.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub overview: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub categories: Vec<String>,
}

/// Input for updating a post. The category selection replaces the old one.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub overview: String,
    pub content: String,
    pub categories: Vec<String>,
}

/// Operator-only fields: featured flag and the previous/next links.
#[derive(Debug, Clone, Default)]
pub struct EditorialChanges {
    pub featured: bool,
    pub previous_post: Option<Uuid>,
    pub next_post: Option<Uuid>,
}

/// Which posts `list_posts` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    /// Posts written by the author profile of this user.
    ByAuthor(Uuid),
    Featured,
}

/// Check the fields shared by create and update, returning the category
/// titles with duplicates removed (first occurrence wins).
pub fn validate_post_fields(title: &str, categories: &[String]) -> Result<Vec<String>, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title is required"));
    }
    if title.chars().count() > POST_TITLE_MAX_LEN {
        return Err(DomainError::validation(format!(
            "title must be at most {POST_TITLE_MAX_LEN} characters"
        )));
    }
    if categories.is_empty() {
        return Err(DomainError::validation("must select at least one category"));
    }

    let mut titles: Vec<String> = Vec::with_capacity(categories.len());
    for title in categories {
        if !titles.contains(title) {
            titles.push(title.clone());
        }
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = validate_post_fields("Hello", &[]).unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(msg) if msg == "must select at least one category")
        );
    }

    #[test]
    fn test_title_bounds() {
        assert!(validate_post_fields("  ", &cats(&["Tech"])).is_err());
        assert!(validate_post_fields(&"x".repeat(100), &cats(&["Tech"])).is_ok());
        assert!(validate_post_fields(&"x".repeat(101), &cats(&["Tech"])).is_err());
    }

    #[test]
    fn test_duplicate_titles_collapsed() {
        let titles = validate_post_fields("Hello", &cats(&["Tech", "Rust", "Tech"])).unwrap();
        assert_eq!(titles, cats(&["Tech", "Rust"]));
    }

    #[test]
    fn test_apply_keeps_timestamp_and_links() {
        let draft = NewPost {
            title: "Old".into(),
            overview: "o".into(),
            content: "c".into(),
            thumbnail: Some("thumb.png".into()),
            categories: cats(&["Tech"]),
        };
        let mut post = Post::new(Uuid::new_v4(), &draft);
        post.next_post_id = Some(Uuid::new_v4());
        let before = post.clone();

        post.apply(&PostChanges {
            title: "New".into(),
            overview: "o2".into(),
            content: "c2".into(),
            categories: cats(&["Rust"]),
        });

        assert_eq!(post.title, "New");
        assert_eq!(post.created_at, before.created_at);
        assert_eq!(post.next_post_id, before.next_post_id);
        assert_eq!(post.thumbnail, before.thumbnail);
    }
}
