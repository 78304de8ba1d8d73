use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Category, Comment, Post, PostFilter, PostView, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// All categories ordered by title.
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    /// Exact, case-sensitive title match.
    async fn find_by_title(&self, title: &str) -> Result<Option<Category>, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Author>, RepoError>;

    /// Insert `author` unless its user already has one, then return the stored
    /// row. Backed by a uniqueness constraint on the user column.
    async fn get_or_create(&self, author: Author) -> Result<Author, RepoError>;
}

/// Post repository. Multi-table writes are atomic.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Insert a post together with its category associations.
    async fn create(&self, post: Post, category_ids: &[Uuid]) -> Result<Post, RepoError>;

    /// Overwrite a post's columns. When `category_ids` is given the post's
    /// category set is replaced by exactly those ids.
    async fn update(&self, post: Post, category_ids: Option<&[Uuid]>) -> Result<Post, RepoError>;

    /// Delete a post with its comments, views and category associations, and
    /// clear links other posts hold to it. `RepoError::NotFound` if absent.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Categories attached to a post, ordered by title.
    async fn categories(&self, post_id: Uuid) -> Result<Vec<Category>, RepoError>;
}

/// Comment repository. Comments are insert-only.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError>;

    /// Comments on a post, newest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError>;
}

/// Post view ledger. At most one row per (user, post).
#[async_trait]
pub trait PostViewRepository: Send + Sync {
    /// Insert `view` unless the pair is already recorded, then return the
    /// stored row.
    async fn get_or_create(&self, view: PostView) -> Result<PostView, RepoError>;

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError>;

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PostView>, RepoError>;
}
