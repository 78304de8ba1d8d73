//! Author directory: one authoring profile per identity.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Author;
use crate::error::DomainError;
use crate::ports::AuthorRepository;

#[derive(Clone)]
pub struct AuthorDirectory {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorDirectory {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Return the author profile for `user_id`, creating an empty one on first
    /// use. Safe under concurrent calls for the same user.
    pub async fn resolve_or_create(&self, user_id: Uuid) -> Result<Author, DomainError> {
        if let Some(author) = self.find(user_id).await? {
            return Ok(author);
        }

        let author = self.authors.get_or_create(Author::new(user_id)).await?;
        tracing::debug!(%user_id, author_id = %author.id, "Resolved author profile");
        Ok(author)
    }

    /// The author profile of `user_id`, if one was ever created.
    pub async fn find(&self, user_id: Uuid) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_user(user_id).await?)
    }
}
