//! Post store: create, edit, delete and read posts.
//!
//! Any authenticated caller may edit or delete any post; there is no
//! ownership check.

use std::sync::Arc;

use uuid::Uuid;

use super::{AuthorDirectory, EngagementTracker, Taxonomy};
use crate::caller::Caller;
use crate::domain::{
    Category, EditorialChanges, NewPost, Post, PostChanges, PostFilter, validate_post_fields,
};
use crate::error::{DomainError, RepoError};
use crate::links::{self, LinkDirection};
use crate::ports::PostRepository;

#[derive(Clone)]
pub struct PostStore {
    posts: Arc<dyn PostRepository>,
    engagement: EngagementTracker,
    authors: AuthorDirectory,
    taxonomy: Taxonomy,
}

impl PostStore {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        engagement: EngagementTracker,
        authors: AuthorDirectory,
        taxonomy: Taxonomy,
    ) -> Self {
        Self {
            posts,
            engagement,
            authors,
            taxonomy,
        }
    }

    pub async fn create_post(&self, caller: Caller, draft: NewPost) -> Result<Post, DomainError> {
        let user_id = caller.require()?;
        let titles = validate_post_fields(&draft.title, &draft.categories)?;
        let categories = self.taxonomy.resolve_all(&titles).await?;
        let author = self.authors.resolve_or_create(user_id).await?;

        let post = Post::new(author.id, &draft);
        let saved = self.posts.create(post, &category_ids(&categories)).await?;

        tracing::info!(post_id = %saved.id, author_id = %author.id, "Post created");
        Ok(saved)
    }

    pub async fn update_post(
        &self,
        post_id: Uuid,
        caller: Caller,
        changes: PostChanges,
    ) -> Result<Post, DomainError> {
        let editor = caller.require()?;
        let titles = validate_post_fields(&changes.title, &changes.categories)?;
        let mut post = self.find(post_id).await?;
        let categories = self.taxonomy.resolve_all(&titles).await?;

        post.apply(&changes);
        let ids = category_ids(&categories);
        let saved = self.posts.update(post, Some(ids.as_slice())).await?;

        tracing::info!(%post_id, %editor, "Post updated");
        Ok(saved)
    }

    pub async fn delete_post(&self, post_id: Uuid, caller: Caller) -> Result<(), DomainError> {
        let editor = caller.require()?;
        match self.posts.delete(post_id).await {
            Ok(()) => {
                tracing::info!(%post_id, %editor, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::not_found("Post", post_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a post. An authenticated read also marks the post as read by the
    /// caller (at most once per user).
    pub async fn get_post(&self, post_id: Uuid, caller: Caller) -> Result<Post, DomainError> {
        let post = self.find(post_id).await?;
        if let Some(user_id) = caller.user_id() {
            self.engagement.record_view(post.id, user_id).await?;
        }
        Ok(post)
    }

    pub async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list(filter).await?)
    }

    pub async fn categories_of(&self, post_id: Uuid) -> Result<Vec<Category>, DomainError> {
        Ok(self.posts.categories(post_id).await?)
    }

    /// Set the featured flag and the previous/next links of a post.
    ///
    /// Linked posts must exist, a post cannot link to itself, and no change may
    /// close a loop in either direction.
    pub async fn set_editorial(
        &self,
        post_id: Uuid,
        changes: EditorialChanges,
    ) -> Result<Post, DomainError> {
        let mut post = self.find(post_id).await?;

        for target in [changes.previous_post, changes.next_post].into_iter().flatten() {
            if target == post_id {
                return Err(DomainError::validation("a post cannot link to itself"));
            }
            self.find(target).await?;
        }

        post.featured = changes.featured;
        post.previous_post_id = changes.previous_post;
        post.next_post_id = changes.next_post;

        let mut all = self.posts.list(PostFilter::All).await?;
        all.retain(|p| p.id != post_id);
        all.push(post.clone());
        for direction in [LinkDirection::Previous, LinkDirection::Next] {
            let graph = links::link_map(&all, direction);
            if links::find_cycle(&graph, post_id).is_some() {
                return Err(DomainError::validation(format!(
                    "linking would create a {} cycle",
                    match direction {
                        LinkDirection::Previous => "previous-post",
                        LinkDirection::Next => "next-post",
                    }
                )));
            }
        }

        let saved = self.posts.update(post, None).await?;
        tracing::info!(
            %post_id,
            featured = saved.featured,
            previous = ?saved.previous_post_id,
            next = ?saved.next_post_id,
            "Editorial fields updated"
        );
        Ok(saved)
    }

    /// Fetch a post without side effects.
    pub async fn find(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", post_id))
    }
}

fn category_ids(categories: &[Category]) -> Vec<Uuid> {
    categories.iter().map(|c| c.id).collect()
}
