//! Engagement tracker: comments and the per-user "has read" ledger.

use std::sync::Arc;

use uuid::Uuid;

use crate::caller::Caller;
use crate::domain::{Comment, PostView};
use crate::error::{DomainError, RepoError};
use crate::ports::{CommentRepository, PostRepository, PostViewRepository};

#[derive(Clone)]
pub struct EngagementTracker {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    views: Arc<dyn PostViewRepository>,
}

impl EngagementTracker {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        views: Arc<dyn PostViewRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            views,
        }
    }

    pub async fn add_comment(
        &self,
        post_id: Uuid,
        caller: Caller,
        content: String,
    ) -> Result<Comment, DomainError> {
        let user_id = caller.require()?;
        if content.trim().is_empty() {
            return Err(DomainError::validation("Invalid comment received."));
        }
        self.ensure_post(post_id).await?;

        let comment = self
            .comments
            .insert(Comment::new(post_id, user_id, content))
            .await
            .map_err(|e| post_gone(e, post_id))?;
        tracing::info!(%post_id, %user_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    /// Mark `post_id` as read by `viewer`. Repeated calls are no-ops.
    pub async fn record_view(&self, post_id: Uuid, viewer: Uuid) -> Result<PostView, DomainError> {
        self.ensure_post(post_id).await?;
        self.views
            .get_or_create(PostView::new(viewer, post_id))
            .await
            .map_err(|e| post_gone(e, post_id))
    }

    /// Everything the caller has read. Anonymous callers have an empty list.
    pub async fn reading_list(&self, caller: Caller) -> Result<Vec<PostView>, DomainError> {
        match caller.user_id() {
            Some(user_id) => Ok(self.views.list_for_user(user_id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Comments on a post, newest first.
    pub async fn comments_for(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.ensure_post(post_id).await?;
        Ok(self.comments.list_for_post(post_id).await?)
    }

    pub async fn view_count(&self, post_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.views.count_for_post(post_id).await?)
    }

    pub async fn comment_count(&self, post_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.comments.count_for_post(post_id).await?)
    }

    async fn ensure_post(&self, post_id: Uuid) -> Result<(), DomainError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Post", post_id)),
        }
    }
}

/// A post deleted between the existence check and the write.
fn post_gone(err: RepoError, post_id: Uuid) -> DomainError {
    match err {
        RepoError::MissingReference(_) => DomainError::not_found("Post", post_id),
        other => other.into(),
    }
}
