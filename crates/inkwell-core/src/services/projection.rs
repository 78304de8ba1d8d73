//! Assembles posts into nested response shapes.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    AuthorDetail, CommentDetail, Post, PostDetail, PostFilter, UserProfile, UserSummary,
};
use crate::error::DomainError;
use crate::ports::{
    AuthorRepository, BaseRepository, CommentRepository, PostRepository, PostViewRepository,
    UserRepository,
};

#[derive(Clone)]
pub struct Projector {
    users: Arc<dyn UserRepository>,
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    views: Arc<dyn PostViewRepository>,
}

impl Projector {
    pub fn new(
        users: Arc<dyn UserRepository>,
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        views: Arc<dyn PostViewRepository>,
    ) -> Self {
        Self {
            users,
            authors,
            posts,
            comments,
            views,
        }
    }

    /// Full projection of a post.
    ///
    /// Linked posts are projected the same way, in both directions. A link
    /// back to a post already on the current path renders as `None`, so a
    /// doubly-linked chain terminates.
    pub async fn project(&self, post: Post) -> Result<PostDetail, DomainError> {
        let mut path = Vec::new();
        self.expand(post, &mut path, &mut UserCache::default()).await
    }

    pub async fn project_all(&self, posts: Vec<Post>) -> Result<Vec<PostDetail>, DomainError> {
        let mut details = Vec::with_capacity(posts.len());
        for post in posts {
            details.push(self.project(post).await?);
        }
        Ok(details)
    }

    /// Profile page: the user, their posts and their reading list.
    pub async fn user_profile(&self, user_id: Uuid) -> Result<UserProfile, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        let posts = self.posts.list(PostFilter::ByAuthor(user_id)).await?;
        Ok(UserProfile {
            user: user.summary(),
            my_posts: self.project_all(posts).await?,
            reading_list: self.views.list_for_user(user_id).await?,
        })
    }

    /// Comments on a post with their authors, newest first.
    pub async fn comments(&self, post_id: Uuid) -> Result<Vec<CommentDetail>, DomainError> {
        self.comment_details(post_id, &mut UserCache::default()).await
    }

    async fn comment_details(
        &self,
        post_id: Uuid,
        users: &mut UserCache,
    ) -> Result<Vec<CommentDetail>, DomainError> {
        let comments = self.comments.list_for_post(post_id).await?;
        let mut details = Vec::with_capacity(comments.len());
        for comment in comments {
            details.push(CommentDetail {
                id: comment.id,
                user: users.get(self.users.as_ref(), comment.user_id).await?,
                timestamp: comment.created_at,
                content: comment.content,
            });
        }
        Ok(details)
    }

    fn expand<'a>(
        &'a self,
        post: Post,
        path: &'a mut Vec<Uuid>,
        users: &'a mut UserCache,
    ) -> Pin<Box<dyn Future<Output = Result<PostDetail, DomainError>> + Send + 'a>> {
        Box::pin(async move {
            let (previous, next) = (post.previous_post_id, post.next_post_id);
            path.push(post.id);

            let mut detail = self.detail(post, users).await?;
            detail.previous_post = self.linked(previous, path, users).await?;
            detail.next_post = self.linked(next, path, users).await?;

            path.pop();
            Ok(detail)
        })
    }

    async fn linked(
        &self,
        target: Option<Uuid>,
        path: &mut Vec<Uuid>,
        users: &mut UserCache,
    ) -> Result<Option<Box<PostDetail>>, DomainError> {
        let Some(id) = target else {
            return Ok(None);
        };
        if path.contains(&id) {
            return Ok(None);
        }
        // Links to deleted posts are cleared on delete; a miss here is a race.
        let Some(post) = self.posts.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(Some(Box::new(self.expand(post, path, users).await?)))
    }

    /// Everything but the linked posts.
    async fn detail(&self, post: Post, users: &mut UserCache) -> Result<PostDetail, DomainError> {
        let author = self
            .authors
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("author {} missing", post.author_id)))?;
        let author_user = users.get(self.users.as_ref(), author.user_id).await?;

        let comment_details = self.comment_details(post.id, users).await?;

        Ok(PostDetail {
            id: post.id,
            categories: self.posts.categories(post.id).await?,
            view_count: self.views.count_for_post(post.id).await?,
            comment_count: comment_details.len() as u64,
            title: post.title,
            overview: post.overview,
            timestamp: post.created_at,
            author: AuthorDetail {
                id: author.id,
                user: author_user,
                profile_image: author.profile_image,
            },
            thumbnail: post.thumbnail,
            featured: post.featured,
            content: post.content,
            previous_post: None,
            next_post: None,
            comments: comment_details,
        })
    }
}

/// Per-projection memo of user lookups.
#[derive(Default)]
struct UserCache(HashMap<Uuid, UserSummary>);

impl UserCache {
    async fn get(
        &mut self,
        users: &dyn UserRepository,
        user_id: Uuid,
    ) -> Result<UserSummary, DomainError> {
        if let Some(summary) = self.0.get(&user_id) {
            return Ok(summary.clone());
        }
        let user = users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("user {user_id} missing")))?;
        let summary = user.summary();
        self.0.insert(user_id, summary.clone());
        Ok(summary)
    }
}
