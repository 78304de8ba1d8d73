//! In-memory store - used when no database is configured.
//!
//! Every write runs under a single write guard, so multi-row operations are
//! atomic with respect to other callers. Data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{Author, Category, Comment, Post, PostFilter, PostView, User};
use inkwell_core::error::RepoError;
use inkwell_core::ports::{
    AuthorRepository, BaseRepository, CategoryRepository, CommentRepository, PostRepository,
    PostViewRepository, UserRepository,
};
use inkwell_core::services::Repositories;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    authors: HashMap<Uuid, Author>,
    categories: HashMap<Uuid, Category>,
    posts: HashMap<Uuid, Post>,
    post_categories: HashMap<Uuid, Vec<Uuid>>,
    /// Insertion order.
    comments: Vec<Comment>,
    views: Vec<PostView>,
}

impl Tables {
    fn author_of_user(&self, user_id: Uuid) -> Option<&Author> {
        self.authors.values().find(|a| a.user_id == user_id)
    }

    fn check_categories(&self, category_ids: &[Uuid]) -> Result<(), RepoError> {
        match category_ids
            .iter()
            .find(|id| !self.categories.contains_key(*id))
        {
            Some(id) => Err(RepoError::MissingReference(format!("category {id}"))),
            None => Ok(()),
        }
    }
}

/// All tables behind one async lock.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every repository backed by one shared store.
    pub fn repositories(self: Arc<Self>) -> Repositories {
        Repositories {
            users: self.clone(),
            authors: self.clone(),
            categories: self.clone(),
            posts: self.clone(),
            comments: self.clone(),
            views: self,
        }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint("username already taken".to_string()));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert(&self, category: Category) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.categories.values().any(|c| c.title == category.title) {
            return Err(RepoError::Constraint(format!(
                "category '{}' already exists",
                category.title
            )));
        }
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.categories.remove(&id).ok_or(RepoError::NotFound)?;
        for ids in tables.post_categories.values_mut() {
            ids.retain(|c| *c != id);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let mut categories: Vec<Category> =
            self.tables.read().await.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(categories)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|c| c.title == title)
            .cloned())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.author_of_user(user_id).cloned())
    }

    async fn get_or_create(&self, author: Author) -> Result<Author, RepoError> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.author_of_user(author.user_id) {
            return Ok(existing.clone());
        }
        tables.authors.insert(author.id, author.clone());
        Ok(author)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let tables = self.tables.read().await;
        let author_id = match filter {
            PostFilter::ByAuthor(user_id) => match tables.author_of_user(user_id) {
                Some(author) => Some(author.id),
                None => return Ok(Vec::new()),
            },
            _ => None,
        };

        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| match filter {
                PostFilter::All => true,
                PostFilter::Featured => p.featured,
                PostFilter::ByAuthor(_) => Some(p.author_id) == author_id,
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn create(&self, post: Post, category_ids: &[Uuid]) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.authors.contains_key(&post.author_id) {
            return Err(RepoError::MissingReference(format!(
                "author {}",
                post.author_id
            )));
        }
        tables.check_categories(category_ids)?;

        tables.post_categories.insert(post.id, category_ids.to_vec());
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post, category_ids: Option<&[Uuid]>) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        if let Some(ids) = category_ids {
            tables.check_categories(ids)?;
            tables.post_categories.insert(post.id, ids.to_vec());
        }
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        tables.post_categories.remove(&id);
        tables.comments.retain(|c| c.post_id != id);
        tables.views.retain(|v| v.post_id != id);
        for post in tables.posts.values_mut() {
            if post.previous_post_id == Some(id) {
                post.previous_post_id = None;
            }
            if post.next_post_id == Some(id) {
                post.next_post_id = None;
            }
        }
        Ok(())
    }

    async fn categories(&self, post_id: Uuid) -> Result<Vec<Category>, RepoError> {
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables
            .post_categories
            .get(&post_id)
            .into_iter()
            .flatten()
            .filter_map(|id| tables.categories.get(id).cloned())
            .collect();
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(categories)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(RepoError::MissingReference(format!(
                "post {}",
                comment.post_id
            )));
        }
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let tables = self.tables.read().await;
        // Newest first; equal timestamps fall back to reverse insertion order.
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .rev()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.iter().filter(|c| c.post_id == post_id).count() as u64)
    }
}

#[async_trait]
impl PostViewRepository for InMemoryStore {
    async fn get_or_create(&self, view: PostView) -> Result<PostView, RepoError> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables
            .views
            .iter()
            .find(|v| v.user_id == view.user_id && v.post_id == view.post_id)
        {
            return Ok(existing.clone());
        }
        if !tables.posts.contains_key(&view.post_id) {
            return Err(RepoError::MissingReference(format!("post {}", view.post_id)));
        }
        tables.views.push(view.clone());
        Ok(view)
    }

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.views.iter().filter(|v| v.post_id == post_id).count() as u64)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PostView>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .views
            .iter()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_core::domain::{EditorialChanges, NewPost, PostChanges};
    use inkwell_core::services::Blog;
    use inkwell_core::{Caller, DomainError};

    struct Fixture {
        blog: Blog,
        repos: Repositories,
    }

    impl Fixture {
        async fn new(categories: &[&str]) -> Self {
            let repos = Arc::new(InMemoryStore::new()).repositories();
            let blog = Blog::new(repos.clone());
            for title in categories {
                blog.taxonomy.create_category(title.to_string()).await.unwrap();
            }
            Self { blog, repos }
        }

        async fn user(&self, username: &str) -> Caller {
            let user = self
                .repos
                .users
                .insert(User::new(username.to_string(), "hash".to_string()))
                .await
                .unwrap();
            Caller::Authenticated(user.id)
        }

        async fn post(&self, caller: Caller, title: &str, categories: &[&str]) -> Post {
            self.blog
                .posts
                .create_post(caller, draft(title, categories))
                .await
                .unwrap()
        }
    }

    fn draft(title: &str, categories: &[&str]) -> NewPost {
        NewPost {
            title: title.to_string(),
            overview: format!("{title} overview"),
            content: "<p>body</p>".to_string(),
            thumbnail: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn titles(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_requires_login() {
        let fx = Fixture::new(&["Rust"]).await;

        let err = fx
            .blog
            .posts
            .create_post(Caller::Anonymous, draft("Hello", &["Rust"]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_creates_nothing() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;

        let err = fx
            .blog
            .posts
            .create_post(ada, draft("Hello", &["Rust", "Go"]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity_type: "Category", .. }));
        assert!(fx.blog.posts.list_posts(PostFilter::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_first_post_creates_author_once() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;

        let first = fx.post(ada, "One", &["Rust"]).await;
        let second = fx.post(ada, "Two", &["Rust"]).await;

        assert_eq!(first.author_id, second.author_id);
        let mine = fx
            .blog
            .posts
            .list_posts(PostFilter::ByAuthor(ada.user_id().unwrap()))
            .await
            .unwrap();
        assert_eq!(mine.len(), 2);
    }

    #[tokio::test]
    async fn test_views_counted_once_per_user() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let bob = fx.user("bob").await;
        let post = fx.post(ada, "Hello", &["Rust"]).await;

        fx.blog.posts.get_post(post.id, bob).await.unwrap();
        fx.blog.posts.get_post(post.id, bob).await.unwrap();
        fx.blog.posts.get_post(post.id, Caller::Anonymous).await.unwrap();
        fx.blog.posts.get_post(post.id, ada).await.unwrap();

        assert_eq!(fx.blog.engagement.view_count(post.id).await.unwrap(), 2);
        let reading = fx.blog.engagement.reading_list(bob).await.unwrap();
        assert_eq!(reading.len(), 1);
        assert_eq!(reading[0].post_id, post.id);
        assert!(
            fx.blog
                .engagement
                .reading_list(Caller::Anonymous)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_comments_newest_first() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let post = fx.post(ada, "Hello", &["Rust"]).await;

        for text in ["first", "second", "third"] {
            fx.blog
                .engagement
                .add_comment(post.id, ada, text.to_string())
                .await
                .unwrap();
        }

        let comments = fx.blog.engagement.comments_for(post.id).await.unwrap();
        let texts: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
        assert_eq!(fx.blog.engagement.comment_count(post.id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_comment_rules() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let post = fx.post(ada, "Hello", &["Rust"]).await;

        let anonymous = fx
            .blog
            .engagement
            .add_comment(post.id, Caller::Anonymous, "hi".to_string())
            .await;
        assert!(matches!(anonymous, Err(DomainError::Unauthorized)));

        let blank = fx
            .blog
            .engagement
            .add_comment(post.id, ada, "   ".to_string())
            .await;
        assert!(matches!(blank, Err(DomainError::Validation(_))));

        let missing = fx
            .blog
            .engagement
            .add_comment(Uuid::new_v4(), ada, "hi".to_string())
            .await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_categories() {
        let fx = Fixture::new(&["Rust", "Go", "Zig"]).await;
        let ada = fx.user("ada").await;
        let post = fx.post(ada, "Hello", &["Rust", "Go"]).await;

        let updated = fx
            .blog
            .posts
            .update_post(
                post.id,
                ada,
                PostChanges {
                    title: "Hello again".to_string(),
                    overview: "new".to_string(),
                    content: "new".to_string(),
                    categories: vec!["Zig".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Hello again");
        assert_eq!(updated.created_at, post.created_at);
        let categories = fx.blog.posts.categories_of(post.id).await.unwrap();
        assert_eq!(titles(&categories), vec!["Zig"]);
    }

    #[tokio::test]
    async fn test_delete_cascades_and_unlinks() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let first = fx.post(ada, "First", &["Rust"]).await;
        let second = fx.post(ada, "Second", &["Rust"]).await;
        fx.blog
            .posts
            .set_editorial(
                second.id,
                EditorialChanges {
                    previous_post: Some(first.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        fx.blog
            .engagement
            .add_comment(first.id, ada, "hi".to_string())
            .await
            .unwrap();
        fx.blog.posts.get_post(first.id, ada).await.unwrap();

        fx.blog.posts.delete_post(first.id, ada).await.unwrap();

        let second = fx.blog.posts.find(second.id).await.unwrap();
        assert_eq!(second.previous_post_id, None);
        assert_eq!(fx.blog.engagement.comment_count(first.id).await.unwrap(), 0);
        assert!(fx.blog.engagement.reading_list(ada).await.unwrap().is_empty());

        let again = fx.blog.posts.delete_post(first.id, ada).await;
        assert!(matches!(again, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_editorial_rejects_self_link_and_cycles() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let a = fx.post(ada, "A", &["Rust"]).await;
        let b = fx.post(ada, "B", &["Rust"]).await;

        let own = fx
            .blog
            .posts
            .set_editorial(
                a.id,
                EditorialChanges {
                    next_post: Some(a.id),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(own, Err(DomainError::Validation(_))));

        fx.blog
            .posts
            .set_editorial(
                a.id,
                EditorialChanges {
                    next_post: Some(b.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let cycle = fx
            .blog
            .posts
            .set_editorial(
                b.id,
                EditorialChanges {
                    next_post: Some(a.id),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(cycle, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_projection_of_doubly_linked_chain_terminates() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let one = fx.post(ada, "One", &["Rust"]).await;
        let two = fx.post(ada, "Two", &["Rust"]).await;
        let three = fx.post(ada, "Three", &["Rust"]).await;

        // one <-> two <-> three
        let link = |prev: Option<Uuid>, next: Option<Uuid>| EditorialChanges {
            featured: false,
            previous_post: prev,
            next_post: next,
        };
        fx.blog.posts.set_editorial(one.id, link(None, Some(two.id))).await.unwrap();
        fx.blog
            .posts
            .set_editorial(two.id, link(Some(one.id), Some(three.id)))
            .await
            .unwrap();
        fx.blog.posts.set_editorial(three.id, link(Some(two.id), None)).await.unwrap();

        let post = fx.blog.posts.find(two.id).await.unwrap();
        let detail = fx.blog.projector.project(post).await.unwrap();

        let previous = detail.previous_post.as_ref().unwrap();
        assert_eq!(previous.id, one.id);
        assert!(previous.next_post.is_none());
        let next = detail.next_post.as_ref().unwrap();
        assert_eq!(next.id, three.id);
        assert!(next.previous_post.is_none());
        assert_eq!(detail.author.user.username, "ada");
        assert_eq!(titles(&detail.categories), vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_featured_filter() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let plain = fx.post(ada, "Plain", &["Rust"]).await;
        let star = fx.post(ada, "Star", &["Rust"]).await;
        fx.blog
            .posts
            .set_editorial(
                star.id,
                EditorialChanges {
                    featured: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let featured = fx.blog.posts.list_posts(PostFilter::Featured).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, star.id);
        assert_ne!(featured[0].id, plain.id);
    }

    #[tokio::test]
    async fn test_user_profile() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let bob = fx.user("bob").await;
        let post = fx.post(ada, "Hello", &["Rust"]).await;
        fx.blog.posts.get_post(post.id, bob).await.unwrap();

        let ada_profile = fx
            .blog
            .projector
            .user_profile(ada.user_id().unwrap())
            .await
            .unwrap();
        assert_eq!(ada_profile.my_posts.len(), 1);
        assert!(ada_profile.reading_list.is_empty());

        let bob_profile = fx
            .blog
            .projector
            .user_profile(bob.user_id().unwrap())
            .await
            .unwrap();
        assert!(bob_profile.my_posts.is_empty());
        assert_eq!(bob_profile.reading_list.len(), 1);

        let missing = fx.blog.projector.user_profile(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_category_title() {
        let fx = Fixture::new(&["Rust"]).await;
        let err = fx
            .blog
            .taxonomy
            .create_category("Rust".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_projection_expands_linked_posts_both_ways() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let a = fx.post(ada, "A", &["Rust"]).await;
        let p = fx.post(ada, "P", &["Rust"]).await;
        let q = fx.post(ada, "Q", &["Rust"]).await;

        // A.previous = P, P.next = Q
        fx.blog
            .posts
            .set_editorial(
                p.id,
                EditorialChanges {
                    next_post: Some(q.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        fx.blog
            .posts
            .set_editorial(
                a.id,
                EditorialChanges {
                    previous_post: Some(p.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let post = fx.blog.posts.find(a.id).await.unwrap();
        let detail = fx.blog.projector.project(post).await.unwrap();

        let previous = detail.previous_post.as_ref().unwrap();
        assert_eq!(previous.id, p.id);
        let beyond = previous.next_post.as_ref().unwrap();
        assert_eq!(beyond.id, q.id);
        assert!(beyond.previous_post.is_none());
        assert!(detail.next_post.is_none());
    }

    #[tokio::test]
    async fn test_record_view_is_idempotent() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let bob = fx.user("bob").await.user_id().unwrap();
        let post = fx.post(ada, "Hello", &["Rust"]).await;

        let first = fx.blog.engagement.record_view(post.id, bob).await.unwrap();
        let second = fx.blog.engagement.record_view(post.id, bob).await.unwrap();
        fx.blog.engagement.record_view(post.id, bob).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(fx.blog.engagement.view_count(post.id).await.unwrap(), 1);

        let missing = fx.blog.engagement.record_view(Uuid::new_v4(), bob).await;
        assert!(matches!(missing, Err(DomainError::NotFound { entity_type: "Post", .. })));
    }

    #[tokio::test]
    async fn test_concurrent_author_and_view_resolution_converge() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await;
        let bob = fx.user("bob").await.user_id().unwrap();
        let post = fx.post(ada, "Hello", &["Rust"]).await;

        let (one, two) = tokio::join!(
            fx.blog.authors.resolve_or_create(bob),
            fx.blog.authors.resolve_or_create(bob),
        );
        assert_eq!(one.unwrap().id, two.unwrap().id);

        let (one, two) = tokio::join!(
            fx.blog.engagement.record_view(post.id, bob),
            fx.blog.engagement.record_view(post.id, bob),
        );
        assert_eq!(one.unwrap().id, two.unwrap().id);
        assert_eq!(fx.blog.engagement.view_count(post.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_writes_against_missing_post_are_not_found() {
        let fx = Fixture::new(&["Rust"]).await;
        let ada = fx.user("ada").await.user_id().unwrap();
        let ghost = Uuid::new_v4();

        let comment = fx.repos.comments.insert(Comment::new(ghost, ada, "hi".into())).await;
        assert!(matches!(comment, Err(RepoError::MissingReference(_))));
        let view = fx.repos.views.get_or_create(PostView::new(ada, ghost)).await;
        assert!(matches!(view, Err(RepoError::MissingReference(_))));

        let err: DomainError = view.unwrap_err().into();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
