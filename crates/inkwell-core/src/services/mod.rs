//! Application services - the operations the API exposes, written against ports.

mod authors;
mod engagement;
mod posts;
mod projection;
mod taxonomy;

use std::sync::Arc;

pub use authors::AuthorDirectory;
pub use engagement::EngagementTracker;
pub use posts::PostStore;
pub use projection::Projector;
pub use taxonomy::Taxonomy;

use crate::ports::{
    AuthorRepository, CategoryRepository, CommentRepository, PostRepository, PostViewRepository,
    UserRepository,
};

/// The set of repositories the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub views: Arc<dyn PostViewRepository>,
}

/// All blog services wired to one set of repositories.
#[derive(Clone)]
pub struct Blog {
    pub authors: AuthorDirectory,
    pub taxonomy: Taxonomy,
    pub posts: PostStore,
    pub engagement: EngagementTracker,
    pub projector: Projector,
}

impl Blog {
    pub fn new(repos: Repositories) -> Self {
        let authors = AuthorDirectory::new(repos.authors.clone());
        let taxonomy = Taxonomy::new(repos.categories.clone());
        let engagement = EngagementTracker::new(
            repos.posts.clone(),
            repos.comments.clone(),
            repos.views.clone(),
        );

        Self {
            posts: PostStore::new(
                repos.posts.clone(),
                engagement.clone(),
                authors.clone(),
                taxonomy.clone(),
            ),
            engagement,
            projector: Projector::new(
                repos.users,
                repos.authors,
                repos.posts,
                repos.comments,
                repos.views,
            ),
            authors,
            taxonomy,
        }
    }
}
