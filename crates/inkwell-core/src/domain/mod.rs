//! Domain entities - the core business objects.

mod author;
mod category;
mod comment;
mod post;
mod post_view;
mod projection;
mod user;

pub use author::Author;
pub use category::{CATEGORY_TITLE_MAX_LEN, Category};
pub use comment::Comment;
pub use post::{
    EditorialChanges, NewPost, POST_TITLE_MAX_LEN, Post, PostChanges, PostFilter,
    validate_post_fields,
};
pub use post_view::PostView;
pub use projection::{AuthorDetail, CommentDetail, PostDetail, UserProfile};
pub use user::{User, UserSummary};
