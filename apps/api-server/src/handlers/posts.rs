//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkwell_core::domain::{EditorialChanges, NewPost, PostChanges, PostFilter};
use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{
    CreatePostRequest, EditorialRequest, IdResponse, PostListQuery, UpdatePostRequest,
};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let filter = if query.featured {
        PostFilter::Featured
    } else {
        PostFilter::All
    };
    let posts = state.blog.posts.list_posts(filter).await?;
    let details = state.blog.projector.project_all(posts).await?;

    Ok(HttpResponse::Ok().json(details))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = NewPost {
        title: req.title,
        overview: req.overview,
        content: req.content,
        thumbnail: req.thumbnail,
        categories: req.categories,
    };

    let post = state.blog.posts.create_post(identity.caller(), draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        IdResponse { id: post.id },
        "Post created",
    )))
}

/// GET /api/posts/{id}
///
/// An authenticated read adds the post to the caller's reading list.
pub async fn detail(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .posts
        .get_post(path.into_inner(), identity.caller())
        .await?;
    let detail = state.blog.projector.project(post).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        overview: req.overview,
        content: req.content,
        categories: req.categories,
    };

    let post = state
        .blog
        .posts
        .update_post(path.into_inner(), identity.caller(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        IdResponse { id: post.id },
        "Post updated",
    )))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .blog
        .posts
        .delete_post(path.into_inner(), identity.caller())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}

/// PUT /api/posts/{id}/editorial - admin only
pub async fn editorial(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<EditorialRequest>,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;
    let req = body.into_inner();

    let post = state
        .blog
        .posts
        .set_editorial(
            path.into_inner(),
            EditorialChanges {
                featured: req.featured,
                previous_post: req.previous_post,
                next_post: req.next_post,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        IdResponse { id: post.id },
        "Editorial fields updated",
    )))
}
