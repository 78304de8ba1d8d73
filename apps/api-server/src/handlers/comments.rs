//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{CreateCommentRequest, IdResponse};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts/{id}/comments - newest first
pub async fn list(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.blog.posts.find(path.into_inner()).await?;
    let comments = state.blog.projector.comments(post.id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/posts/{id}/comments
pub async fn create(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .blog
        .engagement
        .add_comment(path.into_inner(), identity.caller(), body.into_inner().content)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        IdResponse { id: comment.id },
        "Comment added",
    )))
}
