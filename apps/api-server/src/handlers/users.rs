//! Per-user views: my posts, reading list, profiles.

use actix_web::{HttpResponse, web};
use serde_json::json;
use uuid::Uuid;

use inkwell_core::domain::PostFilter;

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/me/posts
pub async fn my_posts(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let user_id = identity.caller().require()?;
    let posts = state
        .blog
        .posts
        .list_posts(PostFilter::ByAuthor(user_id))
        .await?;
    let details = state.blog.projector.project_all(posts).await?;

    Ok(HttpResponse::Ok().json(details))
}

/// GET /api/me/reading-list - empty for anonymous callers
pub async fn reading_list(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let views = state.blog.engagement.reading_list(identity.caller()).await?;

    Ok(HttpResponse::Ok().json(views))
}

/// GET /api/users/id
pub async fn current_id(identity: OptionalIdentity) -> AppResult<HttpResponse> {
    let user_id = identity.caller().require()?;

    Ok(HttpResponse::Ok().json(json!({ "user_id": user_id })))
}

/// GET /api/users/{id}/profile
pub async fn profile(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let profile = state.blog.projector.user_profile(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}
