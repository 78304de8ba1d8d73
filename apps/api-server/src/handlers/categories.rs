//! Category handlers.

use actix_web::{HttpResponse, web};

use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{CreateCategoryRequest, IdResponse};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories - requires login
pub async fn list(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    identity.caller().require()?;
    let categories = state.blog.taxonomy.list_categories().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// POST /api/categories - admin only
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    identity.require_admin()?;
    let category = state
        .blog
        .taxonomy
        .create_category(body.into_inner().title)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        IdResponse { id: category.id },
        "Category created",
    )))
}
