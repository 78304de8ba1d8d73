//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use inkwell_core::domain::User;
use inkwell_core::error::RepoError;
use inkwell_core::ports::{BaseRepository, PasswordService, TokenService};
use inkwell_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const USERNAME_MAX_LEN: usize = 150;
const PASSWORD_MIN_LEN: usize = 8;

fn issue_token(
    state: &AppState,
    token_service: &dyn TokenService,
    user: &User,
) -> AppResult<AuthResponse> {
    let token = token_service
        .generate_token(user.id, &user.username, state.roles_for(&user.username))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds().max(0) as u64,
    })
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let username = req.username.trim().to_string();

    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "Username must be 1 to {USERNAME_MAX_LEN} characters"
        )));
    }
    if req.password.len() < PASSWORD_MIN_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters"
        )));
    }

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = state
        .users
        .insert(User::new(username, password_hash))
        .await
        .map_err(|e| match e {
            RepoError::Constraint(_) => AppError::Conflict("Username already taken".to_string()),
            other => other.into(),
        })?;
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    let auth = issue_token(&state, token_service.get_ref().as_ref(), &user)?;
    Ok(HttpResponse::Created().json(auth))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = state
        .users
        .find_by_username(req.username.trim())
        .await?
        .ok_or_else(invalid)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        tracing::warn!(username = %user.username, "Failed login");
        return Err(invalid());
    }

    let auth = issue_token(&state, token_service.get_ref().as_ref(), &user)?;
    Ok(HttpResponse::Ok().json(auth))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", identity.user_id)))?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }))
}
