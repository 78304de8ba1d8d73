//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod comments;
mod health;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::detail))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/editorial", web::put().to(posts::editorial))
                    .route("/{id}/comments", web::get().to(comments::list))
                    .route("/{id}/comments", web::post().to(comments::create)),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list))
                    .route("", web::post().to(categories::create)),
            )
            .service(
                web::scope("/me")
                    .route("/posts", web::get().to(users::my_posts))
                    .route("/reading-list", web::get().to(users::reading_list)),
            )
            .service(
                web::scope("/users")
                    .route("/id", web::get().to(users::current_id))
                    .route("/{id}/profile", web::get().to(users::profile)),
            ),
    );
}

/// Malformed JSON bodies answer with a problem document like every other 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1 << 20)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use inkwell_core::ports::{PasswordService, TokenService};
    use inkwell_infra::{Argon2PasswordService, JwtConfig, JwtTokenService};
    use inkwell_shared::dto::AuthResponse;

    use super::{configure_routes, json_config};
    use crate::state::AppState;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "inkwell-test".to_string(),
        }))
    }

    fn password_service() -> Arc<dyn PasswordService> {
        Arc::new(Argon2PasswordService::with_params(8, 1, 1).unwrap())
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(web::Data::new(token_service()))
                    .app_data(web::Data::new(password_service()))
                    .app_data(json_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn bearer(token: &str) -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    macro_rules! register {
        ($app:expr, $username:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(json!({ "username": $username, "password": "correct-horse" }))
                .to_request();
            let auth: AuthResponse = test::call_and_read_body_json(&$app, req).await;
            auth.access_token
        }};
    }

    fn admin_state() -> AppState {
        AppState::in_memory(&["editor".to_string()])
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test_app!(admin_state());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_register_login_me() {
        let app = test_app!(admin_state());
        register!(app, "ada");

        let duplicate = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "username": "ada", "password": "another-pass" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, duplicate).await.status(),
            StatusCode::CONFLICT
        );

        let bad_login = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "ada", "password": "wrong-pass" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, bad_login).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let login = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "ada", "password": "correct-horse" }))
            .to_request();
        let auth: AuthResponse = test::call_and_read_body_json(&app, login).await;
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.expires_in, 3600);

        let me = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&auth.access_token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, me).await;
        assert_eq!(body["username"], "ada");
    }

    #[actix_web::test]
    async fn test_post_lifecycle() {
        let app = test_app!(admin_state());
        let editor = register!(app, "editor");
        let reader = register!(app, "reader");

        let refused = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer(&reader))
            .set_json(json!({ "title": "Tech" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, refused).await.status(),
            StatusCode::FORBIDDEN
        );

        let category = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer(&editor))
            .set_json(json!({ "title": "Tech" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, category).await.status(),
            StatusCode::CREATED
        );

        let anonymous = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "P", "overview": "o", "content": "c", "categories": ["Tech"] }))
            .to_request();
        let resp = test::call_service(&app, anonymous).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let problem: Value = test::read_body_json(resp).await;
        assert_eq!(problem["detail"], "You must login first.");

        let create = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&editor))
            .set_json(json!({ "title": "P", "overview": "o", "content": "c", "categories": ["Tech"] }))
            .to_request();
        let resp = test::call_service(&app, create).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["success"], true);
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let fresh = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, fresh).await;
        assert_eq!(detail["categories"].as_array().unwrap().len(), 1);
        assert_eq!(detail["view_count"], 0);
        assert_eq!(detail["comment_count"], 0);

        for _ in 0..2 {
            let read = test::TestRequest::get()
                .uri(&format!("/api/posts/{id}"))
                .insert_header(bearer(&reader))
                .to_request();
            assert!(test::call_service(&app, read).await.status().is_success());
        }

        let comment = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/comments"))
            .insert_header(bearer(&reader))
            .set_json(json!({ "content": "nice" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, comment).await.status(),
            StatusCode::CREATED
        );

        let read = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, read).await;
        assert_eq!(detail["view_count"], 1);
        assert_eq!(detail["comment_count"], 1);
        assert_eq!(detail["comments"][0]["user"]["username"], "reader");
        assert_eq!(detail["author"]["user"]["username"], "editor");

        let reading = test::TestRequest::get()
            .uri("/api/me/reading-list")
            .insert_header(bearer(&reader))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, reading).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .insert_header(bearer(&editor))
            .to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::OK);

        let gone = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, gone).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_validation_errors() {
        let app = test_app!(admin_state());
        let editor = register!(app, "editor");

        let empty = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&editor))
            .set_json(json!({ "title": "P", "overview": "o", "content": "c", "categories": [] }))
            .to_request();
        assert_eq!(
            test::call_service(&app, empty).await.status(),
            StatusCode::BAD_REQUEST
        );

        let unknown = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&editor))
            .set_json(json!({ "title": "P", "overview": "o", "content": "c", "categories": ["Nope"] }))
            .to_request();
        assert_eq!(
            test::call_service(&app, unknown).await.status(),
            StatusCode::NOT_FOUND
        );

        let malformed = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&editor))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(
            test::call_service(&app, malformed).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_editorial_and_featured_listing() {
        let app = test_app!(admin_state());
        let editor = register!(app, "editor");
        let reader = register!(app, "reader");

        let category = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer(&editor))
            .set_json(json!({ "title": "Tech" }))
            .to_request();
        test::call_service(&app, category).await;

        let create = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&reader))
            .set_json(json!({ "title": "P", "overview": "o", "content": "c", "categories": ["Tech"] }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let refused = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}/editorial"))
            .insert_header(bearer(&reader))
            .set_json(json!({ "featured": true }))
            .to_request();
        assert_eq!(
            test::call_service(&app, refused).await.status(),
            StatusCode::FORBIDDEN
        );

        let self_link = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}/editorial"))
            .insert_header(bearer(&editor))
            .set_json(json!({ "featured": true, "next_post": id }))
            .to_request();
        assert_eq!(
            test::call_service(&app, self_link).await.status(),
            StatusCode::BAD_REQUEST
        );

        let feature = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}/editorial"))
            .insert_header(bearer(&editor))
            .set_json(json!({ "featured": true }))
            .to_request();
        assert_eq!(test::call_service(&app, feature).await.status(), StatusCode::OK);

        let featured = test::TestRequest::get()
            .uri("/api/posts?featured=true")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, featured).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["featured"], true);

        let mine = test::TestRequest::get()
            .uri("/api/me/posts")
            .insert_header(bearer(&reader))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, mine).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_anonymous_access_rules() {
        let app = test_app!(admin_state());

        let categories = test::TestRequest::get().uri("/api/categories").to_request();
        assert_eq!(
            test::call_service(&app, categories).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let user_id = test::TestRequest::get().uri("/api/users/id").to_request();
        assert_eq!(
            test::call_service(&app, user_id).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let reading = test::TestRequest::get()
            .uri("/api/me/reading-list")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, reading).await;
        assert!(list.as_array().unwrap().is_empty());

        let profile = test::TestRequest::get()
            .uri(&format!("/api/users/{}/profile", uuid::Uuid::new_v4()))
            .to_request();
        assert_eq!(
            test::call_service(&app, profile).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
