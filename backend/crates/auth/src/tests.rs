//! Integration-style tests for the auth crate
//!
//! Exercise the full stack (router, gate, use cases) against an
//! in-memory repository.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use kernel::id::UserId;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use crate::presentation::router::auth_router_generic;

/// In-memory user repository for tests
#[derive(Default)]
struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl Clone for InMemoryUserRepository {
    fn clone(&self) -> Self {
        Self {
            users: Mutex::new(self.users.lock().unwrap().clone()),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }
}

fn test_router() -> Router {
    auth_router_generic(
        InMemoryUserRepository::default(),
        AuthConfig::new("test-secret"),
    )
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_body(email: &str) -> Value {
    json!({ "email": email, "password": "secret1", "name": "Ann" })
}

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_returns_201_with_user_id() {
        let app = test_router();
        let response = app
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert!(body["userId"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("/register", register_body("Ann@Example.COM")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let app = test_router();
        let body = json!({ "email": "ann@example.com", "password": "12345", "name": "Ann" });
        let response = app.oneshot(json_request("/register", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let app = test_router();
        let body = json!({ "email": "not-an-email", "password": "secret1", "name": "Ann" });
        let response = app.oneshot(json_request("/register", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login_returns_token_and_user() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "/login",
                json!({ "email": "ann@example.com", "password": "secret1" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["token"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(body["user"]["email"], "ann@example.com");
        assert_eq!(body["user"]["name"], "Ann");
        // The password hash must never appear in a response body
        assert!(body["user"].get("password").is_none());
        assert!(body["user"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "/login",
                json!({ "email": "ANN@EXAMPLE.COM", "password": "secret1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({ "email": "ann@example.com", "password": "wrong-1" }),
            ))
            .await
            .unwrap();
        let unknown_email = app
            .oneshot(json_request(
                "/login",
                json!({ "email": "ghost@example.com", "password": "secret1" }),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
        let a = body_json(wrong_password).await;
        let b = body_json(unknown_email).await;
        assert_eq!(a, b);
    }
}

mod gate_tests {
    use super::*;
    use platform::token::{TokenClaims, TokenSigner};

    async fn login_token(app: &Router) -> String {
        app.clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({ "email": "ann@example.com", "password": "secret1" }),
            ))
            .await
            .unwrap();
        body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_me_with_valid_token() {
        let app = test_router();
        let token = login_token(&app).await;

        let response = app
            .oneshot(get_request("/me", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "ann@example.com");
    }

    #[tokio::test]
    async fn test_me_without_header_is_401() {
        let app = test_router();
        let response = app.oneshot(get_request("/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_with_garbage_token_is_401() {
        let app = test_router();
        let response = app
            .oneshot(get_request("/me", Some("not.a.token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_with_wrong_scheme_is_401() {
        let app = test_router();
        let request = Request::builder()
            .method("GET")
            .uri("/me")
            .header(header::AUTHORIZATION, "Basic abc123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_is_401() {
        let app = test_router();

        // Well-signed token naming a user the store has never seen
        let signer = TokenSigner::new("test-secret");
        let token = signer.issue(*UserId::new().as_uuid(), "ghost@example.com", Duration::from_secs(3600));

        let response = app
            .oneshot(get_request("/me", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_401() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request("/register", register_body("ann@example.com")))
            .await
            .unwrap();
        let user_id: uuid::Uuid = body_json(response).await["userId"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();

        // Correctly signed claims whose window has already closed
        let signer = TokenSigner::new("test-secret");
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            user_id,
            email: "ann@example.com".to_string(),
            issued_at: now - 7200,
            expires_at: now - 3600,
        };
        let expired = signer.issue_claims(&claims);

        let response = app
            .oneshot(get_request("/me", Some(&expired)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
