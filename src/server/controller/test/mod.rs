use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    model::user::User, router::router, service::token::TokenService, state::AppState,
};


const SECRET: &str = "test_secret_key";
const APP_URL: &str = "http://testserver";

/// Router over a fresh in-memory database plus a valid token for a stored user.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    token: String,
    _test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_api_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let tokens = TokenService::new(SECRET, Duration::minutes(5));
        let user = factory::create_user(&db).await.unwrap();
        let token = tokens.issue(&User::from_entity(user)).unwrap();

        let router = router(AppState::new(db.clone(), tokens, APP_URL.to_string()));

        Self {
            router,
            db,
            token,
            _test: test,
        }
    }

    /// Sends an authenticated request.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let auth = format!("Bearer {}", self.token);
        self.send_with_auth(method, uri, Some(&auth), body).await
    }

    async fn send_with_auth(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        self.dispatch(request).await
    }

    /// Sends an authenticated request with a raw body, bypassing JSON encoding.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {}", self.token));
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        self.dispatch(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}
