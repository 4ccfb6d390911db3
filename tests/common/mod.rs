#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use recruiting_portal::{
    database::MemoryStore, middleware::auth::Role, routes::build_router,
    utils::token::issue_staff_token, AppState, Settings,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub admin_token: String,
}

pub fn settings(public_rps: u32) -> Settings {
    Settings {
        jwt_secret: Arc::from(SECRET),
        public_rps,
        admin_rps: 1000,
        trust_forwarded_for: false,
        admin_contact_email: Some("it@corp.com".into()),
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(settings(1000))
}

pub fn spawn_app_with(settings: Settings) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let router = build_router(AppState::new(store.clone(), settings));
    TestApp {
        router,
        store,
        admin_token: token("boss@corp.com", Role::Admin),
    }
}

pub fn token(email: &str, role: Role) -> String {
    issue_staff_token(SECRET, email, None, role, 3600).expect("token")
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, JsonValue) {
        let res = self.router.clone().oneshot(req).await.expect("response");
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &JsonValue) -> (StatusCode, JsonValue) {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn staff(
        &self,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<&JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token));
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(req).await
    }

    pub async fn admin(
        &self,
        method: &str,
        uri: &str,
        body: Option<&JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let token = self.admin_token.clone();
        self.staff(method, uri, &token, body).await
    }

    /// Creates a vacancy through the staff API; returns its id.
    pub async fn create_vacancy(&self, title: &str) -> String {
        let (status, body) = self
            .admin(
                "POST",
                "/api/admin/vacancies",
                Some(&serde_json::json!({ "title": title, "department": "Production" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().expect("vacancy id").to_string()
    }

    pub async fn create_question(&self, vacancy_id: &str, body: JsonValue) -> String {
        let (status, body) = self
            .admin(
                "POST",
                &format!("/api/admin/vacancies/{}/questions", vacancy_id),
                Some(&body),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().expect("question id").to_string()
    }
}
