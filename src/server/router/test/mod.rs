use std::path::Path;

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    router::router,
    service::{image::ImageStorage, token::TokenService},
    state::AppState,
};


const SECRET: &str = "router-test-secret";
const BOUNDARY: &str = "stayhub-form-boundary";
const PNG: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

/// Router over an in-memory database with images stored in a temporary directory.
struct TestApp {
    app: Router,
    tokens: TokenService,
    uploads: TempDir,
    test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_admin(0).await
    }

    async fn with_admin(admin_id: i32) -> Self {
        let test = TestBuilder::new()
            .with_rental_tables()
            .build()
            .await
            .unwrap();
        Self::from_context(test, admin_id)
    }

    fn from_context(test: TestContext, admin_id: i32) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let db = test.db.clone().unwrap();
        let state = AppState::new(
            db,
            config(admin_id, uploads.path()),
            ImageStorage::local(uploads.path()),
        );

        Self {
            app: router(state),
            tokens: TokenService::new(SECRET),
            uploads,
            test,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    fn token_for(&self, user_id: i32) -> String {
        self.tokens.issue(user_id, Utc::now()).unwrap()
    }

    fn stored_images(&self) -> usize {
        std::fs::read_dir(self.uploads.path()).unwrap().count()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, token, Body::empty()))
            .await
    }

    async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(request(Method::DELETE, uri, Some(token), Body::empty()))
            .await
    }

    async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut req = request(Method::POST, uri, token, Body::from(body.to_string()));
        req.headers_mut()
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        self.send(req).await
    }

    async fn post_listing(&self, token: &str, form: Vec<u8>) -> (StatusCode, Value) {
        let mut req = request(Method::POST, "/api/listings", Some(token), Body::from(form));
        req.headers_mut().insert(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}")
                .parse()
                .unwrap(),
        );
        self.send(req).await
    }
}

fn config(admin_id: i32, upload_dir: &Path) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: SECRET.to_string(),
        admin_id,
        port: 0,
        upload_dir: upload_dir.to_path_buf(),
        s3_bucket: None,
        s3_region: None,
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).unwrap()
}

const INFO: &str = r#"{"guests":2,"bedrooms":1,"bathrooms":1}"#;

/// Builds a multipart listing form. `image` is `(content type, bytes)`.
fn listing_form(title: &str, image: Option<(&str, &[u8])>) -> Vec<u8> {
    listing_form_with_info(title, Some(INFO), image)
}

/// Builds a multipart listing form with the given `info` field, or none.
fn listing_form_with_info(
    title: &str,
    info: Option<&str>,
    image: Option<(&str, &[u8])>,
) -> Vec<u8> {
    let fields = [
        ("title", Some(title)),
        ("location", Some("Iceland")),
        ("type", Some("Apartment")),
        ("info", info),
        ("pricePerNight", Some("$170")),
        ("rating", Some("4.8")),
    ];

    let mut body = Vec::new();
    for (name, value) in fields
        .into_iter()
        .filter_map(|(name, value)| Some((name, value?)))
    {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"img\"; filename=\"photo\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
