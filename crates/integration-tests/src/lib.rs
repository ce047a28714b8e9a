//! Integration tests for the demo store.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or port is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart panel and line-item flows
//! - `storefront_auth` - Mock sign-in / sign-up flows
//! - `storefront_http` - Health, JSON API, headers, static files

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use demo_store_core::Catalog;
use demo_store_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Body size cap for buffered test responses.
const MAX_BODY: usize = 1024 * 1024;

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    /// Assert this is the `303 See Other` back to the page.
    pub fn assert_redirect_home(&self) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.header("location"), Some("/"));
    }
}

/// One visitor: a router plus that visitor's session cookie.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A fresh storefront with the demo catalog.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            static_dir: static_dir(),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, Catalog::demo());
        Self {
            router: app(state),
            cookie: None,
        }
    }

    /// Another visitor on the same storefront, without a session.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// A second handle on this visitor's session, for concurrent requests.
    #[must_use]
    pub fn same_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: self.cookie.clone(),
        }
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::get(path);
        self.send(request, Body::empty()).await
    }

    /// POST an urlencoded form. Values are sent as-is.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(body)).await
    }

    /// The page as currently rendered for this visitor.
    pub async fn page(&mut self) -> String {
        let response = self.get("/").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body
    }

    async fn send(
        &mut self,
        mut request: axum::http::request::Builder,
        body: Body,
    ) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            // Keep only `name=value`
            let pair = set_cookie.split(';').next().unwrap_or_default();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static")
}
