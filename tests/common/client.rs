//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with a method per endpoint. When API routes or request
//! formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // JSON API endpoints
    // ========================================================================

    pub async fn get_events(&self) -> Response {
        self.client
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .expect("GET /api/events failed")
    }

    pub async fn get_event(&self, id: i64) -> Response {
        self.client
            .get(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .expect("GET /api/events/{id} failed")
    }

    pub async fn search(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/api/events/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .expect("GET /api/events/search failed")
    }

    pub async fn search_without_query(&self) -> Response {
        self.client
            .get(format!("{}/api/events/search", self.base_url))
            .send()
            .await
            .expect("GET /api/events/search failed")
    }

    pub async fn register(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/api/register", self.base_url))
            .json(body)
            .send()
            .await
            .expect("POST /api/register failed")
    }

    pub async fn register_raw(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/api/register", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("POST /api/register failed")
    }

    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .expect("GET /api/stats failed")
    }

    // ========================================================================
    // Page endpoints
    // ========================================================================

    pub async fn get_page(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET page failed")
    }
}
