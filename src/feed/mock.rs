//! Local stand-in for the Graph API media edge, shared by tests

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub use axum::http::StatusCode;

use super::Credentials;

pub struct MockApi {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    last_request: Mutex<Option<(String, HashMap<String, String>)>>,
}

impl MockApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// User id path segment and query of the most recent request
    pub fn last_request(&self) -> Option<(String, HashMap<String, String>)> {
        self.last_request.lock().unwrap().clone()
    }
}

async fn media_handler(
    State(api): State<Arc<MockApi>>,
    Path(user_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    api.hits.fetch_add(1, Ordering::SeqCst);
    *api.last_request.lock().unwrap() = Some((user_id, query));
    (
        api.status,
        [(header::CONTENT_TYPE, "application/json")],
        api.body.clone(),
    )
}

/// Serve a fixed response on an ephemeral port, returning its base URL
pub async fn spawn_api(status: StatusCode, body: impl Into<String>) -> (String, Arc<MockApi>) {
    let api = Arc::new(MockApi {
        status,
        body: body.into(),
        hits: AtomicUsize::new(0),
        last_request: Mutex::new(None),
    });
    let app = Router::new()
        .route("/:user_id/media", get(media_handler))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), api)
}

pub fn credentials() -> Credentials {
    Credentials {
        access_token: "test-token".to_string(),
        user_id: "1789".to_string(),
    }
}

pub fn post_json(id: usize, media_type: &str) -> String {
    format!(
        r#"{{"id":"{id}","caption":"post {id}","media_type":"{media_type}","media_url":"https://cdn.example.com/{id}.jpg","permalink":"https://www.instagram.com/p/{id}/","timestamp":"2024-05-0{d}T12:00:00+0000"}}"#,
        id = id,
        media_type = media_type,
        d = (id % 9) + 1
    )
}

/// Eight posts: five images, one video, two albums
pub fn mixed_media_body() -> String {
    let kinds = [
        "IMAGE",
        "CAROUSEL_ALBUM",
        "IMAGE",
        "VIDEO",
        "IMAGE",
        "IMAGE",
        "CAROUSEL_ALBUM",
        "IMAGE",
    ];
    let items: Vec<String> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| post_json(i + 1, kind))
        .collect();
    format!(r#"{{"data":[{}]}}"#, items.join(","))
}
