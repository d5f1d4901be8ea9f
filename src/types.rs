use serde::{Deserialize, Serialize};

/// Wrapper every endpoint returns; `success: false` or missing `data` is a
/// failure regardless of HTTP status.
#[derive(Serialize, Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}

/// A post as the list endpoint returns it.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub created_at: String,
    pub excerpt: Option<String>,
}

/// A post with its full body, fetched only when it is opened.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub created_at: String,
    pub content: String,
}
