use serde::de::DeserializeOwned;

use crate::types::{ApiEnvelope, Post, PostSummary};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("server rejected the request")]
    Rejected,
}

impl FetchError {
    /// True when the server answered but the envelope carried no usable data.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchError::Rejected)
    }
}

/// Client for the posts API. Every call issues a fresh request; nothing is
/// cached between the list and detail representations.
#[derive(Clone)]
pub struct BlogApi {
    base_url: String,
}

impl BlogApi {
    pub fn new(base_url: impl Into<String>) -> BlogApi {
        BlogApi {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_posts(&self) -> Result<Vec<PostSummary>, FetchError> {
        let url = format!("{}/posts", self.base_url);
        get_enveloped(&url).await
    }

    /// Fetch one post by id. Any failure collapses to `None`: the caller
    /// cannot tell an absent post from an unreachable server, only the log
    /// keeps the cause.
    pub async fn fetch_post(&self, id: u64) -> Option<Post> {
        let url = format!("{}/posts/{}", self.base_url, id);
        match get_enveloped::<Post>(&url).await {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::error!("failed to load post {id}: {e}");
                None
            }
        }
    }
}

async fn get_enveloped<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = reqwest::get(url).await?.text().await?;
    let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;

    unwrap_envelope(envelope)
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, FetchError> {
    match envelope {
        ApiEnvelope {
            success: true,
            data: Some(data),
        } => Ok(data),
        _ => Err(FetchError::Rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_is_not_success() {
        let envelope: ApiEnvelope<Vec<PostSummary>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.data.is_none());

        let envelope: ApiEnvelope<Vec<PostSummary>> =
            serde_json::from_str(r#"{"success": false, "data": null}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = BlogApi::new("http://localhost:3000/api/");
        assert_eq!(api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn rejected_envelope_discards_data() {
        // success:false is a failure even when data is present
        let envelope = ApiEnvelope {
            success: false,
            data: Some(vec![PostSummary::default()]),
        };
        assert!(unwrap_envelope(envelope).unwrap_err().is_rejection());

        let envelope: ApiEnvelope<Vec<PostSummary>> = ApiEnvelope {
            success: true,
            data: None,
        };
        assert!(unwrap_envelope(envelope).unwrap_err().is_rejection());
    }
}
