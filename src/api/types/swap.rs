//! Swap request extractor
//!
//! htmx submits every hidden `components` input plus the clicked shape's
//! `selected` value as an urlencoded form. JSON bodies are accepted too.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::Deserialize;

use super::error::ApiError;

/// Raw swap submission, before any settings are parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapRequest {
    pub components: Vec<String>,
    pub selected: Vec<String>,
}

/// A field that may be sent once or repeated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(vs) => vs,
        }
    }
}

/// JSON form of a swap submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwapPayload {
    #[serde(default)]
    pub components: OneOrMany,
    #[serde(default)]
    pub selected: OneOrMany,
}

impl SwapRequest {
    /// Collect repeated keys from an urlencoded body; unknown keys are ignored
    pub fn from_form(body: &[u8]) -> Self {
        let mut request = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "components" => request.components.push(value.into_owned()),
                "selected" => request.selected.push(value.into_owned()),
                _ => {}
            }
        }

        request
    }

    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let payload: SwapPayload = serde_json::from_slice(body)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))?;

        Ok(Self {
            components: payload.components.into(),
            selected: payload.selected.into(),
        })
    }
}

fn is_json_request(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for SwapRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_request(&req);

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request(format!(
                "Failed to read request body: {}",
                rejection.body_text()
            ))
        })?;

        if is_json {
            Self::from_json(&body)
        } else {
            Ok(Self::from_form(&body))
        }
    }
}
