//! Stateless HTTP request builder and response parser for the imgflip API.
//!
//! # Design
//! `ImgflipClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; `MemeServiceClient` joins the two halves
//! through a `Transport`.
//!
//! imgflip reports failures in the body (`success: false`), so the HTTP
//! status is never treated as a success signal on its own.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CaptionRequest, CatalogEnvelope, Credentials, Meme};

/// Public imgflip endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.imgflip.com";

/// Synchronous, stateless request builder / response parser for imgflip.
#[derive(Debug, Clone)]
pub struct ImgflipClient {
    base_url: String,
}

impl Default for ImgflipClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ImgflipClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_templates(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/get_memes", self.base_url),
            form: Vec::new(),
        }
    }

    /// Form fields go out as `template_id`, `username`, `password`, then
    /// `boxes[i][text]` for every caption text in order.
    pub fn build_generate_caption(
        &self,
        request: &CaptionRequest,
        credentials: &Credentials,
    ) -> HttpRequest {
        let mut form = Vec::with_capacity(3 + request.texts.len());
        form.push(("template_id".to_string(), request.template_id.clone()));
        form.push(("username".to_string(), credentials.username.clone()));
        form.push(("password".to_string(), credentials.password.clone()));
        form.extend(
            request
                .texts
                .iter()
                .enumerate()
                .map(|(i, text)| (format!("boxes[{i}][text]"), text.clone())),
        );

        tracing::debug!(
            template_id = %request.template_id,
            boxes = request.texts.len(),
            "built caption request"
        );

        HttpRequest {
            method: HttpMethod::PostForm,
            url: format!("{}/caption_image", self.base_url),
            form,
        }
    }

    pub fn parse_list_templates(&self, response: HttpResponse) -> Result<Vec<Meme>, ApiError> {
        let envelope: CatalogEnvelope = decode(&response)?;
        if !envelope.success {
            let message = envelope
                .error_message
                .ok_or_else(|| malformed(&response, "`error_message` missing on failed catalog response"))?;
            return Err(ApiError::Service(message));
        }
        let data = envelope
            .data
            .ok_or_else(|| malformed(&response, "`data` missing on catalog response"))?;

        tracing::debug!(templates = data.memes.len(), "decoded meme catalog");
        Ok(data.memes)
    }

    /// Returns the URL of the generated image.
    pub fn parse_generate_caption(&self, response: HttpResponse) -> Result<String, ApiError> {
        let json: Value = decode(&response)?;

        let success = json
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| malformed(&response, "`success` missing or not a boolean"))?;

        if !success {
            let message = json
                .get("error_message")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed(&response, "`error_message` missing or not a string"))?;
            return Err(ApiError::Service(message.to_string()));
        }

        let url = json
            .pointer("/data/url")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(&response, "`data.url` missing or not a string"))?;

        tracing::debug!(%url, "caption generated");
        Ok(url.to_string())
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| malformed(response, e))
}

/// Build a `Parse` error, prefixing the status when it was not 2xx.
fn malformed(response: &HttpResponse, detail: impl std::fmt::Display) -> ApiError {
    if (200..300).contains(&response.status) {
        ApiError::Parse(detail.to_string())
    } else {
        ApiError::Parse(format!("HTTP {}: {detail}", response.status))
    }
}
