//! Domain types for the imgflip API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A meme template from the `get_memes` catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meme {
    pub id: String,
    pub name: String,
    /// Absolute URL of the blank template image.
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Number of editable text boxes.
    pub box_count: u32,
    /// How many times the template has been captioned on imgflip.
    pub captions: u64,
}

/// imgflip account used to caption a template. Held only for the duration of
/// a single call.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A template plus the text for each of its boxes, box `i` receiving
/// `texts[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptionRequest {
    pub template_id: String,
    #[serde(default)]
    pub texts: Vec<String>,
}

impl CaptionRequest {
    pub fn new<I, S>(template_id: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template_id: template_id.into(),
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Wire envelope of `get_memes`. `data` is absent on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<CatalogData>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogData {
    pub memes: Vec<Meme>,
}
