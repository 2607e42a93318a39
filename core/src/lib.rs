//! Client core for the imgflip meme API.
//!
//! # Overview
//! Two operations: list the template catalog (`get_memes`) and caption a
//! template (`caption_image`). `ImgflipClient` builds `HttpRequest` values
//! and parses `HttpResponse` values without touching the network;
//! `MemeServiceClient` runs them through a caller-supplied `Transport`.
//!
//! # Design
//! - Both clients are stateless apart from the base URL (and the transport).
//! - Failures come back as `ApiError::{Transport, Parse, Service}`.
//! - Credentials are passed per call and never retained.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod types;

pub use client::{ImgflipClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::MemeServiceClient;
pub use types::{CaptionRequest, Credentials, Meme};
