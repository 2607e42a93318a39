//! HTTP transport types and the seam the host plugs its HTTP client into.
//!
//! # Design
//! Requests and responses are plain data. `ImgflipClient` builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! a `Transport` implementation supplied by the caller performs the actual
//! round-trip. Connection reuse, TLS, timeouts and cancellation all live on
//! the transport side.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    /// POST with an `application/x-www-form-urlencoded` body built from
    /// `HttpRequest::form`.
    PostForm,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Form fields in submission order. Always empty for `Get`.
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    /// Value of the first form field named `key`.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one `HttpRequest` against the network.
///
/// Errors are handed back to the caller of `MemeServiceClient` untouched,
/// boxed inside `ApiError::Transport`.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}
