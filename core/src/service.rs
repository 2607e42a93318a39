//! `MemeServiceClient`: the two imgflip operations run end to end through a
//! caller-supplied `Transport`.

use crate::client::{ImgflipClient, DEFAULT_BASE_URL};
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CaptionRequest, Credentials, Meme};

/// imgflip client bound to a transport.
///
/// Holds no per-call state, so one instance can serve concurrent callers as
/// long as the transport is `Sync`.
#[derive(Debug, Clone)]
pub struct MemeServiceClient<T> {
    api: ImgflipClient,
    transport: T,
}

impl<T: Transport> MemeServiceClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self {
            api: ImgflipClient::new(base_url),
            transport,
        }
    }

    pub fn api(&self) -> &ImgflipClient {
        &self.api
    }

    /// Fetch the template catalog in the order the service lists it.
    pub fn list_templates(&self) -> Result<Vec<Meme>, ApiError> {
        let request = self.api.build_list_templates();
        let response = self.transport.execute(request).map_err(ApiError::transport)?;
        self.api.parse_list_templates(response)
    }

    /// Caption `template_id` with `texts` (box `i` gets `texts[i]`) and return
    /// the generated image URL.
    pub fn generate_caption<S: AsRef<str>>(
        &self,
        template_id: &str,
        texts: &[S],
        credentials: &Credentials,
    ) -> Result<String, ApiError> {
        let request = CaptionRequest::new(template_id, texts.iter().map(|text| text.as_ref()));
        self.caption(&request, credentials)
    }

    pub fn caption(
        &self,
        request: &CaptionRequest,
        credentials: &Credentials,
    ) -> Result<String, ApiError> {
        let http = self.api.build_generate_caption(request, credentials);
        let response = self.transport.execute(http).map_err(ApiError::transport)?;
        self.api.parse_generate_caption(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays canned bodies and records every request it was given.
    struct Canned {
        bodies: RefCell<Vec<&'static str>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Canned {
        fn new(bodies: &[&'static str]) -> Self {
            Self {
                bodies: RefCell::new(bodies.iter().rev().copied().collect()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[derive(Debug)]
    struct Exhausted;

    impl fmt::Display for Exhausted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "no canned response left")
        }
    }

    impl std::error::Error for Exhausted {}

    impl Transport for Canned {
        type Error = Exhausted;

        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Exhausted> {
            self.seen.borrow_mut().push(request);
            let body = self.bodies.borrow_mut().pop().ok_or(Exhausted)?;
            Ok(HttpResponse {
                status: 200,
                body: body.to_string(),
            })
        }
    }

    const CATALOG: &str = r#"{"success":true,"data":{"memes":[{"id":"61579","name":"One Does Not Simply","url":"https://i.imgflip.com/1bij.jpg","width":568,"height":335,"box_count":2,"captions":1200}]}}"#;

    #[test]
    fn new_targets_imgflip() {
        let transport = Canned::new(&[CATALOG]);
        let client = MemeServiceClient::new(&transport);
        client.list_templates().unwrap();
        assert_eq!(
            transport.seen.borrow()[0].url,
            "https://api.imgflip.com/get_memes"
        );
    }

    #[test]
    fn list_templates_is_repeatable() {
        let transport = Canned::new(&[CATALOG, CATALOG]);
        let client = MemeServiceClient::new(&transport);
        let first = client.list_templates().unwrap();
        let second = client.list_templates().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name, "One Does Not Simply");
    }

    #[test]
    fn generate_caption_sends_form_and_returns_url() {
        let transport = Canned::new(&[
            r#"{"success":true,"data":{"url":"https://i.imgflip.com/123abc.jpg","page_url":"https://imgflip.com/i/123abc"}}"#,
        ]);
        let client = MemeServiceClient::with_base_url(&transport, "http://mock");
        let url = client
            .generate_caption("61579", &["top", "bottom"], &Credentials::new("u", "p"))
            .unwrap();
        assert_eq!(url, "https://i.imgflip.com/123abc.jpg");

        let seen = transport.seen.borrow();
        assert_eq!(seen[0].method, HttpMethod::PostForm);
        assert_eq!(seen[0].url, "http://mock/caption_image");
        assert_eq!(seen[0].form_value("boxes[0][text]"), Some("top"));
        assert_eq!(seen[0].form_value("boxes[1][text]"), Some("bottom"));
    }

    #[test]
    fn transport_error_is_propagated_unchanged() {
        let transport = Canned::new(&[]);
        let client = MemeServiceClient::new(&transport);
        match client.list_templates().unwrap_err() {
            ApiError::Transport(inner) => assert!(inner.downcast_ref::<Exhausted>().is_some()),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
