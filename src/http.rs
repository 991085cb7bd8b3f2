//! HTTP seam shared by the token provider and the messaging client.

use std::error::Error as StdError;
use std::time::Duration;

use crate::auth::BoxFuture;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Body {
    Empty,
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: Vec<(&'static str, String)>,
    pub(crate) body: Body,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl HttpResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Body text, or `None` when it is blank.
    pub(crate) fn non_empty_body(&self) -> Option<String> {
        if self.body.trim().is_empty() {
            None
        } else {
            Some(self.body.clone())
        }
    }
}

/// Canonical reason phrase for a status code (`401` -> `Unauthorized`).
pub(crate) fn reason_phrase(status: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub(crate) fn with_default_client() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            builder = match &request.body {
                Body::Empty => builder,
                Body::Form(params) => builder.form(params),
                Body::Json(value) => builder.json(value),
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every request and replays canned responses in order.
    ///
    /// The last queued response is repeated once the queue is drained.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        responses: VecDeque<(u16, String)>,
    }

    impl FakeTransport {
        pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
            Self::sequence(vec![(status, body.into())])
        }

        pub(crate) fn sequence(responses: Vec<(u16, String)>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses: responses.into(),
                })),
            }
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }

        pub(crate) fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    if state.responses.len() > 1 {
                        state.responses.pop_front().unwrap()
                    } else {
                        state.responses.front().cloned().unwrap()
                    }
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    /// Transport whose every call fails before reaching a server.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct UnreachableTransport;

    impl HttpTransport for UnreachableTransport {
        fn send(&self, _request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                Err(Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )) as BoxError)
            })
        }
    }

    pub(crate) fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_phrase_uses_canonical_text() {
        assert_eq!(reason_phrase(401), Some("Unauthorized"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(599), None);
    }

    #[test]
    fn non_empty_body_drops_whitespace() {
        let response = HttpResponse {
            status: 500,
            body: "  \n".to_owned(),
        };
        assert_eq!(response.non_empty_body(), None);
        assert!(!response.is_success());

        let response = HttpResponse {
            status: 204,
            body: "{}".to_owned(),
        };
        assert_eq!(response.non_empty_body().as_deref(), Some("{}"));
        assert!(response.is_success());
    }

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
