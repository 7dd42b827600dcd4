//! HTTP transport
//!
//! Outbound calls go through [`HttpTransport`] so the contact and assistant
//! services can be exercised without a network.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::ConsultResult;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON document
pub trait HttpTransport {
    /// Send `body` as JSON to `url` with the extra `headers`
    ///
    /// A response with any status is `Ok`; `Err` means no response arrived.
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &Value,
    ) -> ConsultResult<HttpResponse>;
}

/// Blocking transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("fcsons/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &Value,
    ) -> ConsultResult<HttpResponse> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        log::debug!("POST {}", url);
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        log::debug!("POST {} -> {}", url, status);

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory transport for service tests

    use std::cell::RefCell;

    use super::*;
    use crate::error::ConsultError;

    /// A request captured by [`FakeTransport`]
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Value,
    }

    /// Replays a canned outcome and records what was sent
    pub struct FakeTransport {
        outcome: Result<HttpResponse, String>,
        pub requests: RefCell<Vec<RecordedRequest>>,
    }

    impl FakeTransport {
        pub fn responding(status: u16, body: &str) -> Self {
            Self {
                outcome: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn last_request(&self) -> Option<RecordedRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            body: &Value,
        ) -> ConsultResult<HttpResponse> {
            self.requests.borrow_mut().push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body: body.clone(),
            });
            self.outcome.clone().map_err(ConsultError::Http)
        }
    }
}
