//! HTTP transport
//!
//! `HttpClient` is the seam between the gateway and the network: the browser
//! build sends through `gloo-net`, tests swap in `MockHttpClient`.

use crate::error::{ClientError, ClientResult};
use gloo_net::http::{Method, RequestBuilder};
use std::collections::HashMap;
use vibecommerce_shared::protocol::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

// =========================================================
// Request / Response
// =========================================================

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[cfg(test)]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Checks whether the response is successful (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse>;
}

// =========================================================
// Browser client
// =========================================================

fn to_gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Sends requests through the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_gloo_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// Test double: MockHttpClient
// =========================================================

/// Records every request and answers from canned responses keyed by `"METHOD url"`.
///
/// Clones share state, so a test can keep a handle after moving one into the gateway.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockHttpClient {
    responses: Rc<RefCell<HashMap<String, (u16, String)>>>,
    failures: Rc<RefCell<Vec<String>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(Self::key(method, url), (status, body.to_string()));
    }

    /// Makes the request fail before any response arrives.
    pub fn mock_network_failure(&self, method: HttpMethod, url: &str) {
        self.failures.borrow_mut().push(Self::key(method, url));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let key = Self::key(req.method, &req.url);
        self.requests.borrow_mut().push(req);

        if self.failures.borrow().contains(&key) {
            return Err(ClientError::Transport("connection refused".to_string()));
        }

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&key) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            })
        }
    }
}
