//! In-memory transport used by unit tests.

use crate::error::{DfsError, Result};
use crate::http::{FilePart, HttpResponse, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;
use url::Url;

/// What the mock answers to one request.
pub(crate) enum MockReply {
    Respond(HttpResponse),
    Fail(String),
    /// Wait for the gate to open (or its sender to drop), then answer.
    Gated(oneshot::Receiver<()>, Box<MockReply>),
}

impl MockReply {
    pub(crate) fn respond(status: u16, body: &str) -> Self {
        MockReply::Respond(HttpResponse::new(status, body))
    }

    pub(crate) fn gated(reply: MockReply) -> (oneshot::Sender<()>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, MockReply::Gated(rx, Box::new(reply)))
    }
}

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: &'static str,
    pub url: Url,
    pub query: Option<String>,
    pub field: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    fn new(method: &'static str, url: &Url) -> Self {
        Self {
            method,
            url: url.clone(),
            query: url.query().map(str::to_string),
            field: None,
            file_name: None,
            content_type: None,
            body: Vec::new(),
        }
    }
}

struct Route {
    method: &'static str,
    path: String,
    replies: VecDeque<MockReply>,
}

/// Transport that records every request and answers from per-route queues.
///
/// Routes match on method and path suffix. A route with no queued reply
/// answers 404.
#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method` requests whose path ends with `path`.
    pub(crate) fn push(&self, method: &'static str, path: &str, reply: MockReply) {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        match routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.replies.push_back(reply),
            None => routes.push(Route {
                method,
                path: path.to_string(),
                replies: VecDeque::from([reply]),
            }),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Request lines in arrival order, e.g. "GET /api/files".
    pub(crate) fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }

    fn next_reply(&self, method: &str, url: &Url) -> Option<MockReply> {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes
            .iter_mut()
            .find(|r| r.method == method && url.path().ends_with(&r.path))
            .and_then(|r| r.replies.pop_front())
    }

    async fn answer(&self, request: RecordedRequest) -> Result<HttpResponse> {
        let reply = self.next_reply(request.method, &request.url);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let mut reply = match reply {
            Some(reply) => reply,
            None => return Ok(HttpResponse::new(404, "404 page not found")),
        };
        loop {
            match reply {
                MockReply::Respond(response) => return Ok(response),
                MockReply::Fail(message) => return Err(DfsError::Transport(message)),
                MockReply::Gated(gate, inner) => {
                    let _ = gate.await;
                    reply = *inner;
                }
            }
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.answer(RecordedRequest::new("GET", url)).await
    }

    async fn post_form(&self, url: &Url, part: FilePart) -> Result<HttpResponse> {
        let mut request = RecordedRequest::new("POST", url);
        request.field = Some(part.field);
        request.file_name = Some(part.file_name);
        request.content_type = Some("multipart/form-data".to_string());
        request.body = part.content;
        self.answer(request).await
    }

    async fn post_bytes(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse> {
        let mut request = RecordedRequest::new("POST", url);
        request.content_type = Some(content_type.to_string());
        request.body = body;
        self.answer(request).await
    }
}
