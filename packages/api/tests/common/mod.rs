#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use api::{ApiRequest, ClientConfig, RawResponse, Transport, TransportError};

pub const BASE_URL: &str = "http://api.test";

pub fn config() -> ClientConfig {
    ClientConfig::resolve(Some(BASE_URL), None).unwrap_or_default()
}

#[derive(Debug, Default)]
struct State {
    routes: Vec<(String, RawResponse)>,
    queued: VecDeque<Result<RawResponse, TransportError>>,
    requests: Vec<ApiRequest>,
}

/// Records every request and answers from canned responses.
///
/// Routed responses (matched by URL substring) take precedence and are reused;
/// queued responses are consumed in order. With neither, the reply is an empty 200.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.state
            .borrow_mut()
            .queued
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.state
            .borrow_mut()
            .queued
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn route(self, url_fragment: &str, status: u16, body: &str) -> Self {
        self.state
            .borrow_mut()
            .routes
            .push((url_fragment.to_string(), RawResponse::new(status, body)));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut state = self.state.borrow_mut();
        let routed = state
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone());
        state.requests.push(request);

        if let Some(response) = routed {
            return Ok(response);
        }
        state
            .queued
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, "")))
    }
}
