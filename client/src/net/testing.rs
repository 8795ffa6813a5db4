//! Scripted transport for exercising the API client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::api::ApiClient;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ApiConfig;

pub const TEST_BASE: &str = "http://api.test";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: &Arc<Self>, status: u16, body: &str) -> Arc<Self> {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self.clone()
    }

    pub fn fail(self: &Arc<Self>, reason: &str) -> Arc<Self> {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError(reason.to_owned())));
        self.clone()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

pub fn client_with(stub: &Arc<StubTransport>) -> ApiClient {
    let config = ApiConfig::parse(Some(TEST_BASE)).unwrap();
    ApiClient::new(config, stub.clone())
}
