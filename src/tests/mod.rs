use std::cell::RefCell;
use std::collections::VecDeque;

use crate::prelude::*;


pub const TEST_BASE_URL: &str = "http://api.test";

/// Transport which replies with queued responses and remembers every request
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<anyhow::Result<RawResponse>>>,
    requests: RefCell<Vec<RequestDescriptor>>
}

impl MockTransport {
    pub fn reply(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.into()
        }));

        self
    }

    pub fn reply_json(self, body: &serde_json::Value) -> Self {
        let body = serde_json::to_vec(body).unwrap();

        self.reply(200, body)
    }

    pub fn fail(self, error: anyhow::Error) -> Self {
        self.responses.borrow_mut().push_back(Err(error));

        self
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests.borrow().last().cloned().expect("no requests were sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &RequestDescriptor) -> anyhow::Result<RawResponse> {
        self.requests.borrow_mut().push(request.clone());

        self.responses.borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no response queued for {}", request.url)))
    }
}

pub fn api(transport: &MockTransport) -> Api<&MockTransport> {
    let config = ClientConfig::default()
        .with_base_url(TEST_BASE_URL);

    Api::with_transport(config, transport).unwrap()
}
