#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use dropcars_core::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use dropcars_core::error::{DropCarsError, Result};
use dropcars_core::session::Session;

/// Transport that replays canned responses and records every request.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
    resources: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    /// Register bytes returned by `fetch` for `url`.
    pub fn resource(self, url: &str, bytes: Vec<u8>) -> Self {
        self.resources.lock().unwrap().push((url.to_string(), bytes));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DropCarsError::InvalidInput("no canned response left".into()))
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.resources
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| DropCarsError::from_status(404, "not found"))
    }
}

pub fn test_session() -> Session {
    Session {
        access_token: "tok-123".into(),
        token_type: "bearer".into(),
        username: "ops".into(),
    }
}

/// Client already holding `test_session()`'s token.
pub fn authed_client(transport: RecordingTransport) -> ApiClient<RecordingTransport> {
    ApiClient::new(transport).with_session(Some(&test_session()))
}

/// Encode a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}
