use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get  => f.write_str("GET"),
            Self::Post => f.write_str("POST")
        }
    }
}

/// Single outgoing request, built fresh for every call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>
}

impl RequestDescriptor {
    /// Get value of the first header with given name (case insensitive)
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name.as_ref()))
            .map(|(_, value)| value.as_str())
    }

    /// Set header value, replacing existing one with the same name
    pub fn set_header(&mut self, name: impl ToString, value: impl ToString) {
        let name = name.to_string();
        let value = value.to_string();

        match self.headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
            Some(header) => header.1 = value,
            None => self.headers.push((name, value))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>
}

impl RawResponse {
    /// Whether the status code is in range of 200-299
    #[inline]
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Minimal blocking HTTP transport the API client sends its requests through.
///
/// Implementations only have to deliver the request and hand back the status code and
/// the raw body. Status checks and JSON decoding are done by the caller.
pub trait Transport {
    fn send(&self, request: &RequestDescriptor) -> anyhow::Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    #[inline]
    fn send(&self, request: &RequestDescriptor) -> anyhow::Result<RawResponse> {
        (**self).send(request)
    }
}

/// Transport backed by the `reqwest` blocking client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // reqwest applies a 30 seconds timeout unless told otherwise
        let mut builder = Client::builder()
            .timeout(config.timeout);

        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");

            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build().map_err(config_error)?
        })
    }

    #[inline]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Client which can't be built means the config is unusable
#[inline]
fn config_error(error: reqwest::Error) -> ApiError {
    ApiError::Config(format!("failed to build HTTP client: {error}"))
}

impl Transport for ReqwestTransport {
    #[tracing::instrument(level = "trace", skip_all, fields(method = %request.method, url = %request.url))]
    fn send(&self, request: &RequestDescriptor) -> anyhow::Result<RawResponse> {
        let mut builder = match request.method {
            Method::Get  => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url)
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send()?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        tracing::trace!(status, len = body.len(), "Received response");

        Ok(RawResponse {
            status,
            body
        })
    }
}
