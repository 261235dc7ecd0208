use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure reported by the transport
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),

    /// Remote replied with a non-2xx status
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String
    },

    /// Remote replied with a body which is not valid JSON
    #[error("Failed to decode JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error
    },

    #[error("Failed to serialize request body: {0}")]
    Serialize(serde_json::Error),

    #[error("Invalid client config: {0}")]
    Config(String)
}

impl From<reqwest::Error> for ApiError {
    #[inline(always)]
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(anyhow::Error::new(error))
    }
}

impl ApiError {
    /// HTTP status code if the remote answered with a non-2xx status
    #[inline]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None
        }
    }
}
