pub mod consts;
pub mod config;
pub mod error;
pub mod request_id;
pub mod site_config;
pub mod transport;
pub mod api;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::config::ClientConfig;
    pub use super::error::{ApiError, Result};
    pub use super::request_id::RequestId;
    pub use super::site_config::SiteConfig;
    pub use super::transport::{Method, RequestDescriptor, RawResponse, Transport, ReqwestTransport};
    pub use super::api::Api;
    pub use super::api::schema::{GoodsListQuery, ReportView};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
