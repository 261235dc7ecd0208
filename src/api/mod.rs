use std::fmt::{Debug, Display};

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::consts::*;
use crate::error::{ApiError, Result};
use crate::request_id::RequestId;
use crate::site_config::SiteConfig;
use crate::transport::{Method, RawResponse, RequestDescriptor, ReqwestTransport, Transport};

pub mod schema;

use schema::{GoodsListQuery, ReportView};

/// Client of the game listing API.
///
/// Every method issues exactly one blocking request (except [`Api::site_config`])
/// and returns the decoded JSON body as is. Nothing is retried or cached.
///
/// Query string values are percent-encoded, so an id like `a&b` can't inject
/// extra parameters.
#[derive(Debug, Clone)]
pub struct Api<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T
}

impl Api<ReqwestTransport> {
    /// Create client which sends requests with `reqwest`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validated()?;
        let transport = ReqwestTransport::new(&config)?;

        Ok(Self {
            config,
            transport
        })
    }

    /// Create client with the config taken from environment variables
    #[inline]
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> Api<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
            transport
        })
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fixed site config. Doesn't touch the network
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn site_config(&self) -> Result<Value> {
        SiteConfig::get().to_json()
            .map_err(ApiError::Serialize)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn hot_game_list(&self) -> Result<Value> {
        tracing::trace!("Fetching hot games list");

        self.execute(self.get(HOT_GAME_LIST_PATH, &[]))
    }

    /// Ask the remote for a device identifier (udid)
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn udid(&self) -> Result<Value> {
        tracing::trace!("Fetching device identifier");

        self.execute(self.get(UDID_PATH, &[]))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn report_view(&self, page: impl Serialize + Debug, udid: impl Serialize + Debug) -> Result<Value> {
        tracing::trace!("Reporting page view");

        let body = ReportView {
            page: serde_json::to_value(page).map_err(ApiError::Serialize)?,
            udid: serde_json::to_value(udid).map_err(ApiError::Serialize)?
        };

        let mut request = self.post(REPORT_VIEW_PATH, &body)?;

        request.set_header("Content-Type", CONTENT_TYPE_JSON);

        self.execute(request)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn game_list(&self) -> Result<Value> {
        tracing::trace!("Fetching games list");

        self.execute(self.get(GAME_LIST_PATH, &[]))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn platform_list(&self, game_id: impl Display + Debug) -> Result<Value> {
        tracing::trace!("Fetching platforms list");

        self.execute(self.get(PLATFORM_LIST_PATH, &[
            ("gameid", game_id.to_string())
        ]))
    }

    /// Fetch goods list page.
    ///
    /// Each call is tagged with a freshly generated `REQUESTID` header and a
    /// `Referer` pointing to the game page.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn goods_list(&self, query: &GoodsListQuery) -> Result<Value> {
        let request_id = RequestId::generate();

        tracing::debug!(request_id = request_id.as_str(), "Fetching goods list");

        let mut request = self.post(GOODS_LIST_PATH, query)?;

        request.set_header("Content-Type", CONTENT_TYPE_JSON);
        request.set_header("Origin", &self.config.base_url);
        request.set_header(REQUEST_ID_HEADER, request_id);
        request.set_header("Referer", format!("{}/game/{}", self.config.base_url, query.game_path_segment()));

        self.execute(request)
    }

    /// Fetch filter options available for the game category
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn filter_options(&self, game_id: impl Display + Debug, category_id: impl Display + Debug) -> Result<Value> {
        tracing::trace!("Fetching filter options");

        self.execute(self.get(FILTER_OPTIONS_PATH, &[
            ("gameid", game_id.to_string()),
            ("categoryid", category_id.to_string())
        ]))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn client_list(&self, game_id: impl Display + Debug, category_id: impl Display + Debug) -> Result<Value> {
        tracing::trace!("Fetching clients list");

        self.execute(self.get(CLIENT_LIST_PATH, &[
            ("gameid", game_id.to_string()),
            ("categoryid", category_id.to_string())
        ]))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn server_list(&self, category_id: impl Display + Debug) -> Result<Value> {
        tracing::trace!("Fetching servers list");

        self.execute(self.get(SERVER_LIST_PATH, &[
            ("categoryid", category_id.to_string())
        ]))
    }

    /// Fetch hot search terms. The platform is always [`HOT_SEARCH_PLATFORM_ID`]
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn hot_search(
        &self,
        game_id: impl Display + Debug,
        category_id: impl Display + Debug,
        parent_id: impl Display + Debug
    ) -> Result<Value> {
        tracing::trace!("Fetching hot search terms");

        self.execute(self.get(HOT_SEARCH_PATH, &[
            ("gameid", game_id.to_string()),
            ("categoryid", category_id.to_string()),
            ("parentId", parent_id.to_string()),
            ("platformid", HOT_SEARCH_PLATFORM_ID.to_string())
        ]))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn item_detail(&self, good_id: impl Display + Debug, game_id: impl Display + Debug) -> Result<Value> {
        tracing::trace!("Fetching item details");

        self.execute(self.get(ITEM_DETAIL_PATH, &[
            ("goodid", good_id.to_string()),
            ("gameid", game_id.to_string())
        ]))
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{path}", self.config.base_url);

        if !query.is_empty() {
            let query = query.iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");

            url.push('?');
            url.push_str(&query);
        }

        url
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = base_headers()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<Vec<_>>();

        headers.push((String::from("Referer"), format!("{}/", self.config.base_url)));

        headers
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> RequestDescriptor {
        RequestDescriptor {
            method: Method::Get,
            url: self.url(path, query),
            headers: self.headers(),
            body: None
        }
    }

    fn post(&self, path: &str, body: &impl Serialize) -> Result<RequestDescriptor> {
        Ok(RequestDescriptor {
            method: Method::Post,
            url: self.url(path, &[]),
            headers: self.headers(),
            body: Some(serde_json::to_value(body).map_err(ApiError::Serialize)?)
        })
    }

    fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        tracing::trace!(method = %request.method, url = %request.url, "Sending request");

        let response: RawResponse = self.transport.send(&request)?;

        if !response.is_ok() {
            return Err(ApiError::Status {
                url: request.url,
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned()
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| ApiError::Json {
            url: request.url,
            source
        })
    }
}
