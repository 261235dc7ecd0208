use serde::{Serialize, Deserialize};
use serde_json::Value;

/// Body of the page view report. Both values are sent as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub page: Value,
    pub udid: Value
}

/// Body of the goods list request.
///
/// Every field is opaque to this client and is sent exactly as given, so a numeric
/// value stays a JSON number and a string stays a JSON string (`"page": "1"` is
/// as valid as `"page": 1`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsListQuery {
    pub game_id: Value,
    pub platform_id: Value,
    pub platform_name: Value,
    pub client_id: Value,
    pub category_id: Value,
    pub parent_id: Value,
    pub query_type: Value,
    pub page: Value,
    pub page_size: Value,
    pub server_id: Value,
    pub server_name: Value,
    pub sort_id: Value,
    pub sort_panel_name: Value,
    pub client_name: Value
}

impl GoodsListQuery {
    /// Game id the way it appears in the frontend URLs (`/game/{id}`)
    pub fn game_path_segment(&self) -> String {
        match &self.game_id {
            Value::String(id) => id.clone(),
            Value::Null => String::new(),
            id => id.to_string()
        }
    }
}
