use serde::{Serialize, Deserialize};

pub const SITE_TITLE: &str = "酷乐网游";

// Both the account release and the shop links point to the same page
pub const SHOP_URL: &str = "https://m.tb.cn/h.709jJqg8ChfhKTL";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub config: SiteSettings
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Years in operation
    pub yunyingshijian: u32,

    /// Served users counter
    pub fuwuyonghu: u32,

    /// Completed orders counter
    pub chengjiaodingdan: u32,

    /// Account release redirect link
    pub zhanghaoshifangurl: String,

    /// Shop redirect link
    pub dianpuurl: String,

    /// Watermark text put over item images
    pub tupianshuiying: String,

    #[serde(rename = "topSectionTheme")]
    pub top_section_theme: TopSectionTheme
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSectionTheme {
    pub background: String,
    pub overlay_background: String,
    pub accent_color: String,
    pub accent_color_secondary: String
}

impl SiteConfig {
    /// Get the fixed site config. Nothing is fetched from the network
    pub fn get() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            config: SiteSettings {
                yunyingshijian: 12,
                fuwuyonghu: 30,
                chengjiaodingdan: 18,
                zhanghaoshifangurl: SHOP_URL.to_string(),
                dianpuurl: SHOP_URL.to_string(),
                tupianshuiying: String::from("酷乐"),
                top_section_theme: TopSectionTheme {
                    background: String::from("linear-gradient(135deg, #1a1a1a 0%, #2d1b0f 50%, #3a2a1a 100%)"),
                    overlay_background: String::from(concat!(
                        "radial-gradient(circle at 20% 30%, rgba(255, 140, 0, 0.15) 0%, transparent 50%), ",
                        "radial-gradient(circle at 80% 70%, rgba(255, 165, 0, 0.1) 0%, transparent 50%), ",
                        "radial-gradient(circle at 50% 10%, rgba(255, 69, 0, 0.08) 0%, transparent 50%)"
                    )),
                    accent_color: String::from("linear-gradient(90deg, #ff8c00, #ffd700)"),
                    accent_color_secondary: String::from("#ffa500")
                }
            }
        }
    }

    /// JSON form of the config with the same keys the web frontend reads
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Default for SiteConfig {
    #[inline]
    fn default() -> Self {
        Self::get()
    }
}
