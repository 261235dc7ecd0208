pub const DEFAULT_BASE_URL: &str = "http://df.n.987qf.xyz";

pub const HOT_GAME_LIST_PATH: &str = "/api/gethotgamelist.php";
pub const UDID_PATH: &str = "/api/getudid.php";
pub const REPORT_VIEW_PATH: &str = "/api/reportview.php";
pub const GAME_LIST_PATH: &str = "/api/getgamelist.php";
pub const PLATFORM_LIST_PATH: &str = "/api/getplatform.php";
pub const GOODS_LIST_PATH: &str = "/api/getgoodslistv3.php";
pub const FILTER_OPTIONS_PATH: &str = "/api/getshaixuan.php";
pub const CLIENT_LIST_PATH: &str = "/api/getclientlist.php";

// Misspelled on the remote side
pub const SERVER_LIST_PATH: &str = "/api/getseverlist.php";

pub const HOT_SEARCH_PATH: &str = "/api/gethotsearch.php";
pub const ITEM_DETAIL_PATH: &str = "/api/getxiangqing.php";

/// Platform id the hot search endpoint is always queried with
pub const HOT_SEARCH_PLATFORM_ID: u32 = 2;

pub const ACCEPT: &str = "application/json, text/plain, */*";
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9";
pub const CACHE_CONTROL: &str = "no-cache";
pub const CONNECTION: &str = "keep-alive";
pub const PRAGMA: &str = "no-cache";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.6261.95 Mobile Safari/537.36"
);

/// Name of the per-call header attached to goods list requests
pub const REQUEST_ID_HEADER: &str = "REQUESTID";

pub const BASE_URL_ENV: &str = "KULE_API_BASE_URL";
pub const REQUESTS_TIMEOUT_ENV: &str = "KULE_API_REQUESTS_TIMEOUT";
pub const ACCEPT_INVALID_CERTS_ENV: &str = "KULE_API_ACCEPT_INVALID_CERTS";

/// Fixed headers sent with every request, in wire order.
///
/// `Referer` is not listed here because it depends on the base URL.
#[inline]
pub fn base_headers() -> [(&'static str, &'static str); 6] {
    [
        ("Accept", ACCEPT),
        ("Accept-Language", ACCEPT_LANGUAGE),
        ("Cache-Control", CACHE_CONTROL),
        ("Connection", CONNECTION),
        ("Pragma", PRAGMA),
        ("User-Agent", USER_AGENT)
    ]
}
