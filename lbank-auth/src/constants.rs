//! Endpoint paths, method tags and rate-limit buckets published by the
//! exchange.

use std::time::Duration;

/// REST API host
pub const REST_URL: &str = "https://api.lbkex.com";
/// Public API version path segment
pub const PUBLIC_API_VERSION: &str = "v2";
/// Private websocket endpoint
pub const WSS_URL: &str = "wss://www.lbkex.net/ws/V2/";

// Public endpoints
pub const SERVER_TIME_PATH: &str = "/timestamp.do";
pub const SERVER_PING_PATH: &str = "/supplement/system_ping.do";
pub const ACCURACY_PATH: &str = "/accuracy.do";
pub const TRADING_PAIRS_PATH: &str = "/currencyPairs.do";

// Private endpoints
pub const ACCOUNTS_PATH: &str = "/supplement/user_info.do";
pub const ORDER_CREATE_PATH: &str = "/supplement/create_order.do";
pub const ORDER_CANCEL_PATH: &str = "/supplement/cancel_order.do";
pub const ORDER_CHECK_PATH: &str = "/supplement/orders_info.do";
pub const ORDER_OPEN_PATH: &str = "/supplement/orders_info_no_deal.do";
pub const ALL_ORDERS_PATH: &str = "/supplement/orders_info_history.do";
pub const ALL_TRADES_PATH: &str = "/supplement/transaction_history.do";

// Shared rate-limit buckets
pub const CREATE_ORDER_LIMIT_ID: &str = "CREATE_ORDER";
pub const CANCEL_ORDER_LIMIT_ID: &str = "CANCEL_ORDER";
pub const OTHER_REQUESTS_LIMIT_ID: &str = "OTHER_REQUESTS";

const TEN_SECONDS: Duration = Duration::from_secs(10);

/// A named rate-limit bucket: at most `limit` calls per `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
  pub limit_id: &'static str,
  pub limit: usize,
  pub window: Duration,
}

/// Window limits published by the exchange, one bucket per endpoint plus
/// the shared order buckets
pub const RATE_LIMITS: &[RateLimit] = &[
  RateLimit { limit_id: CREATE_ORDER_LIMIT_ID, limit: 500, window: TEN_SECONDS },
  RateLimit { limit_id: CANCEL_ORDER_LIMIT_ID, limit: 500, window: TEN_SECONDS },
  RateLimit { limit_id: OTHER_REQUESTS_LIMIT_ID, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: SERVER_TIME_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: SERVER_PING_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ACCURACY_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: TRADING_PAIRS_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ACCOUNTS_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ORDER_CREATE_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ORDER_CANCEL_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ORDER_CHECK_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ORDER_OPEN_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ALL_ORDERS_PATH, limit: 200, window: TEN_SECONDS },
  RateLimit { limit_id: ALL_TRADES_PATH, limit: 200, window: TEN_SECONDS },
];

/// Return code the exchange answers with when it rejects the auth timestamp
pub const RET_CODE_AUTH_TIMESTAMP_ERROR: &str = "10600";
