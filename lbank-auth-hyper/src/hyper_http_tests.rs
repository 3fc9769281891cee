use super::*;
use http_body_util::{BodyExt, Full};
use lbank_auth::prelude::*;

const API_KEY: &str = "44afd74f-6fc0-443e-be72-18b2374086ad";
const API_SECRET: &str = "33559D17E95D1734CEA52AA38B7BA375";

struct FixedClock(f64);
impl TimeProvider for FixedClock {
  async fn time(&self) -> f64 {
    self.0
  }
}

fn hmac_auth() -> LbankAuth<FixedClock> {
  LbankAuth::with_clock(API_KEY, Some(API_SECRET), "HMACSHA256", FixedClock(1753095319.0)).unwrap()
}

fn build_order_request() -> Request<Full<Bytes>> {
  Request::builder()
    .method("POST")
    .uri("https://api.lbkex.com/v2/supplement/create_order.do")
    .body(Full::new(Bytes::from("symbol=ltc_btc&type=buy&price=0.1&amount=1")))
    .unwrap()
}

async fn body_string(req: Request<Full<Bytes>>) -> String {
  let bytes = req.into_body().collect().await.unwrap().to_bytes();
  String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn post_request_is_signed_into_the_body() {
  let auth = hmac_auth();
  let req = build_order_request().authenticate(&auth).await.unwrap();

  assert_eq!(req.headers().get("content-type").unwrap(), "application/x-www-form-urlencoded");
  assert_eq!(req.headers().get("timestamp").unwrap(), "1753095319000");
  assert_eq!(req.headers().get("signature_method").unwrap(), "HmacSHA256");
  assert_eq!(req.headers().get("echostr").unwrap().to_str().unwrap().len(), ECHOSTR_LEN);
  // query stays untouched on a body-bearing method
  assert!(req.uri().query().is_none());

  let body = body_string(req).await;
  // business params first, verbatim; identity params appended
  assert!(body.starts_with("symbol=ltc_btc&type=buy&price=0.1&amount=1"));
  assert!(body.contains(&format!("api_key={}", API_KEY)));
  assert!(body.contains("&sign="));
  assert!(!body.contains("timestamp="));
  assert!(!body.contains("echostr="));
}

#[tokio::test]
async fn get_request_is_signed_into_the_query() {
  let auth = hmac_auth();
  let req = Request::builder()
    .method("GET")
    .uri("https://api.lbkex.com/v2/supplement/orders_info.do?symbol=ltc_btc")
    .body(Full::new(Bytes::new()))
    .unwrap();
  let req = req.authenticate(&auth).await.unwrap();

  let query = req.uri().query().unwrap().to_string();
  assert!(query.starts_with("symbol=ltc_btc"));
  assert!(query.contains(&format!("api_key={}", API_KEY)));
  assert!(query.contains("&sign="));
  assert_eq!(req.uri().path(), "/v2/supplement/orders_info.do");

  let body = body_string(req).await;
  assert!(body.is_empty());
}

#[tokio::test]
async fn signature_matches_the_core_signer() {
  let auth = hmac_auth();
  let req = build_order_request().authenticate(&auth).await.unwrap();

  let echostr = req.headers().get("echostr").unwrap().to_str().unwrap().to_string();
  let ctx = SigningContext::try_new(1753095319000, echostr).unwrap();
  let expected = auth.signature(&ctx).unwrap();

  let body = body_string(req).await;
  assert!(body.ends_with(&format!("sign={}", expected)));
}

#[tokio::test]
async fn two_signed_requests_never_share_a_nonce() {
  let auth = hmac_auth();
  let first = build_order_request().authenticate(&auth).await.unwrap();
  let second = build_order_request().authenticate(&auth).await.unwrap();
  assert_ne!(first.headers().get("echostr").unwrap(), second.headers().get("echostr").unwrap());
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
  let auth = hmac_auth();
  let req = Request::builder()
    .method("PATCH")
    .uri("https://api.lbkex.com/v2/supplement/create_order.do")
    .body(Full::new(Bytes::new()))
    .unwrap();
  let err = req.authenticate(&auth).await.unwrap_err();
  assert!(matches!(err, HyperAuthError::UnsupportedMethod(m) if m == "PATCH"));
}

#[cfg(feature = "blocking")]
#[test]
fn sync_wrapper_signs_outside_a_runtime() {
  let auth = hmac_auth();
  let req = build_order_request().authenticate_sync(&auth).unwrap();
  assert_eq!(req.headers().get("timestamp").unwrap(), "1753095319000");
}

#[test]
fn form_round_trip() {
  let parsed = parse_form("a=1&b=&c");
  assert_eq!(parsed.get("a").unwrap(), "1");
  assert_eq!(parsed.get("b").unwrap(), "");
  assert_eq!(parsed.get("c").unwrap(), "");
  assert!(parse_form("").is_empty());
  assert_eq!(encode_form(&parse_form("a=1&b=2")), "a=1&b=2");
}
