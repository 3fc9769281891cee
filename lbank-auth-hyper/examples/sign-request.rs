use bytes::Bytes;
use http::Request;
use http_body_util::{BodyExt, Full};
use lbank_auth_hyper::{prelude::*, ApiThrottler, AuthenticateRequest};

// Fixture credentials; real keys come from the exchange account page.
const API_KEY: &str = "44afd74f-6fc0-443e-be72-18b2374086ad";
const API_SECRET: &str = "33559D17E95D1734CEA52AA38B7BA375";

#[tokio::main]
async fn main() {
  // one signer per account, HMAC-SHA256 scheme
  let auth = LbankAuth::new(API_KEY, Some(API_SECRET), "HMACSHA256").unwrap();

  // the surrounding client gates calls per named bucket before signing
  let throttler = ApiThrottler::new();
  throttler.try_acquire(constants::CREATE_ORDER_LIMIT_ID).unwrap();

  let req = Request::builder()
    .method("POST")
    .uri(format!(
      "{}/{}{}",
      constants::REST_URL,
      constants::PUBLIC_API_VERSION,
      constants::ORDER_CREATE_PATH
    ))
    .body(Full::new(Bytes::from("symbol=ltc_btc&type=buy&price=0.1&amount=1")))
    .unwrap();

  let signed = req.authenticate(&auth).await.unwrap();

  println!("{} {}", signed.method(), signed.uri());
  for (name, value) in signed.headers() {
    println!("{}: {}", name, value.to_str().unwrap());
  }
  let body = signed.into_body().collect().await.unwrap().to_bytes();
  println!("\n{}", String::from_utf8_lossy(&body));
}
