//! Request signing for the LBank exchange private REST API.
//!
//! Private endpoints require every request to carry an MD5-then-sign
//! signature over its identity fields (api key, millisecond timestamp,
//! single-use echo string and the signature method tag). Two interchangeable
//! schemes are supported, selected per account at construction:
//! HMAC-SHA256 over a shared secret, or RSA (PKCS#1 v1.5 + SHA-256) over a
//! private key whose PEM delimiters the exchange strips.
//!
//! [`LbankAuth::rest_authenticate`](crate::prelude::LbankAuth) takes a
//! mutable request, signs its identity fields and writes the signature,
//! headers and identity params back in place. Business parameters are
//! transmitted verbatim and are not covered by the signature.

mod auth;
mod canonical;
pub mod constants;
mod context;
mod crypto;
mod error;
mod request;
mod time;
mod trace;

pub mod prelude {
  pub use crate::auth::{
    LbankAuth, FORM_CONTENT_TYPE, HEADER_CONTENT_TYPE, HEADER_ECHOSTR, HEADER_SIGNATURE_METHOD, HEADER_TIMESTAMP,
  };
  pub use crate::canonical::CanonicalPayload;
  pub use crate::constants;
  pub use crate::context::{random_echostr, SigningContext, ECHOSTR_LEN};
  pub use crate::crypto::{LbankKey, SecretKey, SharedKey, SignatureMethod, SigningKey};
  pub use crate::error::{AuthError, AuthResult};
  pub use crate::request::{RestMethod, RestRequest, WsRequest};
  pub use crate::time::{SystemClock, TimeProvider};
}

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::prelude::*;

  // Fixture account from the exchange integration tests
  const API_KEY: &str = "44afd74f-6fc0-443e-be72-18b2374086ad";
  const API_SECRET: &str = "33559D17E95D1734CEA52AA38B7BA375";
  const FIXED_TIMESTAMP: i64 = 1753095319000;
  const FIXED_ECHOSTR: &str = "1";

  const CANONICAL_STRING: &str =
    "api_key=44afd74f-6fc0-443e-be72-18b2374086ad&echostr=1&signature_method=HmacSHA256&timestamp=1753095319000";
  const MD5_DIGEST: &str = "681448D56BCE4EEFF3DF3D10530DDD10";
  const HMAC_SIGNATURE: &str = "da517899e4a217aa8d49c93f0e1f207f9e190841e16ffe545bd3ca90229d2911";

  #[test]
  fn test_canonical_string_vector() {
    let timestamp = FIXED_TIMESTAMP.to_string();
    let payload: CanonicalPayload = [
      ("signature_method", SignatureMethod::HmacSha256.as_str()),
      ("timestamp", timestamp.as_str()),
      ("api_key", API_KEY),
      ("echostr", FIXED_ECHOSTR),
    ]
    .into_iter()
    .collect();
    assert_eq!(payload.canonical_string(), CANONICAL_STRING);
    assert_eq!(payload.digest(), MD5_DIGEST);
  }

  #[test]
  fn test_hmac_signature_vector() {
    let auth = LbankAuth::new(API_KEY, Some(API_SECRET), "HMACSHA256").unwrap();
    let ctx = SigningContext::try_new(FIXED_TIMESTAMP, FIXED_ECHOSTR).unwrap();
    assert_eq!(auth.signature(&ctx).unwrap(), HMAC_SIGNATURE);
    // deterministic for a fixed context
    assert_eq!(auth.signature(&ctx).unwrap(), HMAC_SIGNATURE);
  }

  #[test]
  fn test_signature_avalanches_on_any_field() {
    let auth = LbankAuth::new(API_KEY, Some(API_SECRET), "HMACSHA256").unwrap();

    let ctx = SigningContext::try_new(FIXED_TIMESTAMP, "2").unwrap();
    assert_eq!(
      auth.signature(&ctx).unwrap(),
      "da47a1812046021495871478f8dcf7e68b1e3c423217aaa1dfa762462c617eae"
    );

    let ctx = SigningContext::try_new(FIXED_TIMESTAMP + 1, FIXED_ECHOSTR).unwrap();
    assert_ne!(auth.signature(&ctx).unwrap(), HMAC_SIGNATURE);

    let other = LbankAuth::new("other-key", Some(API_SECRET), "HMACSHA256").unwrap();
    let ctx = SigningContext::try_new(FIXED_TIMESTAMP, FIXED_ECHOSTR).unwrap();
    assert_ne!(other.signature(&ctx).unwrap(), HMAC_SIGNATURE);
  }

  #[test]
  fn test_hmac_config_tags_share_one_wire_tag() {
    let ctx = SigningContext::try_new(FIXED_TIMESTAMP, FIXED_ECHOSTR).unwrap();
    for tag in ["HMACSHA256", "HmacSHA256"] {
      let auth = LbankAuth::new(API_KEY, Some(API_SECRET), tag).unwrap();
      assert_eq!(auth.method().as_str(), "HmacSHA256");
      assert_eq!(auth.signature(&ctx).unwrap(), HMAC_SIGNATURE);
    }
  }
}
