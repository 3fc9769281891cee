mod asymmetric;
mod symmetric;

use crate::error::{AuthError, AuthResult};
use base64::{engine::general_purpose, Engine as _};

pub use asymmetric::SecretKey;
pub use symmetric::SharedKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Signature method tags supported by the exchange
pub enum SignatureMethod {
  HmacSha256,
  Rsa,
}

impl SignatureMethod {
  /// Tag transmitted to the exchange in the `signature_method` field and header
  pub fn as_str(&self) -> &'static str {
    match self {
      SignatureMethod::HmacSha256 => "HmacSHA256",
      SignatureMethod::Rsa => "RSA",
    }
  }
}

impl std::fmt::Display for SignatureMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for SignatureMethod {
  type Err = AuthError;

  /// Accepts the configuration tags plus the wire spelling of the HMAC tag
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "HMACSHA256" | "HmacSHA256" => Ok(Self::HmacSha256),
      "RSA" => Ok(Self::Rsa),
      _ => Err(AuthError::UnsupportedScheme(s.to_string())),
    }
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> AuthResult<Vec<u8>>;
  fn method(&self) -> SignatureMethod;
}

/* -------------------------------- */
/// Key material for one account, fixed at signer construction. The closed
/// enum keeps scheme dispatch total: any tag outside the two supported
/// methods is rejected before key material exists.
pub enum LbankKey {
  Shared(SharedKey),
  Secret(SecretKey),
}

impl LbankKey {
  /// Build key material for the configured method from the account secret.
  /// An absent secret fails before anything can be signed.
  pub fn try_new(method: SignatureMethod, secret: Option<&str>) -> AuthResult<Self> {
    let secret = secret.ok_or(AuthError::MissingKeyMaterial)?;
    match method {
      SignatureMethod::HmacSha256 => Ok(Self::Shared(SharedKey::from_secret(secret))),
      SignatureMethod::Rsa => Ok(Self::Secret(SecretKey::from_key_body(secret)?)),
    }
  }

  /// Wire-format signature over the digest string: lower-case hex for
  /// HMAC-SHA256, standard base64 for RSA.
  pub fn signature(&self, digest: &str) -> AuthResult<String> {
    match self {
      Self::Shared(key) => Ok(hex::encode(key.sign(digest.as_bytes())?)),
      Self::Secret(key) => Ok(general_purpose::STANDARD.encode(key.sign(digest.as_bytes())?)),
    }
  }
}

impl SigningKey for LbankKey {
  fn sign(&self, data: &[u8]) -> AuthResult<Vec<u8>> {
    match self {
      Self::Shared(key) => key.sign(data),
      Self::Secret(key) => key.sign(data),
    }
  }

  fn method(&self) -> SignatureMethod {
    match self {
      Self::Shared(key) => key.method(),
      Self::Secret(key) => key.method(),
    }
  }
}

impl std::fmt::Debug for LbankKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("LbankKey").field(&self.method()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn method_tags_parse_and_render() {
    assert_eq!("HMACSHA256".parse::<SignatureMethod>().unwrap(), SignatureMethod::HmacSha256);
    assert_eq!("HmacSHA256".parse::<SignatureMethod>().unwrap(), SignatureMethod::HmacSha256);
    assert_eq!("RSA".parse::<SignatureMethod>().unwrap(), SignatureMethod::Rsa);
    assert_eq!(SignatureMethod::HmacSha256.to_string(), "HmacSHA256");
    assert_eq!(SignatureMethod::Rsa.to_string(), "RSA");
  }

  #[test]
  fn unknown_method_tag_is_rejected() {
    let err = "Ed25519".parse::<SignatureMethod>().unwrap_err();
    assert!(matches!(err, AuthError::UnsupportedScheme(tag) if tag == "Ed25519"));
  }

  #[test]
  fn missing_secret_is_rejected_per_method() {
    for method in [SignatureMethod::HmacSha256, SignatureMethod::Rsa] {
      let err = LbankKey::try_new(method, None).unwrap_err();
      assert!(matches!(err, AuthError::MissingKeyMaterial));
    }
  }

  #[test]
  fn hmac_signature_is_lowercase_hex() {
    let key = LbankKey::try_new(SignatureMethod::HmacSha256, Some("secret")).unwrap();
    let signature = key.signature("681448D56BCE4EEFF3DF3D10530DDD10").unwrap();
    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  }

  #[test]
  fn debug_shows_no_key_material() {
    let key = LbankKey::try_new(SignatureMethod::HmacSha256, Some("very-secret")).unwrap();
    let debug = format!("{:?}", key);
    assert!(!debug.contains("very-secret"));
  }
}
