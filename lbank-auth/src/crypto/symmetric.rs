use super::{SignatureMethod, SigningKey};
use crate::error::{AuthError, AuthResult};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};

type HmacSha256 = Hmac<sha2::Sha256>;

/* -------------------------------- */
/// Shared key for the symmetric signing scheme. The secret is the raw
/// api secret string handed out by the exchange; it is wrapped so it cannot
/// reach logs and is zeroed on drop.
pub enum SharedKey {
  /// HmacSHA256
  HmacSha256(SecretString),
}

impl SharedKey {
  /// Create a new shared key from the raw api secret
  pub fn from_secret(secret: &str) -> Self {
    SharedKey::HmacSha256(SecretString::from(secret.to_owned()))
  }
}

impl SigningKey for SharedKey {
  /// Mac over the data
  fn sign(&self, data: &[u8]) -> AuthResult<Vec<u8>> {
    match self {
      SharedKey::HmacSha256(key) => {
        let mut mac = HmacSha256::new_from_slice(key.expose_secret().as_bytes())
          .map_err(|e| AuthError::Signature(e.to_string()))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
      }
    }
  }

  fn method(&self) -> SignatureMethod {
    match self {
      SharedKey::HmacSha256(_) => SignatureMethod::HmacSha256,
    }
  }
}

impl std::fmt::Debug for SharedKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SharedKey::HmacSha256(_) => write!(f, "SharedKey::HmacSha256([REDACTED])"),
    }
  }
}
