use thiserror::Error;

/// Result type for request signing
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Error type for request signing
#[derive(Error, Debug)]
pub enum AuthError {
  /// Configured or requested signature method is neither HMAC-SHA256 nor RSA
  #[error("Unsupported signature method: {0}")]
  UnsupportedScheme(String),

  /// RSA scheme selected without any private key material
  #[error("No key material configured for the selected signature method")]
  MissingKeyMaterial,

  /// Signing attempted before timestamp/echostr were established
  #[error("Undefined signing state: {0}")]
  UndefinedSigningState(String),

  /// Invalid private key for the RSA scheme
  #[error("Failed to parse private key: {0}")]
  ParsePrivateKey(String),

  /// Failure inside a signing primitive
  #[error("Failed to compute signature: {0}")]
  Signature(String),
}
