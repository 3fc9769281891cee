use lbank_auth::prelude::AuthError;
use thiserror::Error;

/// Result type for request signing over `http` crate types
pub type HyperAuthResult<T> = std::result::Result<T, HyperAuthError>;

/// Error type for request signing over `http` crate types
#[derive(Error, Debug)]
pub enum HyperAuthError {
  /// HTTP method outside the exchange REST surface
  #[error("Unsupported http method: {0}")]
  UnsupportedMethod(String),

  /// Http body error
  #[error("Http body error: {0}")]
  HttpBodyError(String),

  /// Failed to build header name
  #[error("Failed to build header name: {0}")]
  InvalidHeaderName(#[from] http::header::InvalidHeaderName),

  /// Failed to build header value
  #[error("Failed to build header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

  /// Failed to rebuild the request uri with signed query params
  #[error("Failed to rebuild uri: {0}")]
  InvalidUri(#[from] http::uri::InvalidUri),

  /// Failed to reassemble the request uri from parts
  #[error("Failed to rebuild uri: {0}")]
  InvalidUriParts(#[from] http::uri::InvalidUriParts),

  /// Rate-limit bucket exhausted for the current window
  #[error("Rate limit exceeded for bucket {limit_id}: {limit} calls per window")]
  RateLimitExceeded { limit_id: String, limit: usize },

  /// Inherited from AuthError
  #[error("AuthError: {0}")]
  AuthError(#[from] AuthError),
}
