use crate::{
  error::{AuthError, AuthResult},
  time::TimeProvider,
};
use rand::seq::SliceRandom;

/// Echo string length required by the exchange
pub const ECHOSTR_LEN: usize = 35;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/* ----------------------------------------------------------------- */
/// Ephemeral state for exactly one signing operation: the millisecond
/// timestamp and the single-use echo string. Each call to the signer builds
/// its own context and consumes it; nothing here ever lives on the signer,
/// so concurrent calls cannot observe or clear each other's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
  pub timestamp_ms: i64,
  pub echostr: String,
}

impl SigningContext {
  /// Build a context from caller-supplied values, validating that both are
  /// established. Intended for tests and clock doubles.
  pub fn try_new(timestamp_ms: i64, echostr: impl Into<String>) -> AuthResult<Self> {
    let echostr = echostr.into();
    if timestamp_ms <= 0 {
      return Err(AuthError::UndefinedSigningState("timestamp is not established".to_string()));
    }
    if echostr.is_empty() {
      return Err(AuthError::UndefinedSigningState("echostr is not established".to_string()));
    }
    Ok(Self { timestamp_ms, echostr })
  }

  /// Fresh context: millisecond timestamp from the time provider plus a
  /// random echo string.
  pub async fn generate<C: TimeProvider>(clock: &C) -> AuthResult<Self> {
    let timestamp_ms = (clock.time().await * 1e3) as i64;
    Self::try_new(timestamp_ms, random_echostr())
  }
}

/// Random alphanumeric token of [`ECHOSTR_LEN`] characters, drawn without
/// replacement from the mixed-case-plus-digits alphabet.
pub fn random_echostr() -> String {
  let mut chars = ALPHABET.to_vec();
  chars.shuffle(&mut rand::rng());
  chars.truncate(ECHOSTR_LEN);
  chars.into_iter().map(char::from).collect()
}
