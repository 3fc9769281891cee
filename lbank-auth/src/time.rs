use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};

/// Injectable time source for the signer. The call is asynchronous because
/// a synchronized clock service may need an I/O round-trip to answer.
pub trait TimeProvider {
  /// Current unix time in seconds
  fn time(&self) -> impl Future<Output = f64> + Send;
}

/// Local wall-clock fallback used when no synchronized source is supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeProvider for SystemClock {
  async fn time(&self) -> f64 {
    SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_secs_f64())
      .unwrap_or(0.0)
  }
}
