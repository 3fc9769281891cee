use crate::error::{HyperAuthError, HyperAuthResult};
use lbank_auth::prelude::constants::{RateLimit, RATE_LIMITS};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;

/* --------------------------------------- */
/// Window-based request gate keyed by named endpoint buckets. A call is
/// admitted while its bucket holds fewer than `limit` entries inside the
/// window and rejected otherwise. The signer never consults this; the
/// surrounding client gates calls before they reach the signer.
pub struct ApiThrottler {
  limits: HashMap<&'static str, RateLimit>,
  calls: Mutex<HashMap<&'static str, VecDeque<Instant>>>,
}

impl ApiThrottler {
  /// Throttler over the exchange's published limit table
  pub fn new() -> Self {
    Self::with_limits(RATE_LIMITS)
  }

  /// Throttler over a custom limit table
  pub fn with_limits(limits: &[RateLimit]) -> Self {
    Self {
      limits: limits.iter().map(|l| (l.limit_id, *l)).collect(),
      calls: Mutex::new(HashMap::new()),
    }
  }

  /// Admits and records one call on the bucket, or rejects it when the
  /// window is full. Buckets outside the table pass unthrottled.
  pub fn try_acquire(&self, limit_id: &str) -> HyperAuthResult<()> {
    let Some(limit) = self.limits.get(limit_id).copied() else {
      return Ok(());
    };
    let now = Instant::now();
    let mut calls = self.calls.lock();
    let bucket = calls.entry(limit.limit_id).or_default();
    while bucket.front().is_some_and(|t| now.duration_since(*t) >= limit.window) {
      bucket.pop_front();
    }
    if bucket.len() >= limit.limit {
      warn!(limit_id, limit = limit.limit, "rate limit window exhausted");
      return Err(HyperAuthError::RateLimitExceeded {
        limit_id: limit.limit_id.to_string(),
        limit: limit.limit,
      });
    }
    bucket.push_back(now);
    Ok(())
  }
}

impl Default for ApiThrottler {
  fn default() -> Self {
    Self::new()
  }
}
