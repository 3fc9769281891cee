use md5::{Digest, Md5};

/* ----------------------------------------------------------------- */
/// Ordered sequence of key-value pairs used as the signature's message
/// input. Keys are sorted in ascending byte-wise order, independent of the
/// insertion order of the source mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPayload {
  pairs: Vec<(String, String)>,
}

impl CanonicalPayload {
  /// Renders each pair as `key=value` and joins with `&`. No URL-encoding
  /// is applied: this is a digest input, not a transport query string. An
  /// empty payload renders the empty string.
  pub fn canonical_string(&self) -> String {
    self
      .pairs
      .iter()
      .map(|(k, v)| format!("{}={}", k, v))
      .collect::<Vec<_>>()
      .join("&")
  }

  /// Upper-case hex MD5 over the UTF-8 bytes of the canonical string. This
  /// is always the first step of signing regardless of scheme.
  pub fn digest(&self) -> String {
    let mut hasher = Md5::new();
    hasher.update(self.canonical_string().as_bytes());
    hex::encode_upper(hasher.finalize())
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CanonicalPayload {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut pairs: Vec<(String, String)> = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Self { pairs }
  }
}
