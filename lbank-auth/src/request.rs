use indexmap::IndexMap;

/* ----------------------------------------------------------------- */
/// HTTP methods of the exchange REST surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
  Get,
  Post,
  Put,
  Delete,
}

impl RestMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      RestMethod::Get => "GET",
      RestMethod::Post => "POST",
      RestMethod::Put => "PUT",
      RestMethod::Delete => "DELETE",
    }
  }

  /// Whether signed identity params travel in the form body rather than the
  /// query
  pub fn carries_body(&self) -> bool {
    matches!(self, RestMethod::Post | RestMethod::Put)
  }
}

impl std::fmt::Display for RestMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/* ----------------------------------------------------------------- */
/// Outbound REST request as seen by the signer: method, destination path,
/// header mapping, form body fields (`data`) and query params (`params`),
/// all mutable in place. Business parameters supplied by the caller stay
/// untouched through signing.
#[derive(Debug, Clone)]
pub struct RestRequest {
  pub method: RestMethod,
  pub path: String,
  pub headers: IndexMap<String, String>,
  pub data: IndexMap<String, String>,
  pub params: IndexMap<String, String>,
}

impl RestRequest {
  pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
      headers: IndexMap::new(),
      data: IndexMap::new(),
      params: IndexMap::new(),
    }
  }

  /// Add a form body field
  pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.data.insert(key.into(), value.into());
    self
  }

  /// Add a query param
  pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }
}

/// Private websocket request. The exchange applies no request-level
/// signature on this channel, so the payload is opaque to the signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WsRequest {
  pub payload: String,
}
