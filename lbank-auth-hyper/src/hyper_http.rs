use crate::error::{HyperAuthError, HyperAuthResult};
use bytes::{Buf, Bytes};
use http::{
  header::{HeaderName, HeaderValue},
  Request, Uri,
};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use indexmap::IndexMap;
use lbank_auth::prelude::{LbankAuth, RestMethod, RestRequest, TimeProvider};
use std::future::Future;

// hyper's http specific extension to sign exchange REST requests

/* --------------------------------------- */
/// Collects the message body into a single bytes object
pub trait IntoBodyBytes: http_body::Body {
  fn into_bytes(self) -> impl Future<Output = Result<Bytes, Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async {
      let mut body_buf = self.collect().await?.aggregate();
      Ok(body_buf.copy_to_bytes(body_buf.remaining()))
    }
  }
}

impl<T: ?Sized> IntoBodyBytes for T where T: http_body::Body {}

/* --------------------------------------- */
/// A trait to sign http requests for the exchange private REST API
pub trait AuthenticateRequest {
  type Error;

  /// Consumes the request, signs its identity fields and returns it with
  /// the identity headers set and `api_key`/`sign` merged into the form
  /// body (body-bearing methods) or the query (otherwise). Form fields
  /// already present are treated as business parameters and pass through
  /// verbatim.
  fn authenticate<C>(self, auth: &LbankAuth<C>) -> impl Future<Output = Result<Request<Full<Bytes>>, Self::Error>> + Send
  where
    Self: Sized,
    C: TimeProvider + Sync;
}

impl<B> AuthenticateRequest for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
  <B as Body>::Error: std::fmt::Display,
{
  type Error = HyperAuthError;

  async fn authenticate<C>(self, auth: &LbankAuth<C>) -> HyperAuthResult<Request<Full<Bytes>>>
  where
    C: TimeProvider + Sync,
  {
    let (mut parts, body) = self.into_parts();
    let body_bytes = body
      .into_bytes()
      .await
      .map_err(|e| HyperAuthError::HttpBodyError(e.to_string()))?;
    let body_str = std::str::from_utf8(&body_bytes).map_err(|e| HyperAuthError::HttpBodyError(e.to_string()))?;

    let mut request = RestRequest::new(rest_method(&parts.method)?, parts.uri.path());
    request.params = parse_form(parts.uri.query().unwrap_or_default());
    request.data = parse_form(body_str);

    auth.rest_authenticate(&mut request).await?;

    for (name, value) in &request.headers {
      parts
        .headers
        .insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
    }

    if !request.params.is_empty() {
      let path_and_query = format!("{}?{}", parts.uri.path(), encode_form(&request.params));
      let mut uri_parts = parts.uri.into_parts();
      uri_parts.path_and_query = Some(path_and_query.parse()?);
      parts.uri = Uri::from_parts(uri_parts)?;
    }

    let body = Full::new(Bytes::from(encode_form(&request.data)));
    Ok(Request::from_parts(parts, body))
  }
}

/* --------------------------------------- */
#[cfg(feature = "blocking")]
/// Synchronous counterpart of [`AuthenticateRequest`].
///
/// Delegates to the async method via `futures::executor::block_on`.
///
/// # Panics
///
/// Panics if called from within an async runtime (e.g. a `tokio` task).
/// Use the async [`AuthenticateRequest`] method instead when you are
/// already in an async context.
pub trait AuthenticateRequestSync: AuthenticateRequest {
  fn authenticate_sync<C>(self, auth: &LbankAuth<C>) -> Result<Request<Full<Bytes>>, Self::Error>
  where
    Self: Sized,
    C: TimeProvider + Sync;
}

#[cfg(feature = "blocking")]
impl<B> AuthenticateRequestSync for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
  <B as Body>::Error: std::fmt::Display,
{
  fn authenticate_sync<C>(self, auth: &LbankAuth<C>) -> HyperAuthResult<Request<Full<Bytes>>>
  where
    C: TimeProvider + Sync,
  {
    futures::executor::block_on(self.authenticate(auth))
  }
}

/* --------------------------------------- */
fn rest_method(method: &http::Method) -> HyperAuthResult<RestMethod> {
  match method.as_str() {
    "GET" => Ok(RestMethod::Get),
    "POST" => Ok(RestMethod::Post),
    "PUT" => Ok(RestMethod::Put),
    "DELETE" => Ok(RestMethod::Delete),
    other => Err(HyperAuthError::UnsupportedMethod(other.to_string())),
  }
}

/// Splits a `k=v&...` mapping. Values are kept verbatim: the exchange signs
/// and transmits them without URL-encoding.
fn parse_form(s: &str) -> IndexMap<String, String> {
  s.split('&')
    .filter(|pair| !pair.is_empty())
    .map(|pair| match pair.split_once('=') {
      Some((k, v)) => (k.to_owned(), v.to_owned()),
      None => (pair.to_owned(), String::new()),
    })
    .collect()
}

fn encode_form(map: &IndexMap<String, String>) -> String {
  map
    .iter()
    .map(|(k, v)| format!("{}={}", k, v))
    .collect::<Vec<_>>()
    .join("&")
}

#[cfg(test)]
#[path = "hyper_http_tests.rs"]
mod hyper_http_tests;
