use crate::{
  canonical::CanonicalPayload,
  context::SigningContext,
  crypto::{LbankKey, SignatureMethod, SigningKey},
  error::AuthResult,
  request::{RestRequest, WsRequest},
  time::{SystemClock, TimeProvider},
  trace::*,
};

/// Content type required on signed requests
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Header names carrying identity metadata
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_TIMESTAMP: &str = "timestamp";
pub const HEADER_SIGNATURE_METHOD: &str = "signature_method";
pub const HEADER_ECHOSTR: &str = "echostr";

/* ----------------------------------------------------------------- */
/// Signs outbound REST requests so private endpoints accept them as
/// authenticated. Credentials and the signature method are fixed at
/// construction and read-only afterwards; each signing call threads its own
/// [`SigningContext`] through, so one instance is safe under concurrent
/// in-flight requests.
pub struct LbankAuth<C = SystemClock> {
  api_key: String,
  key: LbankKey,
  clock: C,
}

impl LbankAuth<SystemClock> {
  /// Build a signer over the local wall clock. `method_tag` must be one of
  /// the configuration tags `HMACSHA256` or `RSA`; for `RSA` the api secret
  /// is the delimiter-less private key body.
  pub fn new(api_key: &str, api_secret: Option<&str>, method_tag: &str) -> AuthResult<Self> {
    Self::with_clock(api_key, api_secret, method_tag, SystemClock)
  }
}

impl<C: TimeProvider> LbankAuth<C> {
  /// Build a signer against an injected time source, e.g. a clock service
  /// synchronized with the exchange.
  pub fn with_clock(api_key: &str, api_secret: Option<&str>, method_tag: &str, clock: C) -> AuthResult<Self> {
    let method = method_tag.parse::<SignatureMethod>()?;
    let key = LbankKey::try_new(method, api_secret)?;
    debug!(method = %method, "signature method selected");
    Ok(Self {
      api_key: api_key.to_owned(),
      key,
      clock,
    })
  }

  /// The configured signature method
  pub fn method(&self) -> SignatureMethod {
    self.key.method()
  }

  /// The account api key (public, safe to log)
  pub fn api_key(&self) -> &str {
    &self.api_key
  }

  /// Sign the identity fields for one request and write the result back
  /// into it: identity metadata in the headers, `api_key` and `sign` merged
  /// into the form body (body-bearing methods) or the query (otherwise).
  /// Caller-supplied business parameters are transmitted verbatim and are
  /// not covered by the signature.
  pub async fn rest_authenticate(&self, request: &mut RestRequest) -> AuthResult<()> {
    let ctx = SigningContext::generate(&self.clock).await?;
    let sign = self.signature(&ctx)?;

    request
      .headers
      .insert(HEADER_CONTENT_TYPE.to_owned(), FORM_CONTENT_TYPE.to_owned());
    request
      .headers
      .insert(HEADER_TIMESTAMP.to_owned(), ctx.timestamp_ms.to_string());
    request
      .headers
      .insert(HEADER_SIGNATURE_METHOD.to_owned(), self.method().as_str().to_owned());
    request.headers.insert(HEADER_ECHOSTR.to_owned(), ctx.echostr.clone());

    let identity = if request.method.carries_body() {
      &mut request.data
    } else {
      &mut request.params
    };
    identity.insert("api_key".to_owned(), self.api_key.clone());
    identity.insert("sign".to_owned(), sign);
    Ok(())
  }

  /// The private websocket channel needs no request-level signature; the
  /// request passes through unchanged.
  pub async fn ws_authenticate(&self, _request: &mut WsRequest) -> AuthResult<()> {
    Ok(())
  }

  /// Signature over the identity mapping for a given context: canonical
  /// string, MD5 upper hex, then the scheme signature in wire encoding.
  pub fn signature(&self, ctx: &SigningContext) -> AuthResult<String> {
    let timestamp = ctx.timestamp_ms.to_string();
    let payload: CanonicalPayload = [
      ("api_key", self.api_key.as_str()),
      ("echostr", ctx.echostr.as_str()),
      ("signature_method", self.method().as_str()),
      ("timestamp", timestamp.as_str()),
    ]
    .into_iter()
    .collect();
    self.key.signature(&payload.digest())
  }
}

impl<C> std::fmt::Debug for LbankAuth<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LbankAuth")
      .field("api_key", &self.api_key)
      .field("key", &self.key)
      .finish_non_exhaustive()
  }
}
