//! # lbank-auth-hyper
//!
//! `lbank-auth-hyper` extends hyper's http request type with the ability to
//! sign requests for the LBank private REST API via [`lbank-auth`]. The
//! extension collects the form body, signs the identity fields and rebuilds
//! the request with the signed headers, query or body in place. It also
//! ships the window-based endpoint throttler the surrounding connector
//! gates requests with before they reach the signer.
//!
//! ## Async-first design
//!
//! The primary API is async: timestamp acquisition may await a clock
//! service synchronized with the exchange.
//!
//! ## Blocking API
//!
//! When the `blocking` feature is enabled (on by default), a synchronous
//! wrapper is provided via [`AuthenticateRequestSync`]. It uses
//! `futures::executor::block_on` internally and is intended **exclusively
//! for non-async contexts**.
//!
//! # Panics
//!
//! Calling `authenticate_sync` from within an async runtime (e.g. inside a
//! `tokio::spawn` task) will panic. If you are already in an async context,
//! use the async method directly.

mod error;
mod hyper_http;
mod throttler;

pub use error::{HyperAuthError, HyperAuthResult};
pub use hyper_http::{AuthenticateRequest, IntoBodyBytes};
#[cfg(feature = "blocking")]
pub use hyper_http::AuthenticateRequestSync;
pub use lbank_auth::prelude;
pub use throttler::ApiThrottler;
