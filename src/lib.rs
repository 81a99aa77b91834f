#![forbid(unsafe_code)]
#![warn(clippy::all)]
// we're not changing public api due to a lint.
#![allow(clippy::upper_case_acronyms)]

//! Verb-named HTTP request functions over a pluggable session.
//!
//! hail's first priority is being easy for you to use. The top of the
//! library has one function per HTTP method ([get()], [post()], [put()],
//! etc) plus a generic [request()]. Each of them builds a [Request] and
//! hands it to a [Session] in exactly one call.
//!
//! hail does not talk to the network. Connection pooling, TLS, redirects
//! and the rest belong to the [Session] you plug in. That keeps this
//! layer small enough to reason about completely.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use hail::{Method, Options, Request, Session};
//!
//! struct Print;
//!
//! impl Session for Print {
//!     type Response = String;
//!     type Error = hail::Error;
//!
//!     fn request(&self, req: Request) -> Result<String, hail::Error> {
//!         Ok(format!("{} timeout={:?}", req, req.options().timeout.get()))
//!     }
//! }
//!
//! let resp = hail::get(
//!     &Print,
//!     "http://example.com",
//!     Options::new().param("key", "value").timeout(Duration::from_secs(5)),
//! )?;
//! assert!(resp.starts_with("GET http://example.com"));
//! # Ok::<(), hail::Error>(())
//! ```
//!
//! For code that holds on to one session, wrap it in an [Agent]; its
//! methods mirror the top level functions.
//!
//! ## What the verbs add
//!
//! Options are forwarded as given. Only three things are ever filled in:
//!
//! * the method, fixed by the function you call.
//! * [head()] sets `allow_redirects` to `false` unless you set it.
//! * [post()], [put()] and [patch()] always forward both body channels,
//!   `data` and `json`. The one you didn't set is sent as
//!   [`Field::Null`], so the session can apply its own precedence.
//!
//! ## Error handling
//!
//! Errors are the session's errors, returned untouched. For sessions that
//! want one, the crate has an [Error] type with an [ErrorKind].

mod agent;
mod body;
mod error;
mod method;
mod options;
mod request;
mod session;

pub use crate::agent::Agent;
pub use crate::body::Body;
pub use crate::error::{Error, ErrorKind};
pub use crate::method::Method;
pub use crate::options::{Auth, Cert, Field, Options, Timeout, Verify};
pub use crate::request::Request;
pub use crate::session::Session;

/// Call the session once with `method`, `url` and `options` as given.
pub fn request<S>(
    session: &S,
    method: impl Into<Method>,
    url: &str,
    options: Options,
) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    let request = Request::new(method, url, options);
    log::debug!("{}", request);
    session.request(request)
}

/// Make a GET request.
pub fn get<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Get, url, options)
}

/// Make an OPTIONS request.
pub fn options<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Options, url, options)
}

/// Make a HEAD request.
///
/// Redirects are not followed unless `allow_redirects` is set.
pub fn head<S>(session: &S, url: &str, mut options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    options.allow_redirects.set_default(Field::Set(false));
    request(session, Method::Head, url, options)
}

/// Make a POST request. `data` and `json` are always forwarded.
pub fn post<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Post, url, with_body_channels(options))
}

/// Make a PUT request. `data` and `json` are always forwarded.
pub fn put<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Put, url, with_body_channels(options))
}

/// Make a PATCH request. `data` and `json` are always forwarded.
pub fn patch<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Patch, url, with_body_channels(options))
}

/// Make a DELETE request.
pub fn delete<S>(session: &S, url: &str, options: Options) -> Result<S::Response, S::Error>
where
    S: Session + ?Sized,
{
    request(session, Method::Delete, url, options)
}

fn with_body_channels(mut options: Options) -> Options {
    options.data.set_default(Field::Null);
    options.json.set_default(Field::Null);
    options
}
