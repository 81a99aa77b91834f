use std::rc::Rc;
use std::sync::Arc;

use crate::request::Request;

/// The thing that actually performs HTTP exchanges.
///
/// Connection pooling, TLS, redirects, cookies, bodies: all of that is
/// the session's job. The façade builds a [`Request`] and calls
/// [`Session::request`] exactly once, then returns whatever comes back.
///
/// ```
/// use hail::{Options, Request, Session};
///
/// struct Echo;
///
/// impl Session for Echo {
///     type Response = String;
///     type Error = hail::Error;
///
///     fn request(&self, request: Request) -> Result<String, hail::Error> {
///         Ok(request.to_string())
///     }
/// }
///
/// let resp = hail::get(&Echo, "http://example.com", Options::new()).unwrap();
/// assert_eq!(resp, "GET http://example.com");
/// ```
pub trait Session {
    type Response;
    type Error;

    fn request(&self, request: Request) -> Result<Self::Response, Self::Error>;
}

impl<S: Session + ?Sized> Session for &S {
    type Response = S::Response;
    type Error = S::Error;

    fn request(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (**self).request(request)
    }
}

impl<S: Session + ?Sized> Session for Box<S> {
    type Response = S::Response;
    type Error = S::Error;

    fn request(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (**self).request(request)
    }
}

impl<S: Session + ?Sized> Session for Arc<S> {
    type Response = S::Response;
    type Error = S::Error;

    fn request(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (**self).request(request)
    }
}

impl<S: Session + ?Sized> Session for Rc<S> {
    type Response = S::Response;
    type Error = S::Error;

    fn request(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (**self).request(request)
    }
}
