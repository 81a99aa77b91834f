use std::fmt;

use crate::error::Error;
use crate::method::Method;
use crate::options::Options;

/// A request descriptor as handed to a [`Session`](crate::Session).
///
/// Built fresh for every façade call and moved into the session. The url
/// is kept exactly as the caller wrote it; see [`Request::parse_url`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    url: String,
    options: Options,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

impl Request {
    pub fn new(method: impl Into<Method>, url: impl Into<String>, options: Options) -> Request {
        Request {
            method: method.into(),
            url: url.into(),
            options,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn into_parts(self) -> (Method, String, Options) {
        (self.method, self.url, self.options)
    }

    /// Parse the url. The façade never does this, sessions can.
    pub fn parse_url(&self) -> Result<url::Url, Error> {
        url::Url::parse(&self.url).map_err(|e| Error::from(e).url(self.url.clone()))
    }
}
