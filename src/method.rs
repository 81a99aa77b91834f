use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// HTTP request method.
///
/// Standard verbs are recognized case-insensitively. Anything else is kept
/// as given in [`Method::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Trace,
    /// A non-standard token such as `MKCOL`. Build methods from a name with
    /// `Method::from`, which never puts a standard verb here; an `Other`
    /// holding `"GET"` does not equal [`Method::Get`].
    Other(String),
}

impl Method {
    /// The canonical token, e.g. `"GET"`.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        let known = [
            Method::Get,
            Method::Head,
            Method::Options,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
            Method::Connect,
            Method::Trace,
        ];
        known
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .cloned()
            .unwrap_or_else(|| Method::Other(s.to_string()))
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        match Method::from(s.as_str()) {
            Method::Other(_) => Method::Other(s),
            m => m,
        }
    }
}

impl From<&Method> for Method {
    fn from(m: &Method) -> Self {
        m.clone()
    }
}
