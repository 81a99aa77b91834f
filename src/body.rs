use std::fmt;

/// The `data` body channel.
///
/// What the session does with it (form encoding, charset, content type)
/// is up to the session. The façade only moves it along.
#[derive(Clone, PartialEq, Eq)]
pub enum Body {
    /// Key/value pairs, in the order given. Usually sent form encoded.
    Form(Vec<(String, String)>),
    Text(String),
    Bytes(Vec<u8>),
}

impl Body {
    /// Build a form body from any iterator of pairs.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Body::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Body::Form(pairs) => write!(f, "Form({:?})", pairs),
            Body::Text(t) => write!(f, "Text({:?})", t),
            Body::Bytes(v) => write!(f, "Bytes[{} bytes]", v.len()),
        }
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Text(s.to_string())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<Vec<u8>> for Body {
    fn from(b: Vec<u8>) -> Self {
        Body::Bytes(b)
    }
}

impl From<&[u8]> for Body {
    fn from(b: &[u8]) -> Self {
        Body::Bytes(b.to_vec())
    }
}
