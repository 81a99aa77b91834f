use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::body::Body;

/// The state of one named option.
///
/// `Unset` means the caller never mentioned the option. `Null` means the
/// option is present without a value. Sessions see the difference.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Unset,
    Null,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// The value, if one was set.
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Set(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Replace `Unset` with `default`. `Null` and `Set` are left alone.
    pub fn set_default(&mut self, default: Field<T>) {
        if self.is_unset() {
            *self = default;
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Field::Set(v),
            None => Field::Null,
        }
    }
}

/// Request timeout. Either one duration for the whole exchange, or separate
/// connect and read timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    Total(Duration),
    Split {
        connect: Option<Duration>,
        read: Option<Duration>,
    },
}

impl From<Duration> for Timeout {
    fn from(d: Duration) -> Self {
        Timeout::Total(d)
    }
}

impl From<(Duration, Duration)> for Timeout {
    fn from((connect, read): (Duration, Duration)) -> Self {
        Timeout::Split {
            connect: Some(connect),
            read: Some(read),
        }
    }
}

/// Credentials for the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Basic { username: String, password: String },
    Bearer(String),
}

impl Auth {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for an `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Auth::Basic { username, password } => {
                let creds = format!("{}:{}", username, password);
                format!("Basic {}", base64::encode(creds))
            }
            Auth::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

/// TLS server certificate verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verify {
    Enabled,
    Disabled,
    /// Verify against the CA certificates in this file or directory.
    CaBundle(PathBuf),
}

impl From<bool> for Verify {
    fn from(b: bool) -> Self {
        if b {
            Verify::Enabled
        } else {
            Verify::Disabled
        }
    }
}

/// Client certificate, with the private key either in the same file or a
/// separate one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cert {
    pub cert: PathBuf,
    pub key: Option<PathBuf>,
}

/// Named options passed along with a request.
///
/// Every recognized option is a [`Field`] and starts out `Unset`. Options
/// the struct has no field for go in `extra`. The façade functions forward
/// all of it to the session untouched, except for the few fields a verb
/// defaults (see [`head()`](crate::head) and [`post()`](crate::post)).
///
/// ```
/// use std::time::Duration;
/// use hail::{Options, Timeout};
///
/// let opts = Options::new()
///     .param("key", "value")
///     .header("Accept", "application/json")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(opts.timeout.get(), Some(&Timeout::Total(Duration::from_secs(5))));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub params: Field<Vec<(String, String)>>,
    pub data: Field<Body>,
    pub json: Field<Value>,
    pub headers: Field<Vec<(String, String)>>,
    pub cookies: Field<Vec<(String, String)>>,
    pub auth: Field<Auth>,
    pub timeout: Field<Timeout>,
    pub allow_redirects: Field<bool>,
    /// Proxy url per scheme, e.g. `("https", "http://10.0.0.1:3128")`.
    pub proxies: Field<Vec<(String, String)>>,
    pub stream: Field<bool>,
    pub verify: Field<Verify>,
    pub cert: Field<Cert>,
    pub extra: BTreeMap<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    /// Replace the query parameters.
    pub fn params<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params = Field::Set(collect_pairs(pairs));
        self
    }

    /// Append one query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        push_pair(&mut self.params, key.into(), value.into());
        self
    }

    pub fn data(mut self, body: impl Into<Body>) -> Self {
        self.data = Field::Set(body.into());
        self
    }

    pub fn json(mut self, value: Value) -> Self {
        self.json = Field::Set(value);
        self
    }

    /// Append one header. Repeated names are kept as separate entries.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        push_pair(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        push_pair(&mut self.cookies, name.into(), value.into());
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Field::Set(auth);
        self
    }

    pub fn timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = Field::Set(timeout.into());
        self
    }

    pub fn allow_redirects(mut self, allow: bool) -> Self {
        self.allow_redirects = Field::Set(allow);
        self
    }

    pub fn proxy(mut self, scheme: impl Into<String>, url: impl Into<String>) -> Self {
        push_pair(&mut self.proxies, scheme.into(), url.into());
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = Field::Set(stream);
        self
    }

    pub fn verify(mut self, verify: impl Into<Verify>) -> Self {
        self.verify = Field::Set(verify.into());
        self
    }

    pub fn cert(mut self, cert: impl Into<PathBuf>, key: Option<PathBuf>) -> Self {
        self.cert = Field::Set(Cert {
            cert: cert.into(),
            key,
        });
        self
    }

    /// Set an option this struct has no field for. The last value for a
    /// key wins.
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

fn collect_pairs<I, K, V>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn push_pair(field: &mut Field<Vec<(String, String)>>, key: String, value: String) {
    match field {
        Field::Set(pairs) => pairs.push((key, value)),
        _ => *field = Field::Set(vec![(key, value)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_options_are_all_unset() {
        let opts = Options::new();
        assert!(opts.params.is_unset());
        assert!(opts.data.is_unset());
        assert!(opts.json.is_unset());
        assert!(opts.allow_redirects.is_unset());
        assert!(opts.extra.is_empty());
    }

    #[test]
    fn set_default_only_fills_unset() {
        let mut unset: Field<bool> = Field::Unset;
        unset.set_default(Field::Set(false));
        assert_eq!(unset, Field::Set(false));

        let mut null: Field<bool> = Field::Null;
        null.set_default(Field::Set(false));
        assert_eq!(null, Field::Null);

        let mut set = Field::Set(true);
        set.set_default(Field::Set(false));
        assert_eq!(set, Field::Set(true));
    }

    #[test]
    fn option_converts_to_field() {
        assert_eq!(Field::from(Some(3)), Field::Set(3));
        assert_eq!(Field::<i32>::from(None), Field::Null);
    }

    #[test]
    fn param_appends_and_params_replaces() {
        let opts = Options::new().param("a", "1").param("a", "2");
        assert_eq!(
            opts.params.get().unwrap(),
            &vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string())
            ]
        );

        let opts = opts.params(vec![("b", "3")]);
        assert_eq!(
            opts.params.into_option().unwrap(),
            vec![("b".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn basic_auth_header() {
        let auth = Auth::basic("Aladdin", "open sesame");
        assert_eq!(auth.header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert_eq!(Auth::Bearer("t0k".into()).header_value(), "Bearer t0k");
    }

    #[test]
    fn timeout_pair_is_split() {
        let t = Timeout::from((Duration::from_secs(3), Duration::from_secs(27)));
        assert_eq!(
            t,
            Timeout::Split {
                connect: Some(Duration::from_secs(3)),
                read: Some(Duration::from_secs(27)),
            }
        );
    }

    #[test]
    fn extra_last_value_wins() {
        let opts = Options::new()
            .extra("hooks", json!(["a"]))
            .extra("hooks", json!(["b"]));
        assert_eq!(opts.extra.get("hooks"), Some(&json!(["b"])));
    }

    #[test]
    fn verify_from_bool() {
        assert_eq!(Options::new().verify(false).verify, Field::Set(Verify::Disabled));
    }
}
