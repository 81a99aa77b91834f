use crate::method::Method;
use crate::options::Options;
use crate::session::Session;

/// Agents hold on to a session and make requests through it.
///
/// Every method behaves exactly like the top level function of the same
/// name called with this agent's session.
///
/// ```
/// use hail::{Agent, Options, Request, Session};
///
/// struct Status;
///
/// impl Session for Status {
///     type Response = u16;
///     type Error = hail::Error;
///
///     fn request(&self, _req: Request) -> Result<u16, hail::Error> {
///         Ok(204)
///     }
/// }
///
/// let agent = Agent::new(Status);
/// assert_eq!(agent.delete("http://example.com/item/1", Options::new())?, 204);
/// # Ok::<(), hail::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Agent<S> {
    session: S,
}

impl<S: Session> Agent<S> {
    pub fn new(session: S) -> Self {
        Agent { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Make a request with this agent.
    pub fn request(
        &self,
        method: impl Into<Method>,
        url: &str,
        options: Options,
    ) -> Result<S::Response, S::Error> {
        crate::request(&self.session, method, url, options)
    }

    /// Make a GET request from this agent.
    pub fn get(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::get(&self.session, url, options)
    }

    /// Make an OPTIONS request from this agent.
    pub fn options(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::options(&self.session, url, options)
    }

    /// Make a HEAD request from this agent.
    pub fn head(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::head(&self.session, url, options)
    }

    /// Make a POST request from this agent.
    pub fn post(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::post(&self.session, url, options)
    }

    /// Make a PUT request from this agent.
    pub fn put(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::put(&self.session, url, options)
    }

    /// Make a PATCH request from this agent.
    pub fn patch(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::patch(&self.session, url, options)
    }

    /// Make a DELETE request from this agent.
    pub fn delete(&self, url: &str, options: Options) -> Result<S::Response, S::Error> {
        crate::delete(&self.session, url, options)
    }
}
