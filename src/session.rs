use crate::{response::Response, Dialect};
use url::Url;

/// The protocol revision this client speaks.
pub const PROTOCOL_VERSION: &str = "2.5";

/// Everything the server expects us to remember between requests.
///
/// Cookies live in the transport's cookie store, everything else lives here.
/// The only way to mutate a [`Session`] is by sending requests through a
/// [`crate::Gallery`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    endpoint: Url,
    dialect: Dialect,
    auth_token: Option<String>,
    logged_in: bool,
}

impl Session {
    pub(crate) fn new(
        base_url: &str,
        dialect: Dialect,
    ) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            dialect.script()
        ))?;

        Ok(Session {
            endpoint,
            dialect,
            auth_token: None,
            logged_in: false,
        })
    }

    /// The script every request is posted to.
    pub fn endpoint(&self) -> &Url { &self.endpoint }

    pub fn dialect(&self) -> Dialect { self.dialect }

    pub fn protocol_version(&self) -> &'static str { PROTOCOL_VERSION }

    /// The most recent token handed out by the server, if any.
    pub fn auth_token(&self) -> Option<&str> { self.auth_token.as_deref() }

    pub fn is_logged_in(&self) -> bool { self.logged_in }

    /// Adopt whatever session state the server sent back. The token may be
    /// rotated by any response, not just a login.
    pub(crate) fn update(&mut self, response: &Response) {
        match response.get("auth_token") {
            Some(token) => {
                log::debug!("Got auth token {}", token);
                self.auth_token = Some(token.to_string());
            },
            None => log::trace!("No auth token in the response"),
        }
    }

    pub(crate) fn mark_logged_in(&mut self) { self.logged_in = true; }
}
