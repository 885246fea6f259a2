use crate::{
    error::SetupError,
    transport::{HttpTransport, Transport},
    Dialect, Session,
};

/// A connection to a remote Gallery installation.
///
/// All operations take `&mut self` because every response may update the
/// session, and the next request has to see that update.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use gallery_remote::{Dialect, Gallery};
///
/// let mut gallery =
///     Gallery::new("http://www.example.com/gallery2", Dialect::V2)?;
/// gallery.login("username", "password").await?;
///
/// for (id, album) in gallery.fetch_albums().await? {
///     println!("{}: {}", id, album.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Gallery<T = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) session: Session,
}

impl Gallery<HttpTransport> {
    /// Connect to the gallery at `base_url` using the default HTTP
    /// transport.
    pub fn new(base_url: &str, dialect: Dialect) -> Result<Self, SetupError> {
        let transport = HttpTransport::new()?;
        Gallery::with_transport(base_url, dialect, transport)
    }
}

impl<T: Transport> Gallery<T> {
    pub fn with_transport(
        base_url: &str,
        dialect: Dialect,
        transport: T,
    ) -> Result<Self, SetupError> {
        let session = Session::new(base_url, dialect)?;

        if session.endpoint().scheme() != "https" {
            log::warn!(
                "{} isn't using HTTPS, credentials will be sent in the clear",
                session.endpoint()
            );
        }

        Ok(Gallery { transport, session })
    }

    pub fn session(&self) -> &Session { &self.session }

    pub fn transport(&self) -> &T { &self.transport }

    pub fn dialect(&self) -> Dialect { self.session.dialect() }

    pub fn is_logged_in(&self) -> bool { self.session.is_logged_in() }
}
