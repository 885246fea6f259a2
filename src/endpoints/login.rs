use crate::{request::Command, transport::Transport, Gallery, GalleryError};

impl<T: Transport> Gallery<T> {
    /// Establish an authenticated session with the remote gallery.
    ///
    /// Once this succeeds the session stays logged in; there is no logout
    /// command.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), GalleryError> {
        self.send(Command::Login { username, password }).await?;

        self.session.mark_logged_in();
        log::info!("Logged in as {}", username);

        Ok(())
    }
}
