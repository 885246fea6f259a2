use crate::{request::Command, transport::Transport, Gallery, GalleryError};
use std::path::Path;

impl<T: Transport> Gallery<T> {
    /// Upload a picture to an album.
    ///
    /// The file is read before anything is sent, so an unreadable file
    /// results in [`GalleryError::AttachmentRead`] without touching the
    /// network.
    pub async fn add_item<P: AsRef<Path>>(
        &mut self,
        album: &str,
        file: P,
        caption: &str,
        description: &str,
    ) -> Result<(), GalleryError> {
        let file = file.as_ref();

        self.send(Command::AddItem {
            album,
            file,
            caption,
            description,
        })
        .await?;

        log::info!("Uploaded {} to album {}", file.display(), album);

        Ok(())
    }
}
