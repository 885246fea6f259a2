use crate::{
    items, request::Command, transport::Transport, Gallery, GalleryError,
    Image,
};

impl<T: Transport> Gallery<T> {
    /// Get information about every image in an album.
    pub async fn fetch_album_images(
        &mut self,
        album: &str,
    ) -> Result<Vec<Image>, GalleryError> {
        let response = self.send(Command::FetchAlbumImages { album }).await?;

        items::parse_images(&response).map_err(Into::into)
    }
}
