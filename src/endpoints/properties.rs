use crate::{
    items, request::Command, transport::Transport, Gallery, GalleryError,
};
use std::collections::BTreeMap;

/// The album properties the server may report.
const ALBUM_PROPERTIES: &[&str] = &["auto_resize", "add_to_beginning"];

/// The image properties the server may report, each sent as `image.<key>`.
const IMAGE_PROPERTIES: &[&str] = &[
    "name",
    "raw_height",
    "raw_width",
    "raw_filesize",
    "resizedName",
    "resized_width",
    "resized_height",
    "thumbName",
    "thumb_width",
    "thumb_height",
    "caption",
    "title",
    "force",
    "hidden",
];

impl<T: Transport> Gallery<T> {
    /// Get an album's properties. Only the properties the server actually
    /// sent are included.
    pub async fn album_properties(
        &mut self,
        album: &str,
    ) -> Result<BTreeMap<String, String>, GalleryError> {
        let response = self.send(Command::AlbumProperties { album }).await?;

        Ok(items::pick(&response, "", ALBUM_PROPERTIES))
    }

    /// Get an image's properties (Gallery 2 only). Only the properties the
    /// server actually sent are included.
    pub async fn image_properties(
        &mut self,
        image: &str,
    ) -> Result<BTreeMap<String, String>, GalleryError> {
        let response = self.send(Command::ImageProperties { image }).await?;

        Ok(items::pick(&response, "image.", IMAGE_PROPERTIES))
    }
}
