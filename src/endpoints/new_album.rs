use crate::{request::Command, transport::Transport, Gallery, GalleryError};

impl<T: Transport> Gallery<T> {
    /// Create a new album inside `parent`, returning the new album's
    /// identifier.
    ///
    /// Any of `name`, `title` and `description` may be omitted, in which
    /// case the server picks its own defaults.
    pub async fn new_album(
        &mut self,
        parent: &str,
        name: Option<&str>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<String, GalleryError> {
        let response = self
            .send(Command::NewAlbum {
                parent,
                name,
                title,
                description,
            })
            .await?;

        let album = response.require("album_name")?;
        log::info!("Created album {} in {}", album, parent);

        Ok(album.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        response::DecodeError, transport::testing::ScriptedTransport, Dialect,
        Gallery, GalleryError,
    };

    #[tokio::test]
    async fn create_an_album() {
        let transport = ScriptedTransport::new().reply(
            "#__GR2PROTO__\nstatus=0\nstatus_text=New album created successfully.\nalbum_name=97\n",
        );
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V2, transport)
                .unwrap();

        let got = gallery
            .new_album("7", None, Some("Summer"), Some("Beach trip"))
            .await
            .unwrap();

        assert_eq!(got, "97");
        let body = gallery.transport().requests()[0].body().to_string();
        assert!(body.contains("name=\"g2_form[newAlbumTitle]\"\r\n\r\nSummer\r\n"));
        assert!(body.contains("name=\"g2_form[newAlbumDesc]\"\r\n\r\nBeach trip\r\n"));
        assert!(!body.contains("newAlbumName"));
    }

    #[tokio::test]
    async fn the_new_name_is_required() {
        let transport =
            ScriptedTransport::new().reply("#__GR2PROTO__\nstatus=0\n");
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V1, transport)
                .unwrap();

        let got = gallery
            .new_album("album01", Some("sub"), None, None)
            .await
            .unwrap_err();

        assert!(matches!(
            got,
            GalleryError::MalformedResponse(DecodeError::MissingField { .. })
        ));
    }
}
