use crate::{
    items, request::Command, transport::Transport, Album, Gallery,
    GalleryError,
};
use std::collections::BTreeMap;

impl<T: Transport> Gallery<T> {
    /// Get every album in the gallery, keyed by album name.
    ///
    /// In Gallery 1 the name is alphanumeric, in Gallery 2 it is the album's
    /// numeric identifier.
    pub async fn fetch_albums(
        &mut self,
    ) -> Result<BTreeMap<String, Album>, GalleryError> {
        let response = self.send(Command::FetchAlbums).await?;

        items::parse_albums(&response).map_err(Into::into)
    }

    /// Like [`Gallery::fetch_albums()`], but only the albums the user can
    /// write to, or which are visible and contain a writable sub-album
    /// (however deeply nested).
    pub async fn fetch_albums_prune(
        &mut self,
    ) -> Result<BTreeMap<String, Album>, GalleryError> {
        let response = self.send(Command::FetchAlbumsPrune).await?;

        items::parse_albums(&response).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        response::DecodeError, transport::testing::ScriptedTransport, Dialect,
        Gallery, GalleryError,
    };

    #[tokio::test]
    async fn list_albums() {
        let transport = ScriptedTransport::new()
            .reply(include_str!("../fixtures/fetch_albums.txt"));
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V2, transport)
                .unwrap();

        let got = gallery.fetch_albums().await.unwrap();

        let names: Vec<_> = got.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["12", "7"]);
        assert_eq!(got["12"].title, "Holidays");
        assert_eq!(gallery.session().auth_token(), Some("5a1f0e9d2c77"));
    }

    #[tokio::test]
    async fn prune_sends_its_own_command() {
        let transport = ScriptedTransport::new().reply(
            "#__GR2PROTO__\nstatus=0\nalbum_count=1\nalbum.name.1=mine\n",
        );
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V1, transport)
                .unwrap();

        let got = gallery.fetch_albums_prune().await.unwrap();

        assert!(got.contains_key("mine"));
        let requests = gallery.transport().requests();
        assert!(requests[0]
            .body()
            .contains("name=\"cmd\"\r\n\r\nfetch-albums-prune\r\n"));
    }

    #[tokio::test]
    async fn a_non_numeric_count_is_malformed() {
        let transport = ScriptedTransport::new()
            .reply("#__GR2PROTO__\nstatus=0\nalbum_count=lots\n");
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V2, transport)
                .unwrap();

        let got = gallery.fetch_albums().await.unwrap_err();

        match got {
            GalleryError::MalformedResponse(DecodeError::BadCount {
                value,
                ..
            }) => assert_eq!(value, "lots"),
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
