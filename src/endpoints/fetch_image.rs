use crate::{transport::Transport, Gallery, GalleryError};

impl<T: Transport> Gallery<T> {
    /// Download an image's contents (Gallery 2 only).
    ///
    /// When `thumb` is set the image's properties are fetched first and its
    /// thumbnail is downloaded instead, falling back to the image itself if
    /// it has no thumbnail. Pass `thumb: false` when `image` already names a
    /// thumbnail.
    pub async fn fetch_image(
        &mut self,
        image: &str,
        thumb: bool,
    ) -> Result<Vec<u8>, GalleryError> {
        self.require_v2("fetch-image")?;

        let mut item = image.to_string();

        if thumb {
            let properties = self.image_properties(image).await?;

            match properties.get("thumbName") {
                Some(thumbnail) if !thumbnail.is_empty() => {
                    item = thumbnail.clone();
                },
                _ => log::debug!(
                    "Image {} has no thumbnail, downloading the original",
                    image
                ),
            }
        }

        let mut url = self.session.endpoint().clone();
        url.query_pairs_mut()
            .append_pair("g2_view", "core.DownloadItem")
            .append_pair("g2_itemId", &item);

        let data = self.transport.get(&url).await?;
        log::debug!("Downloaded {} bytes from {}", data.len(), url);

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        transport::testing::{Recorded, ScriptedTransport},
        Dialect, Gallery, GalleryError,
    };

    #[tokio::test]
    async fn download_the_original() {
        let transport = ScriptedTransport::new().download(b"JPEG DATA");
        let mut gallery = Gallery::with_transport(
            "http://example.com/gallery2",
            Dialect::V2,
            transport,
        )
        .unwrap();

        let got = gallery.fetch_image("31", false).await.unwrap();

        assert_eq!(got, b"JPEG DATA");
        assert_eq!(
            gallery.transport().requests(),
            vec![Recorded::Get {
                url: "http://example.com/gallery2/main.php?g2_view=core.DownloadItem&g2_itemId=31"
                    .parse()
                    .unwrap()
            }]
        );
    }

    #[tokio::test]
    async fn download_the_thumbnail() {
        let transport = ScriptedTransport::new()
            .reply("#__GR2PROTO__\nstatus=0\nimage.name=31\nimage.thumbName=32\n")
            .download(b"THUMBNAIL");
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V2, transport)
                .unwrap();

        let got = gallery.fetch_image("31", true).await.unwrap();

        assert_eq!(got, b"THUMBNAIL");
        let requests = gallery.transport().requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0]
            .body()
            .contains("name=\"g2_form[cmd]\"\r\n\r\nimage-properties\r\n"));
        assert_eq!(requests[1].url().query(), Some("g2_view=core.DownloadItem&g2_itemId=32"));
    }

    #[tokio::test]
    async fn fall_back_to_the_original_without_a_thumbnail() {
        let transport = ScriptedTransport::new()
            .reply("#__GR2PROTO__\nstatus=0\nimage.name=31\n")
            .download(b"ORIGINAL");
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V2, transport)
                .unwrap();

        let got = gallery.fetch_image("31", true).await.unwrap();

        assert_eq!(got, b"ORIGINAL");
        let requests = gallery.transport().requests();
        assert_eq!(requests[1].url().query(), Some("g2_view=core.DownloadItem&g2_itemId=31"));
    }

    #[tokio::test]
    async fn gallery_1_cant_download() {
        let transport = ScriptedTransport::new();
        let mut gallery =
            Gallery::with_transport("http://example.com", Dialect::V1, transport)
                .unwrap();

        let got = gallery.fetch_image("31", true).await.unwrap_err();

        assert!(matches!(
            got,
            GalleryError::UnsupportedOperation {
                operation: "fetch-image",
                ..
            }
        ));
        assert!(gallery.transport().requests().is_empty());
    }
}
