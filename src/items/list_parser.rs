use super::{Album, CaptureDate, Image, Permissions};
use crate::response::{DecodeError, Response};
use std::collections::BTreeMap;

/// Parse a `fetch-albums` or `fetch-albums-prune` response, keyed by album
/// name.
pub(crate) fn parse_albums(
    response: &Response,
) -> Result<BTreeMap<String, Album>, DecodeError> {
    let count = response.count("album_count")?;
    log::debug!("The server sent {} albums", count);

    let mut albums = BTreeMap::new();

    for index in 1..=count {
        let album = parse_album(&Entry::new(response, "album", index));

        if albums.contains_key(&album.name) {
            log::warn!("Album \"{}\" was listed twice", album.name);
        }
        albums.insert(album.name.clone(), album);
    }

    Ok(albums)
}

/// Parse a `fetch-album-images` response, in the order the server listed
/// them.
pub(crate) fn parse_images(
    response: &Response,
) -> Result<Vec<Image>, DecodeError> {
    let count = response.count("image_count")?;
    log::debug!("The server sent {} images", count);

    Ok((1..=count)
        .map(|index| parse_image(&Entry::new(response, "image", index)))
        .collect())
}

/// Copy across whichever of `<prefix><key>` are present, keyed by `key`.
pub(crate) fn pick(
    response: &Response,
    prefix: &str,
    keys: &[&str],
) -> BTreeMap<String, String> {
    keys.iter()
        .filter_map(|&key| {
            response
                .get(&format!("{}{}", prefix, key))
                .map(|value| (key.to_string(), value.to_string()))
        })
        .collect()
}

fn parse_album(entry: &Entry<'_>) -> Album {
    Album {
        name: entry.dotted("name"),
        title: entry.dotted("title"),
        summary: entry.dotted("summary"),
        parent: entry.dotted("parent"),
        resize_size: entry.dotted("resize_size"),
        perms: Permissions {
            add: entry.dotted("perms.add"),
            write: entry.dotted("perms.write"),
            del_item: entry.dotted("perms.del_item"),
            del_alb: entry.dotted("perms.del_alb"),
            create_sub: entry.dotted("perms.create_sub"),
        },
        extrafields: entry.joined("info.extrafields"),
        owner_id: entry.joined("ownerid"),
    }
}

fn parse_image(entry: &Entry<'_>) -> Image {
    Image {
        name: entry.dotted("name"),
        title: entry.dotted("title"),
        raw_width: entry.dotted("raw_width"),
        raw_height: entry.dotted("raw_height"),
        raw_filesize: entry.dotted("raw_filesize"),
        resized_name: entry.dotted("resizedName"),
        resized_width: entry.dotted("resized_width"),
        resized_height: entry.dotted("resized_height"),
        thumb_name: entry.dotted("thumbName"),
        thumb_width: entry.dotted("thumb_width"),
        thumb_height: entry.dotted("thumb_height"),
        caption: entry.dotted("caption"),
        clicks: entry.dotted("clicks"),
        capture_date: CaptureDate {
            year: entry.joined("capturedate.year"),
            month: entry.joined("capturedate.mon"),
            day: entry.joined("capturedate.mday"),
            hours: entry.joined("capturedate.hours"),
            minutes: entry.joined("capturedate.minutes"),
            seconds: entry.joined("capturedate.seconds"),
        },
        description: entry.dotted("extrafield.Description"),
        hidden: entry.dotted("hidden"),
    }
}

/// One element of a numbered array like `album.title.1`, `album.title.2`...
struct Entry<'r> {
    response: &'r Response,
    prefix: &'static str,
    index: usize,
}

impl<'r> Entry<'r> {
    fn new(response: &'r Response, prefix: &'static str, index: usize) -> Self {
        Entry {
            response,
            prefix,
            index,
        }
    }

    /// Read `<prefix>.<field>.<index>`.
    fn dotted(&self, field: &str) -> String {
        self.lookup(format!("{}.{}.{}", self.prefix, field, self.index))
    }

    /// Read `<prefix>.<field><index>`.
    ///
    /// The server numbers a few fields (`album.ownerid`,
    /// `image.capturedate.*`, ...) without the separating dot.
    fn joined(&self, field: &str) -> String {
        self.lookup(format!("{}.{}{}", self.prefix, field, self.index))
    }

    fn lookup(&self, key: String) -> String {
        self.response.get_or_empty(&key).to_string()
    }
}
