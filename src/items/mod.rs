//! The albums and images a gallery is made of.

mod list_parser;

pub(crate) use list_parser::{parse_albums, parse_images, pick};

use serde_derive::Serialize;

/// A container for images (and other albums).
///
/// Every field is the raw string the server sent, or empty when it didn't
/// send one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Album {
    /// The album's identifier. Gallery 1 uses an alphanumeric name while
    /// Gallery 2 uses the album's numeric ID.
    pub name: String,
    pub title: String,
    pub summary: String,
    /// The identifier of the album containing this one.
    pub parent: String,
    pub resize_size: String,
    pub perms: Permissions,
    pub extrafields: String,
    pub owner_id: String,
}

/// What the logged in user may do with an [`Album`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Permissions {
    pub add: String,
    pub write: String,
    pub del_item: String,
    pub del_alb: String,
    pub create_sub: String,
}

/// A single item in an album.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Image {
    pub name: String,
    pub title: String,
    pub raw_width: String,
    pub raw_height: String,
    pub raw_filesize: String,
    pub resized_name: String,
    pub resized_width: String,
    pub resized_height: String,
    pub thumb_name: String,
    pub thumb_width: String,
    pub thumb_height: String,
    pub caption: String,
    pub clicks: String,
    pub capture_date: CaptureDate,
    pub description: String,
    pub hidden: String,
}

/// When a picture was taken, split into its components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct CaptureDate {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}
