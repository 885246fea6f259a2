//! An unofficial client for the [Gallery Remote][protocol] protocol, used to
//! browse albums and upload pictures to a Gallery 1 or Gallery 2
//! installation.
//!
//! [protocol]: http://codex.gallery2.org/Gallery_Remote:Protocol

#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod client;
mod dialect;
mod endpoints;
mod error;
mod items;
pub mod multipart;
pub mod request;
pub mod response;
mod session;
mod transport;

pub use client::Gallery;
pub use dialect::{Dialect, UnknownVersion};
pub use error::{GalleryError, SetupError};
pub use items::{Album, CaptureDate, Image, Permissions};
pub use session::{Session, PROTOCOL_VERSION};
pub use transport::{HttpTransport, Transport};

/// The default user agent to use when communicating with a gallery.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
