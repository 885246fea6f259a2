//! Turning high-level commands into the fields of a Gallery Remote request.

use crate::{
    multipart::{self, Attachment},
    Dialect, GalleryError, Session,
};
use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
    path::Path,
};

/// Every command the Gallery Remote protocol understands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command<'a> {
    Login {
        username: &'a str,
        password: &'a str,
    },
    FetchAlbums,
    /// Only albums the user can write to, or which lead to one.
    FetchAlbumsPrune,
    AddItem {
        album: &'a str,
        file: &'a Path,
        caption: &'a str,
        description: &'a str,
    },
    AlbumProperties {
        album: &'a str,
    },
    ImageProperties {
        image: &'a str,
    },
    NewAlbum {
        parent: &'a str,
        name: Option<&'a str>,
        title: Option<&'a str>,
        description: Option<&'a str>,
    },
    FetchAlbumImages {
        album: &'a str,
    },
}

impl<'a> Command<'a> {
    /// The value sent as `cmd`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::FetchAlbums => "fetch-albums",
            Command::FetchAlbumsPrune => "fetch-albums-prune",
            Command::AddItem { .. } => "add-item",
            Command::AlbumProperties { .. } => "album-properties",
            Command::ImageProperties { .. } => "image-properties",
            Command::NewAlbum { .. } => "new-album",
            Command::FetchAlbumImages { .. } => "fetch-album-images",
        }
    }

    pub fn is_supported_by(&self, dialect: Dialect) -> bool {
        match self {
            Command::ImageProperties { .. } => dialect != Dialect::V1,
            _ => true,
        }
    }
}

/// The fields (and optional file) making up a single request.
#[derive(Clone, PartialEq)]
pub struct Request {
    fields: BTreeMap<String, String>,
    attachment: Option<Attachment>,
}

impl Request {
    /// Build the request for `command` using the session's dialect, carrying
    /// the session's auth token along when Gallery 2 expects it.
    pub fn build(
        command: &Command<'_>,
        session: &Session,
    ) -> Result<Request, GalleryError> {
        let dialect = session.dialect();

        if !command.is_supported_by(dialect) {
            return Err(GalleryError::UnsupportedOperation {
                operation: command.name(),
                dialect,
            });
        }

        let mut builder = Builder::new(dialect);
        builder
            .set("protocol_version", session.protocol_version())
            .set("cmd", command.name());

        match *command {
            Command::Login { username, password } => {
                builder.set("uname", username).set("password", password);
            },
            Command::FetchAlbums | Command::FetchAlbumsPrune => {},
            Command::AddItem {
                album,
                file,
                caption,
                description,
            } => {
                builder
                    .set("set_albumName", album)
                    .set("userfile_name", &multipart::file_name(file))
                    .set("caption", caption)
                    .set("extrafield.Description", description)
                    .attach(file);
            },
            Command::AlbumProperties { album } => {
                builder.set("set_albumName", album);
            },
            Command::ImageProperties { image } => {
                builder.set("id", image);
            },
            Command::NewAlbum {
                parent,
                name,
                title,
                description,
            } => {
                builder
                    .set("set_albumName", parent)
                    .set_opt("newAlbumName", name)
                    .set_opt("newAlbumTitle", title)
                    .set_opt("newAlbumDesc", description);
            },
            Command::FetchAlbumImages { album } => {
                builder
                    .set("set_albumName", album)
                    .set("albums_too", "no")
                    .set("extrafields", "yes");
            },
        }

        if dialect.major() >= 2 {
            if let Some(token) = session.auth_token() {
                log::debug!("Submitting auth token {}", token);
                builder.fields.insert("g2_authToken".into(), token.into());
            }
        }

        Ok(builder.finish())
    }

    pub fn fields(&self) -> &BTreeMap<String, String> { &self.fields }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}

impl Debug for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fields = f.debug_map();

        for (key, value) in &self.fields {
            if is_password(key) {
                fields.entry(key, &"<redacted>");
            } else {
                fields.entry(key, value);
            }
        }
        fields.finish()?;

        if let Some(ref attachment) = self.attachment {
            write!(f, " + {:?}", attachment)?;
        }

        Ok(())
    }
}

fn is_password(key: &str) -> bool {
    key == "password" || key == "g2_form[password]"
}

/// Accumulates fields under their dialect-specific names.
struct Builder {
    dialect: Dialect,
    fields: BTreeMap<String, String>,
    attachment: Option<Attachment>,
}

impl Builder {
    fn new(dialect: Dialect) -> Self {
        let mut fields = BTreeMap::new();

        if dialect == Dialect::V2 {
            fields.insert(
                String::from("g2_controller"),
                String::from(Dialect::G2_CONTROLLER),
            );
        }

        Builder {
            dialect,
            fields,
            attachment: None,
        }
    }

    fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.fields.insert(self.dialect.field(name), value.to_string());
        self
    }

    fn set_opt(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    fn attach(&mut self, path: &Path) -> &mut Self {
        self.attachment =
            Some(Attachment::new(self.dialect.userfile_field(), path));
        self
    }

    fn finish(self) -> Request {
        Request {
            fields: self.fields,
            attachment: self.attachment,
        }
    }
}
