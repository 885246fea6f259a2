//! Encoding requests as `multipart/form-data` bodies.

use std::{
    borrow::Cow,
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

const CRLF: &[u8] = b"\r\n";

/// A file to upload alongside the form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// The form field the file is sent under.
    pub field: String,
    pub path: PathBuf,
}

impl Attachment {
    pub fn new(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Attachment {
            field: field.into(),
            path: path.into(),
        }
    }
}

/// Generate a boundary which is unique within this process.
pub fn boundary() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!(
        "------gallery-remote_boundary_{}{:09}_{}",
        now.as_secs(),
        now.subsec_nanos(),
        sequence
    )
}

/// Serialize `fields` (and optionally a file) as a `multipart/form-data`
/// body.
///
/// The file part is labelled `Content-Transfer-Encoding: base64` but its
/// bytes are written verbatim. Gallery servers expect exactly that.
pub fn encode(
    boundary: &str,
    fields: &BTreeMap<String, String>,
    attachment: Option<&Attachment>,
) -> Result<Vec<u8>, AttachmentReadError> {
    let mut lines: Vec<Cow<'_, [u8]>> = Vec::new();

    for (key, value) in fields {
        lines.push(format!("--{}", boundary).into_bytes().into());
        lines.push(
            format!("Content-Disposition: form-data; name=\"{}\"", key)
                .into_bytes()
                .into(),
        );
        lines.push(Cow::Borrowed(&b""[..]));
        lines.push(Cow::Borrowed(value.as_bytes()));
    }

    if let Some(attachment) = attachment {
        let contents = std::fs::read(&attachment.path).map_err(|inner| {
            AttachmentReadError {
                path: attachment.path.clone(),
                inner,
            }
        })?;
        let content_type = mime_guess::from_path(&attachment.path)
            .first_or_octet_stream();

        log::trace!(
            "Attaching {} ({}, {} bytes)",
            attachment.path.display(),
            content_type,
            contents.len()
        );

        lines.push(format!("--{}", boundary).into_bytes().into());
        lines.push(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
                attachment.field,
                file_name(&attachment.path)
            )
            .into_bytes()
            .into(),
        );
        lines.push(
            format!("Content-Type: {}", content_type)
                .into_bytes()
                .into(),
        );
        lines.push(Cow::Borrowed(
            &b"Content-Transfer-Encoding: base64"[..],
        ));
        lines.push(Cow::Borrowed(&b""[..]));
        lines.push(Cow::Owned(contents));
    }

    lines.push(format!("--{}--", boundary).into_bytes().into());

    Ok(lines.join(CRLF))
}

/// The final component of a path, as it should be reported to the server.
///
/// The name ends up inside a quoted header value, so `"` is percent-encoded
/// and line breaks are dropped.
pub fn file_name(path: &Path) -> Cow<'_, str> {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    };

    if !name.contains(|c: char| matches!(c, '"' | '\r' | '\n')) {
        return name;
    }

    let cleaned: String = name
        .chars()
        .filter(|&c| c != '\r' && c != '\n')
        .map(|c| match c {
            '"' => String::from("%22"),
            other => other.to_string(),
        })
        .collect();

    Cow::Owned(cleaned)
}

/// Unable to read a file which was meant to be uploaded.
#[derive(Debug, thiserror::Error)]
#[error("Unable to read \"{}\"", .path.display())]
pub struct AttachmentReadError {
    pub path: PathBuf,
    #[source]
    pub inner: io::Error,
}
