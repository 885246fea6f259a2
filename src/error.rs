use crate::{multipart::AttachmentReadError, response::DecodeError, Dialect};
use reqwest::Error as ReqwestError;

/// Everything that can go wrong while talking to a gallery.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The HTTP client encountered an error.
    #[error("Unable to send the request")]
    Connection(#[from] ReqwestError),
    /// The response didn't follow the Gallery Remote protocol.
    #[error("Unable to parse the response")]
    MalformedResponse(#[from] DecodeError),
    /// The server understood the request but reported a failure.
    #[error("The server rejected the request: {}", message)]
    Protocol {
        /// The status code, when the server sent one.
        status: Option<String>,
        message: String,
    },
    /// The command isn't available in this version of Gallery.
    #[error("\"{}\" isn't supported by {}", operation, dialect)]
    UnsupportedOperation {
        operation: &'static str,
        dialect: Dialect,
    },
    /// Unable to read a file before uploading it.
    #[error("Unable to read the attachment")]
    AttachmentRead(#[from] AttachmentReadError),
}

impl GalleryError {
    /// The message the server gave when rejecting a request.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GalleryError::Protocol { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Errors that may occur while setting up a [`crate::Gallery`].
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid gallery address")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unable to create the HTTP client")]
    HttpClient(#[from] ReqwestError),
}
