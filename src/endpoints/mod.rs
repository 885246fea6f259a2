//! The Gallery Remote protocol's commands.

mod add_item;
mod album_images;
mod albums;
mod fetch_image;
mod login;
mod new_album;
mod properties;

use crate::{
    multipart,
    request::{Command, Request},
    response::Response,
    transport::Transport,
    Gallery, GalleryError,
};

/// The `status` a successful response carries.
const STATUS_OK: &str = "0";

impl<T: Transport> Gallery<T> {
    /// Send a single command, adopting any new session state and turning
    /// failures reported by the server into errors.
    pub(crate) async fn send(
        &mut self,
        command: Command<'_>,
    ) -> Result<Response, GalleryError> {
        let request = Request::build(&command, &self.session)?;
        let boundary = multipart::boundary();
        let body = multipart::encode(
            &boundary,
            request.fields(),
            request.attachment(),
        )?;
        let content_type =
            format!("multipart/form-data; boundary={}", boundary);

        log::debug!(
            "Sending a {} request to {}",
            command.name(),
            self.session.endpoint()
        );
        log::trace!("Payload: {:#?}", request);

        let text = self
            .transport
            .post(self.session.endpoint(), &content_type, body)
            .await?;
        log::trace!("Response: {}", text);

        let response = Response::decode(&text)?;
        self.session.update(&response);
        check_status(&response)?;

        Ok(response)
    }

    /// Fail early when the server's dialect can't handle an operation.
    pub(crate) fn require_v2(
        &self,
        operation: &'static str,
    ) -> Result<(), GalleryError> {
        match self.session.dialect().major() {
            major if major >= 2 => Ok(()),
            _ => Err(GalleryError::UnsupportedOperation {
                operation,
                dialect: self.session.dialect(),
            }),
        }
    }
}

fn check_status(response: &Response) -> Result<(), GalleryError> {
    match response.get("status") {
        Some(STATUS_OK) => Ok(()),
        Some(status) => {
            let message = response.get_or_empty("status_text");
            log::debug!("The request failed with {}: {}", status, message);

            Err(GalleryError::Protocol {
                status: Some(status.to_string()),
                message: message.to_string(),
            })
        },
        // Gallery 2 reports some exceptions without a status
        None => match response.get("debug_exception") {
            Some(exception) => {
                log::debug!("The server raised {}", exception);

                Err(GalleryError::Protocol {
                    status: None,
                    message: exception.to_string(),
                })
            },
            None => Ok(()),
        },
    }
}
