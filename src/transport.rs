use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Error as ReqwestError,
};
use url::Url;

/// Something which can carry Gallery Remote requests to a server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post an already-encoded body, returning the response text.
    async fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<String, ReqwestError>;

    /// Download the raw contents of `url`.
    async fn get(&self, url: &Url) -> Result<Vec<u8>, ReqwestError>;
}

/// The default [`Transport`], backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport which remembers cookies, so the gallery's PHP
    /// session survives from one request to the next.
    pub fn new() -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(HttpTransport::with_client(client))
    }

    /// Use an existing client (e.g. one with custom timeouts or proxies).
    ///
    /// The client should have a cookie store enabled.
    pub fn with_client(client: Client) -> Self { HttpTransport { client } }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<String, ReqwestError> {
        log::debug!("Posting {} bytes to {}", body.len(), url);

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, content_type)
            .header(ACCEPT, "text/plain")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        log::trace!("Headers: {:#?}", response.headers());

        response.text().await
    }

    async fn get(&self, url: &Url) -> Result<Vec<u8>, ReqwestError> {
        log::debug!("Downloading {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        log::trace!("Headers: {:#?}", response.headers());

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{collections::VecDeque, sync::Mutex};

    /// A request seen by the [`ScriptedTransport`].
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Recorded {
        Post {
            url: Url,
            content_type: String,
            body: String,
        },
        Get {
            url: Url,
        },
    }

    impl Recorded {
        pub(crate) fn body(&self) -> &str {
            match self {
                Recorded::Post { body, .. } => body,
                Recorded::Get { .. } => "",
            }
        }

        pub(crate) fn url(&self) -> &Url {
            match self {
                Recorded::Post { url, .. } | Recorded::Get { url } => url,
            }
        }
    }

    /// A fake server which replies with canned bodies, in order, and keeps
    /// track of everything it was sent.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedTransport {
        replies: Mutex<VecDeque<String>>,
        downloads: Mutex<VecDeque<Vec<u8>>>,
        requests: Mutex<Vec<Recorded>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new() -> Self { ScriptedTransport::default() }

        pub(crate) fn reply(self, body: &str) -> Self {
            self.replies.lock().unwrap().push_back(body.to_string());
            self
        }

        pub(crate) fn download(self, data: &[u8]) -> Self {
            self.downloads.lock().unwrap().push_back(data.to_vec());
            self
        }

        pub(crate) fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn post(
            &self,
            url: &Url,
            content_type: &str,
            body: Vec<u8>,
        ) -> Result<String, ReqwestError> {
            self.requests.lock().unwrap().push(Recorded::Post {
                url: url.clone(),
                content_type: content_type.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });

            Ok(self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("Unexpected POST request"))
        }

        async fn get(&self, url: &Url) -> Result<Vec<u8>, ReqwestError> {
            self.requests
                .lock()
                .unwrap()
                .push(Recorded::Get { url: url.clone() });

            Ok(self
                .downloads
                .lock()
                .unwrap()
                .pop_front()
                .expect("Unexpected GET request"))
        }
    }
}
