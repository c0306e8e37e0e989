use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, StatusCode,
};
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

pub const USER_AGENT_VALUE: &str = "create-release";
pub const API_VERSION: &str = "2022-11-28";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, USER_AGENT_VALUE)
    }
}

/// Turns a sent request into the response text, or into an [`Error`] whose
/// `Display` is the message reported by the service.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            log::debug!("request failed with status {}: {}", status, text);
            return Err(Error::GenericResponseError {
                message: error_message(status, &text),
            });
        }

        Ok(text)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return body.message;
    }

    let text = text.trim();
    if text.is_empty() {
        status.to_string()
    } else {
        text.to_owned()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { message: String },
    #[error("{cause}")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request: {cause}")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response: {cause}")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
