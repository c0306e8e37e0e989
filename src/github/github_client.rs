use super::{
    request::{CreateReleaseRequest, SerializeRequest},
    response::ReleaseResponse,
};
use crate::{http::Error, post};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Authenticated handle on the GitHub REST API.
pub struct GithubClient {
    token: String,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            token: token.into(),
            api_url: api_url.trim_end_matches('/').to_owned(),
        }
    }

    pub(super) async fn post_release(
        &self,
        owner: &str,
        repo: &str,
        request: CreateReleaseRequest,
    ) -> Result<ReleaseResponse, Error> {
        let uri = format!("{}/repos/{}/{}/releases", self.api_url, owner, repo);
        log::debug!("creating release at {}", uri);

        let body = request.into_request()?;

        let response = post!(&self.token, uri, body)?;

        serde_json::from_str::<ReleaseResponse>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })
    }
}
