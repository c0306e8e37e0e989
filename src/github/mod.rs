pub mod builder;
pub mod github_client;
mod handler;
mod macros;
pub mod request;
pub mod response;
pub mod tag;

use self::{builder::BuilderExecutor, github_client::GithubClient, response::ReleaseResponse};
use crate::{config::ReleaseConfig, http::Error};

/// The remote side of a release creation.
pub trait ReleaseApi {
    async fn create_release(&self, config: &ReleaseConfig) -> Result<ReleaseResponse, Error>;
}

impl ReleaseApi for GithubClient {
    async fn create_release(&self, config: &ReleaseConfig) -> Result<ReleaseResponse, Error> {
        self.repo(&config.owner, &config.repo)
            .releases()
            .create()
            .tag(&config.tag)
            .target_commitish(&config.target_commitish)
            .name(&config.release_name)
            .draft(config.draft)
            .prerelease(config.prerelease)
            .body(&config.body)
            .execute()
            .await
    }
}
