use crate::github::{builder::CreateReleaseBuilder, github_client::GithubClient};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateReleaseBuilder<'a> {
        CreateReleaseBuilder::new(self.client, &self.owner, &self.repo)
    }
}
