use super::BuilderExecutor;
use crate::{
    github::{
        github_client::GithubClient, request::CreateReleaseRequest, response::ReleaseResponse,
        tag::Tag,
    },
    http::Error,
};

pub struct CreateReleaseBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub release_name: String,
    pub release_tag: Tag,
    pub target_commitish: String,
    pub draft: bool,
    pub prerelease: bool,
    pub body: Option<String>,
}

impl<'a> CreateReleaseBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateReleaseBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            release_name: String::new(),
            release_tag: Tag::empty(),
            target_commitish: String::new(),
            draft: false,
            prerelease: false,
            body: None,
        }
    }

    pub fn name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = release_name.into();
        self
    }

    pub fn tag(mut self, release_tag: &Tag) -> Self {
        self.release_tag = release_tag.to_owned();
        self
    }

    pub fn target_commitish(mut self, target_commitish: impl Into<String>) -> Self {
        self.target_commitish = target_commitish.into();
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl BuilderExecutor for CreateReleaseBuilder<'_> {
    type Output = ReleaseResponse;

    async fn execute(self) -> Result<ReleaseResponse, Error> {
        let request = CreateReleaseRequest::new(
            self.release_tag.value(),
            self.target_commitish,
            self.release_name,
            self.body.unwrap_or_default(),
            self.draft,
            self.prerelease,
        );

        self.client
            .post_release(&self.owner, &self.repo, request)
            .await
    }
}
