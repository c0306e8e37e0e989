use crate::{
    action::{context::Context, InputOptions, Inputs, Vars},
    github::{
        github_client::DEFAULT_API_URL,
        tag::{strip_ref_prefix, Tag},
    },
};
use std::path::PathBuf;
use thiserror::Error;

pub mod input {
    pub const TAG_NAME: &str = "tag_name";
    pub const RELEASE_NAME: &str = "release_name";
    pub const BODY: &str = "body";
    pub const DRAFT: &str = "draft";
    pub const PRERELEASE: &str = "prerelease";
    pub const COMMITISH: &str = "commitish";
    pub const OWNER_NAME: &str = "owner_name";
    pub const REPO_NAME: &str = "repo_name";
    pub const TOKEN: &str = "token";

    #[cfg(test)]
    pub const ALL: [&str; 9] = [
        TAG_NAME,
        RELEASE_NAME,
        BODY,
        DRAFT,
        PRERELEASE,
        COMMITISH,
        OWNER_NAME,
        REPO_NAME,
        TOKEN,
    ];
}

pub mod output {
    pub const ID: &str = "id";
    pub const HTML_URL: &str = "html_url";
    pub const UPLOAD_URL: &str = "upload_url";

    #[cfg(test)]
    pub const ALL: [&str; 3] = [ID, HTML_URL, UPLOAD_URL];
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),
    #[error("Input {0} is empty once the refs/tags/ prefix is removed")]
    EmptyTag(String),
    #[error("Cannot resolve the repository owner: set {} or GITHUB_REPOSITORY", input::OWNER_NAME)]
    MissingOwner,
    #[error("Cannot resolve the repository name: set {} or GITHUB_REPOSITORY", input::REPO_NAME)]
    MissingRepository,
    #[error("Parameter {} or the GITHUB_TOKEN environment variable is required", input::TOKEN)]
    MissingToken,
}

/// Process-level settings read from the runner environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub env_token: Option<String>,
    pub output_file: Option<PathBuf>,
    pub debug: bool,
}

impl Settings {
    pub fn from_vars(vars: &Vars) -> Self {
        let non_empty = |key: &str| vars.get(key).filter(|value| !value.is_empty()).cloned();

        Settings {
            api_url: non_empty("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            env_token: non_empty("GITHUB_TOKEN"),
            output_file: non_empty("GITHUB_OUTPUT").map(PathBuf::from),
            debug: vars.get("RUNNER_DEBUG").is_some_and(|value| value == "1"),
        }
    }

    /// The `token` input wins over the `GITHUB_TOKEN` environment variable.
    pub fn token(&self, inputs: &impl Inputs) -> Result<String, ConfigError> {
        let token = inputs.get_input(input::TOKEN, InputOptions::optional())?;
        if !token.is_empty() {
            return Ok(token);
        }

        self.env_token.clone().ok_or(ConfigError::MissingToken)
    }
}

/// Everything needed to create one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    pub owner: String,
    pub repo: String,
    pub tag: Tag,
    pub release_name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub target_commitish: String,
}

impl ReleaseConfig {
    pub fn resolve(inputs: &impl Inputs, context: &Context) -> Result<Self, ConfigError> {
        let tag = Tag::from_ref(&inputs.get_input(input::TAG_NAME, InputOptions::required())?);
        if tag.is_empty() {
            return Err(ConfigError::EmptyTag(input::TAG_NAME.to_owned()));
        }

        let release_name = inputs.get_input(input::RELEASE_NAME, InputOptions::optional())?;
        let body = inputs.get_input(input::BODY, InputOptions::optional())?;
        let draft = is_true(&inputs.get_input(input::DRAFT, InputOptions::optional())?);
        let prerelease = is_true(&inputs.get_input(input::PRERELEASE, InputOptions::optional())?);

        let target_commitish = or_else(
            inputs.get_input(input::COMMITISH, InputOptions::optional())?,
            &context.sha,
        )
        .unwrap_or_default();

        let owner = or_else(
            inputs.get_input(input::OWNER_NAME, InputOptions::optional())?,
            &context.owner,
        )
        .ok_or(ConfigError::MissingOwner)?;

        let repo = or_else(
            inputs.get_input(input::REPO_NAME, InputOptions::optional())?,
            &context.repo,
        )
        .ok_or(ConfigError::MissingRepository)?;

        Ok(ReleaseConfig {
            owner,
            repo,
            tag,
            release_name: strip_ref_prefix(&release_name).to_owned(),
            body,
            draft,
            prerelease,
            target_commitish,
        })
    }
}

/// Only the exact string `true` switches a flag on.
pub fn is_true(value: &str) -> bool {
    value == "true"
}

fn or_else(value: String, fallback: &Option<String>) -> Option<String> {
    if value.is_empty() {
        fallback.clone().filter(|fallback| !fallback.is_empty())
    } else {
        Some(value)
    }
}
