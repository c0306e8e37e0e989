use super::Vars;

/// Metadata of the workflow run that triggered the step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub sha: Option<String>,
}

impl Context {
    #[cfg(test)]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, sha: impl Into<String>) -> Self {
        Context {
            owner: Some(owner.into()),
            repo: Some(repo.into()),
            sha: Some(sha.into()),
        }
    }

    /// Reads `GITHUB_REPOSITORY` (`owner/repo`) and `GITHUB_SHA`.
    pub fn from_vars(vars: &Vars) -> Self {
        let (owner, repo) = match vars
            .get("GITHUB_REPOSITORY")
            .and_then(|repository| repository.split_once('/'))
        {
            Some((owner, repo)) => (non_empty(owner), non_empty(repo)),
            None => (None, None),
        };

        Context {
            owner,
            repo,
            sha: vars.get("GITHUB_SHA").and_then(|sha| non_empty(sha)),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
