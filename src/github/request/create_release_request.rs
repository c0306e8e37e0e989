use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    pub fn new(
        tag_name: impl Into<String>,
        target_commitish: impl Into<String>,
        name: impl Into<String>,
        body: impl Into<String>,
        draft: bool,
        prerelease: bool,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            target_commitish: target_commitish.into(),
            name: name.into(),
            body: body.into(),
            draft,
            prerelease,
        }
    }
}
