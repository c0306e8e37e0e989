use serde::Deserialize;
use std::fmt::{self, Display};

/// Identifier of a created release. GitHub sends a number, but the value is
/// only ever passed through, so a string id is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReleaseId {
    Number(u64),
    Text(String),
}

impl Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseId::Number(id) => write!(f, "{}", id),
            ReleaseId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    pub id: ReleaseId,
    pub html_url: String,
    pub upload_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ignore_unknown_fields() -> Result<(), serde_json::Error> {
        let response: ReleaseResponse = serde_json::from_str(
            r#"{
                "id": 1,
                "node_id": "MDc6UmVsZWFzZTE=",
                "html_url": "https://github.com/octocat/Hello-World/releases/v1.0.0",
                "upload_url": "https://uploads.github.com/repos/octocat/Hello-World/releases/1/assets{?name,label}",
                "tag_name": "v1.0.0",
                "draft": false
            }"#,
        )?;

        assert_eq!(response.id, ReleaseId::Number(1));
        assert_eq!(
            response.upload_url,
            "https://uploads.github.com/repos/octocat/Hello-World/releases/1/assets{?name,label}"
        );

        Ok(())
    }

    #[test]
    fn should_render_ids_as_is() {
        assert_eq!(ReleaseId::Number(42).to_string(), "42");
        assert_eq!(ReleaseId::Text("RE_kwDO".to_owned()).to_string(), "RE_kwDO");
    }
}
