const TAG_REF_PREFIX: &str = "refs/tags/";

/// Strip a leading `refs/tags/` from a git reference, once.
pub fn strip_ref_prefix(reference: &str) -> &str {
    reference
        .strip_prefix(TAG_REF_PREFIX)
        .unwrap_or(reference)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Build a tag from either a bare tag name or a full `refs/tags/...` ref
    pub fn from_ref(reference: &str) -> Self {
        Tag::new(strip_ref_prefix(reference))
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn empty() -> Tag {
        Tag {
            name: "".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_new_tag() {
        let tag = Tag::new("v1.0.0");

        assert_eq!(tag.value(), "v1.0.0");
    }

    #[test]
    fn should_strip_the_tag_ref_prefix() {
        let tag = Tag::from_ref("refs/tags/v1.10.15");

        assert_eq!(tag.value(), "v1.10.15");
    }

    #[test]
    fn should_return_the_same_value_when_there_is_no_prefix() {
        for reference in ["v1.0.0", "1.0.0", "refs/heads/main", "tags/v1", "xrefs/tags/v1"] {
            assert_eq!(Tag::from_ref(reference).value(), reference);
        }
    }

    #[test]
    fn should_strip_the_prefix_only_once() {
        assert_eq!(strip_ref_prefix("refs/tags/refs/tags/v1"), "refs/tags/v1");
    }

    #[test]
    fn should_be_empty_when_only_the_prefix_is_given() {
        assert!(Tag::from_ref("refs/tags/").is_empty());
    }

    #[test]
    fn should_create_a_empty_tag() {
        let tag = Tag::empty();

        assert_eq!(tag.value(), "");
        assert!(tag.is_empty());
    }
}
