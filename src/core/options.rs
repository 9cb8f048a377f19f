// build configuration
use serde::{Deserialize, Serialize};

pub const DEFAULT_IDENTIFIER_FIELD: &str = "id";

/// What to do with a value that is not an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonObjectPolicy {
    /// Fail the whole build, naming the offending key.
    #[default]
    Reject,
    /// Replace the value with an empty object before injecting the identifier.
    TreatAsEmpty,
}

/// Options for a keyed build.
///
/// Every field is optional when deserialized, missing ones fall back to
/// [`KeyedOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyedOptions {
    pub identifier_field: String,
    pub non_object: NonObjectPolicy,
}

impl Default for KeyedOptions {
    fn default() -> Self {
        Self {
            identifier_field: DEFAULT_IDENTIFIER_FIELD.to_string(),
            non_object: NonObjectPolicy::Reject,
        }
    }
}

impl KeyedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = field.into();
        self
    }

    pub fn with_non_object(mut self, policy: NonObjectPolicy) -> Self {
        self.non_object = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_injects_id_and_rejects_non_objects() {
        let opts = KeyedOptions::default();
        assert_eq!(opts.identifier_field, "id");
        assert_eq!(opts.non_object, NonObjectPolicy::Reject);
    }

    #[test]
    fn setters_override_defaults() {
        let opts = KeyedOptions::new()
            .with_identifier_field("baz")
            .with_non_object(NonObjectPolicy::TreatAsEmpty);
        assert_eq!(opts.identifier_field, "baz");
        assert_eq!(opts.non_object, NonObjectPolicy::TreatAsEmpty);
    }

    #[test]
    fn partial_config_document_fills_in_defaults() {
        let opts: KeyedOptions = serde_json::from_str(r#"{"identifier_field":"slug"}"#).unwrap();
        assert_eq!(opts.identifier_field, "slug");
        assert_eq!(opts.non_object, NonObjectPolicy::Reject);

        let opts: KeyedOptions =
            serde_json::from_str(r#"{"non_object":"treat_as_empty"}"#).unwrap();
        assert_eq!(opts.identifier_field, "id");
        assert_eq!(opts.non_object, NonObjectPolicy::TreatAsEmpty);

        let opts: KeyedOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, KeyedOptions::default());
    }
}
