//! TOML schema for classifier configuration files
//!
//! ```toml
//! punct_chars = [".", "!", "?"]
//! capitalized_shapes = ["Xx", "Xxx", "Xxxx", "Xxxxx"]
//! ignore_excluded = true
//! check_capitalized = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk configuration shape
///
/// Every field is optional; absent fields fall back to the builtin defaults.
/// Keys this schema does not know are collected in `unknown` and surfaced as
/// warnings instead of being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Sentence-final punctuation token texts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punct_chars: Option<Vec<String>>,

    /// Shapes that allow a restart after a bare newline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalized_shapes: Option<Vec<String>>,

    /// Skip excluded tokens during the scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_excluded: Option<bool>,

    /// Require a capitalised shape after a newline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_capitalized: Option<bool>,

    /// Deprecated, accepted for older configuration files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_endlines: Option<bool>,

    /// Unrecognised keys
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_parses() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert!(file.punct_chars.is_none());
        assert!(file.capitalized_shapes.is_none());
        assert!(file.unknown.is_empty());
    }

    #[test]
    fn test_unknown_keys_collected() {
        let file: ConfigFile = toml::from_str(
            r#"
punct_chars = ["."]
split_on_tables = true
"#,
        )
        .unwrap();

        assert_eq!(file.punct_chars, Some(vec![".".to_string()]));
        assert!(file.unknown.contains_key("split_on_tables"));
    }

    #[test]
    fn test_non_string_punctuation_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("punct_chars = [1, 2]");
        assert!(result.is_err());
    }
}
