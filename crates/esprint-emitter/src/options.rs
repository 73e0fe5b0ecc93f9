use serde::{Deserialize, Serialize};

/// Formatting configuration, read-only for the duration of a printing pass.
///
/// Deserializes from camelCase JSON; absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Drop line breaks and indentation.
    pub compact: bool,
    /// Keep the original line structure: disables pretty-call expansion.
    pub retain_lines: bool,
    /// One indentation level.
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: false,
            retain_lines: false,
            indent: "  ".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn retain_lines() -> Self {
        Self {
            retain_lines: true,
            ..Self::default()
        }
    }
}
