use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Default nesting limit for blocks.
pub const DEFAULT_MAX_DEPTH: usize = 32;
/// Default limit on the rendered output, in bytes.
pub const DEFAULT_MAX_OUTPUT: usize = 1024 * 1024;

/// Per-render flags.
///
/// Every field has a default so partial configs deserialize:
///
/// ```rust
/// # use citemark::RenderOptions;
/// let options = RenderOptions::from_json(r#"{"identifier_safe": true}"#).unwrap();
/// assert!(options.identifier_safe);
/// assert!(!options.structured_array);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Restrict the output to characters allowed in citation keys and file names
    pub identifier_safe: bool,
    /// Repair the output into a JSON array when the template looks like `[...]`
    pub structured_array: bool,
    /// How deep blocks may nest before rendering gives up
    pub max_depth: usize,
    /// How many bytes of output may be produced before rendering gives up
    pub max_output: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            identifier_safe: false,
            structured_array: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_output: DEFAULT_MAX_OUTPUT,
        }
    }
}

impl RenderOptions {
    /// Options for citation keys and file names
    pub fn identifier() -> Self {
        RenderOptions { identifier_safe: true, ..Default::default() }
    }

    /// Options for list-valued metadata fields
    pub fn structured() -> Self {
        RenderOptions { structured_array: true, ..Default::default() }
    }

    /// Reads options from a JSON document
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::chain("Invalid render options", e))
    }
}
