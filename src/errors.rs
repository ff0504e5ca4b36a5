use std::convert::Into;
use std::error::Error as StdError;
use std::fmt;

/// The kind of an error (non-exhaustive)
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// Generic error
    Msg(String),
    /// Blocks were nested deeper than `RenderOptions::max_depth`
    RecursionLimit {
        /// The configured limit
        limit: usize,
    },
    /// The rendered output grew past `RenderOptions::max_output` bytes
    OutputTooLarge {
        /// The configured limit, in bytes
        limit: usize,
    },
    /// A template was asked for by name but never registered
    TemplateNotFound(String),
    /// The value given to build a `Context` was not an object
    InvalidContext(String),
    /// An error happened while serializing or deserializing JSON
    Json(serde_json::Error),
}

/// The Error type
#[derive(Debug)]
pub struct Error {
    /// Kind of error
    pub kind: ErrorKind,
    source: Option<Box<dyn StdError + Sync + Send>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Msg(ref message) => write!(f, "{}", message),
            ErrorKind::RecursionLimit { limit } => {
                write!(f, "Blocks are nested deeper than the limit of {}", limit)
            }
            ErrorKind::OutputTooLarge { limit } => {
                write!(f, "Rendered output is larger than the limit of {} bytes", limit)
            }
            ErrorKind::TemplateNotFound(ref name) => write!(f, "Template '{}' not found", name),
            ErrorKind::InvalidContext(ref found) => {
                write!(f, "Creating a Context from a Value requires an object, got {}", found)
            }
            ErrorKind::Json(ref e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}

impl Error {
    /// Creates generic error
    pub fn msg(value: impl ToString) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), source: None }
    }

    /// Creates generic error with a source
    pub fn chain(value: impl ToString, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), source: Some(source.into()) }
    }

    /// Creates a recursion limit error
    pub fn recursion_limit(limit: usize) -> Self {
        Self { kind: ErrorKind::RecursionLimit { limit }, source: None }
    }

    /// Creates an output size error
    pub fn output_too_large(limit: usize) -> Self {
        Self { kind: ErrorKind::OutputTooLarge { limit }, source: None }
    }

    /// Creates a template not found error
    pub fn template_not_found(name: impl ToString) -> Self {
        Self { kind: ErrorKind::TemplateNotFound(name.to_string()), source: None }
    }

    /// Creates an invalid context error
    pub fn invalid_context(found: impl ToString) -> Self {
        Self { kind: ErrorKind::InvalidContext(found.to_string()), source: None }
    }

    /// Creates JSON error
    pub fn json(value: serde_json::Error) -> Self {
        Self { kind: ErrorKind::Json(value), source: None }
    }

    /// Whether this error comes from one of the resource limits of `RenderOptions`
    pub fn is_resource_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::RecursionLimit { .. } | ErrorKind::OutputTooLarge { .. })
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Self::msg(e)
    }
}
impl From<String> for Error {
    fn from(e: String) -> Self {
        Self::msg(e)
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::json(e)
    }
}
/// Convenient wrapper around std::Result.
pub type Result<T> = ::std::result::Result<T, Error>;
