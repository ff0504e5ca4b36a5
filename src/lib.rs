//! # Citemark
//!
//! A small template engine for the text a reference manager generates from a
//! bibliographic record: citation keys, note headers and metadata fields.
//!
//! The grammar is mustache-like:
//!
//! - `{{title}}`, `{{author.0.family}}`: variables, looked up by dotted path
//! - `{{title|titleword:2}}`: a variable passed through one formatter
//! - `{{#author}}...{{/author}}`: rendered once per element of an array, or
//!   once if the value is truthy
//! - `{{^doi}}...{{/doi}}`: rendered only if the value is missing or empty
//! - `{{random:8}}`: a random alphanumeric string
//!
//! Inside a loop `{{.}}` is the current element and `{{@index}}`,
//! `{{@number}}`, `{{@first}}`, `{{@last}}`, `{{@odd}}`, `{{@even}}` and
//! `{{@length}}` describe the iteration.
//!
//! Rendering never fails on bad markup or missing data: unknown markers stay
//! as text and missing values render empty.
//!
//! ## Example
//!
//! ```rust
//! use citemark::{render, Context, RenderOptions};
//!
//! let mut context = Context::new();
//! context.insert("title", "The Art of War");
//! context.insert("author", &vec!["Sun", "Tzu"]);
//! context.insert("year", &2023);
//!
//! let key = render(
//!     "{{#author}}{{#@first}}{{.|lower}}{{/@first}}{{/author}}{{year}}{{title|titleword}}",
//!     &context,
//!     &RenderOptions::identifier(),
//! );
//! assert_eq!(key, "sun2023art");
//! ```

mod builtins;
mod context;
mod engine;
mod errors;
mod options;
mod renderer;
mod sanitize;
mod template;

// Library exports.

pub use crate::builtins::filters::{Formatter, FormatterKind};
pub use crate::builtins::functions::random_string;
pub use crate::context::{dotted_pointer, Context, ValueRender, ValueTruthy};
pub use crate::engine::Engine;
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::options::{RenderOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OUTPUT};
pub use crate::renderer::{render, try_render, Renderer};
pub use crate::sanitize::{normalize_array, sanitize_identifier};
pub use crate::template::Template;
// Re-export Value and other useful things from serde
// so apps can build contexts without depending on serde_json
pub use serde_json::value::{from_value, to_value, Map, Number, Value};
