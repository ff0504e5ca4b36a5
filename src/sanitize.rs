//! Post-processing applied to a fully rendered template.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::context::ValueRender;

lazy_static! {
    static ref DISALLOWED_ID_RE: Regex = Regex::new(r"[^\w:.#$%&+?<>~/-]").unwrap();
    static ref TRAILING_PUNCT_RE: Regex = Regex::new(r"[:.#$%&+?<>~/-]+$").unwrap();
    static ref REPEATED_COMMA_RE: Regex = Regex::new(r",(\s*,)+").unwrap();
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Restricts `input` to characters that are safe in citation keys and file names.
///
/// Output that doesn't start with a word character has its leading non-word
/// characters replaced by `_`, so empty output becomes `_`. Internal `:.#$%&-+?<>~/` are kept, trailing ones
/// are not.
///
/// ```rust
/// # use citemark::sanitize_identifier;
/// assert_eq!(sanitize_identifier("-abc-"), "_abc");
/// assert_eq!(sanitize_identifier("smith:2023 (draft)"), "smith:2023draft");
/// ```
pub fn sanitize_identifier(input: &str) -> String {
    let prefixed = if input.starts_with(is_word_char) {
        input.to_string()
    } else {
        format!("_{}", input.trim_start_matches(|c: char| !is_word_char(c)))
    };
    let cleaned = DISALLOWED_ID_RE.replace_all(&prefixed, "");
    TRAILING_PUNCT_RE.replace(&cleaned, "").into_owned()
}

fn item_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.render().into_owned(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn unquote(token: &str) -> &str {
    let token = token.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = token.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return inner.trim();
        }
    }
    token
}

/// Repairs the output of a `[...]` template into a compact JSON array of strings.
///
/// Loops in such templates typically leave a trailing or doubled comma behind,
/// and authors don't always quote their items; both are accepted.
///
/// ```rust
/// # use citemark::normalize_array;
/// assert_eq!(normalize_array(r#"["Smith", "Jones",]"#), r#"["Smith","Jones"]"#);
/// assert_eq!(normalize_array("[ml, nlp]"), r#"["ml","nlp"]"#);
/// ```
pub fn normalize_array(input: &str) -> String {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(trimmed);
    let repaired = REPEATED_COMMA_RE.replace_all(inner, ",");
    let repaired = repaired.trim().trim_matches(',').trim();

    let items: Vec<String> = match serde_json::from_str::<Vec<Value>>(&format!("[{}]", repaired)) {
        Ok(values) => values.iter().filter_map(item_text).collect(),
        Err(_) => repaired
            .split(',')
            .map(unquote)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    };

    Value::from(items).to_string()
}
