/// Formatters operating on the rendered text of a value
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unic_segment::Graphemes;

use crate::options::DEFAULT_MAX_OUTPUT;

/// Length used by `truncate` and `ellipsis` when none is given
pub const DEFAULT_TRUNCATE: usize = 30;

/// Widest `pad` accepted, larger widths leave the text as is
pub const MAX_PAD_WIDTH: usize = DEFAULT_MAX_OUTPUT;

/// Words skipped by `titleword`, compared lowercased
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "on", "in", "at", "to", "for", "with", "of", "from",
    "by", "as", "into", "like", "near", "over", "past", "since", "upon",
];

lazy_static! {
    static ref WORD_START_RE: Regex = Regex::new(r"\b\w").unwrap();
}

/// Convert a value to uppercase.
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Convert a value to lowercase.
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercases the first letter of every word, leaving the rest alone so that
/// `McCarthy` or `DNA` survive.
pub fn capitalize(s: &str) -> String {
    WORD_START_RE.replace_all(s, |caps: &Captures| caps[0].to_uppercase()).into_owned()
}

/// Uppercases the first character only.
pub fn sentence(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().chain(chars).collect(),
    }
}

/// Keeps the first `length` graphemes.
pub fn truncate(s: &str, length: usize) -> String {
    Graphemes::new(s).take(length).collect()
}

/// Like `truncate` but appends `...` when something was cut.
pub fn ellipsis(s: &str, length: usize) -> String {
    let mut graphemes = Graphemes::new(s);
    let head: String = graphemes.by_ref().take(length).collect();
    if graphemes.next().is_some() {
        head + "..."
    } else {
        head
    }
}

/// Prefix of one to four graphemes, as used for short author or journal codes.
pub fn first(s: &str, width: usize) -> String {
    truncate(s, width.clamp(1, 4))
}

/// Replaces every match of the regex `pattern`. An invalid pattern leaves the
/// text untouched.
pub fn replace(s: &str, pattern: &str, replacement: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace_all(s, replacement).into_owned(),
        Err(e) => {
            tracing::debug!("Formatter `replace` got an invalid pattern `{}`: {}", pattern, e);
            s.to_string()
        }
    }
}

/// Adds `prefix` in front of non-empty text.
pub fn prefix(s: &str, prefix: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("{}{}", prefix, s)
}

/// Adds `suffix` after non-empty text.
pub fn suffix(s: &str, suffix: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("{}{}", s, suffix)
}

/// Left pads with `fill` until the text is `width` characters long.
pub fn pad(s: &str, width: usize, fill: char) -> String {
    if width > MAX_PAD_WIDTH {
        tracing::debug!("Pad width {} is over the limit of {}, not padding", width, MAX_PAD_WIDTH);
        return s.to_string();
    }
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out: String = std::iter::repeat(fill).take(width - len).collect();
    out.push_str(s);
    out
}

/// Characters between `start` and `end`. Indices are clamped to the text and
/// swapped when reversed.
pub fn substring(s: &str, start: i64, end: Option<i64>) -> String {
    let len = s.chars().count() as i64;
    let clamp = |i: i64| i.clamp(0, len) as usize;
    let mut from = clamp(start);
    let mut to = clamp(end.unwrap_or(len));
    if from > to {
        std::mem::swap(&mut from, &mut to);
    }
    s.chars().skip(from).take(to - from).collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn squash(words: &[&str]) -> String {
    words
        .iter()
        .flat_map(|w| w.chars())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// First `count` significant words of a title, lowercased and glued together.
///
/// Stop words are skipped. When the title is made of stop words only, the
/// first `count` words are used instead so the result is never empty for a
/// non-empty title.
pub fn titleword(s: &str, count: usize) -> String {
    let significant: Vec<&str> = s
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|w| !w.is_empty() && !is_stop_word(&w.to_lowercase()))
        .take(count)
        .collect();

    if !significant.is_empty() {
        return squash(&significant);
    }

    let raw: Vec<&str> = s.split_whitespace().take(count).collect();
    squash(&raw)
}

/// First letter of every word, uppercased. Hyphenated names count as several
/// words.
pub fn initials(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Gets the number of words in a string.
pub fn wordcount(s: &str) -> String {
    s.split_whitespace().count().to_string()
}

/// Removes every whitespace character.
pub fn nospace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Transform a string into ASCII, lowercase it, trim it and replace spaces with hyphens.
pub fn slugify(s: &str) -> String {
    slug::slugify(s)
}
