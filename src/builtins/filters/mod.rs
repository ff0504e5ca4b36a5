//! Formatters applied with `{{ key | name:param }}`.
//!
//! A formatter suffix is parsed once into a [`Formatter`]: a closed
//! [`FormatterKind`] plus its raw colon-separated parameters. Unknown names
//! keep the value as it would render without a formatter.

use serde_json::value::Value;

use crate::context::ValueRender;

pub mod array;
pub mod common;
pub mod number;
pub mod string;

/// Every formatter the engine knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    Upper,
    Lower,
    Capitalize,
    Sentence,
    Truncate,
    Ellipsis,
    /// `first:N`, or `first1`..`first4` with the width baked in
    First(Option<usize>),
    Replace,
    Trim,
    TrimStart,
    TrimEnd,
    Prefix,
    Suffix,
    Pad,
    Substring,
    Number,
    Count,
    Join,
    Split,
    Date,
    Year,
    TitleWord,
    Initials,
    WordCount,
    NoSpace,
    Slug,
    Reverse,
    Json,
    UrlEncode,
    UrlDecode,
}

impl FormatterKind {
    /// Finds the formatter called `name`, if any
    pub fn from_name(name: &str) -> Option<FormatterKind> {
        let kind = match name {
            "upper" | "uppercase" => FormatterKind::Upper,
            "lower" | "lowercase" => FormatterKind::Lower,
            "capitalize" | "title" => FormatterKind::Capitalize,
            "sentence" | "capitalizeFirst" => FormatterKind::Sentence,
            "truncate" => FormatterKind::Truncate,
            "ellipsis" => FormatterKind::Ellipsis,
            "first" => FormatterKind::First(None),
            "first1" => FormatterKind::First(Some(1)),
            "first2" => FormatterKind::First(Some(2)),
            "first3" => FormatterKind::First(Some(3)),
            "first4" => FormatterKind::First(Some(4)),
            "replace" => FormatterKind::Replace,
            "trim" => FormatterKind::Trim,
            "trimstart" => FormatterKind::TrimStart,
            "trimend" => FormatterKind::TrimEnd,
            "prefix" => FormatterKind::Prefix,
            "suffix" => FormatterKind::Suffix,
            "pad" => FormatterKind::Pad,
            "substring" => FormatterKind::Substring,
            "number" => FormatterKind::Number,
            "count" | "length" => FormatterKind::Count,
            "join" => FormatterKind::Join,
            "split" => FormatterKind::Split,
            "date" => FormatterKind::Date,
            "year" => FormatterKind::Year,
            "titleword" => FormatterKind::TitleWord,
            "initials" => FormatterKind::Initials,
            "wordcount" => FormatterKind::WordCount,
            "nospace" => FormatterKind::NoSpace,
            "slug" => FormatterKind::Slug,
            "reverse" => FormatterKind::Reverse,
            "json" => FormatterKind::Json,
            "urlencode" => FormatterKind::UrlEncode,
            "urldecode" => FormatterKind::UrlDecode,
            _ => return None,
        };
        Some(kind)
    }
}

/// A parsed formatter suffix, eg `truncate:10` or `replace:\s+:_`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// The name as written in the template
    pub name: String,
    /// `None` when the name isn't a known formatter
    pub kind: Option<FormatterKind>,
    /// Raw parameters, not trimmed so that `pad:8: ` and `prefix:in ` keep their spaces
    pub params: Vec<String>,
}

impl Formatter {
    /// Parses the part of a marker that follows the `|`
    pub fn parse(suffix: &str) -> Formatter {
        let mut parts = suffix.split(':');
        let name = parts.next().unwrap_or_default().trim().to_string();
        let params = parts.map(str::to_string).collect();
        let kind = FormatterKind::from_name(&name);

        Formatter { name, kind, params }
    }

    fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// All parameters glued back together, for text arguments that may contain `:`
    fn text_param(&self) -> String {
        self.params.join(":")
    }

    fn usize_param(&self, index: usize) -> Option<usize> {
        self.param(index).and_then(|p| p.trim().parse::<usize>().ok())
    }

    /// Runs the formatter on a resolved, non-null value
    pub fn apply(&self, value: &Value) -> String {
        let kind = match self.kind {
            Some(kind) => kind,
            None => {
                tracing::debug!("Unknown formatter `{}`, keeping the value as is", self.name);
                return value.render().into_owned();
            }
        };

        let text = value.render();
        match kind {
            FormatterKind::Upper => string::upper(&text),
            FormatterKind::Lower => string::lower(&text),
            FormatterKind::Capitalize => string::capitalize(&text),
            FormatterKind::Sentence => string::sentence(&text),
            FormatterKind::Truncate => {
                string::truncate(&text, self.usize_param(0).unwrap_or(string::DEFAULT_TRUNCATE))
            }
            FormatterKind::Ellipsis => {
                string::ellipsis(&text, self.usize_param(0).unwrap_or(string::DEFAULT_TRUNCATE))
            }
            FormatterKind::First(width) => {
                string::first(&text, width.or_else(|| self.usize_param(0)).unwrap_or(1))
            }
            FormatterKind::Replace => match self.param(0) {
                Some(pattern) => {
                    let replacement = self.params.get(1..).map(|r| r.join(":")).unwrap_or_default();
                    string::replace(&text, pattern, &replacement)
                }
                None => text.into_owned(),
            },
            FormatterKind::Trim => text.trim().to_string(),
            FormatterKind::TrimStart => text.trim_start().to_string(),
            FormatterKind::TrimEnd => text.trim_end().to_string(),
            FormatterKind::Prefix => string::prefix(&text, &self.text_param()),
            FormatterKind::Suffix => string::suffix(&text, &self.text_param()),
            FormatterKind::Pad => match self.usize_param(0) {
                Some(width) => {
                    let fill = self.param(1).and_then(|p| p.chars().next()).unwrap_or('0');
                    string::pad(&text, width, fill)
                }
                None => text.into_owned(),
            },
            FormatterKind::Substring => {
                let start = self.param(0).and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(0);
                let end = self.param(1).and_then(|p| p.trim().parse::<i64>().ok());
                string::substring(&text, start, end)
            }
            FormatterKind::Number => number::number(&text, self.usize_param(0)),
            FormatterKind::Count => array::count(value),
            FormatterKind::Join => array::join(value, self.param(0).unwrap_or(",")),
            FormatterKind::Split => array::split(&text, self.param(0).unwrap_or(" ")),
            FormatterKind::Date => common::date(value, self.param(0).unwrap_or("iso")),
            FormatterKind::Year => common::date(value, "year"),
            FormatterKind::TitleWord => {
                string::titleword(&text, self.usize_param(0).unwrap_or(1).max(1))
            }
            FormatterKind::Initials => string::initials(&text),
            FormatterKind::WordCount => string::wordcount(&text),
            FormatterKind::NoSpace => string::nospace(&text),
            FormatterKind::Slug => string::slugify(&text),
            FormatterKind::Reverse => array::reverse(value),
            FormatterKind::Json => common::json_encode(value),
            FormatterKind::UrlEncode => common::urlencode(&text),
            FormatterKind::UrlDecode => common::urldecode(&text),
        }
    }
}
