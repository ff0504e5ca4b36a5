use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use crate::builtins::filters::Formatter;
use crate::builtins::functions::{random_marker_length, random_string};
use crate::context::{Context, ValueRender, ValueTruthy};
use crate::errors::{Error, Result};
use crate::options::RenderOptions;
use crate::renderer::for_loop::ForLoop;
use crate::renderer::stack_frame::StackFrame;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// The two kinds of blocks, told apart by the sigil after `{{`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockKind {
    /// `{{#key}}`: rendered when `key` is truthy, once per element for arrays
    Positive,
    /// `{{^key}}`: rendered when `key` is falsy
    Negative,
}

impl BlockKind {
    fn sigil(self) -> char {
        match self {
            BlockKind::Positive => '#',
            BlockKind::Negative => '^',
        }
    }
}

/// A `{{...}}` found in a template, `start..end` covering the braces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Marker<'t> {
    start: usize,
    end: usize,
    body: &'t str,
}

/// Finds the first marker at or after `from`.
///
/// The body runs up to the first `}`, which has to be the start of `}}`. When
/// several `{{` precede it, the marker starts at the last one.
fn find_marker(template: &str, from: usize) -> Option<Marker<'_>> {
    let mut pos = from;
    while let Some(found) = template[pos..].find(OPEN) {
        let start = pos + found;
        let body_start = start + OPEN.len();
        let brace = body_start + template[body_start..].find('}')?;

        // every `{{` before a lone `}` would stop at that same `}`
        if !template[brace..].starts_with(CLOSE) {
            pos = brace + 1;
            continue;
        }
        let start = start + template[start..brace].rfind(OPEN).unwrap_or(0);
        let body = &template[start + OPEN.len()..brace];
        if body.is_empty() {
            pos = start + 1;
            continue;
        }
        return Some(Marker { start, end: brace + CLOSE.len(), body });
    }
    None
}

/// Key of a block opener, eg `#authors` -> `authors`
fn block_key(body: &str, sigil: char) -> Option<&str> {
    let key = body.strip_prefix(sigil)?.trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Closing markers of a template grouped by key, in the order they appear
struct Closers<'t> {
    by_key: HashMap<&'t str, Vec<Marker<'t>>>,
}

impl<'t> Closers<'t> {
    fn new(template: &'t str) -> Self {
        let mut by_key: HashMap<&'t str, Vec<Marker<'t>>> = HashMap::new();
        let mut search = 0;
        while let Some(marker) = find_marker(template, search) {
            if let Some(key) = block_key(marker.body, '/') {
                by_key.entry(key).or_default().push(marker);
            }
            search = marker.end;
        }
        Closers { by_key }
    }

    /// First `{{/key}}` starting at or after `from`
    fn find(&self, key: &str, from: usize) -> Option<Marker<'t>> {
        let closers = self.by_key.get(key)?;
        let index = closers.partition_point(|m| m.start < from);
        closers.get(index).copied()
    }
}

/// Runs the three passes over a template: positive blocks, negative blocks,
/// then variables. Blocks recurse into the same pipeline for their content.
pub struct Processor<'a> {
    options: &'a RenderOptions,
}

impl<'a> Processor<'a> {
    /// Create a new `Processor` that will do the rendering
    pub fn new(options: &'a RenderOptions) -> Self {
        Processor { options }
    }

    /// Renders `template` against `context`, without any sanitization
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        let frame = StackFrame::new(context);
        self.render_body(template, &frame, 0)
    }

    fn render_body(&self, template: &str, frame: &StackFrame<'_>, depth: usize) -> Result<String> {
        if depth > self.options.max_depth {
            tracing::debug!(
                "Giving up at block depth {} ({} loops deep)",
                depth,
                frame.depth()
            );
            return Err(Error::recursion_limit(self.options.max_depth));
        }
        if !template.contains(OPEN) {
            return Ok(template.to_string());
        }

        let output = self.expand_blocks(template, BlockKind::Positive, frame, depth)?;
        let output = self.expand_blocks(&output, BlockKind::Negative, frame, depth)?;
        self.substitute_variables(&output, frame)
    }

    fn check_size(&self, len: usize) -> Result<()> {
        if len > self.options.max_output {
            return Err(Error::output_too_large(self.options.max_output));
        }
        Ok(())
    }

    /// Replaces every block of `kind`, left to right. Openers without a
    /// matching closer are kept as text.
    fn expand_blocks(
        &self,
        template: &str,
        kind: BlockKind,
        frame: &StackFrame<'_>,
        depth: usize,
    ) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut cursor = 0;
        let mut search = 0;
        let mut closers = None;

        while let Some(open) = find_marker(template, search) {
            search = open.end;
            let key = match block_key(open.body, kind.sigil()) {
                Some(key) => key,
                None => continue,
            };
            let closers = closers.get_or_insert_with(|| Closers::new(template));
            let close = match closers.find(key, open.end) {
                Some(close) => close,
                None => continue,
            };

            output.push_str(&template[cursor..open.start]);
            let inner = &template[open.end..close.start];
            output.push_str(&self.render_block(kind, key, inner, frame, depth)?);
            self.check_size(output.len())?;
            cursor = close.end;
            search = close.end;
        }
        output.push_str(&template[cursor..]);

        Ok(output)
    }

    fn render_block(
        &self,
        kind: BlockKind,
        key: &str,
        inner: &str,
        frame: &StackFrame<'_>,
        depth: usize,
    ) -> Result<String> {
        let value = frame.lookup(key);
        let truthy = value.as_deref().map_or(false, ValueTruthy::is_truthy);

        match (kind, value.as_deref()) {
            (BlockKind::Negative, _) if truthy => Ok(String::new()),
            (BlockKind::Negative, _) => self.render_body(inner, frame, depth + 1),
            (BlockKind::Positive, Some(Value::Array(items))) => {
                let mut output = String::new();
                let mut for_loop = ForLoop::from_array(items);
                while !for_loop.is_done() {
                    let loop_frame = StackFrame::new_for_loop(frame, &for_loop);
                    output.push_str(&self.render_body(inner, &loop_frame, depth + 1)?);
                    self.check_size(output.len())?;
                    for_loop.increment();
                }
                Ok(output)
            }
            (BlockKind::Positive, _) if truthy => self.render_body(inner, frame, depth + 1),
            (BlockKind::Positive, _) => Ok(String::new()),
        }
    }

    fn substitute_variables(&self, template: &str, frame: &StackFrame<'_>) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut cursor = 0;

        while let Some(marker) = find_marker(template, cursor) {
            output.push_str(&template[cursor..marker.start]);
            match render_variable(marker.body, frame) {
                Some(text) => output.push_str(&text),
                None => output.push_str(&template[marker.start..marker.end]),
            }
            self.check_size(output.len())?;
            cursor = marker.end;
        }
        output.push_str(&template[cursor..]);

        Ok(output)
    }
}

/// Text for a variable marker body such as `title|titleword:2`, or `None`
/// when the body isn't a variable and should stay as written.
fn render_variable(body: &str, frame: &StackFrame<'_>) -> Option<String> {
    // `{{ key | join:; }}`: a padded marker is padded on both ends
    let padded = body.starts_with(char::is_whitespace);
    let (key, formatter) = match body.split_once('|') {
        Some((key, formatter)) if padded => (key.trim(), Some(formatter.trim_end())),
        Some((key, formatter)) => (key.trim(), Some(formatter)),
        None => (body.trim(), None),
    };
    if key.is_empty() || key.starts_with(|c: char| matches!(c, '#' | '^' | '/')) {
        return None;
    }

    let value = match random_marker_length(key) {
        Some(len) => Cow::Owned(Value::String(random_string(len))),
        None => match frame.lookup(key) {
            Some(value) => value,
            None => return Some(String::new()),
        },
    };
    if value.is_null() {
        return Some(String::new());
    }

    let text = match formatter {
        Some(formatter) => Formatter::parse(formatter).apply(&value),
        None => value.render().into_owned(),
    };
    Some(text)
}
