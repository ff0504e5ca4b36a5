use std::borrow::Cow;

use serde_json::Value;

use crate::context::{dotted_pointer, Context};
use crate::renderer::for_loop::{ForLoop, CURRENT_ITEM};

pub type Val<'a> = Cow<'a, Value>;

/// A scope variables are looked up in.
///
/// Loop frames point at the frame they were opened from, so lookups fall
/// back outwards and nothing a loop binds is visible once it's done.
#[derive(Debug)]
pub struct StackFrame<'a> {
    context: Option<&'a Context>,
    parent: Option<&'a StackFrame<'a>>,
    for_loop: Option<&'a ForLoop<'a>>,
}

impl<'a> StackFrame<'a> {
    pub fn new(context: &'a Context) -> Self {
        StackFrame { context: Some(context), parent: None, for_loop: None }
    }

    pub fn new_for_loop(parent: &'a StackFrame<'a>, for_loop: &'a ForLoop<'a>) -> Self {
        StackFrame { context: None, parent: Some(parent), for_loop: Some(for_loop) }
    }

    /// How many loops this frame is nested in
    pub fn depth(&self) -> usize {
        self.parent.map_or(0, |p| p.depth() + 1)
    }

    /// Finds the value at `path`, searching this frame then its parents.
    ///
    /// Inside a loop `.` is the current element, `.a.b` a path into it and
    /// `@index` and friends describe the iteration. Fields of an object
    /// element shadow outer variables of the same name.
    pub fn lookup(&self, path: &str) -> Option<Val<'a>> {
        let for_loop = match self.for_loop {
            Some(for_loop) => for_loop,
            None => return self.context.and_then(|c| c.lookup(path)).map(Cow::Borrowed),
        };
        let item = for_loop.current_value();

        if path == CURRENT_ITEM {
            return item.map(Cow::Borrowed);
        }
        if let Some(inner) = path.strip_prefix(CURRENT_ITEM) {
            return item.and_then(|i| dotted_pointer(i, inner)).map(Cow::Borrowed);
        }
        if path.starts_with('@') {
            if let Some(meta) = for_loop.meta(path) {
                return Some(Cow::Owned(meta));
            }
        }
        if let Some(Value::Object(fields)) = item {
            let head = path.split('.').next().unwrap_or(path);
            if fields.contains_key(head) {
                return item.and_then(|i| dotted_pointer(i, path)).map(Cow::Borrowed);
            }
        }

        self.parent.and_then(|p| p.lookup(path))
    }
}
