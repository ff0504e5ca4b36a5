use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::ser::Serialize;
use serde_json::value::{to_value, Map, Value};

use crate::errors::{Error, Result as CiteResult};

/// The struct that holds the context of a template rendering.
///
/// Light wrapper around a `BTreeMap` for easier insertions of Serializable
/// values. Collaborators usually fill it from a CSL-JSON record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
    data: BTreeMap<String, Value>,
}

impl Context {
    /// Initializes an empty context
    pub fn new() -> Self {
        Context { data: BTreeMap::new() }
    }

    /// Converts the `val` parameter to `Value` and insert it into the context.
    ///
    /// Values that fail to serialize are stored as `null`, which renders as an
    /// empty string. Use `try_insert` to see the serialization error instead.
    ///
    /// ```rust
    /// # use citemark::Context;
    /// let mut context = Context::new();
    /// context.insert("title", &"The Art of War");
    /// context.insert("year", &2023);
    /// ```
    pub fn insert<T: Serialize + ?Sized, S: Into<String>>(&mut self, key: S, val: &T) {
        self.data.insert(key.into(), to_value(val).unwrap_or(Value::Null));
    }

    /// Converts the `val` parameter to `Value` and insert it into the context.
    ///
    /// Returns an error if the serialization fails.
    pub fn try_insert<T: Serialize + ?Sized, S: Into<String>>(
        &mut self,
        key: S,
        val: &T,
    ) -> CiteResult<()> {
        self.data.insert(key.into(), to_value(val)?);

        Ok(())
    }

    /// Appends the data of the `source` parameter to `self`, overwriting existing keys.
    pub fn extend(&mut self, mut source: Context) {
        self.data.append(&mut source.data);
    }

    /// Converts the context to a `serde_json::Value` consuming the context.
    pub fn into_json(self) -> Value {
        let mut m = Map::new();
        for (key, value) in self.data {
            m.insert(key, value);
        }
        Value::Object(m)
    }

    /// Takes a serde-json `Value` and convert it into a `Context` with no overhead/cloning.
    pub fn from_value(obj: Value) -> CiteResult<Self> {
        match obj {
            Value::Object(m) => {
                let mut data = BTreeMap::new();
                for (key, value) in m {
                    data.insert(key, value);
                }
                Ok(Context { data })
            }
            other => Err(Error::invalid_context(kind_name(&other))),
        }
    }

    /// Takes something that impl Serialize and create a context with it.
    /// Meant to be used if you have a hashmap or a struct and don't want to insert values
    /// one by one in the context.
    pub fn from_serialize(value: impl Serialize) -> CiteResult<Self> {
        let obj = to_value(value)?;
        Context::from_value(obj)
    }

    /// Returns the value at a given key index.
    pub fn get(&self, index: &str) -> Option<&Value> {
        self.data.get(index)
    }

    /// Remove a key from the context, returning the value at the key if the key was previously inserted into the context.
    pub fn remove(&mut self, index: &str) -> Option<Value> {
        self.data.remove(index)
    }

    /// Checks if a value exists at a specific index.
    pub fn contains_key(&self, index: &str) -> bool {
        self.data.contains_key(index)
    }

    /// Resolves a dotted path against the top-level keys.
    pub(crate) fn lookup(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let root = self.data.get(head)?;
        match rest {
            Some(rest) => dotted_pointer(root, rest),
            None => Some(root),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Converts a dotted path to a value, `a.0.b` style.
///
/// Arrays are indexed by their stringified position. Any segment that can't be
/// followed makes the whole lookup return `None`.
pub fn dotted_pointer<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(value);
    }

    pointer.split('.').try_fold(value, |target, token| match target {
        Value::Object(map) => map.get(token),
        Value::Array(list) => parse_index(token).and_then(|x| list.get(x)),
        _ => None,
    })
}

#[inline]
fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        return None;
    }
    s.parse().ok()
}

/// Converts a `Value` to the string that gets substituted in the output.
pub trait ValueRender {
    /// Renders the value to its textual form
    fn render(&self) -> Cow<'_, str>;
}

impl ValueRender for Value {
    fn render(&self) -> Cow<'_, str> {
        match *self {
            Value::String(ref s) => Cow::Borrowed(s),
            Value::Number(ref i) => Cow::Owned(render_number(i)),
            Value::Bool(i) => Cow::Owned(i.to_string()),
            Value::Null => Cow::Borrowed(""),
            Value::Array(ref a) => {
                let items: Vec<Cow<'_, str>> = a.iter().map(|v| v.render()).collect();
                Cow::Owned(items.join(","))
            }
            Value::Object(_) => Cow::Owned(serde_json::to_string(self).unwrap_or_default()),
        }
    }
}

/// Renders `2.0` as `2` so that numbers read the same whether they came in as
/// integers or floats.
fn render_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

/// Decides whether a block is rendered.
pub trait ValueTruthy {
    /// `false` for null, `false`, zero, the empty string and the empty array.
    fn is_truthy(&self) -> bool;
}

impl ValueTruthy for Value {
    fn is_truthy(&self) -> bool {
        match *self {
            Value::Number(ref i) => {
                if i.is_i64() {
                    return i.as_i64().map_or(false, |n| n != 0);
                }
                if i.is_u64() {
                    return i.as_u64().map_or(false, |n| n != 0);
                }
                i.as_f64().map_or(false, |f| f != 0.0)
            }
            Value::Bool(ref i) => *i,
            Value::Null => false,
            Value::String(ref i) => !i.is_empty(),
            Value::Array(ref i) => !i.is_empty(),
            Value::Object(_) => true,
        }
    }
}
