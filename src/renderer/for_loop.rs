//! Loop state for positive blocks over arrays

use serde_json::{to_value, Value};

/// Name the current element is bound to inside a loop body
pub const CURRENT_ITEM: &str = ".";

/// Tracks where a block is in the array it iterates over.
#[derive(Debug)]
pub struct ForLoop<'a> {
    /// Values to iterate on
    values: &'a [Value],
    /// What's the current loop index (0-indexed)
    current: usize,
}

impl<'a> ForLoop<'a> {
    /// Creates a loop positioned on the first element
    pub fn from_array(values: &'a [Value]) -> ForLoop<'a> {
        ForLoop { values, current: 0 }
    }

    /// Element of the current iteration
    #[inline]
    pub fn current_value(&self) -> Option<&'a Value> {
        self.values.get(self.current)
    }

    /// Whether the loop ran past the last element
    #[inline]
    pub fn is_done(&self) -> bool {
        self.current >= self.values.len()
    }

    /// Moves on to the next element
    #[inline]
    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Value of one of the `@` variables for the current iteration
    pub fn meta(&self, name: &str) -> Option<Value> {
        let position = self.current + 1;
        let value = match name {
            "@index" => to_value(self.current),
            "@number" => to_value(position),
            "@first" => to_value(self.current == 0),
            "@last" => to_value(position == self.values.len()),
            "@odd" => to_value(position % 2 == 1),
            "@even" => to_value(position % 2 == 0),
            "@length" => to_value(self.values.len()),
            _ => return None,
        };
        value.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn meta_values_follow_the_position() {
        let values = vec![json!("p"), json!("q"), json!("r")];
        let mut for_loop = ForLoop::from_array(&values);

        assert_eq!(for_loop.meta("@index"), Some(json!(0)));
        assert_eq!(for_loop.meta("@number"), Some(json!(1)));
        assert_eq!(for_loop.meta("@first"), Some(json!(true)));
        assert_eq!(for_loop.meta("@odd"), Some(json!(true)));
        assert_eq!(for_loop.meta("@length"), Some(json!(3)));

        for_loop.increment();
        for_loop.increment();
        assert_eq!(for_loop.current_value(), Some(&json!("r")));
        assert_eq!(for_loop.meta("@last"), Some(json!(true)));
        assert_eq!(for_loop.meta("@even"), Some(json!(false)));
        assert_eq!(for_loop.meta("@first"), Some(json!(false)));

        for_loop.increment();
        assert!(for_loop.is_done());
    }

    #[test]
    fn unknown_meta_is_none() {
        let values = vec![json!(1)];
        assert_eq!(ForLoop::from_array(&values).meta("@key"), None);
    }
}
