//! Markers that produce a value without looking anything up in the context.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of `{{random}}` when no length is given
pub const DEFAULT_RANDOM_LENGTH: usize = 5;
/// Longest string `{{random:N}}` produces
pub const MAX_RANDOM_LENGTH: usize = 32;

/// A string of `len` characters drawn uniformly from `[A-Za-z0-9]`.
///
/// `len` is clamped to `1..=32`.
pub fn random_string(len: usize) -> String {
    let len = len.clamp(1, MAX_RANDOM_LENGTH);
    rand::thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Length requested by the body of a random marker: `random` or `random:N`.
///
/// Returns `None` when the body isn't a random marker at all.
pub fn random_marker_length(body: &str) -> Option<usize> {
    let rest = body.strip_prefix("random")?;
    if rest.is_empty() {
        return Some(DEFAULT_RANDOM_LENGTH);
    }
    let arg = rest.strip_prefix(':')?.trim();
    let len = match arg.parse::<i64>() {
        Ok(n) => n.clamp(1, MAX_RANDOM_LENGTH as i64) as usize,
        Err(_) => DEFAULT_RANDOM_LENGTH,
    };
    Some(len)
}
