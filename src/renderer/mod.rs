//! Responsible for rendering templates

mod for_loop;
mod processor;
#[allow(clippy::module_inception)]
mod renderer;
mod stack_frame;

#[cfg(test)]
mod tests;

pub use self::renderer::Renderer;

use crate::context::Context;
use crate::errors::Result;
use crate::options::RenderOptions;

/// Renders `template` against `context`.
///
/// Never fails: missing keys render empty, unmatched markup stays as text.
/// If a resource limit of `options` is hit, the error is logged and an empty
/// string is returned; use [`try_render`] to get the error instead.
///
/// ```rust
/// # use citemark::{render, Context, RenderOptions};
/// let mut context = Context::new();
/// context.insert("author", "Smith");
/// context.insert("year", &2023);
/// let key = render("{{author|lower}}{{year}}", &context, &RenderOptions::default());
/// assert_eq!(key, "smith2023");
/// ```
pub fn render(template: &str, context: &Context, options: &RenderOptions) -> String {
    match try_render(template, context, options) {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Failed to render template, using an empty string: {}", e);
            String::new()
        }
    }
}

/// Same as [`render`] but returns the error when a resource limit is hit.
pub fn try_render(template: &str, context: &Context, options: &RenderOptions) -> Result<String> {
    Renderer::new(template, context, options).render()
}
