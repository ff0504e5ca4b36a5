use crate::context::Context;
use crate::errors::Result;
use crate::options::RenderOptions;
use crate::renderer::processor::Processor;
use crate::sanitize::{normalize_array, sanitize_identifier};

/// Whether the output of `template` should be repaired into an array
fn is_array_template(template: &str) -> bool {
    template.starts_with('[') && template.ends_with(']')
}

/// Given a template source, a `Context` and `RenderOptions`, renders text
#[derive(Debug)]
pub struct Renderer<'a> {
    /// Template to render
    template: &'a str,
    /// Read-only context the template is rendered against
    context: &'a Context,
    /// Output options
    options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    /// Create a new `Renderer`
    #[inline]
    pub fn new(template: &'a str, context: &'a Context, options: &'a RenderOptions) -> Renderer<'a> {
        Renderer { template, context, options }
    }

    /// Combines the context with the template, then applies the output options
    pub fn render(&self) -> Result<String> {
        let mut output = Processor::new(self.options).render(self.template, self.context)?;

        if self.options.identifier_safe {
            output = sanitize_identifier(&output);
        }
        if self.options.structured_array && is_array_template(self.template) {
            output = normalize_array(&output);
        }

        Ok(output)
    }
}
