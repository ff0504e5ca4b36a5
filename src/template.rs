use crate::context::Context;
use crate::errors::Result;
use crate::options::RenderOptions;
use crate::renderer::Renderer;

/// A user-authored template together with the options it renders with.
///
/// The source is kept as written and scanned again on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Name used to find the template in an `Engine`, eg `citekey`
    pub name: String,
    /// Original text of the template
    pub source: String,
    /// Options applied to every render of this template
    pub options: RenderOptions,
}

impl Template {
    /// Create a template
    pub fn new(name: &str, source: &str, options: RenderOptions) -> Template {
        Template { name: name.to_string(), source: source.to_string(), options }
    }

    /// Renders the template against `context`
    pub fn render(&self, context: &Context) -> Result<String> {
        Renderer::new(&self.source, context, &self.options).render()
    }
}

#[cfg(test)]
mod tests {
    use super::Template;
    use crate::{Context, RenderOptions};

    #[test]
    fn renders_with_its_own_options() {
        let mut context = Context::new();
        context.insert("title", &"The Art of War");
        let tpl = Template::new("citekey", "{{title|titleword}} 2023!", RenderOptions::identifier());
        assert_eq!(tpl.render(&context).unwrap(), "art2023");
    }
}
