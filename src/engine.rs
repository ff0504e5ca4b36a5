use std::collections::HashMap;

use crate::context::Context;
use crate::errors::{Error, Result};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::template::Template;

/// Named templates, eg the citekey template, the note header template and
/// one template per metadata field.
///
/// Rendering borrows the engine immutably, so one `Engine` can be shared
/// between threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    #[doc(hidden)]
    pub templates: HashMap<String, Template>,
    /// Options used by `add_raw_template`
    default_options: RenderOptions,
}

impl Engine {
    /// Create an empty engine using the default `RenderOptions`
    pub fn new() -> Engine {
        Engine::default()
    }

    /// Create an empty engine whose raw templates use `options`
    pub fn with_options(options: RenderOptions) -> Engine {
        Engine { templates: HashMap::new(), default_options: options }
    }

    /// Add a single template with its own options, replacing any template
    /// of the same name.
    ///
    /// ```rust
    /// # use citemark::{Engine, RenderOptions};
    /// let mut engine = Engine::new();
    /// engine.add_template("citekey", "{{author|lower}}{{year}}", RenderOptions::identifier());
    /// ```
    pub fn add_template(&mut self, name: &str, source: &str, options: RenderOptions) {
        self.templates.insert(name.to_string(), Template::new(name, source, options));
    }

    /// Add a single template using the engine's default options
    pub fn add_raw_template(&mut self, name: &str, source: &str) {
        let options = self.default_options.clone();
        self.add_template(name, source, options);
    }

    /// Add several templates at once using the engine's default options
    ///
    /// ```rust
    /// # use citemark::Engine;
    /// let mut engine = Engine::new();
    /// engine.add_raw_templates(vec![
    ///     ("header", "# {{title}}"),
    ///     ("keywords", "[{{#keyword}}\"{{.}}\",{{/keyword}}]"),
    /// ]);
    /// ```
    pub fn add_raw_templates<I, N, C>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        for (name, source) in templates {
            self.add_raw_template(name.as_ref(), source.as_ref());
        }
    }

    /// Removes a template, returning it if it was registered
    pub fn remove_template(&mut self, name: &str) -> Option<Template> {
        self.templates.remove(name)
    }

    /// Get a template by name
    pub fn get_template(&self, name: &str) -> Result<&Template> {
        match self.templates.get(name) {
            Some(tpl) => Ok(tpl),
            None => Err(Error::template_not_found(name)),
        }
    }

    /// Names of all the registered templates, in no particular order
    pub fn get_template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Renders the template called `name` against `context`
    ///
    /// ```rust
    /// # use citemark::{Context, Engine, RenderOptions};
    /// let mut engine = Engine::new();
    /// engine.add_template("citekey", "{{author|lower}}:{{year}}", RenderOptions::identifier());
    ///
    /// let mut context = Context::new();
    /// context.insert("author", "Smith");
    /// context.insert("year", &2023);
    /// assert_eq!(engine.render("citekey", &context).unwrap(), "smith:2023");
    /// ```
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        let template = self.get_template(name)?;
        template.render(context)
    }

    /// Renders a template that isn't registered, with the given options
    pub fn one_off(input: &str, context: &Context, options: &RenderOptions) -> Result<String> {
        Renderer::new(input, context, options).render()
    }
}
