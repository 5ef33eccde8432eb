//! Template resolution for artifact paths and other configured strings.

use super::Result;
use handlebars::Handlebars;
use serde_json::Value;
use std::collections::BTreeMap;

/// Renders `{{name}}` style templates against a property bag.
///
/// Output is not HTML-escaped and unknown properties render as empty text.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// Creates an engine with escaping disabled.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Renders `template` with `props`.
    ///
    /// Strings without a `{{` marker are returned unchanged.
    pub fn render(&self, template: &str, props: &BTreeMap<String, Value>) -> Result<String> {
        if !template.contains("{{") {
            return Ok(template.to_string());
        }
        Ok(self.registry.render_template(template, props)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("projectName".to_string(), Value::from("app")),
            ("projectVersion".to_string(), Value::from("1.0.0")),
        ])
    }

    #[test]
    fn renders_properties() {
        let engine = TemplateEngine::new();
        let out = engine
            .render("out/{{projectName}}-{{projectVersion}}.zip", &props())
            .unwrap();
        assert_eq!(out, "out/app-1.0.0.zip");
    }

    #[test]
    fn does_not_escape() {
        let engine = TemplateEngine::new();
        let props = BTreeMap::from([("name".to_string(), Value::from("a&b"))]);
        assert_eq!(engine.render("{{name}}", &props).unwrap(), "a&b");
    }

    #[test]
    fn missing_properties_render_empty() {
        let engine = TemplateEngine::new();
        assert_eq!(engine.render("x{{missing}}y", &props()).unwrap(), "xy");
    }

    #[test]
    fn malformed_template_is_an_error() {
        let engine = TemplateEngine::new();
        assert!(engine.render("{{#if}", &props()).is_err());
    }

    #[test]
    fn plain_strings_pass_through() {
        let engine = TemplateEngine::new();
        assert_eq!(engine.render("a.zip", &props()).unwrap(), "a.zip");
    }
}
