//! Route templates and arity-based template selection.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::NavigationError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").expect("placeholder pattern is valid"));

/// A path containing ordered `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    template: String,
    placeholders: Vec<String>,
}

impl RouteTemplate {
    pub fn parse(template: impl Into<String>) -> Self {
        let template = template.into();
        let placeholders = PLACEHOLDER
            .captures_iter(&template)
            .map(|caps| caps[1].to_string())
            .collect();

        Self {
            template,
            placeholders,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholder names in left-to-right order
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.template.trim().is_empty()
    }

    /// Substitute `values` positionally: the Nth placeholder gets the Nth value
    pub fn expand(&self, values: &[impl AsRef<str>]) -> Result<String, NavigationError> {
        if values.len() != self.placeholder_count() {
            return Err(NavigationError::NoMatchingRoute);
        }

        let mut expanded = String::with_capacity(self.template.len());
        let mut last = 0;
        for (found, value) in PLACEHOLDER.find_iter(&self.template).zip(values) {
            expanded.push_str(&self.template[last..found.start()]);
            expanded.push_str(value.as_ref());
            last = found.end();
        }
        expanded.push_str(&self.template[last..]);

        Ok(expanded)
    }
}

/// First non-blank template, in declaration order, with exactly `arity` placeholders
pub fn select_template(
    templates: &[RouteTemplate],
    arity: usize,
) -> Result<&RouteTemplate, NavigationError> {
    templates
        .iter()
        .filter(|template| !template.is_empty())
        .find(|template| template.placeholder_count() == arity)
        .ok_or(NavigationError::NoMatchingRoute)
}
