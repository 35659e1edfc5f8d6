//! Placeholder substitution for `$NAME$` templates
//!
//! Every token whose name has a value in the substitution data is replaced by
//! that value verbatim. Substituted text is never scanned again, so a value that
//! itself looks like `$OTHER$` stays as written.
//!
//! Tokens without a value are handled by [`PlaceholderPolicy`]:
//! - `Preserve` leaves the literal `$NAME$` in the output
//! - `Strict` fails with [`GenerationError::MissingPlaceholder`] naming the
//!   first unmatched token in template order

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    error::{GenerationError, Result},
    models::{PlaceholderPolicy, TemplateData},
};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)\$").expect("placeholder pattern is valid")
});

/// Renders template text with substitution data
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer {
    policy: PlaceholderPolicy,
}

impl TemplateRenderer {
    /// Create a renderer that preserves unmatched placeholders
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given unmatched-placeholder policy
    pub fn with_policy(policy: PlaceholderPolicy) -> Self {
        Self { policy }
    }

    /// The unmatched-placeholder policy in effect
    pub fn policy(&self) -> PlaceholderPolicy {
        self.policy
    }

    /// Render a template
    ///
    /// # Arguments
    /// * `template` - Raw template text
    /// * `data` - Placeholder values
    ///
    /// # Returns
    /// The rendered text, or `MissingPlaceholder` in strict mode
    pub fn render(&self, template: &str, data: &TemplateData) -> Result<String> {
        if self.policy == PlaceholderPolicy::Strict {
            if let Some(missing) = Self::placeholders(template)
                .into_iter()
                .find(|name| !data.contains(name))
            {
                return Err(GenerationError::MissingPlaceholder(missing));
            }
        }

        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
            match data.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });

        Ok(rendered.into_owned())
    }

    /// Distinct placeholder names in order of first appearance
    pub fn placeholders(template: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(template) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Placeholder names in the template with no value in `data`
    pub fn unmatched(template: &str, data: &TemplateData) -> Vec<String> {
        Self::placeholders(template)
            .into_iter()
            .filter(|name| !data.contains(name))
            .collect()
    }
}
