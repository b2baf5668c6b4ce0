//! Named placeholder substitution for fixed multi-line templates.
//!
//! Placeholders are written `{{name}}`. Single braces are left alone so the
//! Python listings can keep their f-strings and dict literals verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("Valid placeholder regex"));

/// A fixed template with `{{name}}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static str);

impl Template {
    /// Substitute `vars` into the template in a single pass.
    ///
    /// Substituted values are never rescanned. A placeholder without a
    /// value is left in place.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        PLACEHOLDER
            .replace_all(self.0, |caps: &Captures| {
                let name = &caps[1];
                match vars.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => (*value).to_string(),
                    None => {
                        tracing::warn!(placeholder = name, "Template placeholder has no value");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Names of all placeholders, in order of first appearance.
    #[cfg(test)]
    pub(crate) fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.0) {
            if let Some(m) = caps.get(1) {
                if !names.contains(&m.as_str()) {
                    names.push(m.as_str());
                }
            }
        }
        names
    }
}
