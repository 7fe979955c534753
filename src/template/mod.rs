//! Placeholder substitution for prompts, emails, and Markdown templates.
//!
//! # Syntax
//!
//! - `{name}` substitutes the value of variable `name`
//! - `{{` renders as a literal `{`
//! - `}}` renders as a literal `}`
//!
//! Two modes exist. [`render_template`] is strict: an undefined variable is
//! an error. It is used for the built-in prompt and email templates, where a
//! missing value is a bug. [`render_partial`] is lenient: unknown placeholders
//! are left verbatim and reported. It is used for templates the user edits
//! by hand.

mod document;

pub use document::{TemplateDocument, TemplateFrontmatter};

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening brace.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => write!(
                f,
                "undefined variable '{}' at position {} in template",
                name, position
            ),
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => write!(
                f,
                "empty variable name '{{}}' at position {} in template",
                position
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Output of a lenient render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRender {
    /// The rendered text. Unknown placeholders are kept as `{name}`.
    pub text: String,
    /// Names of placeholders that had no value, in first-seen order.
    pub missing: Vec<String>,
}

/// Render a template, failing on any undefined variable.
///
/// ```
/// use jobkit::template::{render_template, vars};
///
/// let v = vars([("company_name", "Acme")]);
/// assert_eq!(
///     render_template("Growth expertise for {company_name}", &v).unwrap(),
///     "Growth expertise for Acme"
/// );
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut raw_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => raw_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = raw_name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Render a template, leaving unknown placeholders untouched.
///
/// Braces that do not form a placeholder (`{}`, a `{` with no closing
/// brace, or a `{` followed by a newline before the `}`) are copied as-is,
/// so Markdown with stray braces survives.
pub fn render_partial(template: &str, variables: &HashMap<String, String>) -> PartialRender {
    let mut text = String::with_capacity(template.len());
    let mut missing: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        text.push_str(&rest[..open]);
        let tail = &rest[open..];

        if tail.starts_with("{{") {
            text.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            text.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            text.push('}');
            rest = &tail[1..];
            continue;
        }

        let close = tail[1..].find(['}', '\n', '{']).map(|i| i + 1);
        match close {
            Some(end) if tail[end..].starts_with('}') => {
                let raw = &tail[1..end];
                let name = raw.trim();
                if name.is_empty() {
                    text.push_str(&tail[..=end]);
                } else if let Some(value) = variables.get(name) {
                    text.push_str(value);
                } else {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    text.push_str(&tail[..=end]);
                }
                rest = &tail[end + 1..];
            }
            _ => {
                text.push('{');
                rest = &tail[1..];
            }
        }
    }
    text.push_str(rest);

    PartialRender { text, missing }
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
