//! Markdown templates with optional YAML frontmatter.
//!
//! ```text
//! ---
//! title: Cover Letter
//! output: "{company_file}_Cover_Letter.md"
//! ---
//!
//! Dear {company_name} hiring team,
//! ```
//!
//! The frontmatter is optional. A template without it is all body.

use crate::error::{JobkitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Frontmatter fields understood by `fill`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFrontmatter {
    /// Human-readable template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Output filename pattern, itself rendered with the template variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A parsed Markdown template.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub frontmatter: TemplateFrontmatter,
    /// Everything after the closing `---` line (or the whole file).
    pub body: String,
}

impl TemplateDocument {
    /// Load and parse a template file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            JobkitError::UserError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Split a template into frontmatter and body.
    ///
    /// Line endings are normalized to `\n` in both parts.
    pub fn parse(content: &str) -> Result<Self> {
        let normalized = content.replace("\r\n", "\n");

        let Some(after_open) = normalized.strip_prefix("---\n") else {
            return Ok(Self {
                frontmatter: TemplateFrontmatter::default(),
                body: normalized,
            });
        };

        let (yaml, body) = if let Some(rest) = after_open.strip_prefix("---") {
            ("", rest)
        } else {
            let closing = after_open.find("\n---").ok_or_else(|| {
                JobkitError::UserError(
                    "template frontmatter is missing its closing '---' line".to_string(),
                )
            })?;
            (&after_open[..closing], &after_open[closing + 4..])
        };
        let body = body.strip_prefix('\n').unwrap_or(body);

        let frontmatter = if yaml.trim().is_empty() {
            TemplateFrontmatter::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                JobkitError::UserError(format!("failed to parse template frontmatter: {}", e))
            })?
        };

        Ok(Self {
            frontmatter,
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_frontmatter() {
        let doc = TemplateDocument::parse("# {name}\n\nBody\n").unwrap();
        assert!(doc.frontmatter.output.is_none());
        assert_eq!(doc.body, "# {name}\n\nBody\n");
    }

    #[test]
    fn test_parse_with_frontmatter() {
        let content = "---\ntitle: Cover Letter\noutput: \"{company_file}_Letter.md\"\nowner: me\n---\n\nDear team\n";
        let doc = TemplateDocument::parse(content).unwrap();
        assert_eq!(doc.frontmatter.title.as_deref(), Some("Cover Letter"));
        assert_eq!(
            doc.frontmatter.output.as_deref(),
            Some("{company_file}_Letter.md")
        );
        assert!(doc.frontmatter.extra.contains_key("owner"));
        assert_eq!(doc.body, "\nDear team\n");
    }

    #[test]
    fn test_parse_crlf() {
        let content = "---\r\ntitle: T\r\n---\r\nBody\r\n";
        let doc = TemplateDocument::parse(content).unwrap();
        assert_eq!(doc.frontmatter.title.as_deref(), Some("T"));
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        let doc = TemplateDocument::parse("---\n---\nBody").unwrap();
        assert!(doc.frontmatter.title.is_none());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_unclosed_frontmatter_is_error() {
        let err = TemplateDocument::parse("---\ntitle: T\nBody").unwrap_err();
        assert!(err.to_string().contains("closing '---'"));
    }

    #[test]
    fn test_horizontal_rule_in_body_is_kept() {
        let doc = TemplateDocument::parse("---\ntitle: T\n---\nA\n\n---\n\nB\n").unwrap();
        assert_eq!(doc.body, "A\n\n---\n\nB\n");
    }
}
