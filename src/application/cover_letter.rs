//! Cover letter drafting.

use crate::pipeline::{ResearchFindings, completed_finding};
use crate::profile::CandidateProfile;
use crate::template::{render_partial, vars};
use chrono::NaiveDate;
use std::fmt::Write;

/// Value propositions in one letter.
const MAX_VALUE_PROPOSITIONS: usize = 4;
/// News text quoted in the opening hook.
const HOOK_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct CoverLetter {
    pub company_name: String,
    pub role_title: String,
    pub date: NaiveDate,
    pub opening_hook: String,
    pub value_propositions: Vec<String>,
    pub examples: Vec<String>,
    pub call_to_action: String,
    pub signature: String,
}

pub fn draft_cover_letter(
    profile: &CandidateProfile,
    signature: &str,
    company: &str,
    role: &str,
    research: Option<&ResearchFindings>,
    date: NaiveDate,
) -> CoverLetter {
    let material = &profile.cover_letter;
    let growth_role = role.to_lowercase().contains("growth");

    let value_propositions = if growth_role {
        material
            .growth_value_propositions
            .iter()
            .chain(&material.core_value_propositions)
            .take(MAX_VALUE_PROPOSITIONS)
            .cloned()
            .collect()
    } else {
        material
            .core_value_propositions
            .iter()
            .take(MAX_VALUE_PROPOSITIONS)
            .cloned()
            .collect()
    };

    // Growth roles lead with the first two examples, others with the next two.
    let skip = if growth_role || material.examples.len() < 3 { 0 } else { 1 };
    let examples = material.examples.iter().skip(skip).take(2).cloned().collect();

    let call_to_action = render_partial(
        &material.call_to_action,
        &vars([("company_name", company), ("role_title", role)]),
    )
    .text;

    CoverLetter {
        company_name: company.to_string(),
        role_title: role.to_string(),
        date,
        opening_hook: opening_hook(company, research),
        value_propositions,
        examples,
        call_to_action,
        signature: signature.to_string(),
    }
}

/// Opening line, as specific as the recorded research allows.
pub fn opening_hook(company: &str, research: Option<&ResearchFindings>) -> String {
    if let Some(research) = research {
        if let Some(analysis) = completed_finding(&research.recent_news_analysis) {
            return format!(
                "I was excited to learn about {}'s recent developments, particularly {} - this aligns \
                 with my experience scaling products through systematic experimentation and AI implementation.",
                company,
                excerpt(analysis)
            );
        }
        if let Some(news) = completed_finding(&research.recent_news) {
            return format!(
                "I was excited to see {}'s recent {} - it aligns with my experience scaling products \
                 through systematic experimentation and AI implementation.",
                company, news
            );
        }
    }
    format!(
        "I'm writing to express my interest in joining {}'s product team, where I can apply my \
         experience in growth strategy and product development to help drive your mission forward.",
        company
    )
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= HOOK_EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(HOOK_EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

impl CoverLetter {
    /// The letter as it would be sent.
    pub fn full_text(&self) -> String {
        let mut out = format!("{}\n\n", self.opening_hook);
        if !self.value_propositions.is_empty() {
            out.push_str("I believe I can bring significant value to your team through:\n\n");
            for prop in &self.value_propositions {
                let _ = writeln!(out, "- {}", prop);
            }
            out.push('\n');
        }
        if !self.examples.is_empty() {
            let lead = match self.examples.len() {
                1 => "One example that demonstrates this experience:",
                2 => "Two examples that demonstrate this experience:",
                _ => "Examples that demonstrate this experience:",
            };
            let _ = writeln!(out, "{}\n\n{}\n", lead, self.examples.join("\n\n"));
        }
        let _ = write!(out, "{}\n\nBest regards,\n{}", self.call_to_action, self.signature);
        out
    }

    /// The document written to the company folder: letter first, then its parts.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Cover Letter - {}\n", self.company_name);
        let _ = writeln!(out, "**Role:** {}  ", self.role_title);
        let _ = writeln!(out, "**Date:** {}\n", self.date.format("%B %d, %Y"));
        let _ = writeln!(out, "---\n\n## Cover Letter Text\n\n{}\n\n---\n", self.full_text());
        out.push_str("## Cover Letter Components\n\n");
        let _ = writeln!(out, "### Opening Hook\n{}\n", self.opening_hook);
        out.push_str("### Value Propositions\n");
        for prop in &self.value_propositions {
            let _ = writeln!(out, "- {}", prop);
        }
        out.push_str("\n### Examples\n");
        for example in &self.examples {
            let _ = writeln!(out, "- {}", example);
        }
        let _ = writeln!(out, "\n### Call to Action\n{}", self.call_to_action);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
    }

    #[test]
    fn test_hook_prefers_news_analysis() {
        let research = ResearchFindings {
            recent_news_analysis: Some("their new care navigation product".to_string()),
            recent_news: Some("funding round".to_string()),
            ..Default::default()
        };
        let hook = opening_hook("Acme", Some(&research));
        assert!(hook.starts_with(
            "I was excited to learn about Acme's recent developments, particularly their new care navigation product - "
        ));
    }

    #[test]
    fn test_hook_truncates_long_analysis() {
        let research = ResearchFindings {
            recent_news_analysis: Some("x".repeat(150)),
            ..Default::default()
        };
        let hook = opening_hook("Acme", Some(&research));
        assert!(hook.contains(&format!("particularly {}... -", "x".repeat(100))));
    }

    #[test]
    fn test_hook_falls_back_to_news_then_generic() {
        let research = ResearchFindings {
            recent_news: Some("Series C".to_string()),
            ..Default::default()
        };
        assert!(opening_hook("Acme", Some(&research)).starts_with("I was excited to see Acme's recent Series C"));

        let placeholders = ResearchFindings::placeholders("Acme");
        assert!(opening_hook("Acme", Some(&placeholders)).starts_with("I'm writing to express my interest"));
        assert!(opening_hook("Acme", None).contains("joining Acme's product team"));
    }

    #[test]
    fn test_growth_role_gets_growth_props_and_first_examples() {
        let profile = CandidateProfile::default();
        let letter = draft_cover_letter(&profile, "Jordan Lee", "Acme", "Growth PM", None, date());

        assert_eq!(letter.value_propositions.len(), 4);
        assert_eq!(
            letter.value_propositions[0],
            profile.cover_letter.growth_value_propositions[0]
        );
        assert_eq!(letter.examples, &profile.cover_letter.examples[..2]);
    }

    #[test]
    fn test_other_roles_use_core_props_and_later_examples() {
        let profile = CandidateProfile::default();
        let letter = draft_cover_letter(&profile, "Jordan Lee", "Acme", "Product Manager", None, date());

        assert_eq!(letter.value_propositions, profile.cover_letter.core_value_propositions);
        assert_eq!(letter.examples, &profile.cover_letter.examples[1..3]);
    }

    #[test]
    fn test_full_text_and_markdown() {
        let profile = CandidateProfile::default();
        let letter = draft_cover_letter(&profile, "Jordan Lee", "Acme", "Product Manager", None, date());

        let text = letter.full_text();
        assert!(text.contains("Two examples that demonstrate this experience:"));
        assert!(text.contains("Acme"));
        assert!(text.ends_with("Best regards,\nJordan Lee"));
        assert!(!letter.call_to_action.contains("{company_name}"));

        let md = letter.to_markdown();
        assert!(md.starts_with("# Cover Letter - Acme"));
        assert!(md.contains("**Date:** October 05, 2026"));
        assert!(md.contains("### Call to Action"));
    }
}
