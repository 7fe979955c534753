//! Per-contact email personalization.

use super::contacts::Contact;
use crate::application::analysis::contains_term;
use crate::pipeline::{ResearchFindings, completed_finding};
use crate::profile::CandidateProfile;
use crate::research::prompts::infer_industry;
use std::collections::HashMap;

/// Characters of news analysis quoted in an opening line.
const NEWS_EXCERPT_CHARS: usize = 50;
/// Longer research sentences fall back to the generic phrase.
const MAX_PHRASE_CHARS: usize = 120;

const FALLBACK_ACHIEVEMENT: &str =
    "Shipped measurable product improvements with cross-functional teams";

/// Values substituted into an email template.
#[derive(Debug, Clone, PartialEq)]
pub struct Personalization {
    pub personalization_hook: String,
    pub specific_reason: String,
    pub specific_value_add: String,
    pub company_challenge: String,
    pub ai_initiative: String,
    pub achievements: [String; 2],
    pub ai_achievements: [String; 2],
}

pub fn personalize(
    contact: &Contact,
    company: &str,
    research: Option<&ResearchFindings>,
    profile: &CandidateProfile,
) -> Personalization {
    let news_analysis = research.and_then(|r| completed_finding(&r.recent_news_analysis));
    let news = research.and_then(|r| completed_finding(&r.recent_news));

    let personalization_hook = if let Some(analysis) = news_analysis {
        let theme = excerpt(analysis.trim_end_matches('.'), NEWS_EXCERPT_CHARS);
        let end = if theme.ends_with("...") { "" } else { "." };
        format!(
            "I saw {}'s recent developments, particularly {}{}",
            company, theme, end
        )
    } else if let Some(news) = news.and_then(short_phrase) {
        format!(
            "I saw {}'s recent {} - impressive progress on product development.",
            company, news
        )
    } else if let Some(post) = &contact.recent_post {
        format!("I noticed your recent post about {}.", post)
    } else {
        format!(
            "I've been following {}'s growth in the {} space.",
            company,
            infer_industry(company)
        )
    };

    let company_challenge = research
        .and_then(|r| completed_finding(&r.key_challenges))
        .and_then(short_phrase)
        .unwrap_or_else(|| "scaling product development".to_string());
    let ai_initiative = research
        .and_then(|r| completed_finding(&r.ai_initiatives))
        .and_then(short_phrase)
        .unwrap_or_else(|| "exploring AI capabilities".to_string());

    Personalization {
        personalization_hook,
        specific_reason:
            "you're expanding the product team and I think I could help accelerate your growth initiatives"
                .to_string(),
        specific_value_add: "scale your product development through systematic experimentation"
            .to_string(),
        company_challenge,
        ai_initiative,
        achievements: pick_two(&select_achievements(&contact.title, &profile.achievements)),
        ai_achievements: pick_two(&profile.ai_achievements.iter().map(String::as_str).collect::<Vec<_>>()),
    }
}

/// Achievements that suit the contact's focus, in profile order.
pub fn select_achievements<'a>(contact_title: &str, achievements: &'a [String]) -> Vec<&'a str> {
    let title = contact_title.to_lowercase();
    let focus: &[&str] = if contains_term(&title, "growth") {
        &["conversion", "growth", "traffic", "leads"]
    } else if contains_term(&title, "ai") || contains_term(&title, "technology") {
        &["ai", "systematic", "research"]
    } else {
        &[]
    };

    let all: Vec<&str> = achievements.iter().map(String::as_str).collect();
    if focus.is_empty() {
        return all;
    }
    let preferred: Vec<&str> = all
        .iter()
        .copied()
        .filter(|a| {
            let lower = a.to_lowercase();
            focus.iter().any(|term| lower.contains(term))
        })
        .collect();
    if preferred.len() < 2 { all } else { preferred }
}

fn pick_two(items: &[&str]) -> [String; 2] {
    let get = |i: usize| {
        items
            .get(i)
            .map(|s| s.to_string())
            .unwrap_or_else(|| FALLBACK_ACHIEVEMENT.to_string())
    };
    [get(0), get(1)]
}

fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// The first sentence of a finding, if it is short enough to drop into a line.
fn short_phrase(text: &str) -> Option<String> {
    let sentence = text
        .split(['\n', '.'])
        .map(str::trim)
        .find(|s| !s.is_empty())?;
    (sentence.chars().count() <= MAX_PHRASE_CHARS).then(|| sentence.to_string())
}

impl Personalization {
    /// Template variables, including the contact and company.
    pub fn variables(&self, contact: &Contact, company: &str, signature: &str) -> HashMap<String, String> {
        let name = if contact.name.is_empty() { "there" } else { contact.name.as_str() };
        crate::template::vars([
            ("name", name),
            ("company_name", company),
            ("signature", signature),
            ("personalization_hook", self.personalization_hook.as_str()),
            ("specific_reason", self.specific_reason.as_str()),
            ("specific_value_add", self.specific_value_add.as_str()),
            ("company_challenge", self.company_challenge.as_str()),
            ("ai_initiative", self.ai_initiative.as_str()),
            ("achievement_1", self.achievements[0].as_str()),
            ("achievement_2", self.achievements[1].as_str()),
            ("relevant_experience_1", self.achievements[0].as_str()),
            ("relevant_experience_2", self.achievements[1].as_str()),
            ("ai_achievement_1", self.ai_achievements[0].as_str()),
            ("ai_achievement_2", self.ai_achievements[1].as_str()),
        ])
    }

    /// Labeled elements for the draft file.
    pub fn elements(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Personalization Hook", self.personalization_hook.as_str()),
            ("Specific Reason", self.specific_reason.as_str()),
            ("Achievement 1", self.achievements[0].as_str()),
            ("Achievement 2", self.achievements[1].as_str()),
            ("Specific Value Add", self.specific_value_add.as_str()),
            ("Company Challenge", self.company_challenge.as_str()),
            ("Ai Initiative", self.ai_initiative.as_str()),
        ]
    }
}
