//! Case story selection for an application.

use super::analysis::{JobAnalysis, contains_term};
use crate::profile::CaseStory;
use std::fmt::Write;

/// Stories included in an application package.
pub const MAX_STORIES: usize = 5;

/// Terms that mark a story as relevant to a role family.
pub fn role_keywords(role: &str) -> &'static [&'static str] {
    let role = role.to_lowercase();
    if role.contains("growth") {
        &["acquisition", "conversion", "retention", "engagement", "funnel", "a/b test"]
    } else if role.contains("product") {
        &["roadmap", "feature", "user story", "sprint", "stakeholder", "metrics"]
    } else if role.contains("strategy") {
        &["strategic", "planning", "analysis", "framework", "competitive"]
    } else {
        &["management", "leadership", "execution", "results", "improvement"]
    }
}

/// All of a story's text, lowercased.
fn searchable_text(story: &CaseStory) -> String {
    let mut text = format!("{} {}", story.title.to_lowercase(), story.narrative_lower());
    for extra in story
        .skills
        .iter()
        .chain(&story.quantified_outcomes)
        .chain(std::iter::once(&story.industry))
    {
        text.push(' ');
        text.push_str(&extra.to_lowercase());
    }
    text
}

/// Relevance of a story to a role and posting.
///
/// One point per posting keyword found, two per role keyword, and one and a
/// half when the results carry a number.
pub fn score_story(story: &CaseStory, role: &str, analysis: &JobAnalysis) -> f64 {
    let text = searchable_text(story);
    let keyword_hits = analysis
        .all_keywords()
        .filter(|k| contains_term(&text, k))
        .count();
    let role_hits = role_keywords(role)
        .iter()
        .filter(|k| text.contains(*k))
        .count();

    let mut score = keyword_hits as f64 + 2.0 * role_hits as f64;
    if story.results.chars().any(|c| c.is_ascii_digit()) {
        score += 1.5;
    }
    score
}

/// The highest scoring stories, best first. Ties keep profile order.
pub fn select_case_stories<'a>(
    stories: &'a [CaseStory],
    role: &str,
    analysis: &JobAnalysis,
) -> Vec<&'a CaseStory> {
    let mut scored: Vec<(f64, &CaseStory)> = stories
        .iter()
        .map(|s| (score_story(s, role, analysis), s))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_STORIES)
        .map(|(_, story)| story)
        .collect()
}

pub fn render_case_stories(company: &str, role: &str, stories: &[&CaseStory]) -> String {
    let mut out = format!("# Relevant Case Stories - {}\n\n", company);
    let _ = writeln!(
        out,
        "Selected case stories most relevant for the {} application.\n",
        role
    );
    if stories.is_empty() {
        out.push_str("No case stories in the candidate profile yet.\n");
    }
    for (i, story) in stories.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}\n", i + 1, story.title);
        let _ = writeln!(out, "**Situation:** {}\n", story.situation);
        let _ = writeln!(out, "**Task:** {}\n", story.task);
        let _ = writeln!(out, "**Action:** {}\n", story.action);
        let _ = writeln!(out, "**Results:** {}\n", story.results);
        let _ = writeln!(out, "**Skills Demonstrated:** {}\n", story.skills.join(", "));
        out.push_str("---\n\n");
    }
    out
}
