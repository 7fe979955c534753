//! Maps likely questions to case stories and lays them out as STAR answers.

use crate::profile::CaseStory;

/// Keyword groups that link a question to a story.
const QUESTION_KEYWORDS: [&[&str]; 9] = [
    &["decision", "choice", "prioritization"],
    &["influence", "stakeholder", "alignment"],
    &["pivot", "change", "adaptation"],
    &["disagreement", "conflict", "stakeholder"],
    &["failure", "challenge", "problem"],
    &["growth", "scale", "acquisition", "conversion"],
    &["prioritize", "roadmap", "feature"],
    &["data", "analytics", "metrics", "testing"],
    &["leadership", "management", "team"],
];

/// Questions that get a prepared answer.
pub const MAX_PREPARED: usize = 10;

/// The four STAR parts with speaking time and coaching points.
pub const STAR_PARTS: [StarPart; 4] = [
    StarPart {
        name: "Situation",
        definition: "Context and background - where, when, what was happening",
        timing: "30 seconds",
        talking_points: [
            "Set clear context and background",
            "Mention company or project scale if relevant",
            "Highlight why this was challenging or important",
        ],
    },
    StarPart {
        name: "Task",
        definition: "Your responsibility - what you needed to accomplish",
        timing: "45 seconds",
        talking_points: [
            "Clearly define your responsibility",
            "Explain what success looked like",
            "Mention constraints or challenges",
        ],
    },
    StarPart {
        name: "Action",
        definition: "What you did - your specific steps and decisions",
        timing: "60-90 seconds",
        talking_points: [
            "Detail the specific steps you took, not the team",
            "Explain your decision-making process",
            "Highlight relevant skills and approaches",
        ],
    },
    StarPart {
        name: "Result",
        definition: "What happened - outcomes and impact achieved",
        timing: "30-45 seconds",
        talking_points: [
            "Lead with quantified outcomes",
            "Connect to business impact",
            "Mention what you learned",
        ],
    },
];

pub const BEST_PRACTICES: [&str; 5] = [
    "Be specific with metrics and quantifiable outcomes",
    "Focus on your own actions and contributions, not team achievements",
    "Choose examples that demonstrate relevant competencies",
    "Practice timing - aim for 2-3 minutes per response",
    "Connect results back to business impact when possible",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarPart {
    pub name: &'static str,
    pub definition: &'static str,
    pub timing: &'static str,
    pub talking_points: [&'static str; 3],
}

/// A question paired with the story to answer it with.
#[derive(Debug, Clone, PartialEq)]
pub struct StarResponse {
    pub question: String,
    pub story: CaseStory,
    pub connection_to_role: String,
    pub practice_notes: Vec<String>,
}

impl StarResponse {
    /// Story content for each STAR part, in order.
    pub fn parts(&self) -> [(&StarPart, &str); 4] {
        [
            (&STAR_PARTS[0], self.story.situation.as_str()),
            (&STAR_PARTS[1], self.story.task.as_str()),
            (&STAR_PARTS[2], self.story.action.as_str()),
            (&STAR_PARTS[3], self.story.results.as_str()),
        ]
    }
}

fn score_story(question: &str, story: &CaseStory, role: &str) -> u32 {
    let text = story.narrative_lower();
    let mut score = 0;
    for group in QUESTION_KEYWORDS {
        for keyword in group {
            if question.contains(keyword) && text.contains(keyword) {
                score += 1;
            }
        }
    }
    if !story.quantified_outcomes.is_empty() {
        score += 1;
    }
    if role.contains("growth") {
        if text.contains("conversion") {
            score += 2;
        }
    } else if role.contains("senior") && story.is_high_complexity() {
        score += 1;
    }
    score
}

/// The best story for a question, or `None` when nothing scores above zero.
///
/// Ties go to the earlier story.
pub fn match_story<'a>(question: &str, stories: &'a [CaseStory], role: &str) -> Option<&'a CaseStory> {
    let question = question.to_lowercase();
    let role = role.to_lowercase();
    let mut best: Option<(&CaseStory, u32)> = None;
    for story in stories {
        let score = score_story(&question, story, &role);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((story, score));
        }
    }
    best.map(|(story, _)| story)
}

/// Why a story is a fit for the role.
pub fn connect_story_to_role(story: &CaseStory, role: &str) -> String {
    let role = role.to_lowercase();
    let skills = story.skills.join(" ").to_lowercase();
    let mut connections = Vec::new();

    if role.contains("growth") && (skills.contains("growth") || skills.contains("conversion")) {
        connections.push("Demonstrates a systematic approach to growth and conversion optimization");
    }
    if (role.contains("senior") || role.contains("principal")) && story.is_high_complexity() {
        connections.push("Shows ability to handle complex, high-stakes projects");
    }
    if skills.contains("stakeholder") {
        connections.push("Illustrates stakeholder management and alignment skills");
    }
    if !story.quantified_outcomes.is_empty() {
        connections.push("Provides concrete metrics demonstrating business impact");
    }

    if connections.is_empty() {
        "Relevant experience for role requirements".to_string()
    } else {
        connections.join("; ")
    }
}

/// Prepared answers for the first questions that have a matching story.
pub fn prepare_responses<'q>(
    questions: impl IntoIterator<Item = &'q str>,
    stories: &[CaseStory],
    role: &str,
) -> Vec<StarResponse> {
    questions
        .into_iter()
        .take(MAX_PREPARED)
        .filter_map(|question| {
            let story = match_story(question, stories, role)?;
            let top_skills: Vec<&str> = story.skills.iter().take(3).map(String::as_str).collect();
            Some(StarResponse {
                question: question.to_string(),
                connection_to_role: connect_story_to_role(story, role),
                practice_notes: vec![
                    "Practice timing - aim for 2-3 minutes total".to_string(),
                    format!("Emphasize {}", top_skills.join(", ")),
                    "Connect outcomes to role requirements".to_string(),
                    "Be prepared for follow-up questions on methodology".to_string(),
                ],
                story: story.clone(),
            })
        })
        .collect()
}

/// Short story summary for a coaching prompt.
pub fn summarize_story(story: &CaseStory) -> String {
    let situation: String = story.situation.chars().take(100).collect();
    let outcomes: Vec<&str> = story
        .quantified_outcomes
        .iter()
        .take(2)
        .map(String::as_str)
        .collect();
    let skills: Vec<&str> = story.skills.iter().take(3).map(String::as_str).collect();
    format!(
        "Title: {}\nSituation: {}...\nKey Results: {}\nSkills: {}",
        story.title,
        situation,
        outcomes.join(", "),
        skills.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CandidateProfile;

    fn story(title: &str, narrative: &str, quantified: bool, complexity: &str) -> CaseStory {
        CaseStory {
            title: title.to_string(),
            situation: narrative.to_string(),
            task: String::new(),
            action: String::new(),
            results: String::new(),
            skills: vec!["stakeholder management".to_string()],
            quantified_outcomes: if quantified {
                vec!["20% lift".to_string()]
            } else {
                Vec::new()
            },
            industry: String::new(),
            complexity: complexity.to_string(),
        }
    }

    #[test]
    fn test_keyword_overlap_wins() {
        let stories = vec![
            story("Plain", "shipped a thing", false, "low"),
            story("Roadmap", "rebuilt the roadmap around data", false, "low"),
        ];
        let best = match_story("How do you use data to shape a roadmap?", &stories, "PM").unwrap();
        assert_eq!(best.title, "Roadmap");
    }

    #[test]
    fn test_no_match_without_signal() {
        let stories = vec![story("Plain", "shipped a thing", false, "low")];
        assert!(match_story("Tell me about yourself", &stories, "PM").is_none());
    }

    #[test]
    fn test_role_bonuses() {
        let stories = vec![
            story("Quantified", "shipped a thing", true, "low"),
            story("Conversion", "lifted conversion", false, "low"),
            story("Complex", "led a migration", false, "high"),
        ];
        // Quantified scores 1, conversion scores 2 for growth roles.
        let best = match_story("Tell me about yourself", &stories, "Growth PM").unwrap();
        assert_eq!(best.title, "Conversion");

        // Quantified and complex both score 1; the earlier story wins.
        let best = match_story("Tell me about yourself", &stories, "Senior PM").unwrap();
        assert_eq!(best.title, "Quantified");
    }

    #[test]
    fn test_prepare_responses_caps_and_explains() {
        let profile = CandidateProfile::default();
        let questions = ["How do you scale growth?"; 12];
        let responses = prepare_responses(questions, &profile.case_stories, "Growth PM");
        assert_eq!(responses.len(), MAX_PREPARED);

        let first = &responses[0];
        assert_eq!(first.story.title, "Onboarding Funnel Redesign");
        assert!(first
            .connection_to_role
            .starts_with("Demonstrates a systematic approach to growth"));
        assert_eq!(first.parts()[3].0.name, "Result");
        assert_eq!(first.parts()[3].1, first.story.results);
    }

    #[test]
    fn test_connection_fallback() {
        let mut s = story("Plain", "x", false, "low");
        s.skills.clear();
        assert_eq!(
            connect_story_to_role(&s, "PM"),
            "Relevant experience for role requirements"
        );
    }

    #[test]
    fn test_summary() {
        let profile = CandidateProfile::default();
        let summary = summarize_story(&profile.case_stories[0]);
        assert!(summary.starts_with("Title: Onboarding Funnel Redesign\nSituation: "));
        assert!(summary.contains("Key Results: 100% conversion lift, 6% to 12% trial-to-paid"));
    }
}
