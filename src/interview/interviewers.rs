//! Who is on the interview loop and what each of them will focus on.

use crate::error::{JobkitError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Interviewer {
    pub name: String,
    pub title: String,
    pub background: String,
}

impl Interviewer {
    pub fn new(name: &str, title: &str, background: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            title: title.trim().to_string(),
            background: background.to_string(),
        }
    }

    /// Parse an `--interviewer` value: `Name|Title`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.split('|').map(str::trim).collect::<Vec<_>>().as_slice() {
            [name, title] if !name.is_empty() && !title.is_empty() => {
                Ok(Interviewer::new(name, title, "Research needed"))
            }
            _ => Err(JobkitError::UserError(format!(
                "invalid interviewer '{}'\n\nUse \"Name|Title\".",
                value
            ))),
        }
    }

    pub fn focus_areas(&self) -> [&'static str; 3] {
        focus_areas(&self.title)
    }

    pub fn prep_notes(&self) -> [&'static str; 3] {
        prep_notes(&self.title)
    }
}

/// The usual loop when no interviewers are known yet.
pub fn default_interviewers() -> Vec<Interviewer> {
    vec![
        Interviewer::new(
            "Hiring Manager",
            "Head of Product / VP Product",
            "Direct manager for the role",
        ),
        Interviewer::new("Peer PM", "Senior Product Manager", "Current team member"),
        Interviewer::new(
            "Engineering Lead",
            "Engineering Manager / Tech Lead",
            "Key collaboration partner",
        ),
        Interviewer::new(
            "Design Partner",
            "Senior Designer / Design Lead",
            "Cross-functional partner",
        ),
    ]
}

/// Checked in order; the first title match wins.
const FOCUS_BY_TITLE: [(&str, [&str; 3]); 5] = [
    (
        "engineering",
        ["Technical depth", "Requirement clarity", "Development process"],
    ),
    (
        "design",
        ["User empathy", "Design collaboration", "User research"],
    ),
    ("product", ["Strategic thinking", "Prioritization", "Execution"]),
    ("ceo", ["Vision alignment", "Leadership", "Business impact"]),
    (
        "vp",
        ["Strategic planning", "Cross-team collaboration", "Scalability"],
    ),
];

pub fn focus_areas(title: &str) -> [&'static str; 3] {
    let title = title.to_lowercase();
    FOCUS_BY_TITLE
        .iter()
        .find(|(needle, _)| title.contains(needle))
        .map(|(_, areas)| *areas)
        .unwrap_or(["General competence", "Cultural fit", "Communication"])
}

pub fn prep_notes(title: &str) -> [&'static str; 3] {
    let title = title.to_lowercase();
    if title.contains("engineering") {
        [
            "Prepare technical examples with clear requirements",
            "Discuss your approach to working with engineering teams",
            "Be ready to talk about data and metrics",
        ]
    } else if title.contains("design") {
        [
            "Emphasize user research and empathy",
            "Discuss design collaboration experiences",
            "Prepare examples of user-centered decision making",
        ]
    } else if title.contains("ceo") || title.contains("founder") {
        [
            "Focus on strategic thinking and business impact",
            "Prepare vision and leadership examples",
            "Discuss company mission alignment",
        ]
    } else {
        [
            "Prepare role-relevant examples",
            "Focus on collaboration and communication",
            "Be ready to discuss strategic thinking",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let interviewer = Interviewer::parse("Dana Cruz | Engineering Manager").unwrap();
        assert_eq!(interviewer.name, "Dana Cruz");
        assert_eq!(interviewer.title, "Engineering Manager");
        assert_eq!(interviewer.background, "Research needed");

        assert!(matches!(
            Interviewer::parse("Dana Cruz"),
            Err(JobkitError::UserError(_))
        ));
        assert!(Interviewer::parse("|CEO").is_err());
    }

    #[test]
    fn test_default_loop() {
        let loop_ = default_interviewers();
        assert_eq!(loop_.len(), 4);
        assert_eq!(loop_[0].name, "Hiring Manager");
        assert_eq!(loop_[3].name, "Design Partner");
    }

    #[test]
    fn test_focus_by_title() {
        assert_eq!(focus_areas("Engineering Manager")[0], "Technical depth");
        assert_eq!(focus_areas("Senior Designer / Design Lead")[0], "User empathy");
        // "Head of Product / VP Product" matches product before vp.
        assert_eq!(focus_areas("Head of Product / VP Product")[0], "Strategic thinking");
        assert_eq!(focus_areas("CEO")[0], "Vision alignment");
        assert_eq!(focus_areas("Recruiter")[0], "General competence");
    }

    #[test]
    fn test_prep_notes() {
        assert_eq!(
            prep_notes("Founder")[0],
            "Focus on strategic thinking and business impact"
        );
        assert_eq!(prep_notes("Recruiter")[0], "Prepare role-relevant examples");
    }
}
