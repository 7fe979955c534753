//! Candidate material: experience, skills, case stories, and pitch lines.
//!
//! Stored in `config/candidate_profile.json`. Contact details live in
//! [`crate::config::UserProfile`]; this file holds the reusable content that
//! resumes, cover letters, emails, and interview guides draw from. The
//! defaults are sample entries meant to be replaced.

mod defaults;

use crate::error::{JobkitError, Result};
use crate::fs::atomic_write_file;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Everything the generators know about the candidate's track record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub summaries: ResumeSummaries,
    pub experience: Vec<ExperienceEntry>,
    /// Ordered skill groups for the resume's Skills section.
    pub skills: Vec<SkillCategory>,
    pub case_stories: Vec<CaseStory>,
    pub cover_letter: CoverLetterMaterial,
    /// General achievements for outreach emails.
    pub achievements: Vec<String>,
    /// AI-specific achievements for the AI-focused email.
    pub ai_achievements: Vec<String>,
    pub interview_pitch: InterviewPitch,
}

/// Resume summary variants chosen by target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSummaries {
    pub growth: String,
    pub senior: String,
    pub general: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// A STAR-format story (Situation, Task, Action, Result).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStory {
    pub title: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub results: String,
    pub skills: Vec<String>,
    pub quantified_outcomes: Vec<String>,
    pub industry: String,
    /// "high", "medium", or "low".
    pub complexity: String,
}

impl CaseStory {
    /// Situation, task, action, and results joined and lowercased.
    pub fn narrative_lower(&self) -> String {
        format!(
            "{} {} {} {}",
            self.situation, self.task, self.action, self.results
        )
        .to_lowercase()
    }

    pub fn is_high_complexity(&self) -> bool {
        self.complexity.eq_ignore_ascii_case("high")
    }
}

/// Value propositions and worked examples for cover letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterMaterial {
    /// Placed first for growth roles.
    pub growth_value_propositions: Vec<String>,
    pub core_value_propositions: Vec<String>,
    /// At least three examples; growth roles use the first two, others the second and third.
    pub examples: Vec<String>,
    /// Closing call to action. Variables: `{company_name}`, `{role_title}`.
    pub call_to_action: String,
}

/// Value propositions used in interview talking points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewPitch {
    pub base: Vec<String>,
    pub growth: Vec<String>,
    pub senior: Vec<String>,
}

impl CandidateProfile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            JobkitError::ConfigError(format!(
                "failed to read candidate profile '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Load the profile, writing the sample profile first if none exists.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let profile = CandidateProfile::default();
            atomic_write_file(path, &profile.to_json()?)?;
            info!(path = %path.display(), "created sample candidate profile");
            return Ok(profile);
        }
        Self::load(path)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            JobkitError::ConfigError(format!("failed to parse candidate profile JSON: {}", e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| {
            JobkitError::ConfigError(format!("failed to serialize candidate profile: {}", e))
        })?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_profile_is_usable() {
        let profile = CandidateProfile::default();
        assert!(!profile.experience.is_empty());
        assert!(profile.case_stories.len() >= 5);
        assert!(profile.cover_letter.examples.len() >= 3);
        assert!(profile.achievements.len() >= 2);
        assert!(profile.ai_achievements.len() >= 2);
        assert!(profile.cover_letter.call_to_action.contains("{company_name}"));
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let json = r#"{ "achievements": ["Cut churn 20%", "Shipped v2"] }"#;
        let profile = CandidateProfile::from_json(json).unwrap();
        assert_eq!(profile.achievements, vec!["Cut churn 20%", "Shipped v2"]);
        assert_eq!(profile.case_stories, CandidateProfile::default().case_stories);
    }

    #[test]
    fn test_case_story_helpers() {
        let story = CaseStory {
            situation: "Onboarding".to_string(),
            task: "Improve".to_string(),
            action: "Tested".to_string(),
            results: "Doubled CONVERSION".to_string(),
            complexity: "High".to_string(),
            ..Default::default()
        };
        assert_eq!(
            story.narrative_lower(),
            "onboarding improve tested doubled conversion"
        );
        assert!(story.is_high_complexity());
    }

    #[test]
    fn test_malformed_profile_is_config_error() {
        let err = CandidateProfile::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, JobkitError::ConfigError(_)));
    }

    #[test]
    fn test_load_or_init_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("candidate_profile.json");

        let created = CandidateProfile::load_or_init(&path).unwrap();
        let loaded = CandidateProfile::load(&path).unwrap();
        assert_eq!(created, loaded);
    }
}
