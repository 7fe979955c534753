//! Resume tailoring.

use super::analysis::{JobAnalysis, KeywordCategory};
use crate::config::UserProfile;
use crate::profile::{CandidateProfile, ExperienceEntry, SkillCategory};
use std::fmt::Write;

/// Matched keywords taken from each category for the summary.
const TERMS_PER_CATEGORY: usize = 3;
/// Keywords named in the summary's expertise clause.
const SUMMARY_TERMS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeHeader {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub target_role: String,
    pub target_company: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TailoredResume {
    pub header: ResumeHeader,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
}

/// Build a resume for one company and role from the candidate profile.
pub fn tailor_resume(
    user: &UserProfile,
    profile: &CandidateProfile,
    company: &str,
    role: &str,
    analysis: &JobAnalysis,
) -> TailoredResume {
    let header = ResumeHeader {
        name: user.name.clone(),
        email: user.email.clone(),
        phone: user.phone.clone(),
        linkedin: user.linkedin.clone(),
        target_role: role.to_string(),
        target_company: company.to_string(),
    };

    let growth_role = role.to_lowercase().contains("growth");
    let experience = profile
        .experience
        .iter()
        .cloned()
        .map(|mut entry| {
            if growth_role {
                entry.bullets.sort_by_key(|b| !is_growth_bullet(b));
            }
            entry
        })
        .collect();

    TailoredResume {
        header,
        summary: tailored_summary(profile, role, analysis),
        experience,
        skills: prioritize_skills(&profile.skills, analysis),
    }
}

fn tailored_summary(profile: &CandidateProfile, role: &str, analysis: &JobAnalysis) -> String {
    let role = role.to_lowercase();
    let mut summary = if role.contains("growth") {
        profile.summaries.growth.clone()
    } else if role.contains("senior") {
        profile.summaries.senior.clone()
    } else {
        profile.summaries.general.clone()
    };

    let terms: Vec<&str> = analysis
        .keywords
        .values()
        .flat_map(|found| found.iter().take(TERMS_PER_CATEGORY))
        .map(String::as_str)
        .take(SUMMARY_TERMS)
        .collect();
    if !terms.is_empty() {
        let _ = write!(
            summary,
            " Expertise in {} with a track record of delivering measurable outcomes.",
            terms.join(", ")
        );
    }
    summary
}

fn is_growth_bullet(bullet: &str) -> bool {
    let lower = bullet.to_lowercase();
    ["growth", "acquisition", "conversion", "%"]
        .iter()
        .any(|needle| lower.contains(needle))
}

/// Within each category, skills named by the posting move to the front.
fn prioritize_skills(skills: &[SkillCategory], analysis: &JobAnalysis) -> Vec<SkillCategory> {
    let wanted: Vec<&str> = analysis
        .keywords_in(KeywordCategory::TechnicalSkills)
        .iter()
        .chain(analysis.keywords_in(KeywordCategory::ToolsPlatforms))
        .map(String::as_str)
        .collect();

    skills
        .iter()
        .map(|category| {
            let (mut matched, rest): (Vec<String>, Vec<String>) = category
                .skills
                .iter()
                .cloned()
                .partition(|s| wanted.contains(&s.to_lowercase().as_str()));
            matched.extend(rest);
            SkillCategory {
                name: category.name.clone(),
                skills: matched,
            }
        })
        .collect()
}

impl TailoredResume {
    pub fn to_markdown(&self) -> String {
        let h = &self.header;
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", h.name);
        let _ = writeln!(out, "**Email:** {} | **Phone:** {}  ", h.email, h.phone);
        let _ = writeln!(out, "**LinkedIn:** {}\n", h.linkedin);
        let _ = writeln!(out, "## Professional Summary\n\n{}\n", self.summary);

        out.push_str("## Experience\n\n");
        for entry in &self.experience {
            let _ = writeln!(out, "### {}", entry.title);
            let _ = writeln!(out, "**{}** | {} | {}\n", entry.company, entry.location, entry.dates);
            for bullet in &entry.bullets {
                let _ = writeln!(out, "- {}", bullet);
            }
            out.push('\n');
        }

        out.push_str("## Skills\n\n");
        for category in &self.skills {
            let _ = writeln!(out, "**{}:** {}  ", category.name, category.skills.join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analysis::analyze_job_description;

    fn profile() -> CandidateProfile {
        let mut profile = CandidateProfile::default();
        profile.experience = vec![ExperienceEntry {
            title: "Product Manager".to_string(),
            company: "Northwind".to_string(),
            location: "Remote".to_string(),
            dates: "2021 - Present".to_string(),
            bullets: vec![
                "Led quarterly planning".to_string(),
                "Raised conversion 12%".to_string(),
                "Hired two designers".to_string(),
                "Owned acquisition channels".to_string(),
            ],
        }];
        profile.skills = vec![SkillCategory {
            name: "Tools".to_string(),
            skills: vec!["Jira".to_string(), "Figma".to_string(), "SQL".to_string()],
        }];
        profile
    }

    #[test]
    fn test_growth_role_moves_growth_bullets_first() {
        let resume = tailor_resume(
            &UserProfile::default(),
            &profile(),
            "Acme",
            "Growth Product Manager",
            &JobAnalysis::default(),
        );
        assert_eq!(
            resume.experience[0].bullets,
            [
                "Raised conversion 12%",
                "Owned acquisition channels",
                "Led quarterly planning",
                "Hired two designers",
            ]
        );
        assert_eq!(resume.summary, CandidateProfile::default().summaries.growth);
    }

    #[test]
    fn test_other_roles_keep_bullet_order() {
        let resume = tailor_resume(
            &UserProfile::default(),
            &profile(),
            "Acme",
            "Senior Product Manager",
            &JobAnalysis::default(),
        );
        assert_eq!(resume.experience[0].bullets[0], "Led quarterly planning");
        assert_eq!(resume.summary, CandidateProfile::default().summaries.senior);
    }

    #[test]
    fn test_summary_names_matched_keywords() {
        let analysis = analyze_job_description(
            "We want SQL, Python, Tableau and Amplitude skills, plus leadership and Figma.",
        );
        let resume = tailor_resume(&UserProfile::default(), &profile(), "Acme", "Product Manager", &analysis);

        assert!(resume.summary.starts_with(&CandidateProfile::default().summaries.general));
        assert!(resume.summary.ends_with(
            " Expertise in sql, python, tableau, leadership, figma with a track record of delivering measurable outcomes."
        ));
    }

    #[test]
    fn test_matched_skills_lead_their_category() {
        let analysis = analyze_job_description("Experience with figma and sql required");
        let resume = tailor_resume(&UserProfile::default(), &profile(), "Acme", "Product Manager", &analysis);
        assert_eq!(resume.skills[0].skills, ["Figma", "SQL", "Jira"]);
    }

    #[test]
    fn test_markdown_layout() {
        let mut user = UserProfile::default();
        user.name = "Jordan Lee".to_string();
        let resume = tailor_resume(&user, &profile(), "Acme", "Product Manager", &JobAnalysis::default());
        let md = resume.to_markdown();

        assert!(md.starts_with("# Jordan Lee\n"));
        assert!(md.contains("## Professional Summary"));
        assert!(md.contains("### Product Manager\n**Northwind** | Remote | 2021 - Present"));
        assert!(md.contains("- Hired two designers"));
        assert!(md.contains("**Tools:** Jira, Figma, SQL"));
    }
}
