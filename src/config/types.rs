//! Config sections and their defaults.

use serde::{Deserialize, Serialize};

/// Who is searching and what they are looking for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub target_roles: Vec<String>,
    pub target_industries: Vec<String>,
    pub target_company_size: String,
    pub remote_preference: String,
    pub salary_range: String,
    pub key_skills: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: "you@example.com".to_string(),
            phone: "(555) 555-0100".to_string(),
            linkedin: "linkedin.com/in/your-profile/".to_string(),
            target_roles: strings(&[
                "Senior Product Manager",
                "Growth Product Manager",
                "Principal Product Manager",
                "Director of Product",
            ]),
            target_industries: strings(&[
                "Healthcare Technology",
                "Consumer Products",
                "AI/ML Companies",
                "EdTech",
                "FinTech",
            ]),
            target_company_size: "50-500 employees".to_string(),
            remote_preference: "Fully remote or flexible hybrid".to_string(),
            salary_range: "$150-180K base".to_string(),
            key_skills: default_key_skills(),
        }
    }
}

pub(crate) fn default_key_skills() -> Vec<String> {
    strings(&[
        "Product Strategy",
        "Growth Strategy",
        "User Research",
        "Data Analysis",
        "Cross-functional Leadership",
        "Stakeholder Management",
    ])
}

/// Prompt templates written into research notes for the user to run
/// in an AI assistant of their choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiPrompts {
    /// Variables: `{company_name}`, `{target_role}`.
    pub company_research: String,
    /// Variables: `{company_name}`, `{specific_team}`, `{solve_key_problem}`, `{specific_area}`.
    pub industry_research: String,
}

impl Default for AiPrompts {
    fn default() -> Self {
        Self {
            company_research: "Create a comprehensive company dossier for {company_name} for a \
                {target_role} preparing for interviews. Include: mission/values, founders, \
                products, competitors, recent news. Focus on trust, safety, privacy, regulatory, \
                or AI-related news. Cover business model and key challenges."
                .to_string(),
            industry_research: "You're a director of PM for {specific_team} at a company like \
                {company_name}. Research how to {solve_key_problem}. Write a comprehensive brief \
                on problems (with metrics) and survey what the industry has done to improve \
                {specific_area}."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Upper bound on cold email length.
    pub max_words: usize,
    /// Days to wait before a follow-up.
    pub follow_up_days: i64,
    pub max_follow_ups: u32,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            max_words: 200,
            follow_up_days: 7,
            max_follow_ups: 1,
        }
    }
}

/// Thresholds a company must clear before time is spent on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityGates {
    /// Minimum total on the 4-40 priority rubric.
    pub min_priority_score: u32,
    /// Minutes of research expected per company.
    pub required_research_time: u32,
    /// Minutes budgeted per application.
    pub application_time_budget: u32,
}

impl Default for QualityGates {
    fn default() -> Self {
        Self {
            min_priority_score: 28,
            required_research_time: 45,
            application_time_budget: 180,
        }
    }
}

/// Goals the dashboard measures progress against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub weekly_applications: u32,
    pub email_response_rate: f64,
    pub interview_conversion: f64,
    pub offer_rate: f64,
    /// Used to estimate pipeline value from offers received.
    pub average_offer_value: u64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            weekly_applications: 5,
            email_response_rate: 0.15,
            interview_conversion: 0.30,
            offer_rate: 0.20,
            average_offer_value: 165_000,
        }
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
