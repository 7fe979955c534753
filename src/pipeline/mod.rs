//! Application pipeline model.
//!
//! The pipeline is a single JSON document, `data/application_pipeline.json`,
//! that both jobkit and the user edit:
//!
//! ```text
//! {
//!   "companies": { "acme_health": { "name": "Acme Health", "status": "researched", ... } },
//!   "stats": { "total_researched": 1, ... },
//!   "next_actions": [ ... ]
//! }
//! ```
//!
//! Records are keyed by [`crate::workspace::company_key`]. Fields jobkit does
//! not know about are kept in `extra` maps so hand edits survive a save.
//! Dates are written as `YYYY-MM-DD`; on load, full ISO 8601 timestamps are
//! also accepted and cut down to their date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

mod dates;
mod io;
mod mutations;

pub use mutations::{InterviewResult, Outcome};

/// The whole pipeline document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    pub companies: BTreeMap<String, CompanyRecord>,
    pub stats: PipelineStats,
    /// Snapshot of the last computed next actions, refreshed by `track`.
    pub next_actions: Vec<NextAction>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineStats {
    pub total_researched: u32,
    pub total_applied: u32,
    /// Responses over emails sent, 0.0 when nothing was sent.
    pub response_rate: f64,
    pub interviews_scheduled: u32,
    pub offers_received: u32,
}

/// One company under consideration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    // =========================================================================
    // Identity
    // =========================================================================
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,

    #[serde(
        default,
        deserialize_with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub research_date: Option<NaiveDate>,

    // =========================================================================
    // Qualification
    // =========================================================================
    #[serde(default)]
    pub priority_score: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_breakdown: Option<PriorityScores>,

    #[serde(default)]
    pub qualification_passed: bool,

    // =========================================================================
    // Progress
    // =========================================================================
    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub research_completed: bool,

    #[serde(default)]
    pub application_generated: bool,

    #[serde(
        default,
        deserialize_with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_date: Option<NaiveDate>,

    #[serde(default)]
    pub emails_sent: Vec<EmailRecord>,

    #[serde(default)]
    pub interviews: Vec<InterviewRecord>,

    #[serde(default)]
    pub offer_received: bool,

    // =========================================================================
    // Research
    // =========================================================================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<ResearchFindings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_opportunities: Option<NetworkOpportunities>,

    /// Pasted AI research output, keyed by prompt component name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ai_research_results: BTreeMap<String, AiResearchResult>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CompanyRecord {
    /// A fresh record in the `researching` state.
    pub fn new(name: &str, role_title: Option<&str>, research_date: NaiveDate) -> Self {
        Self {
            name: name.trim().to_string(),
            role_title: role_title.map(str::to_string),
            research_date: Some(research_date),
            priority_score: 0,
            priority_breakdown: None,
            qualification_passed: false,
            status: Status::Researching,
            research_completed: false,
            application_generated: false,
            applied_date: None,
            emails_sent: Vec::new(),
            interviews: Vec::new(),
            offer_received: false,
            research: None,
            network_opportunities: None,
            ai_research_results: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Pipeline key for this record.
    pub fn key(&self) -> String {
        crate::workspace::company_key(&self.name)
    }

    /// Whether any email to this company got a reply.
    pub fn has_response(&self) -> bool {
        self.emails_sent.iter().any(|e| e.response_received)
    }

    /// Most recent dated event: research, email, or interview.
    pub fn last_activity(&self) -> Option<NaiveDate> {
        self.research_date
            .into_iter()
            .chain(self.applied_date)
            .chain(self.emails_sent.iter().map(|e| e.send_date))
            .chain(self.interviews.iter().map(|i| i.date))
            .max()
    }
}

/// Lifecycle of a company record.
///
/// Variants are declared in lifecycle order, so `Ord` compares how far a
/// company has progressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Researching,
    /// Scored below the quality gate.
    Disqualified,
    Researched,
    Applied,
    #[serde(alias = "email_sent")]
    OutreachSent,
    Responded,
    Interviewing,
    Offered,
    Hired,
    Rejected,
    Withdrawn,
}

impl Status {
    pub const ALL: [Status; 11] = [
        Status::Researching,
        Status::Disqualified,
        Status::Researched,
        Status::Applied,
        Status::OutreachSent,
        Status::Responded,
        Status::Interviewing,
        Status::Offered,
        Status::Hired,
        Status::Rejected,
        Status::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Researching => "researching",
            Status::Disqualified => "disqualified",
            Status::Researched => "researched",
            Status::Applied => "applied",
            Status::OutreachSent => "outreach_sent",
            Status::Responded => "responded",
            Status::Interviewing => "interviewing",
            Status::Offered => "offered",
            Status::Hired => "hired",
            Status::Rejected => "rejected",
            Status::Withdrawn => "withdrawn",
        }
    }

    /// Still worth spending time on.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Status::Researched
                | Status::Applied
                | Status::OutreachSent
                | Status::Responded
                | Status::Interviewing
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four 1-10 ratings behind a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityScores {
    pub role_appeal: u32,
    pub company_fit: u32,
    pub growth_potential: u32,
    pub likelihood: u32,
}

impl PriorityScores {
    pub fn total(&self) -> u32 {
        self.role_appeal + self.company_fit + self.growth_potential + self.likelihood
    }

    /// Ratings in rubric order, with their field names.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("role_appeal", self.role_appeal),
            ("company_fit", self.company_fit),
            ("growth_potential", self.growth_potential),
            ("likelihood", self.likelihood),
        ]
    }
}

/// Priority band on the 4-40 rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// High at 35 and above, medium at 28 and above.
    pub fn from_score(score: u32) -> Self {
        if score >= 35 {
            PriorityTier::High
        } else if score >= 28 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
            PriorityTier::Low => "low",
        }
    }
}

/// Written company intelligence. Each field starts as a placeholder and is
/// replaced as research results are recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchFindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_dossier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitive_landscape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_news: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_news_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_initiatives: Option<String>,
}

/// Marks a finding that still waits for real research.
const PLACEHOLDER_MARKER: &str = "needs manual completion";

/// The finding's text, unless it is missing, blank, or still a placeholder.
pub fn completed_finding(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.contains(PLACEHOLDER_MARKER))
}

impl ResearchFindings {
    /// Placeholder findings for a freshly qualified company.
    pub fn placeholders(company: &str) -> Self {
        let pending = |what: &str| {
            Some(format!(
                "{} for {} {}. Run the prompts in AI_Research_Execution_Guide.md and save the answer with `jobkit record research`.",
                what, company, PLACEHOLDER_MARKER
            ))
        };
        Self {
            company_dossier: pending("Company dossier"),
            industry_analysis: pending("Industry analysis"),
            competitive_landscape: pending("Competitive analysis"),
            recent_news: pending("Recent news analysis"),
            recent_news_analysis: None,
            business_model: pending("Business model analysis"),
            key_challenges: pending("Key challenges analysis"),
            ai_initiatives: pending("AI initiatives research"),
        }
    }

    /// Present findings with display titles, in document order.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Company Dossier", &self.company_dossier),
            ("Industry Analysis", &self.industry_analysis),
            ("Competitive Landscape", &self.competitive_landscape),
            ("Recent News", &self.recent_news),
            ("Recent News Analysis", &self.recent_news_analysis),
            ("Business Model", &self.business_model),
            ("Key Challenges", &self.key_challenges),
            ("Ai Initiatives", &self.ai_initiatives),
        ]
        .into_iter()
        .filter_map(|(title, value)| value.as_deref().map(|v| (title, v)))
        .collect()
    }

    /// Copy a research component's output into its matching finding.
    ///
    /// Returns false for components with no matching field.
    pub fn apply_component(&mut self, component: &str, text: &str) -> bool {
        let slot = match component {
            "company_dossier" => &mut self.company_dossier,
            "recent_news_analysis" => &mut self.recent_news_analysis,
            "competitive_analysis" => &mut self.competitive_landscape,
            "industry_deep_dive" => &mut self.industry_analysis,
            "growth_challenges" => &mut self.key_challenges,
            "ai_initiatives" => &mut self.ai_initiatives,
            _ => return false,
        };
        *slot = Some(text.trim().to_string());
        true
    }
}

/// Warm paths into a company, filled in by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOpportunities {
    pub first_degree_connections: Vec<String>,
    pub second_degree_connections: Vec<String>,
    pub alumni_connections: Vec<String>,
    pub industry_connections: Vec<String>,
    pub warm_intro_paths: Vec<String>,
    pub recommended_outreach: Vec<String>,
}

impl NetworkOpportunities {
    pub fn sections(&self) -> [(&'static str, &[String]); 5] {
        [
            ("1st Degree Connections", self.first_degree_connections.as_slice()),
            ("2nd Degree Connections", self.second_degree_connections.as_slice()),
            ("Alumni Network", self.alumni_connections.as_slice()),
            ("Warm Introduction Paths", self.warm_intro_paths.as_slice()),
            ("Recommended Outreach", self.recommended_outreach.as_slice()),
        ]
    }
}

/// A cold email that was drafted for sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub contact: String,
    #[serde(default)]
    pub contact_title: String,
    /// Template key, e.g. `growth_focused`.
    pub template: String,
    #[serde(default)]
    pub subject: String,
    #[serde(deserialize_with = "dates::date")]
    pub send_date: NaiveDate,
    #[serde(default)]
    pub response_received: bool,
    #[serde(
        default,
        deserialize_with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub follow_up_sent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    /// Day of the interview.
    #[serde(deserialize_with = "dates::date")]
    pub date: NaiveDate,
    /// Day the interview was booked.
    #[serde(
        default,
        deserialize_with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_date: Option<NaiveDate>,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
    /// `pending`, `advanced`, `rejected`, or `withdrawn`.
    #[serde(default = "default_outcome")]
    pub outcome: String,
    #[serde(default)]
    pub feedback_received: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_outcome() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResearchResult {
    pub results: String,
    #[serde(deserialize_with = "dates::date")]
    pub updated_date: NaiveDate,
}

/// A dated to-do derived from pipeline state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextAction {
    pub priority: ActionPriority,
    pub action: String,
    pub company: String,
    #[serde(deserialize_with = "dates::date")]
    pub due_date: NaiveDate,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Low,
    Medium,
    High,
}

impl ActionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPriority::High => "high",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}
