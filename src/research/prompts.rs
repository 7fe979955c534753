//! Research prompt generation.
//!
//! Prompts are rendered locally from fixed templates. Nothing is sent
//! anywhere; the user runs them in an assistant of their choice and pastes
//! the answers back with `jobkit record research`.

use crate::error::Result;
use crate::template::{render_template, vars};

/// One of the five research prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchComponent {
    CompanyDossier,
    IndustryDeepDive,
    CompetitiveAnalysis,
    RecentNewsAnalysis,
    GrowthChallenges,
}

impl ResearchComponent {
    /// Generation order.
    pub const ALL: [ResearchComponent; 5] = [
        ResearchComponent::CompanyDossier,
        ResearchComponent::IndustryDeepDive,
        ResearchComponent::CompetitiveAnalysis,
        ResearchComponent::RecentNewsAnalysis,
        ResearchComponent::GrowthChallenges,
    ];

    /// Order the guide recommends running them in.
    pub const RECOMMENDED_ORDER: [ResearchComponent; 5] = [
        ResearchComponent::CompanyDossier,
        ResearchComponent::RecentNewsAnalysis,
        ResearchComponent::CompetitiveAnalysis,
        ResearchComponent::IndustryDeepDive,
        ResearchComponent::GrowthChallenges,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ResearchComponent::CompanyDossier => "company_dossier",
            ResearchComponent::IndustryDeepDive => "industry_deep_dive",
            ResearchComponent::CompetitiveAnalysis => "competitive_analysis",
            ResearchComponent::RecentNewsAnalysis => "recent_news_analysis",
            ResearchComponent::GrowthChallenges => "growth_challenges",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResearchComponent::CompanyDossier => "Company Dossier",
            ResearchComponent::IndustryDeepDive => "Industry Deep Dive",
            ResearchComponent::CompetitiveAnalysis => "Competitive Analysis",
            ResearchComponent::RecentNewsAnalysis => "Recent News Analysis",
            ResearchComponent::GrowthChallenges => "Growth Challenges",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    fn template(&self) -> &'static str {
        match self {
            ResearchComponent::CompanyDossier => COMPANY_DOSSIER,
            ResearchComponent::IndustryDeepDive => INDUSTRY_DEEP_DIVE,
            ResearchComponent::CompetitiveAnalysis => COMPETITIVE_ANALYSIS,
            ResearchComponent::RecentNewsAnalysis => RECENT_NEWS_ANALYSIS,
            ResearchComponent::GrowthChallenges => GROWTH_CHALLENGES,
        }
    }
}

/// What the prompts assume about the company and the team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchContext {
    pub industry_context: String,
    pub key_problem: String,
    pub specific_team: String,
    pub company_stage: String,
}

impl ResearchContext {
    pub fn infer(company: &str, role: &str) -> Self {
        Self {
            industry_context: infer_industry(company).to_string(),
            key_problem: infer_key_problem(role).to_string(),
            specific_team: infer_team(role).to_string(),
            company_stage: infer_stage(company).to_string(),
        }
    }
}

/// A rendered prompt plus the inferred context shown beside it.
#[derive(Debug, Clone)]
pub struct PreparedPrompt {
    pub component: ResearchComponent,
    pub prompt: String,
    pub context: Vec<(&'static str, String)>,
}

/// Render all five prompts for a company and role.
pub fn build_prompts(company: &str, role: &str) -> Result<Vec<PreparedPrompt>> {
    let ctx = ResearchContext::infer(company, role);
    let variables = vars([
        ("company_name", company),
        ("target_role", role),
        ("industry_context", ctx.industry_context.as_str()),
        ("solve_key_problem", ctx.key_problem.as_str()),
        ("specific_team", ctx.specific_team.as_str()),
        ("company_stage", ctx.company_stage.as_str()),
    ]);

    ResearchComponent::ALL
        .into_iter()
        .map(|component| -> Result<PreparedPrompt> {
            let context = match component {
                ResearchComponent::IndustryDeepDive => vec![
                    ("Industry Context", ctx.industry_context.clone()),
                    ("Key Problem", ctx.key_problem.clone()),
                    ("Specific Team", ctx.specific_team.clone()),
                ],
                ResearchComponent::GrowthChallenges => {
                    vec![("Company Stage", ctx.company_stage.clone())]
                }
                _ => Vec::new(),
            };
            Ok(PreparedPrompt {
                component,
                prompt: render_template(component.template(), &variables)?,
                context,
            })
        })
        .collect()
}

const INDUSTRY_MAP: [(&str, &str); 15] = [
    ("canva", "design and creative tools"),
    ("figma", "design and collaboration tools"),
    ("adobe", "creative software and digital marketing"),
    ("notion", "productivity and collaboration software"),
    ("linear", "project management and developer tools"),
    ("atlassian", "team collaboration and development tools"),
    ("snowflake", "data cloud and analytics"),
    ("databricks", "data and AI platforms"),
    ("coinbase", "cryptocurrency and fintech"),
    ("stripe", "payments and fintech infrastructure"),
    ("uber", "mobility and transportation"),
    ("airbnb", "travel and hospitality"),
    ("netflix", "streaming media and entertainment"),
    ("spotify", "music streaming and audio"),
    ("zoom", "video communication and collaboration"),
];

const LARGE_COMPANIES: [&str; 9] = [
    "adobe", "microsoft", "google", "amazon", "apple", "meta", "netflix", "uber", "airbnb",
];

const SCALE_UPS: [&str; 6] = ["canva", "figma", "notion", "linear", "snowflake", "databricks"];

/// Industry by company name substring.
pub fn infer_industry(company: &str) -> &'static str {
    let lower = company.to_lowercase();
    INDUSTRY_MAP
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, industry)| *industry)
        .unwrap_or("technology and software")
}

pub fn infer_key_problem(role: &str) -> &'static str {
    let lower = role.to_lowercase();
    if lower.contains("growth") {
        "accelerate user acquisition and engagement while maintaining quality"
    } else if lower.contains("product") {
        "scale product development and improve user experience"
    } else if lower.contains("strategy") {
        "develop strategic roadmaps for market expansion and competitive advantage"
    } else if lower.contains("data") {
        "leverage data insights to drive business decisions and product improvements"
    } else if lower.contains("ai") || lower.contains("ml") {
        "implement AI/ML solutions to enhance product capabilities"
    } else {
        "optimize operations and drive business growth"
    }
}

pub fn infer_team(role: &str) -> &'static str {
    let lower = role.to_lowercase();
    if lower.contains("growth") {
        "growth product team"
    } else if lower.contains("senior") || lower.contains("principal") {
        "senior product team"
    } else if lower.contains("director") {
        "product leadership team"
    } else if lower.contains("strategy") {
        "product strategy team"
    } else {
        "product team"
    }
}

pub fn infer_stage(company: &str) -> &'static str {
    let lower = company.to_lowercase();
    if LARGE_COMPANIES.iter().any(|c| lower.contains(c)) {
        "large established"
    } else if SCALE_UPS.iter().any(|c| lower.contains(c)) {
        "high-growth scale-up"
    } else {
        "growth-stage"
    }
}

const COMPANY_DOSSIER: &str = "\
Build a company dossier on {company_name} for a {target_role} candidate preparing for interviews.

COMPANY OVERVIEW:
- Mission, vision, and values
- Founders and current leadership
- Scale: employees, revenue, users, markets
- Business model and revenue streams

PRODUCTS & SERVICES:
- Core products and their key features
- Launches and innovations from the last year
- Customer segments and user base

MARKET POSITION:
- Main competitors and where {company_name} wins
- Funding, acquisitions, and partnerships
- Trends shaping the market

RECENT DEVELOPMENTS:
- Major announcements from the last six months
- Leadership changes or strategic pivots
- Trust, safety, privacy, or AI initiatives

KEY CHALLENGES & OPPORTUNITIES:
- The biggest business challenges right now
- Growth opportunities and expansion areas
- Competitive threats and market risks

Focus on what a {target_role} needs to understand about strategic priorities and where they could help.";

const INDUSTRY_DEEP_DIVE: &str = "\
You lead product for the {specific_team} at a company like {company_name}.

Research how to {solve_key_problem} in the {industry_context} industry and write a brief covering:

PROBLEM ANALYSIS:
- The problem quantified with concrete metrics
- Root causes and contributing factors
- Impact on business outcomes and user experience

INDUSTRY LANDSCAPE:
- What leading companies have tried and what worked
- Common pitfalls and failed approaches
- Benchmarks for success

SOLUTION FRAMEWORKS:
- Three to five strategic approaches with their tradeoffs
- Resources and capabilities each one needs
- Timeline and success metrics for each path

COMPETITIVE INTELLIGENCE:
- How direct competitors handle this challenge
- Openings for differentiation
- Emerging technologies that could change the picture

Keep it actionable for a {target_role} building a roadmap.";

const COMPETITIVE_ANALYSIS: &str = "\
Analyze the competitive landscape for {company_name} in the {industry_context} market.

DIRECT COMPETITORS:
- Five to seven direct competitors
- Positioning, pricing, and target customers for each
- Go-to-market strategies and channels

DIFFERENTIATION:
- {company_name}'s unique selling points
- Where competitors are ahead of {company_name}
- Switching costs and barriers for customers

MARKET DYNAMICS:
- How the landscape is shifting
- New entrants and emerging threats
- Partnership and acquisition activity

STRATEGIC OPPORTUNITIES:
- Where {company_name} could gain an advantage
- Underserved segments or use cases
- Expansion or partnership opportunities

Include specific examples and data points where possible.";

const RECENT_NEWS_ANALYSIS: &str = "\
Summarize news and developments for {company_name} from the past six months.

MAJOR ANNOUNCEMENTS:
- Product launches and platform updates
- Funding, acquisitions, or partnerships
- Leadership or organizational changes

INDUSTRY COVERAGE:
- How industry publications and analysts cover {company_name}
- Conference talks and thought leadership
- Awards and rankings

REGULATORY & COMPLIANCE:
- Regulatory changes affecting the company
- Privacy, security, or trust and safety work

FINANCIAL PERFORMANCE:
- Growth and key metrics, where public
- Investor sentiment and valuation changes

SENTIMENT:
- Overall media tone and recurring themes
- Customer and employee sentiment

Focus on what matters for interview preparation and current business priorities.";

const GROWTH_CHALLENGES: &str = "\
Analyze the growth challenges and opportunities facing {company_name} as a {company_stage} company in {industry_context}.

GROWTH PERFORMANCE:
- Current trajectory and key performance indicators
- Acquisition, retention, and engagement
- Scalability of the business model

SCALING CHALLENGES:
- Infrastructure and platform limits
- Organizational strain from team growth
- Product complexity and prioritization

MARKET EXPANSION:
- Geographic and segment expansion
- Adjacent markets and ecosystem plays

COMPETITIVE PRESSURES:
- How competition affects growth
- Build, partner, or acquire decisions

STRATEGIC PRIORITIES:
- Where {company_name} should focus limited resources
- The highest-leverage growth initiatives
- Balancing growth, profitability, and market share

Recommend how a {target_role} could contribute to these challenges.";
