//! Job description analysis.
//!
//! The posting is lowercased, whitespace-collapsed, and matched against five
//! fixed keyword lists. Terms match as whole words or phrases, so `ai` does
//! not fire inside `maintain`. Section headings split the raw text into
//! responsibilities, requirements, preferred qualifications, and the company
//! blurb.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Bullet items kept per section.
pub const MAX_SECTION_ITEMS: usize = 10;

/// Success metrics kept from a posting.
pub const MAX_SUCCESS_METRICS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    TechnicalSkills,
    SoftSkills,
    ExperienceKeywords,
    IndustryTerms,
    ToolsPlatforms,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 5] = [
        KeywordCategory::TechnicalSkills,
        KeywordCategory::SoftSkills,
        KeywordCategory::ExperienceKeywords,
        KeywordCategory::IndustryTerms,
        KeywordCategory::ToolsPlatforms,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            KeywordCategory::TechnicalSkills => "technical_skills",
            KeywordCategory::SoftSkills => "soft_skills",
            KeywordCategory::ExperienceKeywords => "experience_keywords",
            KeywordCategory::IndustryTerms => "industry_terms",
            KeywordCategory::ToolsPlatforms => "tools_platforms",
        }
    }

    /// `technical_skills` -> `technical skills`.
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }

    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::TechnicalSkills => TECHNICAL_SKILLS,
            KeywordCategory::SoftSkills => SOFT_SKILLS,
            KeywordCategory::ExperienceKeywords => EXPERIENCE_KEYWORDS,
            KeywordCategory::IndustryTerms => INDUSTRY_TERMS,
            KeywordCategory::ToolsPlatforms => TOOLS_PLATFORMS,
        }
    }
}

const TECHNICAL_SKILLS: &[&str] = &[
    // Product management
    "product management",
    "product strategy",
    "roadmapping",
    "user stories",
    "agile",
    "scrum",
    "kanban",
    "sprint planning",
    "backlog management",
    "okrs",
    "kpis",
    "metrics",
    "analytics",
    "a/b testing",
    "experimentation",
    // Data
    "sql",
    "python",
    "r",
    "excel",
    "tableau",
    "amplitude",
    "mixpanel",
    "google analytics",
    "data analysis",
    "statistical analysis",
    // Design
    "user research",
    "usability testing",
    "personas",
    "user journeys",
    "wireframing",
    "prototyping",
    "design thinking",
    "ux design",
    // Engineering
    "apis",
    "rest",
    "graphql",
    "json",
    "databases",
    "cloud",
    "aws",
    "gcp",
    "machine learning",
    "ai",
    "artificial intelligence",
    "automation",
    // Growth
    "growth hacking",
    "conversion optimization",
    "funnel analysis",
    "cohort analysis",
    "retention",
    "churn",
    "ltv",
    "cac",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "collaboration",
    "teamwork",
    "problem solving",
    "analytical thinking",
    "strategic thinking",
    "project management",
    "stakeholder management",
    "influence",
    "mentoring",
    "coaching",
    "facilitation",
    "presentation skills",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "years experience",
    "senior level",
    "lead",
    "director",
    "manager",
    "b2b",
    "b2c",
    "saas",
    "enterprise",
    "startup",
    "scale-up",
    "consumer",
    "mobile",
    "web",
    "platform",
    "marketplace",
    "fintech",
    "healthtech",
    "edtech",
    "e-commerce",
];

const INDUSTRY_TERMS: &[&str] = &[
    "healthcare",
    "medical",
    "telemedicine",
    "digital health",
    "education",
    "learning",
    "training",
    "curriculum",
    "financial services",
    "payments",
    "banking",
    "insurance",
    "retail",
    "e-commerce",
    "marketplace",
    "consumer goods",
];

const TOOLS_PLATFORMS: &[&str] = &[
    "jira",
    "asana",
    "trello",
    "notion",
    "confluence",
    "figma",
    "sketch",
    "adobe",
    "canva",
    "salesforce",
    "hubspot",
    "intercom",
    "zendesk",
    "slack",
    "teams",
    "zoom",
    "github",
    "gitlab",
];

static METRIC_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"(?i)\d+[%+]?\s*(?:increase|growth|improvement)",
        r"(?i)\d+[%+]?\s*(?:conversion|retention|engagement)",
        r"(?i)\$\d+[kmb]?\s*(?:revenue|arr|mrr)",
        r"(?i)\d+[%+]?\s*(?:reduction|decrease)\s+in\s+\w+",
    ]
    .map(|p| Regex::new(p).expect("invalid metric regex"))
});

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").expect("invalid numbered item regex"));

/// Headed blocks found in a posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobSections {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub about_company: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Responsibilities,
    Requirements,
    Preferred,
    AboutCompany,
}

/// Everything extracted from one job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobAnalysis {
    /// Matched terms per category, in list order. Categories with no match are absent.
    pub keywords: BTreeMap<KeywordCategory, Vec<String>>,
    pub sections: JobSections,
    pub success_metrics: Vec<String>,
}

impl JobAnalysis {
    pub fn keyword_count(&self) -> usize {
        self.keywords.values().map(Vec::len).sum()
    }

    pub fn keywords_in(&self, category: KeywordCategory) -> &[String] {
        self.keywords
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every matched term, category by category.
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.values().flatten().map(String::as_str)
    }

    pub fn must_have(&self) -> &[String] {
        &self.sections.requirements
    }

    pub fn nice_to_have(&self) -> &[String] {
        &self.sections.preferred
    }

    pub fn summary(&self) -> String {
        format!(
            "Identified {} relevant keywords and {} key requirements",
            self.keyword_count(),
            self.must_have().len()
        )
    }
}

/// Analyze a job posting.
pub fn analyze_job_description(text: &str) -> JobAnalysis {
    let normalized = normalize(text);

    let mut keywords = BTreeMap::new();
    for category in KeywordCategory::ALL {
        let found: Vec<String> = category
            .terms()
            .iter()
            .filter(|term| contains_term(&normalized, term))
            .map(|term| term.to_string())
            .collect();
        if !found.is_empty() {
            keywords.insert(category, found);
        }
    }

    JobAnalysis {
        keywords,
        sections: extract_sections(text),
        success_metrics: extract_success_metrics(text),
    }
}

/// Lowercase and collapse runs of whitespace to one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `term` occurs in `haystack` with no letter or digit on either side.
///
/// Both sides are expected to be lowercase already.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn heading_kind(line: &str) -> Option<SectionKind> {
    let heading = line
        .trim()
        .trim_start_matches('#')
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_lowercase();
    if heading.is_empty() || heading.len() > 60 {
        return None;
    }

    const RESPONSIBILITIES: [&str; 5] = [
        "responsibilities",
        "duties",
        "what you'll do",
        "the role",
        "your role",
    ];
    const REQUIREMENTS: [&str; 5] = [
        "requirements",
        "qualifications",
        "what you need",
        "must have",
        "what you'll bring",
    ];
    const PREFERRED: [&str; 4] = ["nice to have", "preferred", "bonus", "plus"];
    const ABOUT: [&str; 3] = ["about", "who we are", "company overview"];

    let starts = |prefixes: &[&str]| prefixes.iter().any(|p| heading.starts_with(p));
    if starts(&PREFERRED) {
        Some(SectionKind::Preferred)
    } else if starts(&REQUIREMENTS) {
        Some(SectionKind::Requirements)
    } else if starts(&RESPONSIBILITIES) {
        Some(SectionKind::Responsibilities)
    } else if starts(&ABOUT) {
        Some(SectionKind::AboutCompany)
    } else {
        None
    }
}

fn is_bullet(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(['•', '-', '*']) || NUMBERED_ITEM.is_match(line)
}

/// A heading this module does not track, such as `Benefits:`.
fn is_other_heading(line: &str) -> bool {
    let line = line.trim();
    !is_bullet(line) && (line.starts_with('#') || (line.ends_with(':') && line.len() <= 60))
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    let line = line.trim_start_matches(['•', '-', '*']);
    match NUMBERED_ITEM.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
    .trim()
}

fn extract_sections(text: &str) -> JobSections {
    let mut sections = JobSections::default();
    let mut current: Option<SectionKind> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !is_bullet(line)
            && let Some(kind) = heading_kind(line)
        {
            current = Some(kind);
            continue;
        }
        if is_other_heading(line) {
            current = None;
            continue;
        }

        let Some(kind) = current else {
            continue;
        };
        let target = match kind {
            SectionKind::Responsibilities => &mut sections.responsibilities,
            SectionKind::Requirements => &mut sections.requirements,
            SectionKind::Preferred => &mut sections.preferred,
            SectionKind::AboutCompany => &mut sections.about_company,
        };
        let item = strip_bullet(line);
        if !item.is_empty() && target.len() < MAX_SECTION_ITEMS {
            target.push(item.to_string());
        }
    }
    sections
}

fn extract_success_metrics(text: &str) -> Vec<String> {
    METRIC_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .take(MAX_SUCCESS_METRICS)
        .collect()
}
