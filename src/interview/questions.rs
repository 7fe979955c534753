//! Interview question bank and question selection by role.

use crate::pipeline::{ResearchFindings, completed_finding};

/// Role-specific lists are cut to this many questions.
pub const MAX_ROLE_QUESTIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCategory {
    Behavioral,
    ProductStrategy,
    GrowthFocused,
    TechnicalExecution,
    Leadership,
    CompanySpecific,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 6] = [
        QuestionCategory::Behavioral,
        QuestionCategory::ProductStrategy,
        QuestionCategory::GrowthFocused,
        QuestionCategory::TechnicalExecution,
        QuestionCategory::Leadership,
        QuestionCategory::CompanySpecific,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuestionCategory::Behavioral => "Behavioral",
            QuestionCategory::ProductStrategy => "Product Strategy",
            QuestionCategory::GrowthFocused => "Growth Focused",
            QuestionCategory::TechnicalExecution => "Technical Execution",
            QuestionCategory::Leadership => "Leadership",
            QuestionCategory::CompanySpecific => "Company Specific",
        }
    }

    /// The generic questions in this category.
    pub fn questions(&self) -> &'static [&'static str; 5] {
        match self {
            QuestionCategory::Behavioral => &BEHAVIORAL,
            QuestionCategory::ProductStrategy => &PRODUCT_STRATEGY,
            QuestionCategory::GrowthFocused => &GROWTH_FOCUSED,
            QuestionCategory::TechnicalExecution => &TECHNICAL_EXECUTION,
            QuestionCategory::Leadership => &LEADERSHIP,
            QuestionCategory::CompanySpecific => &COMPANY_SPECIFIC,
        }
    }
}

const BEHAVIORAL: [&str; 5] = [
    "Tell me about a time when you had to make a difficult decision with limited information",
    "Describe a situation where you had to influence someone without direct authority",
    "Give me an example of when you had to pivot a project based on new information",
    "Tell me about a time when you disagreed with a stakeholder and how you handled it",
    "Describe a project that didn't go as planned and how you adapted",
];

const PRODUCT_STRATEGY: [&str; 5] = [
    "How would you prioritize features for our product roadmap?",
    "Walk me through how you would approach entering a new market",
    "How do you balance technical debt vs. new feature development?",
    "Describe your framework for making build vs. buy decisions",
    "How would you approach improving our key metrics?",
];

const GROWTH_FOCUSED: [&str; 5] = [
    "How would you approach growing our user base by 50% in the next year?",
    "What metrics would you focus on to improve our conversion funnel?",
    "How do you balance acquisition vs. retention initiatives?",
    "Describe your approach to A/B testing and experimentation",
    "How would you identify and prioritize growth opportunities?",
];

const TECHNICAL_EXECUTION: [&str; 5] = [
    "How do you work with engineering teams to scope and deliver projects?",
    "Describe your experience with data analysis and SQL",
    "How do you ensure product requirements are clearly communicated?",
    "Tell me about your approach to user research and testing",
    "How do you stay informed about technical constraints and possibilities?",
];

const LEADERSHIP: [&str; 5] = [
    "Describe your experience mentoring or managing other PMs",
    "How do you handle conflicting priorities between different stakeholders?",
    "Tell me about a time when you had to deliver difficult feedback",
    "How do you build consensus when teams disagree on direction?",
    "Describe your approach to building and scaling product teams",
];

const COMPANY_SPECIFIC: [&str; 5] = [
    "Why do you want to work at [company]?",
    "What do you think are our biggest competitive advantages?",
    "How would you improve our current product?",
    "What challenges do you see in our industry?",
    "Where do you see our company in 3 years?",
];

/// Questions about this company, built from whatever research is finished.
///
/// Without research the generic company questions are used.
pub fn company_questions(company: &str, research: Option<&ResearchFindings>) -> Vec<String> {
    let Some(research) = research else {
        return COMPANY_SPECIFIC.iter().map(|q| q.to_string()).collect();
    };

    let mut questions = vec![
        format!("Why do you want to work at {}?", company),
        format!(
            "What do you think are {}'s biggest competitive advantages?",
            company
        ),
        format!("How would you improve {}'s current product?", company),
    ];
    if let Some(challenges) = completed_finding(&research.key_challenges) {
        questions.push(format!("How would you approach {}?", challenges));
    }
    if let Some(news) = completed_finding(&research.recent_news) {
        questions.push(format!(
            "What do you think about {}'s recent {}?",
            company, news
        ));
    }
    if completed_finding(&research.competitive_landscape).is_some() {
        questions.push(format!(
            "How do you see {} differentiating from its main competitors?",
            company
        ));
    }
    questions
}

/// The mix of categories a role is most likely to be asked about.
pub fn role_questions(role: &str) -> Vec<&'static str> {
    let role = role.to_lowercase();
    let (lead, support): (&[&str], &[&str]) = if role.contains("growth") {
        (GROWTH_FOCUSED.as_slice(), &TECHNICAL_EXECUTION[..3])
    } else if role.contains("senior") || role.contains("principal") {
        (PRODUCT_STRATEGY.as_slice(), &LEADERSHIP[..3])
    } else if role.contains("strategy") {
        (PRODUCT_STRATEGY.as_slice(), &BEHAVIORAL[..3])
    } else {
        (&PRODUCT_STRATEGY[..3], &TECHNICAL_EXECUTION[..3])
    };

    let mut questions = lead.to_vec();
    questions.extend_from_slice(support);
    questions.extend_from_slice(&BEHAVIORAL[..3]);
    questions.truncate(MAX_ROLE_QUESTIONS);
    questions
}

/// Questions asked in nearly every loop.
pub fn high_probability_questions(role: &str) -> Vec<&'static str> {
    let mut questions = vec![
        "Tell me about yourself / Walk me through your background",
        "Why do you want to work here?",
        "Why are you interested in this role?",
        "What's your experience with [key skill for role]?",
        "Tell me about a challenging project you led",
    ];
    if role.to_lowercase().contains("growth") {
        questions.push("How do you approach growth experimentation?");
        questions.push("Tell me about a time you improved conversion rates");
    }
    questions
}

/// Preparation tiers, most important first.
pub const MUST_PREPARE: [&str; 5] = [
    "Tell me about yourself",
    "Why do you want to work at [company]?",
    "Walk me through a challenging project",
    "How do you prioritize features/initiatives?",
    "Tell me about a time you had to influence without authority",
];

pub const SHOULD_PREPARE: [&str; 5] = [
    "How do you approach [key skill]?",
    "Describe your experience with [relevant experience]",
    "How do you handle competing stakeholder priorities?",
    "Tell me about a failed project and what you learned",
    "How do you stay informed about industry trends?",
];

pub const NICE_TO_PREPARE: [&str; 5] = [
    "Where do you see yourself in 5 years?",
    "What's your biggest weakness?",
    "Tell me about a time you disagreed with your manager",
    "How do you handle stress and pressure?",
    "What questions do you have for me?",
];

/// Themes likely to come up, from the role and finished research.
pub fn predicted_themes(role: &str, research: Option<&ResearchFindings>) -> Vec<&'static str> {
    let mut themes = vec![
        "Product strategy and roadmap prioritization",
        "Cross-functional collaboration and stakeholder management",
        "Data-driven decision making and experimentation",
    ];
    if let Some(research) = research {
        if completed_finding(&research.ai_initiatives).is_some() {
            themes.push("AI implementation and product integration");
        }
        if completed_finding(&research.key_challenges).is_some() {
            themes.push("Scaling challenges and growth strategy");
        }
    }

    let role = role.to_lowercase();
    if role.contains("growth") {
        themes.push("User acquisition and conversion optimization");
        themes.push("A/B testing and experimentation frameworks");
    } else if role.contains("senior") {
        themes.push("Leadership and team development");
        themes.push("Strategic vision and execution");
    }
    themes
}

pub fn role_focus_areas(role: &str) -> &'static str {
    let role = role.to_lowercase();
    if role.contains("growth") {
        "User acquisition, conversion optimization, retention, experimentation, funnel analysis"
    } else if role.contains("senior") {
        "Strategic planning, cross-functional leadership, stakeholder management, execution"
    } else if role.contains("principal") {
        "Vision setting, technical strategy, organizational influence, complex problem solving"
    } else {
        "Product strategy, user research, roadmap planning, feature prioritization"
    }
}

/// Skills a role's answers should demonstrate.
pub fn key_skills(role: &str) -> &'static str {
    let role = role.to_lowercase();
    if role.contains("growth") {
        "growth strategy, experimentation, conversion optimization, user acquisition"
    } else if role.contains("senior") {
        "strategic thinking, stakeholder management, cross-functional leadership, execution"
    } else if role.contains("principal") {
        "vision setting, technical leadership, organizational influence, mentoring"
    } else {
        "product strategy, user research, data analysis, problem solving"
    }
}

/// Research findings formatted for the question-generation prompt.
pub fn company_context(research: Option<&ResearchFindings>) -> String {
    let Some(research) = research else {
        return "Company research not available - use general industry context".to_string();
    };
    let lines: Vec<String> = [
        ("Business Model", &research.business_model),
        ("Key Challenges", &research.key_challenges),
        ("Competitive Position", &research.competitive_landscape),
        ("Recent Developments", &research.recent_news),
    ]
    .into_iter()
    .filter_map(|(label, value)| completed_finding(value).map(|v| format!("{}: {}", label, v)))
    .collect();

    if lines.is_empty() {
        "General company context".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_has_five_per_category() {
        for category in QuestionCategory::ALL {
            assert_eq!(category.questions().len(), 5, "{}", category.title());
        }
    }

    #[test]
    fn test_role_mix() {
        let growth = role_questions("Growth Product Manager");
        assert_eq!(growth.len(), 11);
        assert_eq!(growth[0], GROWTH_FOCUSED[0]);
        assert_eq!(growth[5], TECHNICAL_EXECUTION[0]);
        assert_eq!(growth[8], BEHAVIORAL[0]);

        let senior = role_questions("Senior PM");
        assert_eq!(senior[0], PRODUCT_STRATEGY[0]);
        assert_eq!(senior[5], LEADERSHIP[0]);

        let strategy = role_questions("Strategy Lead");
        assert_eq!(strategy[5], BEHAVIORAL[0]);

        let general = role_questions("Product Manager");
        assert_eq!(general.len(), 9);
        assert_eq!(general[3], TECHNICAL_EXECUTION[0]);
    }

    #[test]
    fn test_role_mix_is_capped() {
        for role in ["Growth PM", "Senior PM", "Strategy", "PM"] {
            assert!(role_questions(role).len() <= MAX_ROLE_QUESTIONS);
        }
    }

    #[test]
    fn test_high_probability() {
        assert_eq!(high_probability_questions("PM").len(), 5);
        let growth = high_probability_questions("Growth PM");
        assert_eq!(growth.len(), 7);
        assert_eq!(growth[6], "Tell me about a time you improved conversion rates");
    }

    #[test]
    fn test_company_questions_use_research() {
        let research = ResearchFindings {
            key_challenges: Some("scaling AI adoption".to_string()),
            recent_news: Some("design features launch".to_string()),
            ..Default::default()
        };
        let questions = company_questions("Acme", Some(&research));
        assert_eq!(questions[0], "Why do you want to work at Acme?");
        assert_eq!(questions[3], "How would you approach scaling AI adoption?");
        assert_eq!(questions[4], "What do you think about Acme's recent design features launch?");
        assert_eq!(questions.len(), 5);

        let placeholders = ResearchFindings::placeholders("Acme");
        assert_eq!(company_questions("Acme", Some(&placeholders)).len(), 3);
        assert_eq!(company_questions("Acme", None)[0], COMPANY_SPECIFIC[0]);
    }

    #[test]
    fn test_themes() {
        let research = ResearchFindings {
            ai_initiatives: Some("an AI design assistant".to_string()),
            ..Default::default()
        };
        let themes = predicted_themes("Growth PM", Some(&research));
        assert_eq!(themes.len(), 6);
        assert!(themes.contains(&"AI implementation and product integration"));
        assert!(!themes.contains(&"Scaling challenges and growth strategy"));
        assert_eq!(predicted_themes("PM", None).len(), 3);
    }

    #[test]
    fn test_company_context() {
        assert!(company_context(None).starts_with("Company research not available"));
        let research = ResearchFindings {
            business_model: Some("usage-based SaaS".to_string()),
            ..Default::default()
        };
        assert_eq!(company_context(Some(&research)), "Business Model: usage-based SaaS");
        assert_eq!(
            company_context(Some(&ResearchFindings::placeholders("Acme"))),
            "General company context"
        );
    }
}
