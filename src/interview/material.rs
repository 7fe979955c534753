//! Talking points, questions to ask, mock scenarios, and checklists.

use crate::pipeline::{ResearchFindings, completed_finding};
use crate::profile::InterviewPitch;

/// Value propositions shown in the guide.
pub const MAX_VALUE_PROPOSITIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TalkingPoints {
    pub company_knowledge: Vec<String>,
    pub value_propositions: Vec<String>,
    pub strategic_insights: Vec<String>,
    pub conversation_starters: Vec<String>,
}

impl TalkingPoints {
    pub fn sections(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Company Knowledge Points", self.company_knowledge.as_slice()),
            ("Value Propositions", self.value_propositions.as_slice()),
            ("Strategic Insights", self.strategic_insights.as_slice()),
            ("Conversation Starters", self.conversation_starters.as_slice()),
        ]
    }
}

pub fn talking_points(
    company: &str,
    role: &str,
    research: Option<&ResearchFindings>,
    pitch: &InterviewPitch,
) -> TalkingPoints {
    let news = research.and_then(|r| completed_finding(&r.recent_news));
    let challenges = research.and_then(|r| completed_finding(&r.key_challenges));
    let competition = research.and_then(|r| completed_finding(&r.competitive_landscape));

    let mut company_knowledge = vec![
        format!(
            "I've been following {}'s growth and am impressed by [specific recent achievement]",
            company
        ),
        "Your mission to [company mission] resonates with my experience in [relevant area]"
            .to_string(),
        format!(
            "I'm particularly interested in how {} is approaching [strategic priority]",
            company
        ),
    ];
    if let Some(news) = news {
        company_knowledge.push(format!(
            "I saw {}'s recent {} - this aligns with trends I've seen in [relevant experience]",
            company, news
        ));
    }
    if competition.is_some() {
        company_knowledge
            .push("Your differentiation from competitors through [specific advantage] is compelling".to_string());
    }

    let lower = role.to_lowercase();
    let role_pitch: &[String] = if lower.contains("growth") {
        pitch.growth.as_slice()
    } else if lower.contains("senior") || lower.contains("principal") {
        pitch.senior.as_slice()
    } else {
        &[]
    };
    let value_propositions = pitch
        .base
        .iter()
        .chain(role_pitch)
        .take(MAX_VALUE_PROPOSITIONS)
        .cloned()
        .collect();

    let mut strategic_insights = vec![
        format!(
            "The opportunity for {} to use AI and automation in product development",
            company
        ),
        "Potential for systematic experimentation to move key business metrics".to_string(),
        "Growth opportunities through improved user onboarding and conversion funnels".to_string(),
    ];
    if let Some(challenges) = challenges {
        strategic_insights.push(format!(
            "A structured approach to {} through [specific methodology]",
            challenges
        ));
    }
    if competition.is_some() {
        strategic_insights.push(
            "Differentiation opportunities in [specific area] based on competitive analysis"
                .to_string(),
        );
    }

    TalkingPoints {
        company_knowledge,
        value_propositions,
        strategic_insights,
        conversation_starters: vec![
            format!(
                "I'm curious about {}'s approach to [specific challenge] - in my experience with similar situations...",
                company
            ),
            "How is the product team thinking about [strategic opportunity]? I've seen interesting approaches to this at...".to_string(),
            "What's the biggest product challenge you're facing right now? I have some thoughts on [relevant methodology]...".to_string(),
        ],
    }
}

/// Questions for the interviewers, grouped by category.
pub fn questions_to_ask(
    company: &str,
    role: &str,
    research: Option<&ResearchFindings>,
) -> Vec<(&'static str, Vec<String>)> {
    let mut groups = vec![
        (
            "About the Role",
            vec![
                format!("What does success look like in this {} role after 6 months?", role),
                "What are the biggest challenges facing this product area right now?".to_string(),
                "How is the product team structured and who would I collaborate with most closely?".to_string(),
                "What opportunities exist for professional growth and advancement?".to_string(),
            ],
        ),
        (
            "About the Company",
            vec![
                format!("How does {} approach product experimentation and testing?", company),
                "What's the company's strategy for the next 12-18 months?".to_string(),
                format!(
                    "How has {} evolved its product development process as it's scaled?",
                    company
                ),
                "What do you enjoy most about working here?".to_string(),
            ],
        ),
        (
            "About the Team",
            vec![
                "How does the product team collaborate with engineering and design?".to_string(),
                "What's the decision-making process for product priorities?".to_string(),
                "How does the team handle disagreements or conflicting priorities?".to_string(),
                "What tools and processes does the product team use?".to_string(),
            ],
        ),
        (
            "Strategic",
            vec![
                format!("How is {} thinking about AI in its products?", company),
                "What role does user research play in product decisions?".to_string(),
                "How do you measure product success and team performance?".to_string(),
                "What's the biggest opportunity for product innovation here?".to_string(),
            ],
        ),
    ];

    let mut specific = Vec::new();
    if let Some(challenges) = research.and_then(|r| completed_finding(&r.key_challenges)) {
        specific.push(format!("How is the team approaching {}?", challenges));
    }
    if let Some(news) = research.and_then(|r| completed_finding(&r.recent_news)) {
        specific.push(format!("How will {} affect product strategy?", news));
    }
    if !specific.is_empty() {
        groups.push(("Company Specific", specific));
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockScenario {
    pub name: &'static str,
    pub duration: &'static str,
    pub interviewer: &'static str,
    pub focus: &'static str,
    pub questions: [&'static str; 4],
}

pub const MOCK_SCENARIOS: [MockScenario; 3] = [
    MockScenario {
        name: "Technical Deep Dive",
        duration: "45 minutes",
        interviewer: "Engineering Manager",
        focus: "Technical competence and collaboration",
        questions: [
            "Walk me through how you would approach [specific technical challenge]",
            "How do you work with engineering teams to scope projects?",
            "Tell me about your experience with data analysis and SQL",
            "How do you ensure product requirements are clearly communicated?",
        ],
    },
    MockScenario {
        name: "Strategic Thinking",
        duration: "45 minutes",
        interviewer: "Head of Product",
        focus: "Strategic planning and execution",
        questions: [
            "How would you prioritize our product roadmap?",
            "Tell me about a time you had to make a difficult product decision",
            "How do you balance technical debt vs. new features?",
            "Walk me through your framework for entering new markets",
        ],
    },
    MockScenario {
        name: "Behavioral Interview",
        duration: "30 minutes",
        interviewer: "Peer Product Manager",
        focus: "Collaboration and problem-solving",
        questions: [
            "Tell me about a time when you had to influence someone without authority",
            "Describe a project that didn't go as planned",
            "How do you handle conflicting stakeholder priorities?",
            "Tell me about your biggest professional failure",
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct PrepPrompt {
    pub purpose: &'static str,
    pub prompt: String,
    pub usage: &'static str,
}

/// Prompts to run in an assistant for extra practice.
pub fn prep_prompts(company: &str, role: &str) -> Vec<PrepPrompt> {
    vec![
        PrepPrompt {
            purpose: "Additional Question Generation",
            prompt: format!(
                "Generate 10 additional interview questions for a {} role at {}, focusing on scenarios I might not have considered. Include both behavioral and situational questions.",
                role, company
            ),
            usage: "Expand preparation beyond the generated question bank",
        },
        PrepPrompt {
            purpose: "Mock Interview Practice",
            prompt: format!(
                "Act as a hiring manager at {} interviewing for a {} position. Ask me challenging questions and give feedback on my responses.",
                company, role
            ),
            usage: "Practice answers with feedback",
        },
        PrepPrompt {
            purpose: "Company-Specific Insights",
            prompt: format!(
                "Based on current market conditions and {}'s position, what are the key strategic challenges a {} should be prepared to discuss?",
                company, role
            ),
            usage: "Deepen company-specific strategic preparation",
        },
    ]
}

pub const CHECKLIST: [(&str, [&str; 5]); 4] = [
    (
        "Research Preparation",
        [
            "Complete company research using the research prompts",
            "Research interviewer backgrounds on LinkedIn",
            "Review recent company news and developments",
            "Understand product portfolio and competitive landscape",
            "Practice company-specific talking points",
        ],
    ),
    (
        "Response Preparation",
        [
            "Practice STAR responses for high-probability questions",
            "Prepare 3-5 case stories with quantified outcomes",
            "Practice explaining technical concepts clearly",
            "Prepare examples for each key competency",
            "Practice connecting experiences to role requirements",
        ],
    ),
    (
        "Logistics Preparation",
        [
            "Test video call technology and setup",
            "Prepare a backup internet connection",
            "Set up a quiet, professional environment",
            "Prepare copies of resume and portfolio materials",
            "Plan arrival time and route (if in person)",
        ],
    ),
    (
        "Day of Interview",
        [
            "Review key talking points and value propositions",
            "Practice the elevator pitch and company knowledge points",
            "Prepare thoughtful questions for each interviewer",
            "Bring a notebook for taking notes",
            "Follow up within 24 hours with thank-you notes",
        ],
    ),
];
