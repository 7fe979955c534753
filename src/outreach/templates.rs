//! Built-in cold email templates.
//!
//! Bodies use the placeholder syntax from [`crate::template`] and are rendered
//! strictly, so every variable below must be supplied by the personalization
//! step.

use crate::application::analysis::contains_term;

#[derive(Debug, PartialEq, Eq)]
pub struct EmailTemplate {
    /// Stored in the pipeline as the email's template.
    pub key: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub max_words: usize,
}

pub const GROWTH_FOCUSED: EmailTemplate = EmailTemplate {
    key: "growth_focused",
    name: "Product Manager - Growth Focus",
    subject: "Growth expertise for {company_name}",
    body: "\
Hi {name},

{personalization_hook}

I'm reaching out because {specific_reason}. Two things that might be relevant:

- {achievement_1}
- {achievement_2}

I think I could help you {specific_value_add} and would like to learn more about your current priorities.

Worth a 15-minute conversation?

Best,
{signature}",
    max_words: 200,
};

pub const SENIOR_LEADERSHIP: EmailTemplate = EmailTemplate {
    key: "senior_leadership",
    name: "Senior Leadership Outreach",
    subject: "Product strategy expertise for {company_name}",
    body: "\
Hi {name},

{personalization_hook}

I help companies scale product development through systematic experimentation and practical AI adoption.

My experience includes:
- {relevant_experience_1}
- {relevant_experience_2}

I'm particularly interested in {company_challenge} and believe I could contribute to your team's success.

Would you have time for a brief conversation about your product priorities?

Best regards,
{signature}",
    max_words: 180,
};

pub const AI_FOCUSED: EmailTemplate = EmailTemplate {
    key: "ai_focused",
    name: "AI/Technology Focus",
    subject: "AI product expertise for {company_name}",
    body: "\
Hi {name},

{personalization_hook}

I saw {company_name} is {ai_initiative} and wanted to reach out. I have taken AI features from research to launch on short timelines and scaled them afterwards.

Two relevant outcomes:
- {ai_achievement_1}
- {ai_achievement_2}

Happy to share how a systematic approach to AI could speed up {company_name}'s roadmap.

Interested in a quick chat?

{signature}",
    max_words: 150,
};

pub const ALL_TEMPLATES: [&EmailTemplate; 3] = [&GROWTH_FOCUSED, &SENIOR_LEADERSHIP, &AI_FOCUSED];

/// The single follow-up sent when there is no reply.
pub const FOLLOW_UP_BODY: &str = "\
Hi {name},

I wanted to follow up on my previous email about product opportunities at {company_name}.

I know you're busy, but if you have 15 minutes in the coming weeks, I'd be glad to share a few lessons from recent AI product launches that could be useful for your team's roadmap.

No worries if the timing isn't right.

Best,
{signature}";

/// Pick a template from the contact's title.
///
/// Technical titles get the AI pitch, executives the leadership pitch, and
/// everyone else the growth pitch.
pub fn select_template(contact_title: &str) -> &'static EmailTemplate {
    let title = contact_title.to_lowercase();
    let has_any = |terms: &[&str]| terms.iter().any(|t| contains_term(&title, t));

    if has_any(&["ai", "ml", "data", "technology"]) {
        &AI_FOCUSED
    } else if has_any(&["ceo", "vp", "head", "chief", "director"]) {
        &SENIOR_LEADERSHIP
    } else {
        &GROWTH_FOCUSED
    }
}

pub fn template_by_key(key: &str) -> Option<&'static EmailTemplate> {
    ALL_TEMPLATES.into_iter().find(|t| t.key == key)
}
