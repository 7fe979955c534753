//! Cold email campaigns: pick contacts, render a template per contact,
//! validate it, and write the campaign plan plus one draft per email.

pub mod contacts;
pub mod personalize;
pub mod templates;
pub mod validate;

use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::pipeline::{EmailRecord, ResearchFindings};
use crate::profile::CandidateProfile;
use crate::template::render_template;
use crate::workspace::{Workspace, file_stem};
use chrono::{Duration, NaiveDate};
use contacts::Contact;
use personalize::Personalization;
use std::fmt::Write as _;
use std::path::PathBuf;
use templates::EmailTemplate;
use tracing::{debug, info, warn};
use validate::EmailValidation;

/// Days after sending to check for a reply.
const CHECK_AFTER_DAYS: i64 = 3;
/// Characters of each body shown in the campaign overview.
const PREVIEW_CHARS: usize = 200;

const EXECUTION_STEPS: [&str; 6] = [
    "Review and customize each email as needed",
    "Find contact email addresses, starting with the firstname@company.com pattern",
    "Send emails on schedule, one per day",
    "Connect with contacts on LinkedIn after sending the email",
    "Track responses and schedule follow-ups",
    "Record outcomes with `jobkit record response`",
];

const DISCOVERY_TIPS: [&str; 4] = [
    "Try firstname@company.com first",
    "Check company about and press pages for the address format",
    "Look for addresses in public talks, posts, or repositories",
    "Ask mutual connections for a warm introduction when possible",
];

const LINKEDIN_STRATEGY: [&str; 4] = [
    "Send a LinkedIn connection request the same day as the email",
    "Reference the email in a short connection note",
    "Engage with their recent posts where it is genuine",
    "Use their profile for extra context before following up",
];

#[derive(Debug)]
pub struct CampaignRequest<'a> {
    pub company: &'a str,
    pub role: &'a str,
    /// Contacts to email; empty means the default placeholders.
    pub contacts: Vec<Contact>,
    /// First send date. Later emails go out one per day.
    pub date: NaiveDate,
}

/// One rendered email and its schedule.
#[derive(Debug, Clone)]
pub struct DraftEmail {
    pub contact: Contact,
    pub template: &'static EmailTemplate,
    pub subject: String,
    pub body: String,
    pub word_count: usize,
    pub validation: EmailValidation,
    pub success_probability: f64,
    pub personalization: Personalization,
    pub send_date: NaiveDate,
    pub follow_up_date: NaiveDate,
    pub check_date: NaiveDate,
    pub follow_up_subject: String,
    pub follow_up_body: String,
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub company_name: String,
    pub role_title: String,
    pub date: NaiveDate,
    pub target_titles: Vec<&'static str>,
    pub drafts: Vec<DraftEmail>,
    pub max_words: usize,
    pub follow_up_days: i64,
    pub max_follow_ups: u32,
}

pub fn build_campaign(
    config: &Config,
    profile: &CandidateProfile,
    research: Option<&ResearchFindings>,
    request: &CampaignRequest<'_>,
) -> Result<Campaign> {
    let settings = &config.email_settings;
    let signature = config.user_profile.name.as_str();
    let contacts = if request.contacts.is_empty() {
        contacts::default_contacts()
    } else {
        request.contacts.clone()
    };

    let mut drafts = Vec::with_capacity(contacts.len());
    for (index, contact) in contacts.into_iter().enumerate() {
        let template = templates::select_template(&contact.title);
        let personalization =
            personalize::personalize(&contact, request.company, research, profile);
        let variables = personalization.variables(&contact, request.company, signature);

        let subject = render_template(template.subject, &variables)?;
        let body = render_template(template.body, &variables)?;
        let follow_up_body = render_template(templates::FOLLOW_UP_BODY, &variables)?;

        let validation = validate::validate_email(&body, settings.max_words, template.max_words);
        if !validation.passed {
            warn!(contact = %contact.name, warnings = ?validation.warnings, "email needs review");
        }
        let success_probability = validate::success_probability(&contact, &validation);
        let send_date = request.date + Duration::days(index as i64);
        debug!(contact = %contact.name, template = template.key, "drafted email");

        drafts.push(DraftEmail {
            word_count: validate::word_count(&body),
            follow_up_subject: format!("Re: {}", subject),
            follow_up_date: send_date + Duration::days(settings.follow_up_days),
            check_date: send_date + Duration::days(CHECK_AFTER_DAYS),
            contact,
            template,
            subject,
            body,
            validation,
            success_probability,
            personalization,
            send_date,
            follow_up_body,
        });
    }

    Ok(Campaign {
        company_name: request.company.to_string(),
        role_title: request.role.to_string(),
        date: request.date,
        target_titles: contacts::target_titles(request.company, request.role),
        drafts,
        max_words: settings.max_words,
        follow_up_days: settings.follow_up_days,
        max_follow_ups: settings.max_follow_ups,
    })
}

impl Campaign {
    /// Pipeline entries for each drafted email.
    pub fn email_records(&self) -> Vec<EmailRecord> {
        self.drafts
            .iter()
            .map(|d| EmailRecord {
                contact: d.contact.name.clone(),
                contact_title: d.contact.title.clone(),
                template: d.template.key.to_string(),
                subject: d.subject.clone(),
                send_date: d.send_date,
                response_received: false,
                response_date: None,
                follow_up_sent: false,
            })
            .collect()
    }

    pub fn campaign_path(&self, ws: &Workspace) -> PathBuf {
        ws.company_dir(&self.company_name).join(format!(
            "{}_Cold_Email_Campaign.md",
            file_stem(&self.company_name)
        ))
    }

    /// Write the campaign plan and the individual drafts.
    pub fn write(&self, ws: &Workspace) -> Result<Vec<PathBuf>> {
        let campaign_path = self.campaign_path(ws);
        atomic_write_file(&campaign_path, &self.render_campaign())?;
        let mut written = vec![campaign_path];

        let drafts_dir = ws.cold_emails_dir(&self.company_name);
        for (i, draft) in self.drafts.iter().enumerate() {
            let path = drafts_dir.join(format!(
                "{:02}_{}.md",
                i + 1,
                file_stem(&draft.contact.name).to_lowercase()
            ));
            atomic_write_file(&path, &self.render_draft(draft))?;
            written.push(path);
        }

        info!(
            company = %self.company_name,
            emails = self.drafts.len(),
            "email campaign written"
        );
        Ok(written)
    }

    pub fn render_campaign(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# Cold Email Campaign - {}\n", self.company_name);
        let _ = writeln!(md, "**Role:** {}  ", self.role_title);
        let _ = writeln!(md, "**Campaign Date:** {}  ", self.date);
        let _ = writeln!(md, "**Target Contacts:** {}\n", self.drafts.len());
        md.push_str("---\n\n## Campaign Overview\n\n");
        md.push_str("Direct, personalized outreach to hiring managers and product leaders instead of online applications.\n\n");
        let _ = writeln!(md, "**Word Limit:** {} words  ", self.max_words);
        let _ = writeln!(
            md,
            "**Follow-up Rule:** at most {} follow-up after {} days\n",
            self.max_follow_ups, self.follow_up_days
        );

        md.push_str("### Titles to Target\n\n");
        for title in &self.target_titles {
            let _ = writeln!(md, "- {}", title);
        }

        md.push_str("\n---\n\n## Email Campaigns\n\n");
        for (i, draft) in self.drafts.iter().enumerate() {
            let _ = writeln!(
                md,
                "### {}. {} - {}\n",
                i + 1,
                draft.contact.name,
                draft.contact.title
            );
            let _ = writeln!(
                md,
                "**Priority:** {} | **Success Rate:** {:.1}%  ",
                draft.contact.priority_label(),
                draft.success_probability * 100.0
            );
            let _ = writeln!(md, "**Template:** {}\n", draft.template.name);
            let _ = writeln!(md, "**Subject:** {}\n", draft.subject);
            let _ = writeln!(md, "**Email Preview:**\n```\n{}\n```\n", preview(&draft.body));
            let status = if draft.validation.passed {
                "Passed"
            } else {
                "Needs Review"
            };
            let _ = writeln!(md, "**Validation:** {}  ", status);
            for warning in &draft.validation.warnings {
                let _ = writeln!(md, "- {}", warning);
            }
            let _ = writeln!(md, "**Word Count:** {}/{}\n", draft.word_count, self.max_words);
            md.push_str("---\n\n");
        }

        md.push_str("## Execution Schedule\n\n### Send Schedule\n\n");
        for draft in &self.drafts {
            let _ = writeln!(md, "- **{}:** {}", draft.contact.name, long_date(draft.send_date));
        }
        md.push_str("\n### Follow-up Schedule\n\n");
        for draft in &self.drafts {
            let _ = writeln!(
                md,
                "- **{}:** {} (if no response)",
                draft.contact.name,
                long_date(draft.follow_up_date)
            );
        }
        md.push_str("\n### Response Checks\n\n");
        for draft in &self.drafts {
            let _ = writeln!(
                md,
                "- **{}:** {} - check for a response and LinkedIn activity",
                draft.contact.name,
                long_date(draft.check_date)
            );
        }

        md.push_str("\n---\n\n## Execution Guide\n\n");
        let _ = writeln!(
            md,
            "**{} personalized emails for {}**\n",
            self.drafts.len(),
            self.company_name
        );
        md.push_str("### Execution Steps\n");
        for (i, step) in EXECUTION_STEPS.iter().enumerate() {
            let _ = writeln!(md, "{}. {}", i + 1, step);
        }
        md.push_str("\n### Email Discovery Tips\n");
        for tip in DISCOVERY_TIPS {
            let _ = writeln!(md, "- {}", tip);
        }
        md.push_str("\n### LinkedIn Strategy\n");
        for item in LINKEDIN_STRATEGY {
            let _ = writeln!(md, "- {}", item);
        }

        md.push_str("\n---\n\n## Success Tracking\n\n");
        let _ = writeln!(md, "- Emails Planned: {}", self.drafts.len());
        md.push_str("- Emails Sent: 0\n- Responses Received: 0\n- Meetings Scheduled: 0\n\n");
        md.push_str("Update this file with:\n");
        md.push_str("- [ ] Email send dates and responses\n");
        md.push_str("- [ ] LinkedIn connection outcomes\n");
        md.push_str("- [ ] Meeting schedules and interview opportunities\n");
        md
    }

    pub fn render_draft(&self, draft: &DraftEmail) -> String {
        let contact = &draft.contact;
        let mut md = String::new();
        let _ = writeln!(md, "# Cold Email - {}\n", contact.name);
        let _ = writeln!(md, "**Company:** {}  ", self.company_name);
        let _ = writeln!(md, "**Title:** {}  ", contact.title);
        let _ = writeln!(md, "**Priority:** {}  ", contact.priority_label());
        let _ = writeln!(
            md,
            "**Estimated Success Rate:** {:.1}%\n",
            draft.success_probability * 100.0
        );

        md.push_str("---\n\n## Email Content\n\n");
        let _ = writeln!(md, "**Subject:** {}\n", draft.subject);
        let _ = writeln!(md, "**Body:**\n```\n{}\n```\n", draft.body);
        let _ = writeln!(md, "**Word Count:** {}/{}\n", draft.word_count, self.max_words);
        if !draft.validation.suggestions.is_empty() {
            md.push_str("**Suggestions:**\n");
            for suggestion in &draft.validation.suggestions {
                let _ = writeln!(md, "- {}", suggestion);
            }
            md.push('\n');
        }

        md.push_str("---\n\n## Personalization Elements\n\n");
        for (label, value) in draft.personalization.elements() {
            let _ = writeln!(md, "- **{}:** {}", label, value);
        }

        md.push_str("\n---\n\n## Follow-up\n\n");
        let _ = writeln!(
            md,
            "**Send on:** {} (only if there is no response)  ",
            long_date(draft.follow_up_date)
        );
        let _ = writeln!(md, "**Subject:** {}  ", draft.follow_up_subject);
        let _ = writeln!(md, "**Body:**\n```\n{}\n```\n", draft.follow_up_body);

        md.push_str("---\n\n## Email Discovery\n\n");
        md.push_str("**Suggested Email:** firstname@company.com  \n");
        let _ = writeln!(md, "**Connection Degree:** {}  ", contact.degree);
        let _ = writeln!(md, "**Mutual Connections:** {}\n", contact.mutual_connections);

        md.push_str("---\n\n## Tracking\n\n");
        let _ = writeln!(md, "- [ ] Email sent on: {}", draft.send_date);
        md.push_str("- [ ] LinkedIn connection sent: ___________\n");
        md.push_str("- [ ] Response received: ___________\n");
        md.push_str("- [ ] Follow-up sent (if needed): ___________\n");
        md.push_str("- [ ] Meeting scheduled: ___________\n");
        md
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= PREVIEW_CHARS {
        return body.to_string();
    }
    let cut: String = body.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", cut)
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_workspace;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.user_profile.name = "Jordan Lee".to_string();
        config
    }

    fn request(contacts: Vec<Contact>) -> CampaignRequest<'static> {
        CampaignRequest {
            company: "Acme Health",
            role: "Growth Product Manager",
            contacts,
            date: date(),
        }
    }

    #[test]
    fn test_default_contacts_and_schedule() {
        let campaign =
            build_campaign(&config(), &CandidateProfile::default(), None, &request(vec![]))
                .unwrap();
        assert_eq!(campaign.drafts.len(), 2);

        let first = &campaign.drafts[0];
        assert_eq!(first.template.key, "senior_leadership");
        assert_eq!(first.send_date, date());
        assert_eq!(first.follow_up_date, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(first.check_date, NaiveDate::from_ymd_opt(2026, 10, 8).unwrap());
        assert_eq!(first.follow_up_subject, format!("Re: {}", first.subject));

        let second = &campaign.drafts[1];
        assert_eq!(second.send_date, NaiveDate::from_ymd_opt(2026, 10, 6).unwrap());
        assert_eq!(campaign.target_titles[0], "Head of Growth");
    }

    #[test]
    fn test_bodies_are_fully_rendered() {
        let contacts = vec![
            Contact::new("Pat Kim", "Head of AI"),
            Contact::new("Sam Roe", "Product Lead"),
        ];
        let campaign =
            build_campaign(&config(), &CandidateProfile::default(), None, &request(contacts))
                .unwrap();

        assert_eq!(campaign.drafts[0].template.key, "ai_focused");
        assert_eq!(campaign.drafts[1].template.key, "growth_focused");
        for draft in &campaign.drafts {
            assert!(!draft.body.contains('{'), "{}", draft.body);
            assert!(draft.body.starts_with(&format!("Hi {},", draft.contact.name)));
            assert!(draft.body.ends_with("Jordan Lee"));
            assert!(draft.subject.contains("Acme Health"));
            assert!(draft.validation.passed, "{:?}", draft.validation);
            assert!(draft.word_count <= draft.template.max_words);
        }
    }

    #[test]
    fn test_email_records() {
        let campaign = build_campaign(
            &config(),
            &CandidateProfile::default(),
            None,
            &request(vec![Contact::new("Pat Kim", "VP Product")]),
        )
        .unwrap();
        let records = campaign.email_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contact, "Pat Kim");
        assert_eq!(records[0].contact_title, "VP Product");
        assert_eq!(records[0].template, "senior_leadership");
        assert_eq!(records[0].send_date, date());
        assert!(!records[0].response_received);
    }

    #[test]
    fn test_write_campaign_and_drafts() {
        let (_temp_dir, ws) = create_test_workspace();
        let campaign =
            build_campaign(&config(), &CandidateProfile::default(), None, &request(vec![]))
                .unwrap();
        let files = campaign.write(&ws).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("acme_health/Acme_Health_Cold_Email_Campaign.md"));
        assert!(files[1].ends_with("cold_emails/01_hiring_manager.md"));
        assert!(files[2].ends_with("cold_emails/02_vp_product.md"));

        let plan = std::fs::read_to_string(&files[0]).unwrap();
        for heading in [
            "## Campaign Overview",
            "### Titles to Target",
            "## Email Campaigns",
            "## Execution Schedule",
            "## Execution Guide",
            "## Success Tracking",
        ] {
            assert!(plan.contains(heading), "missing {}", heading);
        }
        assert!(plan.contains("- **Hiring Manager:** October 05, 2026"));
        assert!(plan.contains("**Word Count:**"));

        let draft = std::fs::read_to_string(&files[1]).unwrap();
        assert!(draft.starts_with("# Cold Email - Hiring Manager"));
        assert!(draft.contains("**Connection Degree:** 2nd"));
        assert!(draft.contains("**Subject:** Re: "));
        assert!(draft.contains("- [ ] Email sent on: 2026-10-05"));
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(250);
        assert_eq!(preview(&long).len(), PREVIEW_CHARS + 3);
    }
}
