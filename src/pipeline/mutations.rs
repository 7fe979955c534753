//! State transitions on the pipeline.
//!
//! Each helper looks the company up by [`company_key`], so callers can pass
//! the name the way the user typed it.

use super::{
    AiResearchResult, CompanyRecord, EmailRecord, InterviewRecord, Pipeline, Status,
};
use crate::error::{JobkitError, Result};
use crate::workspace::company_key;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;
use tracing::info;

/// Terminal results that can be recorded by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Outcome {
    Offered,
    Hired,
    Rejected,
    Withdrawn,
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Offered => Status::Offered,
            Outcome::Hired => Status::Hired,
            Outcome::Rejected => Status::Rejected,
            Outcome::Withdrawn => Status::Withdrawn,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().as_str())
    }
}

/// Result of a single interview round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InterviewResult {
    Advanced,
    Rejected,
}

impl InterviewResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewResult::Advanced => "advanced",
            InterviewResult::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InterviewResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interview outcome for rounds still open when the process ends.
fn closing_interview_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Offered | Outcome::Hired => "advanced",
        Outcome::Rejected => "rejected",
        Outcome::Withdrawn => "withdrawn",
    }
}

impl Pipeline {
    pub fn get(&self, company: &str) -> Option<&CompanyRecord> {
        self.companies.get(&company_key(company))
    }

    pub fn get_mut(&mut self, company: &str) -> Option<&mut CompanyRecord> {
        self.companies.get_mut(&company_key(company))
    }

    /// Like [`Pipeline::get_mut`], but a missing company is a user error.
    pub fn require_mut(&mut self, company: &str) -> Result<&mut CompanyRecord> {
        self.companies.get_mut(&company_key(company)).ok_or_else(|| {
            JobkitError::UserError(format!(
                "company '{}' is not in the pipeline\n\nRun `jobkit research \"{}\"` first.",
                company.trim(),
                company.trim()
            ))
        })
    }

    /// Insert or replace a record under its company key.
    pub fn upsert(&mut self, record: CompanyRecord) {
        let key = record.key();
        self.companies.insert(key, record);
    }

    /// Mark the application package as generated.
    ///
    /// The first call sets `applied_date` and counts toward `total_applied`;
    /// regenerating a package later changes neither.
    pub fn mark_application_generated(&mut self, company: &str, date: NaiveDate) -> Result<()> {
        let record = self.require_mut(company)?;
        let first_time = !record.application_generated;
        record.application_generated = true;
        record.status = Status::Applied;
        if record.applied_date.is_none() {
            record.applied_date = Some(date);
        }
        if first_time {
            self.stats.total_applied += 1;
        }
        Ok(())
    }

    /// Append drafted emails and move the company to `outreach_sent`.
    pub fn record_emails(&mut self, company: &str, emails: Vec<EmailRecord>) -> Result<()> {
        if emails.is_empty() {
            return Ok(());
        }
        let record = self.require_mut(company)?;
        record.emails_sent.extend(emails);
        record.status = Status::OutreachSent;
        self.refresh_stats();
        Ok(())
    }

    /// Mark a reply on the latest email to `contact`, or on the latest email
    /// overall when no contact is given. Returns the contact that replied.
    pub fn record_response(
        &mut self,
        company: &str,
        contact: Option<&str>,
        date: NaiveDate,
    ) -> Result<String> {
        let record = self.require_mut(company)?;
        let name = record.name.clone();

        let email = match contact {
            Some(contact) => record
                .emails_sent
                .iter_mut()
                .rev()
                .find(|e| e.contact.eq_ignore_ascii_case(contact.trim()))
                .ok_or_else(|| {
                    JobkitError::UserError(format!(
                        "no email to '{}' recorded for {}",
                        contact.trim(),
                        name
                    ))
                })?,
            None => record.emails_sent.last_mut().ok_or_else(|| {
                JobkitError::UserError(format!("no emails recorded for {}", name))
            })?,
        };

        email.response_received = true;
        email.response_date = Some(date);
        let replied = email.contact.clone();

        record.status = Status::Responded;
        info!(company = %name, contact = %replied, "response recorded");
        self.refresh_stats();
        Ok(replied)
    }

    /// Add an interview and move the company to `interviewing`.
    pub fn add_interview(&mut self, company: &str, interview: InterviewRecord) -> Result<()> {
        let record = self.require_mut(company)?;
        record.interviews.push(interview);
        record.status = Status::Interviewing;
        self.refresh_stats();
        Ok(())
    }

    /// Record how the process ended. Interviews still pending are closed
    /// with the matching result.
    pub fn set_outcome(&mut self, company: &str, outcome: Outcome) -> Result<()> {
        let record = self.require_mut(company)?;
        record.status = outcome.status();
        if matches!(outcome, Outcome::Offered | Outcome::Hired) {
            record.offer_received = true;
        }
        for interview in record.interviews.iter_mut().filter(|i| i.outcome == "pending") {
            interview.outcome = closing_interview_outcome(outcome).to_string();
        }
        self.refresh_stats();
        Ok(())
    }

    /// Mark follow-ups as sent: on the latest email to `contact`, or on every
    /// unanswered email without one when no contact is given.
    ///
    /// Returns the contacts that were followed up.
    pub fn record_follow_up(
        &mut self,
        company: &str,
        contact: Option<&str>,
    ) -> Result<Vec<String>> {
        let record = self.require_mut(company)?;
        let name = record.name.clone();

        let followed: Vec<String> = match contact {
            Some(contact) => {
                let email = record
                    .emails_sent
                    .iter_mut()
                    .rev()
                    .find(|e| e.contact.eq_ignore_ascii_case(contact.trim()))
                    .ok_or_else(|| {
                        JobkitError::UserError(format!(
                            "no email to '{}' recorded for {}",
                            contact.trim(),
                            name
                        ))
                    })?;
                email.follow_up_sent = true;
                vec![email.contact.clone()]
            }
            None => record
                .emails_sent
                .iter_mut()
                .filter(|e| !e.response_received && !e.follow_up_sent)
                .map(|e| {
                    e.follow_up_sent = true;
                    e.contact.clone()
                })
                .collect(),
        };

        if followed.is_empty() {
            return Err(JobkitError::UserError(format!(
                "no unanswered emails awaiting a follow-up for {}",
                name
            )));
        }
        info!(company = %name, count = followed.len(), "follow-ups recorded");
        Ok(followed)
    }

    /// Close the latest pending interview, or the latest pending one at
    /// `stage`. Returns the stage that was closed.
    pub fn record_interview_result(
        &mut self,
        company: &str,
        stage: Option<&str>,
        result: InterviewResult,
    ) -> Result<String> {
        let record = self.require_mut(company)?;
        let name = record.name.clone();

        let interview = record
            .interviews
            .iter_mut()
            .rev()
            .filter(|i| i.outcome == "pending")
            .find(|i| stage.is_none_or(|s| i.stage.eq_ignore_ascii_case(s.trim())))
            .ok_or_else(|| match stage {
                Some(stage) => JobkitError::UserError(format!(
                    "no pending {} interview recorded for {}",
                    stage.trim(),
                    name
                )),
                None => JobkitError::UserError(format!(
                    "no pending interviews recorded for {}",
                    name
                )),
            })?;

        interview.outcome = result.as_str().to_string();
        interview.feedback_received = true;
        let closed = interview.stage.clone();
        info!(company = %name, stage = %closed, result = %result, "interview result recorded");
        Ok(closed)
    }

    /// Store pasted research output under `component`.
    ///
    /// Known components also replace the matching research finding.
    pub fn store_ai_research(
        &mut self,
        company: &str,
        component: &str,
        results: &str,
        date: NaiveDate,
    ) -> Result<()> {
        let record = self.require_mut(company)?;
        record.ai_research_results.insert(
            component.to_string(),
            AiResearchResult {
                results: results.to_string(),
                updated_date: date,
            },
        );
        let research = record.research.get_or_insert_with(Default::default);
        if research.apply_component(component, results) && component == "recent_news_analysis" {
            research.recent_news = Some(results.trim().to_string());
        }
        Ok(())
    }

    /// Recompute the derived counters in `stats`.
    ///
    /// `total_researched` and `total_applied` are running counters and are
    /// left alone.
    pub fn refresh_stats(&mut self) {
        let mut sent = 0u32;
        let mut replied = 0u32;
        let mut interviews = 0u32;
        let mut offers = 0u32;

        for record in self.companies.values() {
            sent += record.emails_sent.len() as u32;
            replied += record
                .emails_sent
                .iter()
                .filter(|e| e.response_received)
                .count() as u32;
            interviews += record.interviews.len() as u32;
            if record.offer_received {
                offers += 1;
            }
        }

        self.stats.response_rate = if sent > 0 {
            f64::from(replied) / f64::from(sent)
        } else {
            0.0
        };
        self.stats.interviews_scheduled = interviews;
        self.stats.offers_received = offers;
    }
}
