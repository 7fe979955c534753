//! Company research: scoring, the quality gate, and research documents.
//!
//! A company is scored on the 4-40 rubric first. Below the configured
//! minimum it is recorded as `disqualified` and nothing else is produced.
//! Otherwise placeholder findings are stored and two documents are written
//! to the company folder: the research notes and the prompt execution guide.

pub mod notes;
pub mod prompts;
pub mod scoring;

use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::pipeline::{
    CompanyRecord, NetworkOpportunities, Pipeline, PriorityScores, ResearchFindings, Status,
};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

/// Role assumed when neither the command line nor the record names one.
pub const DEFAULT_ROLE: &str = "Product Manager";

#[derive(Debug)]
pub struct ResearchRequest<'a> {
    pub company: &'a str,
    pub role: Option<&'a str>,
    pub date: NaiveDate,
}

#[derive(Debug)]
pub enum ResearchOutcome {
    /// Scored under the quality gate.
    Disqualified { score: u32, minimum: u32 },
    /// Qualified; documents were written.
    Researched { score: u32, files: Vec<PathBuf> },
}

/// The existing record, if research is already complete and no refresh
/// was asked for.
pub fn cached_record<'p>(
    pipeline: &'p Pipeline,
    company: &str,
    force_refresh: bool,
) -> Option<&'p CompanyRecord> {
    if force_refresh {
        return None;
    }
    pipeline.get(company).filter(|r| r.research_completed)
}

/// Score a company, apply the quality gate, and write research documents.
///
/// A refresh of an existing company keeps its outreach, interview, and
/// recorded research history; everything else is rebuilt. A company that
/// already moved past `researched` keeps its status unless it now fails
/// the quality gate.
pub fn research_company(
    ws: &Workspace,
    config: &Config,
    pipeline: &mut Pipeline,
    request: &ResearchRequest<'_>,
    scores: PriorityScores,
) -> Result<ResearchOutcome> {
    let previous = pipeline.get(request.company).cloned();
    let mut record = CompanyRecord::new(request.company, request.role, request.date);
    let already_counted = previous.as_ref().is_some_and(|p| p.research_completed);
    let previous_status = previous.as_ref().map(|p| p.status);
    if let Some(previous) = previous {
        record.role_title = record.role_title.or(previous.role_title);
        record.emails_sent = previous.emails_sent;
        record.interviews = previous.interviews;
        record.application_generated = previous.application_generated;
        record.applied_date = previous.applied_date;
        record.offer_received = previous.offer_received;
        record.ai_research_results = previous.ai_research_results;
        record.extra = previous.extra;
    }

    let score = scores.total();
    record.priority_score = score;
    record.priority_breakdown = Some(scores);

    let minimum = config.quality_gates.min_priority_score;
    if score < minimum {
        warn!(company = %record.name, score, minimum, "below quality gate, skipping research");
        record.status = Status::Disqualified;
        pipeline.upsert(record);
        return Ok(ResearchOutcome::Disqualified { score, minimum });
    }

    let mut findings = ResearchFindings::placeholders(&record.name);
    for (component, result) in &record.ai_research_results {
        findings.apply_component(component, &result.results);
    }
    record.research = Some(findings);
    record.network_opportunities = Some(NetworkOpportunities::default());
    record.research_completed = true;
    record.qualification_passed = true;
    record.status = previous_status.map_or(Status::Researched, |s| s.max(Status::Researched));

    let role = record
        .role_title
        .clone()
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let prompts = prompts::build_prompts(&record.name, &role)?;

    let company_dir = ws.company_dir(&record.name);
    let notes_path = company_dir.join(notes::NOTES_FILE);
    let guide_path = company_dir.join(notes::GUIDE_FILE);
    atomic_write_file(&notes_path, &notes::render_research_notes(&record, config))?;
    atomic_write_file(
        &guide_path,
        &notes::render_execution_guide(&record.name, &role, request.date, &prompts),
    )?;
    info!(company = %record.name, score, dir = %company_dir.display(), "research documents written");

    pipeline.upsert(record);
    if !already_counted {
        pipeline.stats.total_researched += 1;
    }

    Ok(ResearchOutcome::Researched {
        score,
        files: vec![notes_path, guide_path],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::EmailRecord;
    use crate::test_support::create_test_workspace;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
    }

    fn scores(each: u32) -> PriorityScores {
        PriorityScores {
            role_appeal: each,
            company_fit: each,
            growth_potential: each,
            likelihood: each,
        }
    }

    fn request(company: &str) -> ResearchRequest<'_> {
        ResearchRequest {
            company,
            role: Some("Growth Product Manager"),
            date: date(),
        }
    }

    #[test]
    fn test_below_gate_is_disqualified_without_files() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();

        let outcome = research_company(
            &ws,
            &Config::default(),
            &mut pipeline,
            &request("Acme"),
            scores(6),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            ResearchOutcome::Disqualified { score: 24, minimum: 28 }
        ));
        let record = pipeline.get("Acme").unwrap();
        assert_eq!(record.status, Status::Disqualified);
        assert!(!record.research_completed);
        assert!(record.research.is_none());
        assert_eq!(pipeline.stats.total_researched, 0);
        assert!(!ws.company_dir("Acme").exists());
    }

    #[test]
    fn test_qualified_company_gets_documents() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();

        let outcome = research_company(
            &ws,
            &Config::default(),
            &mut pipeline,
            &request("Acme Health"),
            scores(8),
        )
        .unwrap();

        let ResearchOutcome::Researched { score, files } = outcome else {
            panic!("expected research to run");
        };
        assert_eq!(score, 32);
        assert_eq!(files.len(), 2);
        for file in &files {
            assert!(file.starts_with(ws.company_dir("Acme Health")));
            assert!(file.exists());
        }

        let record = pipeline.get("acme health").unwrap();
        assert_eq!(record.status, Status::Researched);
        assert!(record.research_completed);
        assert!(record.qualification_passed);
        assert!(record.network_opportunities.is_some());
        assert_eq!(pipeline.stats.total_researched, 1);
    }

    #[test]
    fn test_score_at_gate_passes() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        let exact = PriorityScores {
            role_appeal: 7,
            company_fit: 7,
            growth_potential: 7,
            likelihood: 7,
        };
        let outcome =
            research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), exact)
                .unwrap();
        assert!(matches!(outcome, ResearchOutcome::Researched { score: 28, .. }));
    }

    #[test]
    fn test_cached_record_respects_force_refresh() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(9))
            .unwrap();

        assert!(cached_record(&pipeline, "Acme", false).is_some());
        assert!(cached_record(&pipeline, "Acme", true).is_none());
        assert!(cached_record(&pipeline, "Other", false).is_none());
    }

    #[test]
    fn test_disqualified_record_is_not_cached() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(5))
            .unwrap();
        assert!(cached_record(&pipeline, "Acme", false).is_none());
    }

    #[test]
    fn test_refresh_keeps_history_and_counts_once() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(8))
            .unwrap();
        pipeline
            .record_emails(
                "Acme",
                vec![EmailRecord {
                    contact: "Pat".to_string(),
                    contact_title: "VP Product".to_string(),
                    template: "senior_leadership".to_string(),
                    subject: "Hi".to_string(),
                    send_date: date(),
                    response_received: false,
                    response_date: None,
                    follow_up_sent: false,
                }],
            )
            .unwrap();
        pipeline
            .store_ai_research("Acme", "growth_challenges", "Churn in SMB", date())
            .unwrap();

        let refresh = ResearchRequest {
            company: "Acme",
            role: None,
            date: date(),
        };
        research_company(&ws, &Config::default(), &mut pipeline, &refresh, scores(9)).unwrap();

        let record = pipeline.get("Acme").unwrap();
        assert_eq!(record.priority_score, 36);
        assert_eq!(record.role_title.as_deref(), Some("Growth Product Manager"));
        assert_eq!(record.emails_sent.len(), 1);
        assert_eq!(
            record.research.as_ref().unwrap().key_challenges.as_deref(),
            Some("Churn in SMB")
        );
        assert_eq!(pipeline.stats.total_researched, 1);
    }

    #[test]
    fn test_refresh_keeps_later_status() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(8))
            .unwrap();
        pipeline.mark_application_generated("Acme", date()).unwrap();
        pipeline
            .add_interview(
                "Acme",
                crate::pipeline::InterviewRecord {
                    date: date(),
                    scheduled_date: None,
                    stage: "phone_screen".to_string(),
                    interviewer: None,
                    outcome: "pending".to_string(),
                    feedback_received: false,
                    notes: None,
                },
            )
            .unwrap();

        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(9))
            .unwrap();

        let record = pipeline.get("Acme").unwrap();
        assert_eq!(record.status, Status::Interviewing);
        assert_eq!(record.interviews.len(), 1);
        assert!(record.application_generated);
        assert_eq!(pipeline.stats.total_applied, 1);
    }

    #[test]
    fn test_refresh_requalifies_disqualified_company() {
        let (_temp_dir, ws) = create_test_workspace();
        let mut pipeline = Pipeline::default();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(5))
            .unwrap();
        research_company(&ws, &Config::default(), &mut pipeline, &request("Acme"), scores(9))
            .unwrap();
        assert_eq!(pipeline.get("Acme").unwrap().status, Status::Researched);
    }
}
