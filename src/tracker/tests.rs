//! Tests for the dashboard computations and rendering.

use super::*;
use crate::pipeline::{
    ActionPriority, AiResearchResult, CompanyRecord, EmailRecord, InterviewRecord, PriorityTier,
    Status,
};
use crate::test_support::create_test_workspace;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A Thursday; its week runs from October 12 to October 18.
fn today() -> NaiveDate {
    date(2026, 10, 15)
}

fn email(contact: &str, template: &str, sent: NaiveDate, replied: Option<NaiveDate>) -> EmailRecord {
    EmailRecord {
        contact: contact.to_string(),
        contact_title: "Head of Product".to_string(),
        template: template.to_string(),
        subject: "Hello".to_string(),
        send_date: sent,
        response_received: replied.is_some(),
        response_date: replied,
        follow_up_sent: false,
    }
}

fn interview(
    on: NaiveDate,
    booked: NaiveDate,
    stage: &str,
    interviewer: Option<&str>,
    outcome: &str,
) -> InterviewRecord {
    InterviewRecord {
        date: on,
        scheduled_date: Some(booked),
        stage: stage.to_string(),
        interviewer: interviewer.map(str::to_string),
        outcome: outcome.to_string(),
        feedback_received: false,
        notes: None,
    }
}

fn record(name: &str, score: u32, status: Status, researched: NaiveDate) -> CompanyRecord {
    let mut record = CompanyRecord::new(name, Some("Growth PM"), researched);
    record.priority_score = score;
    record.status = status;
    record.research_completed = true;
    record
}

fn sample_pipeline() -> Pipeline {
    let mut pipeline = Pipeline::default();

    pipeline.upsert(record("Acme Health", 36, Status::Researched, date(2026, 10, 13)));

    let mut beta = record("Beta Labs", 30, Status::OutreachSent, date(2026, 10, 1));
    beta.application_generated = true;
    beta.applied_date = Some(date(2026, 10, 2));
    beta.emails_sent = vec![
        email("Sam Lee", "senior_leadership", date(2026, 10, 3), None),
        email(
            "Ana Ruiz",
            "growth_focused",
            date(2026, 10, 13),
            Some(date(2026, 10, 14)),
        ),
    ];
    pipeline.upsert(beta);

    let mut cobalt = record("Cobalt", 25, Status::Interviewing, date(2026, 9, 20));
    cobalt.application_generated = true;
    cobalt.applied_date = Some(date(2026, 9, 22));
    cobalt.emails_sent = vec![email(
        "Kim Park",
        "senior_leadership",
        date(2026, 9, 25),
        Some(date(2026, 9, 28)),
    )];
    cobalt.interviews = vec![
        interview(date(2026, 10, 10), date(2026, 10, 1), "phone_screen", None, "advanced"),
        interview(
            date(2026, 10, 17),
            date(2026, 10, 13),
            "onsite",
            Some("Dana"),
            "pending",
        ),
    ];
    pipeline.upsert(cobalt);

    pipeline.upsert(record("Delta", 20, Status::Rejected, date(2026, 9, 1)));
    pipeline
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn test_summary_counts_and_completion() {
    let summary = summary::summarize(&sample_pipeline());

    assert_eq!(summary.total_companies, 4);
    assert_eq!(summary.status_counts[&Status::Researched], 1);
    assert_eq!(summary.status_counts[&Status::Rejected], 1);
    assert_eq!(summary.priority_distribution[&PriorityTier::High], 1);
    assert_eq!(summary.priority_distribution[&PriorityTier::Medium], 1);
    assert_eq!(summary.priority_distribution[&PriorityTier::Low], 2);
    assert_eq!(summary.active, 3);

    // Ranks 1 + 2 + 3 + 0 over 4 companies times 5 stages.
    assert_eq!(summary.completion_rate, 0.3);
    assert_eq!(summary.stage_rates[0], ("researched", 0.75));
    assert_eq!(summary.stage_rates[1], ("applied", 0.5));
    assert_eq!(summary.stage_rates[2], ("interviewing", 0.25));
    assert_eq!(summary.stage_rates[4], ("hired", 0.0));
}

#[test]
fn test_empty_pipeline_summary() {
    let summary = summary::summarize(&Pipeline::default());
    assert_eq!(summary.total_companies, 0);
    assert_eq!(summary.completion_rate, 0.0);
    assert_eq!(summary.active, 0);
}

#[test]
fn test_company_statuses_sorted_by_priority() {
    let rows = summary::company_statuses(&sample_pipeline(), today());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Acme Health", "Beta Labs", "Cobalt", "Delta"]);

    assert_eq!(rows[0].next_action, "Generate application package");
    assert_eq!(rows[0].days_since_activity, Some(2));
    assert_eq!(rows[1].emails_sent, 2);
    assert!(rows[1].response_received);
    assert_eq!(rows[1].last_activity, Some(date(2026, 10, 13)));
    assert_eq!(rows[3].next_action, "Archive and learn from feedback");
}

#[test]
fn test_equal_priority_sorts_recent_research_first() {
    let mut pipeline = Pipeline::default();
    pipeline.upsert(record("Older", 30, Status::Researched, date(2026, 9, 1)));
    pipeline.upsert(record("Newer", 30, Status::Researched, date(2026, 10, 1)));

    let rows = summary::company_statuses(&pipeline, today());
    assert_eq!(rows[0].name, "Newer");
}

// =============================================================================
// Metrics
// =============================================================================

#[test]
fn test_success_metrics() {
    let config = Config::default();
    let m = metrics::success_metrics(&sample_pipeline(), &config.targets);

    assert_eq!(m.emails_sent, 3);
    assert_eq!(m.email_responses, 2);
    assert_eq!(m.response_rate, 0.667);
    assert_eq!(m.response_vs_target, 4.45);
    assert_eq!(m.applications, 2);
    assert_eq!(m.companies_responded, 2);
    assert_eq!(m.companies_interviewed, 1);
    assert_eq!(m.interview_conversion, 0.5);
    assert_eq!(m.application_to_interview, 0.5);
    assert_eq!(m.offers, 0);
    assert_eq!(m.offer_rate, 0.0);
    assert_eq!(m.pipeline_value, 0);
}

#[test]
fn test_pipeline_value_uses_average_offer() {
    let mut pipeline = sample_pipeline();
    pipeline.get_mut("Cobalt").unwrap().offer_received = true;

    let config = Config::default();
    let m = metrics::success_metrics(&pipeline, &config.targets);
    assert_eq!(m.offers, 1);
    assert_eq!(m.offer_rate, 1.0);
    assert_eq!(m.pipeline_value, 165_000);
}

#[test]
fn test_email_performance() {
    let perf = metrics::email_performance(&sample_pipeline(), today());

    let senior = &perf.templates["senior_leadership"];
    assert_eq!((senior.sent, senior.responses, senior.rate), (2, 1, 0.5));
    let growth = &perf.templates["growth_focused"];
    assert_eq!(growth.rate, 1.0);

    assert_eq!(perf.best_template.as_deref(), Some("growth_focused"));
    assert_eq!(perf.total_campaigns, 2);
    assert_eq!(perf.pending_responses, 1);
    assert_eq!(perf.daily_activity.len(), 3);
    assert_eq!(perf.daily_activity[&date(2026, 10, 13)], 1);
}

#[test]
fn test_old_unanswered_email_is_not_pending() {
    let mut pipeline = Pipeline::default();
    let mut r = record("Acme", 30, Status::OutreachSent, date(2026, 9, 1));
    r.emails_sent = vec![email("Sam", "senior_leadership", date(2026, 9, 2), None)];
    pipeline.upsert(r);

    let perf = metrics::email_performance(&pipeline, today());
    assert_eq!(perf.pending_responses, 0);
}

#[test]
fn test_interview_tracking() {
    let tracking = metrics::interview_tracking(&sample_pipeline(), today());

    assert_eq!(tracking.total, 2);
    assert_eq!(tracking.by_stage["onsite"], 1);
    assert_eq!(tracking.by_outcome["advanced"], 1);
    assert_eq!(tracking.pending_feedback, 1);
    assert_eq!(tracking.success_rate, 0.5);

    assert_eq!(tracking.upcoming.len(), 1);
    let next = &tracking.upcoming[0];
    assert_eq!(next.company, "Cobalt");
    assert_eq!(next.days_until, 2);
    assert_eq!(next.interviewer.as_deref(), Some("Dana"));
}

#[test]
fn test_weekly_progress() {
    let config = Config::default();
    let weekly = metrics::weekly_progress(&sample_pipeline(), &config.targets, today());

    assert_eq!(weekly.week_start, date(2026, 10, 12));
    assert_eq!(weekly.week_end, date(2026, 10, 18));
    assert_eq!(weekly.researched, 1);
    assert_eq!(weekly.applications, 0);
    assert_eq!(weekly.emails_sent, 1);
    assert_eq!(weekly.responses, 1);
    assert_eq!(weekly.interviews, 1);
    assert_eq!(weekly.target, 5);
    assert_eq!(weekly.progress, 0.0);
    assert!(!weekly.on_track);
}

#[test]
fn test_weekly_on_track_at_eighty_percent() {
    let mut pipeline = Pipeline::default();
    for name in ["A", "B", "C", "D"] {
        let mut r = record(name, 30, Status::Applied, date(2026, 10, 12));
        r.applied_date = Some(date(2026, 10, 14));
        pipeline.upsert(r);
    }
    let config = Config::default();
    let weekly = metrics::weekly_progress(&pipeline, &config.targets, today());
    assert_eq!(weekly.applications, 4);
    assert_eq!(weekly.progress, 0.8);
    assert!(weekly.on_track);
}

#[test]
fn test_recommendations() {
    let pipeline = sample_pipeline();
    let dash = Dashboard::build(&pipeline, &Config::default(), today());

    let titles: Vec<&str> = dash.recommendations.iter().map(|r| r.title).collect();
    assert_eq!(
        titles,
        ["Increase Application Volume", "Optimize Email Templates"]
    );
    assert_eq!(
        dash.recommendations[0].description,
        "Behind target applications per week (0 vs 5)"
    );
    assert_eq!(
        dash.recommendations[1].description,
        "'growth_focused' template performing best"
    );
}

#[test]
fn test_low_response_rate_and_idle_research_recommended() {
    let mut pipeline = Pipeline::default();
    for name in ["A", "B", "C", "D"] {
        pipeline.upsert(record(name, 30, Status::Researched, date(2026, 10, 1)));
    }
    let mut sent = record("E", 30, Status::OutreachSent, date(2026, 10, 1));
    sent.emails_sent = (0..10)
        .map(|i| email(&format!("Contact {}", i), "peer_level", date(2026, 10, 2), None))
        .collect();
    pipeline.upsert(sent);

    let dash = Dashboard::build(&pipeline, &Config::default(), today());
    let first = &dash.recommendations[0];
    assert_eq!(first.priority, ActionPriority::High);
    assert_eq!(first.title, "Improve Email Response Rate");
    assert!(
        dash.recommendations
            .iter()
            .any(|r| r.title == "Convert Research to Applications")
    );
}

// =============================================================================
// Next actions
// =============================================================================

#[test]
fn test_next_actions_ordering() {
    let actions = actions::next_actions(&sample_pipeline(), 7, today());
    let summary: Vec<(ActionPriority, &str, &str)> = actions
        .iter()
        .map(|a| (a.priority, a.company.as_str(), a.action.as_str()))
        .collect();

    assert_eq!(
        summary,
        [
            (ActionPriority::High, "Acme Health", "Generate application package"),
            (ActionPriority::High, "Cobalt", "Prepare for onsite interview"),
            (ActionPriority::Medium, "Beta Labs", "Send follow-up email"),
            (ActionPriority::Low, "Acme Health", "Run AI research prompts"),
        ]
    );
    assert_eq!(actions[0].due_date, date(2026, 10, 15));
    assert_eq!(actions[1].details, "Interview with Dana in 2 days");
    assert_eq!(actions[2].due_date, date(2026, 10, 10));
    assert_eq!(actions[2].details, "Original email to Sam Lee sent 12 days ago");
}

#[test]
fn test_no_follow_up_before_window_or_after_sending() {
    let mut pipeline = Pipeline::default();
    let mut r = record("Acme", 30, Status::OutreachSent, date(2026, 10, 1));
    r.application_generated = true;
    let mut followed = email("Sam", "peer_level", date(2026, 10, 1), None);
    followed.follow_up_sent = true;
    r.emails_sent = vec![email("Ana", "peer_level", date(2026, 10, 10), None), followed];
    pipeline.upsert(r);

    assert!(actions::next_actions(&pipeline, 7, today()).is_empty());
}

#[test]
fn test_past_pending_interview_needs_follow_up() {
    let mut pipeline = Pipeline::default();
    let mut r = record("Acme", 30, Status::Interviewing, date(2026, 9, 1));
    r.interviews = vec![interview(
        date(2026, 10, 12),
        date(2026, 10, 5),
        "panel",
        None,
        "pending",
    )];
    pipeline.upsert(r);

    let actions = actions::next_actions(&pipeline, 7, today());
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action, "Follow up on interview outcome");
    assert_eq!(actions[0].details, "panel with the team");
    assert_eq!(actions[0].due_date, today());
}

#[test]
fn test_offered_company_has_no_actions() {
    let mut pipeline = Pipeline::default();
    let mut r = record("Acme", 30, Status::Interviewing, date(2026, 9, 1));
    r.emails_sent = vec![email("Sam", "peer_level", date(2026, 9, 2), None)];
    r.interviews = vec![interview(
        date(2026, 10, 12),
        date(2026, 10, 5),
        "panel",
        None,
        "pending",
    )];
    pipeline.upsert(r);
    pipeline.set_outcome("Acme", crate::pipeline::Outcome::Offered).unwrap();

    assert!(actions::next_actions(&pipeline, 7, today()).is_empty());
}

#[test]
fn test_ai_results_suppress_research_action() {
    let mut pipeline = Pipeline::default();
    let mut r = record("Acme", 30, Status::Researched, date(2026, 10, 14));
    r.application_generated = true;
    r.ai_research_results.insert(
        "company_dossier".to_string(),
        AiResearchResult {
            results: "notes".to_string(),
            updated_date: date(2026, 10, 14),
        },
    );
    pipeline.upsert(r);

    assert!(actions::next_actions(&pipeline, 7, today()).is_empty());
}

#[test]
fn test_next_actions_capped() {
    let mut pipeline = Pipeline::default();
    for i in 0..30 {
        pipeline.upsert(record(&format!("Company {}", i), 30, Status::Researched, today()));
    }
    assert_eq!(
        actions::next_actions(&pipeline, 7, today()).len(),
        actions::MAX_ACTIONS
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_sections() {
    let dash = Dashboard::build(&sample_pipeline(), &Config::default(), today());
    let md = dash.render();

    assert!(md.starts_with("# Job Search Pipeline Dashboard\n\n*Generated October 15, 2026*"));
    for heading in [
        "## Pipeline Summary",
        "## Company Status",
        "## Success Metrics",
        "## Email Performance",
        "## Interview Tracking",
        "## Next Actions",
        "## Weekly Progress",
        "## Recommendations",
    ] {
        assert!(md.contains(heading), "missing {}", heading);
    }
    assert!(md.contains("| Acme Health | researched | 36/40 | 2 | 0 | 0 | Generate application package |"));
    assert!(md.contains("| Beta Labs | outreach_sent | 30/40 | 2 | 2 (replied) | 0 | Monitor for responses |"));
    assert!(md.contains(
        "1. **[HIGH]** Acme Health: Generate application package (due 2026-10-15)"
    ));
    assert!(md.contains("- **Best Template:** growth_focused"));
    assert!(md.contains("*Week of October 12 to October 18, 2026*"));
    assert!(md.ends_with("*Refresh with `jobkit track`*\n"));
}

#[test]
fn test_render_empty_pipeline() {
    let dash = Dashboard::build(&Pipeline::default(), &Config::default(), today());
    let md = dash.render();
    assert!(md.contains("No companies in the pipeline yet."));
    assert!(md.contains("No emails sent yet."));
    assert!(md.contains("No interviews recorded."));
}

#[test]
fn test_render_truncates_company_table() {
    let mut pipeline = Pipeline::default();
    for i in 0..16 {
        pipeline.upsert(record(&format!("Company {}", i), 30, Status::Researched, today()));
    }
    let md = Dashboard::build(&pipeline, &Config::default(), today()).render();
    assert!(md.contains("*Showing top 15 of 16 companies*"));
}

#[test]
fn test_write_dashboard() {
    let (_temp_dir, ws) = create_test_workspace();
    let dash = Dashboard::build(&sample_pipeline(), &Config::default(), today());

    let path = dash.write(&ws).unwrap();
    assert_eq!(path, ws.dashboard_path());
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, dash.render());
}
