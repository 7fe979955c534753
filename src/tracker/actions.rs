//! Dated to-dos derived from pipeline state.

use crate::pipeline::{ActionPriority, NextAction, Pipeline, Status};
use chrono::{Duration, NaiveDate};

/// Actions kept after sorting.
pub const MAX_ACTIONS: usize = 20;

/// Interviews this close get a prep reminder.
pub const PREP_WINDOW_DAYS: i64 = 3;

/// Days after research by which the application should be generated.
const APPLY_WITHIN_DAYS: i64 = 2;

/// Most urgent first; equal priorities by due date.
pub fn next_actions(pipeline: &Pipeline, follow_up_days: i64, today: NaiveDate) -> Vec<NextAction> {
    let mut actions = Vec::new();

    for record in pipeline.companies.values() {
        if matches!(
            record.status,
            Status::Disqualified
                | Status::Offered
                | Status::Hired
                | Status::Rejected
                | Status::Withdrawn
        ) {
            continue;
        }

        if record.status == Status::Researched && !record.application_generated {
            actions.push(NextAction {
                priority: ActionPriority::High,
                action: "Generate application package".to_string(),
                company: record.name.clone(),
                due_date: record
                    .research_date
                    .map_or(today, |d| d + Duration::days(APPLY_WITHIN_DAYS)),
                details: "Research completed, ready for application generation".to_string(),
            });
        }

        for email in &record.emails_sent {
            let days_since = (today - email.send_date).num_days();
            if !email.response_received && !email.follow_up_sent && days_since >= follow_up_days {
                actions.push(NextAction {
                    priority: ActionPriority::Medium,
                    action: "Send follow-up email".to_string(),
                    company: record.name.clone(),
                    due_date: email.send_date + Duration::days(follow_up_days),
                    details: format!(
                        "Original email to {} sent {} days ago",
                        email.contact, days_since
                    ),
                });
            }
        }

        for interview in record.interviews.iter().filter(|i| i.outcome == "pending") {
            let days_until = (interview.date - today).num_days();
            let with = interview.interviewer.as_deref().unwrap_or("the team");
            if (0..=PREP_WINDOW_DAYS).contains(&days_until) {
                actions.push(NextAction {
                    priority: ActionPriority::High,
                    action: format!("Prepare for {} interview", interview.stage),
                    company: record.name.clone(),
                    due_date: interview.date,
                    details: format!("Interview with {} in {} days", with, days_until),
                });
            } else if days_until < 0 {
                actions.push(NextAction {
                    priority: ActionPriority::High,
                    action: "Follow up on interview outcome".to_string(),
                    company: record.name.clone(),
                    due_date: today,
                    details: format!("{} with {}", interview.stage, with),
                });
            }
        }

        if record.status == Status::Researched && record.ai_research_results.is_empty() {
            actions.push(NextAction {
                priority: ActionPriority::Low,
                action: "Run AI research prompts".to_string(),
                company: record.name.clone(),
                due_date: today,
                details: "No AI research results recorded yet".to_string(),
            });
        }
    }

    actions.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.due_date.cmp(&b.due_date))
            .then_with(|| a.company.cmp(&b.company))
    });
    actions.truncate(MAX_ACTIONS);
    actions
}
