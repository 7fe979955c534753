//! Pipeline totals and the per-company status table.

use crate::pipeline::{CompanyRecord, Pipeline, PriorityTier, Status};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Stages counted toward completion, in order.
pub const STAGES: [&str; 5] = ["researched", "applied", "interviewing", "offered", "hired"];

/// How far along the funnel a status is, 0 when it is off the funnel.
pub fn stage_rank(status: Status) -> usize {
    match status {
        Status::Researched => 1,
        Status::Applied | Status::OutreachSent | Status::Responded => 2,
        Status::Interviewing => 3,
        Status::Offered => 4,
        Status::Hired => 5,
        Status::Researching | Status::Disqualified | Status::Rejected | Status::Withdrawn => 0,
    }
}

/// What to do next for a company in the given state.
pub fn next_step(status: Status) -> &'static str {
    match status {
        Status::Researching => "Complete company research",
        Status::Disqualified => "Below quality gate - skip",
        Status::Researched => "Generate application package",
        Status::Applied => "Send cold email campaign",
        Status::OutreachSent => "Monitor for responses",
        Status::Responded => "Schedule interview",
        Status::Interviewing => "Follow up on interview outcome",
        Status::Offered => "Negotiate and decide",
        Status::Hired => "Complete - Success!",
        Status::Rejected => "Archive and learn from feedback",
        Status::Withdrawn => "Archive",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub total_companies: usize,
    pub status_counts: BTreeMap<Status, usize>,
    pub priority_distribution: BTreeMap<PriorityTier, usize>,
    /// Share of companies that reached each of [`STAGES`].
    pub stage_rates: [(&'static str, f64); 5],
    /// Stages reached over stages possible, across all companies.
    pub completion_rate: f64,
    pub active: usize,
}

pub fn summarize(pipeline: &Pipeline) -> PipelineSummary {
    let total = pipeline.companies.len();
    let mut status_counts = BTreeMap::new();
    let mut priority_distribution = BTreeMap::new();
    let mut reached = [0usize; 5];
    let mut active = 0;

    for record in pipeline.companies.values() {
        *status_counts.entry(record.status).or_insert(0) += 1;
        *priority_distribution
            .entry(PriorityTier::from_score(record.priority_score))
            .or_insert(0) += 1;
        for slot in reached.iter_mut().take(stage_rank(record.status)) {
            *slot += 1;
        }
        if record.status.is_active() {
            active += 1;
        }
    }

    let share = |count: usize| {
        if total == 0 {
            0.0
        } else {
            round(count as f64 / total as f64, 3)
        }
    };
    let completion_rate = if total == 0 {
        0.0
    } else {
        round(
            reached.iter().sum::<usize>() as f64 / (total * STAGES.len()) as f64,
            3,
        )
    };

    PipelineSummary {
        total_companies: total,
        status_counts,
        priority_distribution,
        stage_rates: std::array::from_fn(|i| (STAGES[i], share(reached[i]))),
        completion_rate,
        active,
    }
}

/// One row of the company status table.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyStatus {
    pub name: String,
    pub status: Status,
    pub priority_score: u32,
    pub research_date: Option<NaiveDate>,
    pub last_activity: Option<NaiveDate>,
    pub days_since_activity: Option<i64>,
    pub emails_sent: usize,
    pub interviews: usize,
    pub response_received: bool,
    pub next_action: &'static str,
}

impl CompanyStatus {
    fn from_record(record: &CompanyRecord, today: NaiveDate) -> Self {
        let last_activity = record.last_activity();
        Self {
            name: record.name.clone(),
            status: record.status,
            priority_score: record.priority_score,
            research_date: record.research_date,
            last_activity,
            days_since_activity: last_activity.map(|d| (today - d).num_days().max(0)),
            emails_sent: record.emails_sent.len(),
            interviews: record.interviews.len(),
            response_received: record.has_response(),
            next_action: next_step(record.status),
        }
    }
}

/// All companies, highest priority first, then most recently researched.
pub fn company_statuses(pipeline: &Pipeline, today: NaiveDate) -> Vec<CompanyStatus> {
    let mut rows: Vec<CompanyStatus> = pipeline
        .companies
        .values()
        .map(|record| CompanyStatus::from_record(record, today))
        .collect();
    rows.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| b.research_date.cmp(&a.research_date))
    });
    rows
}

/// Round to a fixed number of decimal places.
pub(crate) fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
