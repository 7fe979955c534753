//! Conversion metrics, email and interview statistics, weekly progress, and
//! the recommendations derived from them.

use super::summary::{round, stage_rank};
use crate::config::Targets;
use crate::pipeline::{ActionPriority, CompanyRecord, Pipeline, Status};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Emails younger than this still count as awaiting a reply.
pub const PENDING_RESPONSE_DAYS: i64 = 14;

/// Interviews this many days ahead are listed as upcoming.
pub const UPCOMING_INTERVIEW_DAYS: i64 = 14;

/// Share of a target that still counts as on track.
pub const ON_TRACK_THRESHOLD: f64 = 0.8;

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round(numerator as f64 / denominator as f64, 3)
    }
}

fn versus(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        round(actual / target, 2)
    } else {
        0.0
    }
}

/// Applied by date, or past the applied stage by status.
pub(crate) fn has_applied(record: &CompanyRecord) -> bool {
    record.applied_date.is_some() || stage_rank(record.status) >= 2
}

// =============================================================================
// Success metrics
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessMetrics {
    pub emails_sent: usize,
    pub email_responses: usize,
    pub response_rate: f64,
    pub response_vs_target: f64,
    pub applications: usize,
    pub companies_responded: usize,
    pub companies_interviewed: usize,
    /// Companies interviewed over companies that replied.
    pub interview_conversion: f64,
    pub interview_vs_target: f64,
    pub application_to_interview: f64,
    pub offers: usize,
    pub offer_rate: f64,
    pub offer_vs_target: f64,
    pub pipeline_value: u64,
}

pub fn success_metrics(pipeline: &Pipeline, targets: &Targets) -> SuccessMetrics {
    let records = || pipeline.companies.values();

    let emails_sent = records().map(|r| r.emails_sent.len()).sum();
    let email_responses = records()
        .flat_map(|r| &r.emails_sent)
        .filter(|e| e.response_received)
        .count();
    let applications = records().filter(|r| has_applied(r)).count();
    let companies_responded = records().filter(|r| r.has_response()).count();
    let companies_interviewed = records().filter(|r| !r.interviews.is_empty()).count();
    let offers = records().filter(|r| r.offer_received).count();

    let response_rate = ratio(email_responses, emails_sent);
    let interview_conversion = ratio(companies_interviewed, companies_responded);
    let offer_rate = ratio(offers, companies_interviewed);

    SuccessMetrics {
        emails_sent,
        email_responses,
        response_rate,
        response_vs_target: versus(response_rate, targets.email_response_rate),
        applications,
        companies_responded,
        companies_interviewed,
        interview_conversion,
        interview_vs_target: versus(interview_conversion, targets.interview_conversion),
        application_to_interview: ratio(companies_interviewed, applications),
        offers,
        offer_rate,
        offer_vs_target: versus(offer_rate, targets.offer_rate),
        pipeline_value: offers as u64 * targets.average_offer_value,
    }
}

// =============================================================================
// Email performance
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStats {
    pub sent: usize,
    pub responses: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailPerformance {
    pub templates: BTreeMap<String, TemplateStats>,
    pub best_template: Option<String>,
    pub daily_activity: BTreeMap<NaiveDate, usize>,
    /// Companies that received at least one email.
    pub total_campaigns: usize,
    pub pending_responses: usize,
}

pub fn email_performance(pipeline: &Pipeline, today: NaiveDate) -> EmailPerformance {
    let mut templates: BTreeMap<String, TemplateStats> = BTreeMap::new();
    let mut daily_activity = BTreeMap::new();
    let mut pending_responses = 0;

    for email in pipeline.companies.values().flat_map(|r| &r.emails_sent) {
        let stats = templates.entry(email.template.clone()).or_default();
        stats.sent += 1;
        if email.response_received {
            stats.responses += 1;
        } else if (0..=PENDING_RESPONSE_DAYS).contains(&(today - email.send_date).num_days()) {
            pending_responses += 1;
        }
        *daily_activity.entry(email.send_date).or_insert(0) += 1;
    }

    let mut best: Option<(&String, f64)> = None;
    for (name, stats) in templates.iter_mut() {
        stats.rate = ratio(stats.responses, stats.sent);
        if best.is_none_or(|(_, rate)| stats.rate > rate) {
            best = Some((name, stats.rate));
        }
    }
    let best_template = best.map(|(name, _)| name.clone());

    EmailPerformance {
        best_template,
        templates,
        daily_activity,
        total_campaigns: pipeline
            .companies
            .values()
            .filter(|r| !r.emails_sent.is_empty())
            .count(),
        pending_responses,
    }
}

// =============================================================================
// Interview tracking
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingInterview {
    pub company: String,
    pub date: NaiveDate,
    pub stage: String,
    pub interviewer: Option<String>,
    pub days_until: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewTracking {
    pub total: usize,
    pub by_stage: BTreeMap<String, usize>,
    pub by_outcome: BTreeMap<String, usize>,
    pub upcoming: Vec<UpcomingInterview>,
    pub pending_feedback: usize,
    /// Advanced interviews over all interviews.
    pub success_rate: f64,
}

pub fn interview_tracking(pipeline: &Pipeline, today: NaiveDate) -> InterviewTracking {
    let mut by_stage = BTreeMap::new();
    let mut by_outcome = BTreeMap::new();
    let mut upcoming = Vec::new();
    let mut total = 0;

    for record in pipeline.companies.values() {
        for interview in &record.interviews {
            total += 1;
            *by_stage.entry(interview.stage.clone()).or_insert(0) += 1;
            *by_outcome.entry(interview.outcome.clone()).or_insert(0) += 1;

            let days_until = (interview.date - today).num_days();
            if (0..=UPCOMING_INTERVIEW_DAYS).contains(&days_until) {
                upcoming.push(UpcomingInterview {
                    company: record.name.clone(),
                    date: interview.date,
                    stage: interview.stage.clone(),
                    interviewer: interview.interviewer.clone(),
                    days_until,
                });
            }
        }
    }
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.company.cmp(&b.company)));

    let advanced = by_outcome.get("advanced").copied().unwrap_or(0);
    InterviewTracking {
        total,
        pending_feedback: by_outcome.get("pending").copied().unwrap_or(0),
        success_rate: ratio(advanced, total),
        by_stage,
        by_outcome,
        upcoming,
    }
}

// =============================================================================
// Weekly progress
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyProgress {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub researched: usize,
    pub applications: usize,
    pub emails_sent: usize,
    pub responses: usize,
    pub interviews: usize,
    pub target: u32,
    /// Applications over the weekly target.
    pub progress: f64,
    pub on_track: bool,
}

/// Activity in the Monday-to-Sunday week containing `today`.
pub fn weekly_progress(pipeline: &Pipeline, targets: &Targets, today: NaiveDate) -> WeeklyProgress {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Duration::days(6);
    let in_week = |date: Option<NaiveDate>| date.is_some_and(|d| d >= week_start && d <= week_end);

    let records = || pipeline.companies.values();
    let researched = records().filter(|r| in_week(r.research_date)).count();
    let applications = records().filter(|r| in_week(r.applied_date)).count();
    let emails = || records().flat_map(|r| &r.emails_sent);
    let emails_sent = emails().filter(|e| in_week(Some(e.send_date))).count();
    let responses = emails()
        .filter(|e| e.response_received && in_week(e.response_date))
        .count();
    let interviews = records()
        .flat_map(|r| &r.interviews)
        .filter(|i| in_week(Some(i.scheduled_date.unwrap_or(i.date))))
        .count();

    let target = targets.weekly_applications;
    let progress = if target > 0 {
        round(applications as f64 / f64::from(target), 2)
    } else {
        1.0
    };

    WeeklyProgress {
        week_start,
        week_end,
        researched,
        applications,
        emails_sent,
        responses,
        interviews,
        target,
        progress,
        on_track: progress >= ON_TRACK_THRESHOLD,
    }
}

// =============================================================================
// Recommendations
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub priority: ActionPriority,
    pub category: &'static str,
    pub title: &'static str,
    pub description: String,
    pub actions: Vec<&'static str>,
}

pub fn recommendations(
    pipeline: &Pipeline,
    targets: &Targets,
    metrics: &SuccessMetrics,
    email: &EmailPerformance,
    weekly: &WeeklyProgress,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.emails_sent > 0
        && metrics.response_rate < targets.email_response_rate * ON_TRACK_THRESHOLD
    {
        recs.push(Recommendation {
            priority: ActionPriority::High,
            category: "Email Outreach",
            title: "Improve Email Response Rate",
            description: format!(
                "Current response rate ({:.1}%) is below target ({:.1}%)",
                metrics.response_rate * 100.0,
                targets.email_response_rate * 100.0
            ),
            actions: vec![
                "Personalize opening lines with specific company research",
                "Test shorter subject lines and emails",
                "Target more senior contacts who own hiring decisions",
                "Follow up once after a week without a reply",
            ],
        });
    }

    if !weekly.on_track {
        recs.push(Recommendation {
            priority: ActionPriority::Medium,
            category: "Application Volume",
            title: "Increase Application Volume",
            description: format!(
                "Behind target applications per week ({} vs {})",
                weekly.applications, weekly.target
            ),
            actions: vec![
                "Block dedicated time each day for applications",
                "Generate packages for researched companies first",
                "Batch research for similar companies",
            ],
        });
    }

    let researched = pipeline
        .companies
        .values()
        .filter(|r| r.status == Status::Researched)
        .count();
    if researched > 3 {
        recs.push(Recommendation {
            priority: ActionPriority::Medium,
            category: "Pipeline Flow",
            title: "Convert Research to Applications",
            description: format!(
                "{} companies researched but not yet applied to",
                researched
            ),
            actions: vec![
                "Run `jobkit apply` for the highest priority researched companies",
                "Drop researched companies that no longer fit",
            ],
        });
    }

    if let Some(best) = &email.best_template {
        recs.push(Recommendation {
            priority: ActionPriority::Low,
            category: "Template Optimization",
            title: "Optimize Email Templates",
            description: format!("'{}' template performing best", best),
            actions: vec![
                "Use the best performing template for similar contacts",
                "Rework the weakest template's opening and ask",
            ],
        });
    }

    recs
}
