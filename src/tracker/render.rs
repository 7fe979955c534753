use super::Dashboard;
use crate::pipeline::{ActionPriority, PriorityTier, Status};
use std::fmt::Write as _;

/// Rows shown in the company table.
const COMPANY_ROWS: usize = 15;

/// Actions shown on the dashboard; the full list is kept in the pipeline.
const DASHBOARD_ACTIONS: usize = 10;

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn priority_label(priority: ActionPriority) -> &'static str {
    match priority {
        ActionPriority::High => "HIGH",
        ActionPriority::Medium => "MEDIUM",
        ActionPriority::Low => "LOW",
    }
}

pub(super) fn render(dash: &Dashboard) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Job Search Pipeline Dashboard");
    let _ = writeln!(md);
    let _ = writeln!(md, "*Generated {}*", dash.generated.format("%B %d, %Y"));
    let _ = writeln!(md);

    render_summary(&mut md, dash);
    render_companies(&mut md, dash);
    render_metrics(&mut md, dash);
    render_email(&mut md, dash);
    render_interviews(&mut md, dash);
    render_actions(&mut md, dash);
    render_weekly(&mut md, dash);
    render_recommendations(&mut md, dash);

    let _ = writeln!(md, "---");
    let _ = writeln!(md);
    let _ = writeln!(md, "*Refresh with `jobkit track`*");
    md
}

fn render_summary(md: &mut String, dash: &Dashboard) {
    let summary = &dash.summary;
    let _ = writeln!(md, "## Pipeline Summary");
    let _ = writeln!(md);
    let _ = writeln!(md, "- **Total Companies:** {}", summary.total_companies);
    let _ = writeln!(md, "- **Active Opportunities:** {}", summary.active);
    let _ = writeln!(
        md,
        "- **Pipeline Completion:** {}",
        percent(summary.completion_rate)
    );
    let _ = writeln!(md);

    let _ = writeln!(md, "### Status Breakdown");
    let _ = writeln!(md);
    if summary.status_counts.is_empty() {
        let _ = writeln!(md, "No companies in the pipeline yet. Start with `jobkit research`.");
    }
    for status in Status::ALL {
        if let Some(count) = summary.status_counts.get(&status) {
            let _ = writeln!(md, "- {}: {}", status, count);
        }
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "### Priority Distribution");
    let _ = writeln!(md);
    for (tier, label) in [
        (PriorityTier::High, "High (35-40)"),
        (PriorityTier::Medium, "Medium (28-34)"),
        (PriorityTier::Low, "Low (below 28)"),
    ] {
        let count = summary.priority_distribution.get(&tier).copied().unwrap_or(0);
        let _ = writeln!(md, "- {}: {}", label, count);
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "### Stage Completion");
    let _ = writeln!(md);
    for (stage, rate) in summary.stage_rates {
        let _ = writeln!(md, "- Reached {}: {}", stage, percent(rate));
    }
    let _ = writeln!(md);
}

fn render_companies(md: &mut String, dash: &Dashboard) {
    let _ = writeln!(md, "## Company Status");
    let _ = writeln!(md);
    if dash.companies.is_empty() {
        let _ = writeln!(md, "No companies tracked.");
        let _ = writeln!(md);
        return;
    }

    let _ = writeln!(
        md,
        "| Company | Status | Priority | Days Since Activity | Emails | Interviews | Next Action |"
    );
    let _ = writeln!(md, "|---|---|---|---|---|---|---|");
    for row in dash.companies.iter().take(COMPANY_ROWS) {
        let days = row
            .days_since_activity
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let responded = if row.response_received { " (replied)" } else { "" };
        let _ = writeln!(
            md,
            "| {} | {} | {}/40 | {} | {}{} | {} | {} |",
            row.name,
            row.status,
            row.priority_score,
            days,
            row.emails_sent,
            responded,
            row.interviews,
            row.next_action
        );
    }
    if dash.companies.len() > COMPANY_ROWS {
        let _ = writeln!(md);
        let _ = writeln!(
            md,
            "*Showing top {} of {} companies*",
            COMPANY_ROWS,
            dash.companies.len()
        );
    }
    let _ = writeln!(md);
}

fn render_metrics(md: &mut String, dash: &Dashboard) {
    let m = &dash.metrics;
    let _ = writeln!(md, "## Success Metrics");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Metric | Actual | vs Target |");
    let _ = writeln!(md, "|---|---|---|");
    let _ = writeln!(
        md,
        "| Email Response Rate | {} ({}/{}) | {:.2}x |",
        percent(m.response_rate),
        m.email_responses,
        m.emails_sent,
        m.response_vs_target
    );
    let _ = writeln!(
        md,
        "| Interview Conversion | {} ({}/{}) | {:.2}x |",
        percent(m.interview_conversion),
        m.companies_interviewed,
        m.companies_responded,
        m.interview_vs_target
    );
    let _ = writeln!(
        md,
        "| Application to Interview | {} ({}/{}) | - |",
        percent(m.application_to_interview),
        m.companies_interviewed,
        m.applications
    );
    let _ = writeln!(
        md,
        "| Offer Rate | {} ({}/{}) | {:.2}x |",
        percent(m.offer_rate),
        m.offers,
        m.companies_interviewed,
        m.offer_vs_target
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "**Pipeline Value:** ${}", m.pipeline_value);
    let _ = writeln!(md);
}

fn render_email(md: &mut String, dash: &Dashboard) {
    let email = &dash.email;
    let _ = writeln!(md, "## Email Performance");
    let _ = writeln!(md);
    if email.templates.is_empty() {
        let _ = writeln!(md, "No emails sent yet. Draft a campaign with `jobkit email`.");
        let _ = writeln!(md);
        return;
    }

    let _ = writeln!(md, "- **Campaigns:** {}", email.total_campaigns);
    let _ = writeln!(md, "- **Awaiting Response:** {}", email.pending_responses);
    if let Some(best) = &email.best_template {
        let _ = writeln!(md, "- **Best Template:** {}", best);
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "| Template | Sent | Responses | Rate |");
    let _ = writeln!(md, "|---|---|---|---|");
    for (name, stats) in &email.templates {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            name,
            stats.sent,
            stats.responses,
            percent(stats.rate)
        );
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "### Daily Activity");
    let _ = writeln!(md);
    for (day, count) in &email.daily_activity {
        let _ = writeln!(md, "- {}: {} sent", day, count);
    }
    let _ = writeln!(md);
}

fn render_interviews(md: &mut String, dash: &Dashboard) {
    let tracking = &dash.interviews;
    let _ = writeln!(md, "## Interview Tracking");
    let _ = writeln!(md);
    if tracking.total == 0 {
        let _ = writeln!(md, "No interviews recorded.");
        let _ = writeln!(md);
        return;
    }

    let _ = writeln!(md, "- **Total Interviews:** {}", tracking.total);
    let _ = writeln!(md, "- **Pending Feedback:** {}", tracking.pending_feedback);
    let _ = writeln!(md, "- **Success Rate:** {}", percent(tracking.success_rate));
    let _ = writeln!(md);

    for (title, counts) in [("By Stage", &tracking.by_stage), ("By Outcome", &tracking.by_outcome)] {
        let _ = writeln!(md, "### {}", title);
        let _ = writeln!(md);
        for (key, count) in counts {
            let _ = writeln!(md, "- {}: {}", key, count);
        }
        let _ = writeln!(md);
    }

    if !tracking.upcoming.is_empty() {
        let _ = writeln!(md, "### Upcoming");
        let _ = writeln!(md);
        for interview in &tracking.upcoming {
            let with = interview
                .interviewer
                .as_deref()
                .map(|name| format!(" with {}", name))
                .unwrap_or_default();
            let _ = writeln!(
                md,
                "- {}: {} {}{} (in {} days)",
                interview.date, interview.company, interview.stage, with, interview.days_until
            );
        }
        let _ = writeln!(md);
    }
}

fn render_actions(md: &mut String, dash: &Dashboard) {
    let _ = writeln!(md, "## Next Actions");
    let _ = writeln!(md);
    if dash.next_actions.is_empty() {
        let _ = writeln!(md, "Nothing due.");
        let _ = writeln!(md);
        return;
    }
    for (i, action) in dash.next_actions.iter().take(DASHBOARD_ACTIONS).enumerate() {
        let _ = writeln!(
            md,
            "{}. **[{}]** {}: {} (due {})",
            i + 1,
            priority_label(action.priority),
            action.company,
            action.action,
            action.due_date
        );
        let _ = writeln!(md, "   - {}", action.details);
    }
    let _ = writeln!(md);
}

fn render_weekly(md: &mut String, dash: &Dashboard) {
    let w = &dash.weekly;
    let _ = writeln!(md, "## Weekly Progress");
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "*Week of {} to {}*",
        w.week_start.format("%B %d"),
        w.week_end.format("%B %d, %Y")
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "- Companies Researched: {}", w.researched);
    let _ = writeln!(md, "- Applications: {} / {}", w.applications, w.target);
    let _ = writeln!(md, "- Emails Sent: {}", w.emails_sent);
    let _ = writeln!(md, "- Responses: {}", w.responses);
    let _ = writeln!(md, "- Interviews: {}", w.interviews);
    let _ = writeln!(
        md,
        "- **Progress:** {} ({})",
        percent(w.progress),
        if w.on_track { "on track" } else { "behind" }
    );
    let _ = writeln!(md);
}

fn render_recommendations(md: &mut String, dash: &Dashboard) {
    let _ = writeln!(md, "## Recommendations");
    let _ = writeln!(md);
    if dash.recommendations.is_empty() {
        let _ = writeln!(md, "Pipeline is on track. Keep going.");
        let _ = writeln!(md);
        return;
    }
    for rec in &dash.recommendations {
        let _ = writeln!(
            md,
            "### [{}] {} ({})",
            priority_label(rec.priority),
            rec.title,
            rec.category
        );
        let _ = writeln!(md);
        let _ = writeln!(md, "{}", rec.description);
        let _ = writeln!(md);
        for action in &rec.actions {
            let _ = writeln!(md, "- {}", action);
        }
        let _ = writeln!(md);
    }
}
