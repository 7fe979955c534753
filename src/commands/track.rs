//! Implementation of the `jobkit track` command.

use super::{print_files, today};
use crate::context::JobContext;
use crate::error::Result;
use crate::tracker::Dashboard;
use crate::workspace::Workspace;
use chrono::NaiveDate;

/// Actions printed to the terminal; the dashboard lists more.
const TOP_ACTIONS: usize = 5;

pub fn cmd_track(ws: Workspace) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    run_track(&mut ctx, today()).map(|_| ())
}

/// Refresh stats, write the dashboard, and save the next-action snapshot.
pub(crate) fn run_track(ctx: &mut JobContext, today: NaiveDate) -> Result<Dashboard> {
    ctx.pipeline.refresh_stats();
    let dashboard = Dashboard::build(&ctx.pipeline, &ctx.config, today);
    let path = dashboard.write(&ctx.ws)?;

    ctx.pipeline.next_actions = dashboard.next_actions.clone();
    ctx.save_pipeline()?;

    let summary = &dashboard.summary;
    println!("Pipeline: {} companies, {} active", summary.total_companies, summary.active);
    println!(
        "Email response rate: {:.1}% (target {:.1}%)",
        dashboard.metrics.response_rate * 100.0,
        ctx.config.targets.email_response_rate * 100.0
    );
    println!(
        "This week: {} of {} applications",
        dashboard.weekly.applications, dashboard.weekly.target
    );

    if !dashboard.next_actions.is_empty() {
        println!();
        println!("Next actions:");
        for action in dashboard.next_actions.iter().take(TOP_ACTIONS) {
            println!(
                "  [{}] {}: {} (due {})",
                action.priority.as_str().to_uppercase(),
                action.company,
                action.action,
                action.due_date.format("%Y-%m-%d")
            );
        }
    }
    println!();
    println!("Dashboard:");
    print_files(&ctx.ws, &[path]);

    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::{date, test_context};
    use crate::pipeline::{CompanyRecord, Pipeline, Status};

    #[test]
    fn test_track_on_empty_pipeline() {
        let (_temp_dir, mut ctx) = test_context();
        let dashboard = run_track(&mut ctx, date(2026, 10, 15)).unwrap();
        assert_eq!(dashboard.summary.total_companies, 0);

        let md = std::fs::read_to_string(ctx.ws.dashboard_path()).unwrap();
        assert!(md.contains("No companies in the pipeline yet"));
    }

    #[test]
    fn test_track_saves_next_actions() {
        let (_temp_dir, mut ctx) = test_context();
        let mut record = CompanyRecord::new("Acme Health", None, date(2026, 10, 10));
        record.status = Status::Researched;
        record.priority_score = 34;
        ctx.pipeline.upsert(record);

        let dashboard = run_track(&mut ctx, date(2026, 10, 15)).unwrap();
        assert!(!dashboard.next_actions.is_empty());

        let saved = Pipeline::load(ctx.ws.pipeline_path()).unwrap();
        assert_eq!(saved.next_actions, dashboard.next_actions);
        assert_eq!(saved.next_actions[0].action, "Generate application package");
    }
}
