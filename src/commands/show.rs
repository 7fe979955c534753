//! Implementation of the `jobkit show` command.
//!
//! Displays one company's pipeline record and its recent activity.

use super::company_arg;
use crate::activity::{Activity, read_company_activity};
use crate::cli::ShowArgs;
use crate::context::JobContext;
use crate::error::{JobkitError, Result};
use crate::pipeline::{CompanyRecord, completed_finding};
use crate::tracker::summary::next_step;
use crate::workspace::Workspace;
use std::fmt::Write as _;

/// Activity entries shown, newest last.
const RECENT_ACTIVITY: usize = 10;

const RULE: &str =
    "================================================================================";

pub fn cmd_show(ws: Workspace, args: ShowArgs) -> Result<()> {
    let ctx = JobContext::load(ws)?;
    print!("{}", run_show(&ctx, &args)?);
    Ok(())
}

pub(crate) fn run_show(ctx: &JobContext, args: &ShowArgs) -> Result<String> {
    let company = company_arg(&args.company)?;
    let record = ctx.pipeline.get(company).ok_or_else(|| {
        JobkitError::UserError(format!(
            "company '{}' is not in the pipeline\n\n\
             Tracked companies: {}\n\n\
             Run `jobkit research \"{}\"` to add it.",
            company,
            tracked_names(ctx),
            company
        ))
    })?;

    let activity = read_company_activity(&ctx.ws, company)?;
    Ok(render_record(record, &activity))
}

fn tracked_names(ctx: &JobContext) -> String {
    if ctx.pipeline.companies.is_empty() {
        return "(none)".to_string();
    }
    ctx.pipeline
        .companies
        .values()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_record(record: &CompanyRecord, activity: &[Activity]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{} [{}]", record.name, record.status);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    if let Some(role) = &record.role_title {
        let _ = writeln!(out, "Role:       {}", role);
    }
    let _ = writeln!(out, "Priority:   {}/40", record.priority_score);
    if let Some(breakdown) = &record.priority_breakdown {
        let parts: Vec<String> = breakdown
            .entries()
            .iter()
            .map(|(name, value)| format!("{} {}", name, value))
            .collect();
        let _ = writeln!(out, "            {}", parts.join(", "));
    }
    if let Some(date) = record.research_date {
        let _ = writeln!(out, "Researched: {}", date.format("%Y-%m-%d"));
    }
    if let Some(date) = record.applied_date {
        let _ = writeln!(out, "Applied:    {}", date.format("%Y-%m-%d"));
    }
    let _ = writeln!(out, "Next step:  {}", next_step(record.status));

    if !record.emails_sent.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Emails:");
        for email in &record.emails_sent {
            let reply = match email.response_date {
                Some(date) => format!(", replied {}", date.format("%Y-%m-%d")),
                None if email.response_received => ", replied".to_string(),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                "  - {} ({}) {} via {}{}",
                email.contact,
                email.contact_title,
                email.send_date.format("%Y-%m-%d"),
                email.template,
                reply
            );
        }
    }

    if !record.interviews.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Interviews:");
        for interview in &record.interviews {
            let with = interview
                .interviewer
                .as_deref()
                .map(|i| format!(" with {}", i))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  - {} {}{} [{}]",
                interview.date.format("%Y-%m-%d"),
                interview.stage,
                with,
                interview.outcome
            );
        }
    }

    if let Some(research) = &record.research {
        let done: Vec<&str> = [
            ("dossier", &research.company_dossier),
            ("industry", &research.industry_analysis),
            ("competitors", &research.competitive_landscape),
            ("news", &research.recent_news),
            ("challenges", &research.key_challenges),
            ("ai", &research.ai_initiatives),
        ]
        .into_iter()
        .filter(|(_, value)| completed_finding(value).is_some())
        .map(|(name, _)| name)
        .collect();
        let _ = writeln!(out);
        if done.is_empty() {
            let _ = writeln!(out, "Research:   placeholders only");
        } else {
            let _ = writeln!(out, "Research:   {}", done.join(", "));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recent activity:");
    if activity.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    let skip = activity.len().saturating_sub(RECENT_ACTIVITY);
    for entry in &activity[skip..] {
        let _ = writeln!(
            out,
            "  {}  {:<16} {}",
            entry.ts.format("%Y-%m-%d %H:%M"),
            entry.action,
            entry.actor
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityAction;
    use crate::commands::test_helpers::{date, test_context};
    use crate::pipeline::{EmailRecord, Status};

    fn args(company: &str) -> ShowArgs {
        ShowArgs {
            company: company.to_string(),
        }
    }

    #[test]
    fn test_show_record_and_activity() {
        let (_temp_dir, mut ctx) = test_context();
        let mut record = CompanyRecord::new("Acme Health", Some("Growth PM"), date(2026, 10, 1));
        record.status = Status::OutreachSent;
        record.priority_score = 34;
        record.emails_sent.push(EmailRecord {
            contact: "Jordan Lee".to_string(),
            contact_title: "VP Product".to_string(),
            template: "growth_focused".to_string(),
            subject: "Hello".to_string(),
            send_date: date(2026, 10, 3),
            response_received: true,
            response_date: Some(date(2026, 10, 6)),
            follow_up_sent: false,
        });
        ctx.pipeline.upsert(record);
        for _ in 0..12 {
            ctx.log(&Activity::new(ActivityAction::Email).with_company("Acme Health"))
                .unwrap();
        }

        let out = run_show(&ctx, &args("acme health")).unwrap();
        assert!(out.contains("Acme Health [outreach_sent]"));
        assert!(out.contains("Priority:   34/40"));
        assert!(out.contains("Jordan Lee (VP Product) 2026-10-03 via growth_focused, replied 2026-10-06"));
        assert!(out.contains("Next step:  Monitor for responses"));
        assert_eq!(out.matches("  email ").count(), RECENT_ACTIVITY);
    }

    #[test]
    fn test_show_unknown_company() {
        let (_temp_dir, ctx) = test_context();
        let err = run_show(&ctx, &args("Nowhere")).unwrap_err();
        assert!(matches!(err, JobkitError::UserError(_)));
        assert!(err.to_string().contains("(none)"));
    }
}
