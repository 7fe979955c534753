//! Implementation of the `jobkit record` subcommands.
//!
//! These record things that happen outside jobkit (replies, follow-ups,
//! interviews, outcomes, pasted research) so the dashboard reflects them.

use super::{company_arg, read_input_file, today};
use crate::activity::{Activity, ActivityAction};
use crate::cli::{
    RecordAction, RecordCommand, RecordFollowUpArgs, RecordInterviewArgs,
    RecordInterviewResultArgs, RecordOutcomeArgs, RecordResearchArgs, RecordResponseArgs,
};
use crate::context::JobContext;
use crate::error::{JobkitError, Result};
use crate::pipeline::{InterviewRecord, InterviewResult};
use crate::research::prompts::ResearchComponent;
use crate::workspace::Workspace;
use chrono::NaiveDate;
use serde_json::json;

/// Components accepted in addition to the research prompt keys.
const EXTRA_COMPONENTS: [&str; 1] = ["ai_initiatives"];

pub fn dispatch_record(ws: Workspace, record: RecordCommand) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    let date = today();
    match record.action {
        RecordAction::Response(args) => record_response(&mut ctx, &args, date),
        RecordAction::FollowUp(args) => record_follow_up(&mut ctx, &args),
        RecordAction::Interview(args) => record_interview(&mut ctx, &args, date),
        RecordAction::InterviewResult(args) => record_interview_result(&mut ctx, &args),
        RecordAction::Outcome(args) => record_outcome(&mut ctx, &args),
        RecordAction::Research(args) => record_research(&mut ctx, &args, date),
    }
}

pub(crate) fn record_response(
    ctx: &mut JobContext,
    args: &RecordResponseArgs,
    date: NaiveDate,
) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let contact = ctx
        .pipeline
        .record_response(&company, args.contact.as_deref(), date)?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::Response)
            .with_company(&company)
            .with_details(json!({ "contact": contact })),
    )?;

    println!("Recorded a reply from {} at {}.", contact, company);
    println!("Next: schedule the conversation, then `jobkit record interview`.");
    Ok(())
}

pub(crate) fn record_follow_up(ctx: &mut JobContext, args: &RecordFollowUpArgs) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let contacts = ctx
        .pipeline
        .record_follow_up(&company, args.contact.as_deref())?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::FollowUp)
            .with_company(&company)
            .with_details(json!({ "contacts": contacts })),
    )?;

    println!("Recorded follow-up to {} at {}.", contacts.join(", "), company);
    Ok(())
}

pub(crate) fn record_interview(
    ctx: &mut JobContext,
    args: &RecordInterviewArgs,
    date: NaiveDate,
) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let stage = args.stage.trim();
    if stage.is_empty() {
        return Err(JobkitError::UserError(
            "interview stage cannot be empty".to_string(),
        ));
    }

    let interview = InterviewRecord {
        date: args.date,
        scheduled_date: Some(date),
        stage: stage.to_string(),
        interviewer: args.interviewer.as_deref().map(str::trim).map(str::to_string),
        outcome: "pending".to_string(),
        feedback_received: false,
        notes: None,
    };
    ctx.pipeline.add_interview(&company, interview)?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::Interview)
            .with_company(&company)
            .with_details(json!({
                "date": args.date,
                "stage": stage,
                "interviewer": args.interviewer,
            })),
    )?;

    println!(
        "Recorded {} interview with {} on {}.",
        stage,
        company,
        args.date.format("%Y-%m-%d")
    );
    println!("Next: `jobkit prep \"{}\"` to build a preparation guide.", company);
    Ok(())
}

pub(crate) fn record_interview_result(
    ctx: &mut JobContext,
    args: &RecordInterviewResultArgs,
) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let stage = ctx
        .pipeline
        .record_interview_result(&company, args.stage.as_deref(), args.result)?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::InterviewResult)
            .with_company(&company)
            .with_details(json!({ "stage": stage, "result": args.result.as_str() })),
    )?;

    println!("{} interview at {} marked as {}.", stage, company, args.result);
    if args.result == InterviewResult::Rejected {
        println!("If the process is over: `jobkit record outcome \"{}\" rejected`.", company);
    }
    Ok(())
}

pub(crate) fn record_outcome(ctx: &mut JobContext, args: &RecordOutcomeArgs) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    ctx.pipeline.set_outcome(&company, args.outcome)?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::Outcome)
            .with_company(&company)
            .with_details(json!({ "outcome": args.outcome.to_string() })),
    )?;

    println!("{} marked as {}.", company, args.outcome);
    Ok(())
}

pub(crate) fn record_research(
    ctx: &mut JobContext,
    args: &RecordResearchArgs,
    date: NaiveDate,
) -> Result<()> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let component = args.component.trim();
    if ResearchComponent::from_key(component).is_none() && !EXTRA_COMPONENTS.contains(&component)
    {
        let known: Vec<&str> = ResearchComponent::ALL
            .iter()
            .map(|c| c.key())
            .chain(EXTRA_COMPONENTS)
            .collect();
        return Err(JobkitError::ValidationError(format!(
            "unknown research component '{}' (expected one of: {})",
            component,
            known.join(", ")
        )));
    }

    let results = read_input_file(&args.file)?;
    if results.trim().is_empty() {
        return Err(JobkitError::ValidationError(format!(
            "research results file '{}' is empty",
            args.file.display()
        )));
    }

    ctx.pipeline
        .store_ai_research(&company, component, &results, date)?;
    ctx.save_pipeline()?;
    ctx.log(
        &Activity::new(ActivityAction::ResearchResult)
            .with_company(&company)
            .with_details(json!({
                "component": component,
                "chars": results.chars().count(),
            })),
    )?;

    println!("Stored {} results for {}.", component, company);
    Ok(())
}
