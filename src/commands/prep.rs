//! Implementation of the `jobkit prep` command.

use super::{company_arg, print_files, today};
use crate::activity::{Activity, ActivityAction};
use crate::cli::PrepArgs;
use crate::context::JobContext;
use crate::error::Result;
use crate::interview::interviewers::Interviewer;
use crate::interview::{InterviewPrep, PrepRequest, build_prep};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

pub fn cmd_prep(ws: Workspace, args: PrepArgs) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    run_prep(&mut ctx, &args, today()).map(|_| ())
}

pub(crate) fn run_prep(ctx: &mut JobContext, args: &PrepArgs, date: NaiveDate) -> Result<InterviewPrep> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let role = ctx.role_for(&company, args.role.as_deref());
    let interviewers = args
        .interviewers
        .iter()
        .map(|value| Interviewer::parse(value))
        .collect::<Result<Vec<_>>>()?;

    let research = ctx.research_for(&company);
    if research.is_none() {
        debug!(company = %company, "no research on file, using generic company questions");
    }
    let request = PrepRequest {
        company: &company,
        role: &role,
        interviewers,
        date,
    };
    let prep = build_prep(&ctx.profile, research, &request)?;
    let path = prep.write(&ctx.ws)?;

    ctx.log(
        &Activity::new(ActivityAction::Prep)
            .with_company(&company)
            .with_details(json!({
                "role": role,
                "interviewers": prep.interviewers.len(),
                "star_responses": prep.star_responses.len(),
            })),
    )?;

    println!("Interview preparation guide ready for {} ({}).", company, role);
    println!(
        "  {} high-probability questions, {} role questions, {} company questions",
        prep.high_probability.len(),
        prep.role_questions.len(),
        prep.company_questions.len()
    );
    println!(
        "  {} STAR outlines from your case stories, {} interviewer profiles",
        prep.star_responses.len(),
        prep.interviewers.len()
    );
    println!();
    println!("Created:");
    print_files(&ctx.ws, &[path]);

    Ok(prep)
}
