//! Implementation of the `jobkit research` command.

use super::{company_arg, print_files, today};
use crate::activity::{Activity, ActivityAction};
use crate::cli::ResearchArgs;
use crate::context::JobContext;
use crate::error::Result;
use crate::pipeline::PriorityScores;
use crate::research::scoring::{parse_scores_json, prompt_scores, scores_from_map};
use crate::research::{ResearchOutcome, ResearchRequest, cached_record, research_company};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub fn cmd_research(ws: Workspace, args: ResearchArgs) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_research(&mut ctx, &args, today(), &mut input, &mut output).map(|_| ())
}

/// Research one company. Returns `None` when a cached result was reused.
pub(crate) fn run_research<R: BufRead, W: Write>(
    ctx: &mut JobContext,
    args: &ResearchArgs,
    date: NaiveDate,
    input: &mut R,
    output: &mut W,
) -> Result<Option<ResearchOutcome>> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let company = company.as_str();

    if let Some(record) = cached_record(&ctx.pipeline, company, args.force_refresh) {
        info!(company = %record.name, "research already complete, using cached record");
        println!(
            "Research for {} is already complete (priority {}/40, {}).",
            record.name, record.priority_score, record.status
        );
        println!("Use --force-refresh to redo it.");
        return Ok(None);
    }

    let scores = resolve_scores(company, args.scores.as_deref(), input, output)?;
    let request = ResearchRequest {
        company,
        role: args.role.as_deref(),
        date,
    };
    let outcome = research_company(&ctx.ws, &ctx.config, &mut ctx.pipeline, &request, scores)?;
    ctx.save_pipeline()?;

    match &outcome {
        ResearchOutcome::Disqualified { score, minimum } => {
            ctx.log(
                &Activity::new(ActivityAction::Disqualify)
                    .with_company(company)
                    .with_details(json!({ "score": score, "minimum": minimum })),
            )?;
            println!(
                "{} scored {}/40, below the minimum of {}. Marked as disqualified.",
                company, score, minimum
            );
            println!("Focus on higher-priority opportunities.");
        }
        ResearchOutcome::Researched { score, files } => {
            ctx.log(
                &Activity::new(ActivityAction::Research)
                    .with_company(company)
                    .with_details(json!({
                        "score": score,
                        "role": args.role,
                        "force_refresh": args.force_refresh,
                    })),
            )?;
            println!("Research completed for {} (priority {}/40).", company, score);
            println!();
            println!("Created:");
            print_files(&ctx.ws, files);
            println!();
            println!("Next: run the prompts in the execution guide, then record results with");
            println!("  jobkit record research \"{}\" <component> --file <output>", company);
        }
    }

    Ok(Some(outcome))
}

/// Ratings from `--scores`, or from the terminal when absent or unparseable.
///
/// Parseable JSON with out-of-range ratings is an error, not a prompt.
fn resolve_scores<R: BufRead, W: Write>(
    company: &str,
    scores_json: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<PriorityScores> {
    if let Some(json) = scores_json {
        match parse_scores_json(json) {
            Ok(map) => return scores_from_map(&map),
            Err(e) => warn!(error = %e, "invalid --scores JSON, asking for ratings instead"),
        }
    }
    prompt_scores(company, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::{date, test_context};
    use crate::error::JobkitError;
    use crate::pipeline::Status;
    use std::io::Cursor;

    fn args(company: &str, scores: Option<&str>) -> ResearchArgs {
        ResearchArgs {
            company: company.to_string(),
            role: Some("Growth PM".to_string()),
            force_refresh: false,
            scores: scores.map(str::to_string),
        }
    }

    fn run(ctx: &mut JobContext, args: &ResearchArgs, answers: &str) -> Result<Option<ResearchOutcome>> {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        run_research(ctx, args, date(2026, 10, 1), &mut input, &mut output)
    }

    #[test]
    fn test_research_with_scores_json() {
        let (_temp_dir, mut ctx) = test_context();
        let scores = r#"{"role_appeal":9,"company_fit":9,"growth_potential":8,"likelihood":8}"#;

        let outcome = run(&mut ctx, &args("Acme Health", Some(scores)), "").unwrap();
        assert!(matches!(
            outcome,
            Some(ResearchOutcome::Researched { score: 34, .. })
        ));

        let record = ctx.pipeline.get("Acme Health").unwrap();
        assert_eq!(record.status, Status::Researched);
        assert!(ctx.ws.pipeline_path().is_file());
        assert!(ctx.ws.activity_path().is_file());
    }

    #[test]
    fn test_low_scores_disqualify() {
        let (_temp_dir, mut ctx) = test_context();
        let scores = r#"{"role_appeal":5,"company_fit":5,"growth_potential":5,"likelihood":5}"#;

        let outcome = run(&mut ctx, &args("Acme", Some(scores)), "").unwrap();
        assert!(matches!(
            outcome,
            Some(ResearchOutcome::Disqualified { score: 20, minimum: 28 })
        ));
        assert_eq!(ctx.pipeline.get("Acme").unwrap().status, Status::Disqualified);
    }

    #[test]
    fn test_invalid_json_falls_back_to_prompt() {
        let (_temp_dir, mut ctx) = test_context();
        let outcome = run(&mut ctx, &args("Acme", Some("{not json")), "9\n9\n9\n9\n").unwrap();
        assert!(matches!(
            outcome,
            Some(ResearchOutcome::Researched { score: 36, .. })
        ));
    }

    #[test]
    fn test_out_of_range_json_is_validation_error() {
        let (_temp_dir, mut ctx) = test_context();
        let err = run(&mut ctx, &args("Acme", Some(r#"{"likelihood":11}"#)), "").unwrap_err();
        assert!(matches!(err, JobkitError::ValidationError(_)));
        assert!(ctx.pipeline.get("Acme").is_none());
    }

    #[test]
    fn test_completed_research_is_reused() {
        let (_temp_dir, mut ctx) = test_context();
        let scores = r#"{"role_appeal":9,"company_fit":9,"growth_potential":9,"likelihood":9}"#;
        run(&mut ctx, &args("Acme", Some(scores)), "").unwrap();

        let again = run(&mut ctx, &args("Acme", Some(scores)), "").unwrap();
        assert!(again.is_none());

        let mut refresh = args("Acme", Some(scores));
        refresh.force_refresh = true;
        assert!(run(&mut ctx, &refresh, "").unwrap().is_some());
        assert_eq!(ctx.pipeline.stats.total_researched, 1);
    }

    #[test]
    fn test_refresh_keeps_stored_name() {
        let (_temp_dir, mut ctx) = test_context();
        let scores = r#"{"role_appeal":9,"company_fit":9,"growth_potential":9,"likelihood":9}"#;
        run(&mut ctx, &args("Acme Health", Some(scores)), "").unwrap();

        let mut refresh = args("acme health", Some(scores));
        refresh.force_refresh = true;
        run(&mut ctx, &refresh, "").unwrap();

        assert_eq!(ctx.pipeline.get("acme health").unwrap().name, "Acme Health");
        let notes = std::fs::read_to_string(
            ctx.ws
                .company_dir("Acme Health")
                .join(crate::research::notes::NOTES_FILE),
        )
        .unwrap();
        assert!(notes.starts_with("# Acme Health - "));
    }

    #[test]
    fn test_blank_company_rejected() {
        let (_temp_dir, mut ctx) = test_context();
        let err = run(&mut ctx, &args("  ", None), "").unwrap_err();
        assert!(matches!(err, JobkitError::UserError(_)));
    }
}
