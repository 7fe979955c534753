//! Implementation of the `jobkit apply` command.

use super::{company_arg, print_files, read_input_file, today};
use crate::activity::{Activity, ActivityAction};
use crate::application::{ApplicationRequest, build_package};
use crate::cli::ApplyArgs;
use crate::context::JobContext;
use crate::error::{JobkitError, Result};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use serde_json::json;
use std::path::PathBuf;
use tracing::warn;

pub fn cmd_apply(ws: Workspace, args: ApplyArgs) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    run_apply(&mut ctx, &args, today()).map(|_| ())
}

pub(crate) fn run_apply(
    ctx: &mut JobContext,
    args: &ApplyArgs,
    date: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let role = ctx.role_for(&company, args.role.as_deref());

    let job_description = match &args.job_description {
        Some(path) => {
            let text = read_input_file(path)?;
            if text.trim().is_empty() {
                return Err(JobkitError::ValidationError(format!(
                    "job description '{}' is empty",
                    path.display()
                )));
            }
            Some(text)
        }
        None => None,
    };

    let request = ApplicationRequest {
        company: &company,
        role: &role,
        job_description: job_description.as_deref(),
        date,
    };
    let package = build_package(&ctx.config, &ctx.profile, ctx.research_for(&company), &request);
    let files = package.write(&ctx.ws)?;

    if ctx.pipeline.get(&company).is_some() {
        ctx.pipeline.mark_application_generated(&company, date)?;
        ctx.save_pipeline()?;
    } else {
        warn!(company = %company, "company is not in the pipeline, status not updated");
    }

    let keywords = package.analysis.as_ref().map_or(0, |a| a.keyword_count());
    ctx.log(
        &Activity::new(ActivityAction::Apply)
            .with_company(&company)
            .with_details(json!({
                "role": role,
                "keywords": keywords,
                "files": files.len(),
            })),
    )?;

    println!("Application package generated for {} ({}).", company, role);
    if package.analysis.is_some() {
        println!(
            "Keyword match: {:.1}% across {} posting keywords.",
            package.summary.resume_keyword_report.overall_match_percentage, keywords
        );
    }
    println!();
    println!("Created:");
    print_files(&ctx.ws, &files);
    if ctx.pipeline.get(&company).is_none() {
        println!();
        println!(
            "{} is not tracked yet. Run `jobkit research \"{}\"` to add it to the pipeline.",
            company, company
        );
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::{date, test_context};
    use crate::pipeline::{CompanyRecord, Status};

    fn args(company: &str) -> ApplyArgs {
        ApplyArgs {
            company: company.to_string(),
            role: None,
            job_description: None,
        }
    }

    #[test]
    fn test_apply_marks_pipeline() {
        let (_temp_dir, mut ctx) = test_context();
        let mut record = CompanyRecord::new("Acme Health", Some("Growth PM"), date(2026, 10, 1));
        record.status = Status::Researched;
        ctx.pipeline.upsert(record);

        let files = run_apply(&mut ctx, &args("acme health"), date(2026, 10, 3)).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files[0].starts_with(ctx.ws.company_dir("Acme Health")));

        let record = ctx.pipeline.get("Acme Health").unwrap();
        assert!(record.application_generated);
        assert_eq!(record.status, Status::Applied);
        assert_eq!(record.applied_date, Some(date(2026, 10, 3)));
    }

    #[test]
    fn test_apply_untracked_company_writes_files_only() {
        let (_temp_dir, mut ctx) = test_context();
        let files = run_apply(&mut ctx, &args("Beta Labs"), date(2026, 10, 3)).unwrap();
        assert!(files.iter().all(|f| f.exists()));
        assert!(ctx.pipeline.companies.is_empty());
    }

    #[test]
    fn test_empty_job_description_rejected() {
        let (temp_dir, mut ctx) = test_context();
        let jd = temp_dir.path().join("posting.txt");
        std::fs::write(&jd, "  \n").unwrap();

        let mut args = args("Acme");
        args.job_description = Some(jd);
        let err = run_apply(&mut ctx, &args, date(2026, 10, 3)).unwrap_err();
        assert!(matches!(err, JobkitError::ValidationError(_)));
    }
}
