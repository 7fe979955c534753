//! Implementation of the `jobkit email` command.

use super::{company_arg, print_files, today};
use crate::activity::{Activity, ActivityAction};
use crate::cli::EmailArgs;
use crate::context::JobContext;
use crate::error::Result;
use crate::outreach::contacts::Contact;
use crate::outreach::{Campaign, CampaignRequest, build_campaign};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use serde_json::json;
use tracing::warn;

pub fn cmd_email(ws: Workspace, args: EmailArgs) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    run_email(&mut ctx, &args, today()).map(|_| ())
}

pub(crate) fn run_email(ctx: &mut JobContext, args: &EmailArgs, date: NaiveDate) -> Result<Campaign> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let role = ctx.role_for(&company, args.role.as_deref());
    let contacts = args
        .contacts
        .iter()
        .map(|value| Contact::parse(value))
        .collect::<Result<Vec<_>>>()?;

    let request = CampaignRequest {
        company: &company,
        role: &role,
        contacts,
        date,
    };
    let campaign = build_campaign(&ctx.config, &ctx.profile, ctx.research_for(&company), &request)?;
    let files = campaign.write(&ctx.ws)?;

    let tracked = ctx.pipeline.get(&company).is_some();
    if tracked {
        ctx.pipeline.record_emails(&company, campaign.email_records())?;
        ctx.save_pipeline()?;
    } else {
        warn!(company = %company, "company is not in the pipeline, emails not recorded");
    }

    let flagged = campaign.drafts.iter().filter(|d| !d.validation.passed).count();
    ctx.log(
        &Activity::new(ActivityAction::Email)
            .with_company(&company)
            .with_details(json!({
                "role": role,
                "emails": campaign.drafts.len(),
                "flagged": flagged,
                "templates": campaign.drafts.iter().map(|d| d.template.key).collect::<Vec<_>>(),
            })),
    )?;

    println!("Cold email campaign drafted for {} ({}).", company, role);
    println!();
    for draft in &campaign.drafts {
        println!(
            "  {} ({}) - {} template, {} words, {:.0}% estimated reply chance, send {}",
            draft.contact.name,
            draft.contact.title,
            draft.template.name,
            draft.word_count,
            draft.success_probability * 100.0,
            draft.send_date.format("%Y-%m-%d")
        );
        for warning in &draft.validation.warnings {
            println!("    ! {}", warning);
        }
    }
    if flagged > 0 {
        println!();
        println!("{} draft(s) need edits before sending.", flagged);
    }
    println!();
    println!("Created:");
    print_files(&ctx.ws, &files);
    if !tracked {
        println!();
        println!(
            "{} is not tracked yet. Run `jobkit research \"{}\"` to track replies.",
            company, company
        );
    }

    Ok(campaign)
}
