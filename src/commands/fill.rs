//! Implementation of the `jobkit fill` command.
//!
//! Renders one of the workspace Markdown templates for a company. Values
//! come from the config, the pipeline record, and `--set` overrides, in
//! that order of precedence (later wins).

use super::{company_arg, print_files, today};
use crate::activity::{Activity, ActivityAction};
use crate::cli::FillArgs;
use crate::context::JobContext;
use crate::error::{JobkitError, Result};
use crate::fs::atomic_write_file;
use crate::template::{TemplateDocument, render_partial};
use crate::workspace::{Workspace, company_key, file_stem};
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub fn cmd_fill(ws: Workspace, args: FillArgs) -> Result<()> {
    let mut ctx = JobContext::load(ws)?;
    run_fill(&mut ctx, &args, today()).map(|_| ())
}

pub(crate) fn run_fill(ctx: &mut JobContext, args: &FillArgs, date: NaiveDate) -> Result<PathBuf> {
    let company = ctx.display_name(company_arg(&args.company)?);
    let template_path = resolve_template(&ctx.ws, &args.template)?;
    let document = TemplateDocument::load(&template_path)?;
    debug!(template = %template_path.display(), "loaded template");

    let variables = fill_variables(ctx, &company, args, date)?;
    let rendered = render_partial(&document.body, &variables);
    for name in &rendered.missing {
        warn!(placeholder = %name, "no value for placeholder, left as-is");
    }

    let stem = template_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let filename = output_filename(document.frontmatter.output.as_deref(), &stem, &company, &variables)?;
    let path = ctx.ws.company_dir(&company).join(filename);
    atomic_write_file(&path, &rendered.text)?;

    ctx.log(
        &Activity::new(ActivityAction::Fill)
            .with_company(&company)
            .with_details(json!({
                "template": stem,
                "missing": rendered.missing,
            })),
    )?;

    println!("Filled {} for {}.", stem, company);
    if !rendered.missing.is_empty() {
        println!(
            "Left unfilled: {}",
            rendered
                .missing
                .iter()
                .map(|m| format!("{{{}}}", m))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Pass values with --set name=value.");
    }
    println!();
    println!("Created:");
    print_files(&ctx.ws, &[&path]);

    Ok(path)
}

/// Find a template by path, or by name in the templates directory.
fn resolve_template(ws: &Workspace, name: &str) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let in_dir = ws.templates_dir().join(name);
    if in_dir.is_file() {
        return Ok(in_dir);
    }
    let with_ext = ws.templates_dir().join(format!("{}.md", name));
    if with_ext.is_file() {
        return Ok(with_ext);
    }

    let available = available_templates(ws);
    let hint = if available.is_empty() {
        "No templates installed. Run `jobkit init` to install the defaults.".to_string()
    } else {
        format!("Available templates: {}", available.join(", "))
    };
    Err(JobkitError::UserError(format!(
        "template '{}' not found\n\n{}",
        name, hint
    )))
}

fn available_templates(ws: &Workspace) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(ws.templates_dir()) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
        .collect();
    names.sort();
    names
}

fn fill_variables(
    ctx: &JobContext,
    company: &str,
    args: &FillArgs,
    date: NaiveDate,
) -> Result<HashMap<String, String>> {
    let user = &ctx.config.user_profile;
    let role = ctx.role_for(company, args.role.as_deref());

    let mut variables = HashMap::from([
        ("name".to_string(), user.name.clone()),
        ("email".to_string(), user.email.clone()),
        ("phone".to_string(), user.phone.clone()),
        ("linkedin".to_string(), user.linkedin.clone()),
        ("company_name".to_string(), company.to_string()),
        ("company_key".to_string(), company_key(company)),
        ("company_file".to_string(), file_stem(company)),
        ("target_role".to_string(), role.clone()),
        ("role_title".to_string(), role),
        ("date".to_string(), date.format("%B %d, %Y").to_string()),
        ("date_iso".to_string(), date.format("%Y-%m-%d").to_string()),
    ]);

    if let Some(record) = ctx.pipeline.get(company) {
        variables.insert("priority_score".to_string(), record.priority_score.to_string());
        variables.insert("status".to_string(), record.status.to_string());
    }

    for set in &args.sets {
        let (key, value) = parse_set(set)?;
        variables.insert(key.to_string(), value.to_string());
    }

    Ok(variables)
}

/// Split a `--set key=value` argument.
fn parse_set(set: &str) -> Result<(&str, &str)> {
    match set.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(JobkitError::UserError(format!(
            "invalid --set '{}'\n\nUse --set name=value.",
            set
        ))),
    }
}

/// The output filename: the rendered frontmatter pattern, or
/// `{stem}_{Company}.md`. Must stay inside the company folder.
fn output_filename(
    pattern: Option<&str>,
    stem: &str,
    company: &str,
    variables: &HashMap<String, String>,
) -> Result<String> {
    let filename = match pattern {
        Some(pattern) => {
            let rendered = render_partial(pattern, variables);
            if !rendered.missing.is_empty() {
                return Err(JobkitError::ValidationError(format!(
                    "output pattern '{}' uses unknown placeholders: {}",
                    pattern,
                    rendered.missing.join(", ")
                )));
            }
            rendered.text.trim().to_string()
        }
        None => format!("{}_{}.md", stem, file_stem(company)),
    };

    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.split('.').all(str::is_empty)
    {
        return Err(JobkitError::ValidationError(format!(
            "output filename '{}' must be a plain file name",
            filename
        )));
    }
    Ok(filename)
}
