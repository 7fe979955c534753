//! `Application_Research_Notes.md` and `AI_Research_Execution_Guide.md`.

use super::prompts::{PreparedPrompt, ResearchComponent, infer_key_problem, infer_team};
use super::scoring::label_for;
use super::DEFAULT_ROLE;
use crate::config::Config;
use crate::pipeline::CompanyRecord;
use crate::template::{render_partial, vars};
use chrono::NaiveDate;
use std::fmt::Write;

pub const NOTES_FILE: &str = "Application_Research_Notes.md";
pub const GUIDE_FILE: &str = "AI_Research_Execution_Guide.md";

/// Tips printed in the execution guide.
pub const EXECUTION_TIPS: [&str; 5] = [
    "Use each prompt in a separate AI conversation for focused results",
    "Save each response in a markdown file for easy reference",
    "Follow up with specific questions to dive deeper into interesting areas",
    "Turn long findings into short audio or bullet summaries you can review before calls",
    "Combine findings into a single company intelligence report",
];

pub const TIME_ESTIMATE: &str = "45-60 minutes total execution time";

/// Render the research notes for a qualified company.
///
/// The two config prompts are rendered leniently, so a user-edited prompt
/// with an unknown placeholder still produces a document.
pub fn render_research_notes(record: &CompanyRecord, config: &Config) -> String {
    let role = record.role_title.as_deref().unwrap_or(DEFAULT_ROLE);
    let mut out = String::new();

    let _ = writeln!(out, "# {} - Application Research Notes\n", record.name);
    out.push_str("## Research Summary\n");
    let _ = writeln!(
        out,
        "- **Research Date**: {}",
        record
            .research_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    );
    let _ = writeln!(out, "- **Target Role**: {}", role);
    let _ = writeln!(out, "- **Priority Score**: {}/40", record.priority_score);
    let _ = writeln!(out, "- **Status**: {}\n", record.status);

    out.push_str("## Priority Scoring Breakdown\n");
    match &record.priority_breakdown {
        Some(scores) => {
            for (key, score) in scores.entries() {
                let _ = writeln!(out, "- **{}**: {}/10", label_for(key), score);
            }
            let _ = writeln!(out, "- **Total**: {}/40", scores.total());
        }
        None => out.push_str("Priority scores not available\n"),
    }
    out.push('\n');

    out.push_str("## Company Intelligence\n");
    if let Some(research) = &record.research {
        for (title, text) in research.sections() {
            let _ = writeln!(out, "### {}\n{}\n", title, text);
        }
    }

    out.push_str("## Network Opportunities\n");
    match &record.network_opportunities {
        Some(network) => {
            for (title, people) in network.sections() {
                let _ = writeln!(out, "### {}", title);
                if people.is_empty() {
                    out.push_str("- None identified\n");
                }
                for person in people {
                    let _ = writeln!(out, "- {}", person);
                }
                out.push('\n');
            }
        }
        None => out.push_str("Network analysis not completed\n\n"),
    }

    out.push_str(
        "## Next Actions\n\
         - [ ] Run the research prompts and record the results\n\
         - [ ] Review LinkedIn for warm connections\n\
         - [ ] Generate the application package (`jobkit apply`)\n\
         - [ ] Reach out to warm connections\n\
         - [ ] Prepare the cold email campaign (`jobkit email`)\n\n",
    );

    let variables = vars([
        ("company_name", record.name.as_str()),
        ("target_role", role),
        ("specific_team", infer_team(role)),
        ("solve_key_problem", infer_key_problem(role)),
        ("specific_area", "user acquisition and retention"),
    ]);
    out.push_str("## AI Research Prompts to Execute\n\n");
    let _ = writeln!(
        out,
        "### Company Dossier Prompt\n```\n{}\n```\n",
        render_partial(&config.ai_prompts.company_research, &variables).text
    );
    let _ = writeln!(
        out,
        "### Industry Analysis Prompt\n```\n{}\n```\n",
        render_partial(&config.ai_prompts.industry_research, &variables).text
    );

    out.push_str(
        "## Notes\n\
         - Prompts for all five research areas are in AI_Research_Execution_Guide.md\n\
         - Record answers with `jobkit record research <company> <component> --file <answer.md>`\n\
         - Update this document with findings\n",
    );
    out
}

/// Render the step-by-step guide for running the research prompts.
pub fn render_execution_guide(
    company: &str,
    role: &str,
    date: NaiveDate,
    prompts: &[PreparedPrompt],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# AI Research Execution Guide - {}\n", company);
    out.push_str("## Research Overview\n");
    let _ = writeln!(out, "- **Target Company**: {}", company);
    let _ = writeln!(out, "- **Target Role**: {}", role);
    let _ = writeln!(out, "- **Research Date**: {}", date);
    let _ = writeln!(out, "- **Estimated Execution Time**: {}\n", TIME_ESTIMATE);

    out.push_str(
        "## Execution Instructions\n\n\
         Run each prompt in the AI assistant you prefer and save the answer.\n\n\
         ### Recommended Execution Order:\n",
    );
    for (i, component) in ResearchComponent::RECOMMENDED_ORDER.iter().enumerate() {
        let _ = writeln!(out, "{}. **{}** - Execute and save results", i + 1, component.title());
    }
    out.push_str("\n### Tips:\n");
    for tip in EXECUTION_TIPS {
        let _ = writeln!(out, "- {}", tip);
    }
    out.push_str("\n---\n\n## Research Components\n\n");

    for (i, prepared) in prompts.iter().enumerate() {
        let _ = writeln!(out, "### {}. {}\n", i + 1, prepared.component.title());
        if !prepared.context.is_empty() {
            out.push_str("**Context:**\n");
            for (label, value) in &prepared.context {
                let _ = writeln!(out, "- {}: {}", label, value);
            }
            out.push('\n');
        }
        let _ = writeln!(out, "**AI Prompt:**\n```\n{}\n```\n", prepared.prompt);
        let _ = writeln!(
            out,
            "**Save results:** `jobkit record research \"{}\" {} --file <answer.md>`\n\n---\n",
            company,
            prepared.component.key()
        );
    }

    out.push_str(
        "## Research Integration\n\n\
         After completing all research components:\n\n\
         1. **Synthesis**: pull out the company's strategic priorities, where this role adds value, \
         and what recent developments change the picture.\n\
         2. **Application Strategy**: use the findings to tailor the resume, the cover letter opening, \
         interview answers, and outreach.\n\
         3. **Save Results**: record each answer so later commands can use it.\n\n\
         ## Next Steps\n\n\
         - [ ] Execute all research prompts\n\
         - [ ] Synthesize findings into strategic insights\n\
         - [ ] Update Application_Research_Notes.md with results\n\
         - [ ] Generate application materials using research insights\n\
         - [ ] Identify network outreach opportunities\n",
    );
    out
}
