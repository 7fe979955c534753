//! Interview preparation guide.
//!
//! Everything here is assembled from the candidate profile, the fixed question
//! bank, and any research already recorded for the company. The result is a
//! single Markdown guide in the company folder.

pub mod interviewers;
pub mod material;
pub mod questions;
pub mod star;

use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::pipeline::ResearchFindings;
use crate::profile::CandidateProfile;
use crate::template::{render_template, vars};
use crate::workspace::{Workspace, file_stem};
use chrono::NaiveDate;
use interviewers::Interviewer;
use material::{PrepPrompt, TalkingPoints};
use std::fmt::Write as _;
use std::path::PathBuf;
use star::StarResponse;
use tracing::info;

/// Role-specific questions considered for prepared answers.
const ROLE_QUESTIONS_FOR_STAR: usize = 5;
/// Prepared answers written out in full.
const STAR_RESPONSES_SHOWN: usize = 5;
/// Role-specific questions listed in the guide.
const ROLE_QUESTIONS_SHOWN: usize = 10;

const QUESTION_BANK_PROMPT: &str = "\
Based on the company research and role requirements, generate 15-20 likely interview questions for this {role_title} position at {company_name}. Include both behavioral and technical questions specific to their business challenges.

Company Context:
{company_context}

Role Focus Areas:
{role_focus_areas}

Include questions that cover:
- Company-specific challenges and opportunities
- Role-specific technical and strategic competencies
- Behavioral questions relevant to their culture and values
- Situational questions based on their current business priorities";

const INTERVIEWER_PROMPT: &str = "\
Research {interviewer_name} at {company_name}. Based on their background, role, and recent work, what questions would they likely ask a {role_title} candidate? Which parts of the business would they care about most?

Consider:
- Their professional background and expertise
- Their role and responsibilities at the company
- Recent projects or initiatives they've led
- The skills and experience they would value most

Provide 8-10 specific, likely interview questions.";

const STAR_COACH_PROMPT: &str = "\
Help me structure a response to this question using the STAR method, highlighting relevant experience and quantified outcomes. Focus on {key_skills}.

Question: {question}

Experience to draw on:
{story_summary}

Provide:
1. STAR outline with specific talking points
2. Key metrics and outcomes to emphasize
3. Connection to the role requirements and company needs";

#[derive(Debug)]
pub struct PrepRequest<'a> {
    pub company: &'a str,
    pub role: &'a str,
    /// Known interviewers; empty means the usual loop.
    pub interviewers: Vec<Interviewer>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewerProfile {
    pub interviewer: Interviewer,
    pub research_prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoachingPrompt {
    pub question: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewPrep {
    pub company_name: String,
    pub role_title: String,
    pub date: NaiveDate,
    pub high_probability: Vec<&'static str>,
    pub role_questions: Vec<&'static str>,
    pub company_questions: Vec<String>,
    pub question_prompt: String,
    pub predicted_themes: Vec<&'static str>,
    pub key_skills: &'static str,
    pub interviewers: Vec<InterviewerProfile>,
    pub star_responses: Vec<StarResponse>,
    pub coaching_prompts: Vec<CoachingPrompt>,
    pub talking_points: TalkingPoints,
    pub questions_to_ask: Vec<(&'static str, Vec<String>)>,
    pub prep_prompts: Vec<PrepPrompt>,
}

pub fn build_prep(
    profile: &CandidateProfile,
    research: Option<&ResearchFindings>,
    request: &PrepRequest<'_>,
) -> Result<InterviewPrep> {
    let (company, role) = (request.company, request.role);
    let high_probability = questions::high_probability_questions(role);
    let role_questions = questions::role_questions(role);
    let key_skills = questions::key_skills(role);

    let question_prompt = render_template(
        QUESTION_BANK_PROMPT,
        &vars([
            ("role_title", role),
            ("company_name", company),
            ("company_context", questions::company_context(research).as_str()),
            ("role_focus_areas", questions::role_focus_areas(role)),
        ]),
    )?;

    let loop_ = if request.interviewers.is_empty() {
        interviewers::default_interviewers()
    } else {
        request.interviewers.clone()
    };
    let interviewers = loop_
        .into_iter()
        .map(|interviewer| -> Result<InterviewerProfile> {
            let research_prompt = render_template(
                INTERVIEWER_PROMPT,
                &vars([
                    ("interviewer_name", interviewer.name.as_str()),
                    ("company_name", company),
                    ("role_title", role),
                ]),
            )?;
            Ok(InterviewerProfile {
                interviewer,
                research_prompt,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let key_questions = high_probability
        .iter()
        .chain(role_questions.iter().take(ROLE_QUESTIONS_FOR_STAR))
        .copied();
    let star_responses = star::prepare_responses(key_questions, &profile.case_stories, role);
    let coaching_prompts = star_responses
        .iter()
        .map(|response| -> Result<CoachingPrompt> {
            let prompt = render_template(
                STAR_COACH_PROMPT,
                &vars([
                    ("key_skills", key_skills),
                    ("question", response.question.as_str()),
                    ("story_summary", star::summarize_story(&response.story).as_str()),
                ]),
            )?;
            Ok(CoachingPrompt {
                question: response.question.clone(),
                prompt,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(InterviewPrep {
        company_name: company.to_string(),
        role_title: role.to_string(),
        date: request.date,
        company_questions: questions::company_questions(company, research),
        predicted_themes: questions::predicted_themes(role, research),
        talking_points: material::talking_points(company, role, research, &profile.interview_pitch),
        questions_to_ask: material::questions_to_ask(company, role, research),
        prep_prompts: material::prep_prompts(company, role),
        high_probability,
        role_questions,
        question_prompt,
        key_skills,
        interviewers,
        star_responses,
        coaching_prompts,
    })
}

impl InterviewPrep {
    pub fn guide_path(&self, ws: &Workspace) -> PathBuf {
        ws.company_dir(&self.company_name).join(format!(
            "{}_Interview_Preparation_Guide.md",
            file_stem(&self.company_name)
        ))
    }

    pub fn write(&self, ws: &Workspace) -> Result<PathBuf> {
        let path = self.guide_path(ws);
        atomic_write_file(&path, &self.render())?;
        info!(company = %self.company_name, path = %path.display(), "interview guide written");
        Ok(path)
    }

    pub fn render(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# Interview Preparation Guide - {}\n", self.company_name);
        let _ = writeln!(md, "**Role:** {}  ", self.role_title);
        let _ = writeln!(md, "**Preparation Date:** {}  ", self.date);
        let _ = writeln!(md, "**Key Skills:** {}\n", self.key_skills);
        md.push_str("---\n\n## Preparation Overview\n\n");
        md.push_str("Question bank, STAR answers, talking points, and practice material for this loop.\n\n");
        md.push_str("**Preparation Time Required:** 4-6 hours\n\n");

        md.push_str("---\n\n## Question Bank\n\n### High-Probability Questions\n\n");
        push_list(&mut md, &self.high_probability);
        md.push_str("\n### Role-Specific Questions\n\n");
        push_list(&mut md, self.role_questions.iter().take(ROLE_QUESTIONS_SHOWN));
        md.push_str("\n### Company-Specific Questions\n\n");
        push_list(&mut md, &self.company_questions);
        md.push_str("\n### Predicted Themes\n\n");
        push_list(&mut md, &self.predicted_themes);

        md.push_str("\n### Preparation Priority\n\n");
        for (tier, items) in [
            ("Must Prepare", &questions::MUST_PREPARE),
            ("Should Prepare", &questions::SHOULD_PREPARE),
            ("Nice to Prepare", &questions::NICE_TO_PREPARE),
        ] {
            let _ = writeln!(md, "**{}:**", tier);
            push_list(&mut md, items);
            md.push('\n');
        }

        md.push_str("### Question Generation Prompt\n\n```\n");
        md.push_str(&self.question_prompt);
        md.push_str("\n```\n\n");

        md.push_str("---\n\n## STAR Method Responses\n\n### Framework Overview\n\n");
        for part in &star::STAR_PARTS {
            let _ = writeln!(md, "**{}:** {}\n", part.name, part.definition);
        }
        md.push_str("**Best Practices:**\n");
        push_list(&mut md, &star::BEST_PRACTICES);

        md.push_str("\n### Prepared Responses\n\n");
        if self.star_responses.is_empty() {
            md.push_str("No case story matched these questions. Add case stories to `config/candidate_profile.json`.\n\n");
        }
        for (i, response) in self
            .star_responses
            .iter()
            .take(STAR_RESPONSES_SHOWN)
            .enumerate()
        {
            let _ = writeln!(md, "#### {}. {}\n", i + 1, response.question);
            let _ = writeln!(md, "**Case Story:** {}\n", response.story.title);
            for (part, content) in response.parts() {
                let _ = writeln!(md, "**{}** ({}):\n{}\n", part.name, part.timing, content);
            }
            if !response.story.quantified_outcomes.is_empty() {
                let _ = writeln!(
                    md,
                    "**Quantified Outcomes:** {}\n",
                    response.story.quantified_outcomes.join("; ")
                );
            }
            let _ = writeln!(md, "**Connection to Role:** {}\n", response.connection_to_role);
            md.push_str("**Practice Notes:**\n");
            push_list(&mut md, &response.practice_notes);
            md.push_str("\n---\n\n");
        }

        md.push_str("### Case Story Mapping\n\n");
        for response in &self.star_responses {
            let _ = writeln!(md, "- {} -> {}", response.question, response.story.title);
        }
        md.push('\n');

        md.push_str("---\n\n## Company-Specific Talking Points\n\n");
        for (title, points) in self.talking_points.sections() {
            let _ = writeln!(md, "### {}\n", title);
            push_list(&mut md, points);
            md.push('\n');
        }

        md.push_str("---\n\n## Questions to Ask Interviewers\n\n");
        for (category, asks) in &self.questions_to_ask {
            let _ = writeln!(md, "### {}\n", category);
            push_list(&mut md, asks);
            md.push('\n');
        }

        md.push_str("---\n\n## Interviewer Analysis\n\n");
        for profile in &self.interviewers {
            let interviewer = &profile.interviewer;
            let _ = writeln!(md, "### {} - {}\n", interviewer.name, interviewer.title);
            let _ = writeln!(md, "**Background:** {}  ", interviewer.background);
            let _ = writeln!(
                md,
                "**Focus Areas:** {}\n",
                interviewer.focus_areas().join(", ")
            );
            md.push_str("**Preparation Notes:**\n");
            push_list(&mut md, &interviewer.prep_notes());
            md.push_str("\n**Research Prompt:**\n```\n");
            md.push_str(&profile.research_prompt);
            md.push_str("\n```\n\n");
        }

        md.push_str("---\n\n## Mock Interview Scenarios\n\n");
        for scenario in &material::MOCK_SCENARIOS {
            let _ = writeln!(md, "### {}\n", scenario.name);
            let _ = writeln!(md, "**Duration:** {}  ", scenario.duration);
            let _ = writeln!(md, "**Interviewer:** {}  ", scenario.interviewer);
            let _ = writeln!(md, "**Focus:** {}\n", scenario.focus);
            md.push_str("**Questions:**\n");
            push_list(&mut md, &scenario.questions);
            md.push('\n');
        }

        md.push_str("---\n\n## AI Preparation Prompts\n\n");
        for prompt in &self.prep_prompts {
            let _ = writeln!(md, "### {}\n", prompt.purpose);
            let _ = writeln!(md, "**Prompt:**\n```\n{}\n```\n", prompt.prompt);
            let _ = writeln!(md, "**Usage:** {}\n", prompt.usage);
        }
        for coaching in &self.coaching_prompts {
            let _ = writeln!(md, "### STAR Coaching: {}\n", coaching.question);
            let _ = writeln!(md, "```\n{}\n```\n", coaching.prompt);
        }

        md.push_str("---\n\n## Preparation Checklist\n\n");
        for (category, items) in &material::CHECKLIST {
            let _ = writeln!(md, "### {}\n", category);
            for item in items {
                let _ = writeln!(md, "- [ ] {}", item);
            }
            md.push('\n');
        }

        md.push_str("---\n\n## Success Metrics\n\n");
        md.push_str("- [ ] Demonstrated strong company knowledge\n");
        md.push_str("- [ ] Asked thoughtful, strategic questions\n");
        md.push_str("- [ ] Gave specific, quantified examples\n");
        md.push_str("- [ ] Connected experience to role requirements\n");
        md
    }
}

fn push_list<I>(md: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for item in items {
        let _ = writeln!(md, "- {}", item.as_ref());
    }
}
