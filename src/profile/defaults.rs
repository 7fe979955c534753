//! Sample profile content written on first run.

use super::*;
use crate::config::types::strings;

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            summaries: ResumeSummaries::default(),
            experience: sample_experience(),
            skills: sample_skills(),
            case_stories: sample_case_stories(),
            cover_letter: CoverLetterMaterial::default(),
            achievements: strings(&[
                "Doubled onboarding conversion through a research-led funnel redesign",
                "Launched an AI assistant that cut support resolution time from 3 days to 4 hours",
                "Grew organic traffic 120% in 9 months with a content and SEO engine",
                "Raised qualified leads 45% through a structured experimentation program",
            ]),
            ai_achievements: strings(&[
                "Shipped an AI assistant that cut support resolution time from 3 days to 4 hours",
                "Used AI-assisted research synthesis to shorten discovery cycles from weeks to days",
                "Built a systematic evaluation loop for LLM features that lifted answer accuracy to 92%",
            ]),
            interview_pitch: InterviewPitch::default(),
        }
    }
}

impl Default for ResumeSummaries {
    fn default() -> Self {
        Self {
            growth: "Growth-focused Product Manager with a record of doubling conversion rates \
                and scaling acquisition through systematic experimentation. Experienced in AI-powered \
                growth strategies and cross-functional execution."
                .to_string(),
            senior: "Senior Product Manager with experience leading cross-functional teams and \
                shaping product strategy across B2B and B2C products. Known for pairing user research \
                with data-driven prioritization."
                .to_string(),
            general: "Product Manager who combines technical implementation skills with strategic \
                thinking, turning user research and data into shipped outcomes."
                .to_string(),
        }
    }
}

impl Default for CoverLetterMaterial {
    fn default() -> Self {
        Self {
            growth_value_propositions: strings(&[
                "Proven track record of doubling conversion rates and scaling user acquisition through systematic experimentation",
                "Experience implementing AI-powered growth strategies that shortened traditional processes from weeks to days",
            ]),
            core_value_propositions: strings(&[
                "Unique combination of technical implementation skills and strategic thinking, with experience managing cross-functional teams",
                "Deep expertise in user research and data-driven decision making, with measurable outcomes across B2B and B2C contexts",
            ]),
            examples: strings(&[
                "At a B2B analytics startup, I redesigned the onboarding funnel after a round of user interviews and a series of A/B tests. Trial-to-paid conversion doubled within two quarters.",
                "At a consumer marketplace, I led the launch of an AI support assistant with engineering and operations. Median resolution time dropped from 3 days to 4 hours while satisfaction rose 18%.",
                "For a healthcare scheduling product, I ran contextual research with clinic staff and rebuilt the booking flow. Completed bookings rose 32% and support tickets fell by a quarter.",
            ]),
            call_to_action: "I would welcome the opportunity to discuss how my experience in systematic \
                product growth and AI implementation can contribute to {company_name}'s continued success. \
                I'm excited to learn more about your product team's current priorities and how I can help \
                drive meaningful impact in the {role_title} role."
                .to_string(),
        }
    }
}

impl Default for InterviewPitch {
    fn default() -> Self {
        Self {
            base: strings(&[
                "Systematic approach to product development with measurable outcomes",
                "Experience bridging technical implementation and strategic thinking",
                "Track record of cross-functional leadership and stakeholder alignment",
            ]),
            growth: strings(&[
                "Proven ability to double conversion rates through experimentation",
                "Experience scaling user acquisition with AI-powered growth strategies",
            ]),
            senior: strings(&[
                "Experience leading product strategy across multiple teams",
                "Ability to mentor PMs and build product culture",
            ]),
        }
    }
}

fn sample_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Product Manager".to_string(),
            company: "Northwind Analytics".to_string(),
            location: "Remote".to_string(),
            dates: "2021 - Present".to_string(),
            bullets: strings(&[
                "Doubled trial-to-paid conversion by redesigning onboarding around user research",
                "Led a cross-functional team of 9 engineers and designers through quarterly roadmap planning",
                "Launched an AI support assistant that cut resolution time from 3 days to 4 hours",
                "Grew qualified lead volume 45% through a structured experimentation program",
            ]),
        },
        ExperienceEntry {
            title: "Product Manager".to_string(),
            company: "Harbor Health".to_string(),
            location: "Boston, MA".to_string(),
            dates: "2018 - 2021".to_string(),
            bullets: strings(&[
                "Rebuilt the appointment booking flow, raising completed bookings 32%",
                "Partnered with compliance and engineering to ship HIPAA-ready messaging",
                "Scaled organic acquisition 120% with an SEO content engine",
            ]),
        },
    ]
}

fn sample_skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Product Management".to_string(),
            skills: strings(&[
                "Product Strategy",
                "Roadmap Planning",
                "A/B Testing",
                "User Research",
                "Growth Strategy",
                "Stakeholder Management",
            ]),
        },
        SkillCategory {
            name: "Technical Skills".to_string(),
            skills: strings(&["SQL", "Python", "API Design", "Machine Learning", "Analytics"]),
        },
        SkillCategory {
            name: "Tools & Platforms".to_string(),
            skills: strings(&["Amplitude", "Mixpanel", "Figma", "Jira", "Tableau"]),
        },
    ]
}

fn sample_case_stories() -> Vec<CaseStory> {
    vec![
        CaseStory {
            title: "Onboarding Funnel Redesign".to_string(),
            situation: "Trial users at a B2B analytics startup were dropping off before connecting a data source.".to_string(),
            task: "Improve trial-to-paid conversion without adding sales headcount.".to_string(),
            action: "Interviewed churned trial users, mapped the funnel with analytics, and ran a series of A/B tests on a guided setup flow.".to_string(),
            results: "Trial-to-paid conversion doubled from 6% to 12% within two quarters.".to_string(),
            skills: strings(&["user research", "a/b testing", "analytics", "growth"]),
            quantified_outcomes: strings(&["100% conversion lift", "6% to 12% trial-to-paid"]),
            industry: "B2B SaaS".to_string(),
            complexity: "high".to_string(),
        },
        CaseStory {
            title: "AI Assistant Launch".to_string(),
            situation: "Support backlog at a consumer marketplace was growing faster than the team could hire.".to_string(),
            task: "Reduce resolution time while keeping customer satisfaction steady.".to_string(),
            action: "Scoped an AI assistant with engineering, aligned operations stakeholders on escalation rules, and rolled it out behind a staged experiment.".to_string(),
            results: "Median resolution time fell from 3 days to 4 hours and satisfaction rose 18%.".to_string(),
            skills: strings(&["machine learning", "stakeholder management", "cross-functional"]),
            quantified_outcomes: strings(&["3 days to 4 hours resolution", "18% CSAT increase"]),
            industry: "Consumer Marketplace".to_string(),
            complexity: "high".to_string(),
        },
        CaseStory {
            title: "Booking Flow Research".to_string(),
            situation: "Clinic staff reported that patients abandoned online booking midway.".to_string(),
            task: "Find the root cause and fix the booking experience.".to_string(),
            action: "Ran contextual interviews with clinic staff, prioritized fixes with design, and shipped a simplified flow.".to_string(),
            results: "Completed bookings rose 32% and related support tickets fell 25%.".to_string(),
            skills: strings(&["user research", "prioritization", "design collaboration"]),
            quantified_outcomes: strings(&["32% booking increase", "25% fewer tickets"]),
            industry: "Healthcare Technology".to_string(),
            complexity: "medium".to_string(),
        },
        CaseStory {
            title: "Organic Growth Engine".to_string(),
            situation: "Paid acquisition costs were rising and organic traffic had plateaued.".to_string(),
            task: "Build a repeatable organic acquisition channel.".to_string(),
            action: "Built an SEO content program with data-driven topic selection and weekly metrics reviews.".to_string(),
            results: "Organic traffic grew 120% in 9 months and blended acquisition cost dropped 30%.".to_string(),
            skills: strings(&["growth", "seo", "data analysis"]),
            quantified_outcomes: strings(&["120% traffic growth", "30% lower acquisition cost"]),
            industry: "Healthcare Technology".to_string(),
            complexity: "medium".to_string(),
        },
        CaseStory {
            title: "Lead Generation Experimentation Program".to_string(),
            situation: "Marketing and product disagreed on which changes moved qualified leads.".to_string(),
            task: "Create a shared experimentation process and grow lead volume.".to_string(),
            action: "Set up a weekly experiment review, defined metrics with both teams, and prioritized tests by expected impact.".to_string(),
            results: "Qualified leads grew 45% over two quarters with 20 experiments shipped.".to_string(),
            skills: strings(&["experimentation", "metrics", "stakeholder alignment", "leadership"]),
            quantified_outcomes: strings(&["45% more qualified leads", "20 experiments"]),
            industry: "B2B SaaS".to_string(),
            complexity: "medium".to_string(),
        },
    ]
}
