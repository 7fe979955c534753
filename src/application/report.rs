//! `Application_Optimization_Report.json`.

use super::analysis::{JobAnalysis, KeywordCategory, contains_term};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Below this share of matched keywords a category gets a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub matched: Vec<String>,
    pub count: usize,
    pub total: usize,
}

/// How much of the posting's vocabulary the tailored resume uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    pub keyword_matches: BTreeMap<KeywordCategory, CategoryMatch>,
    pub overall_match_percentage: f64,
    pub optimization_suggestions: Vec<String>,
}

/// Check each posting keyword against the resume text.
pub fn keyword_report(analysis: &JobAnalysis, resume_text: &str) -> KeywordReport {
    let resume_text = resume_text.to_lowercase();
    let mut keyword_matches = BTreeMap::new();
    let mut optimization_suggestions = Vec::new();
    let (mut matched_total, mut possible_total) = (0, 0);

    for (category, keywords) in &analysis.keywords {
        let matched: Vec<String> = keywords
            .iter()
            .filter(|k| contains_term(&resume_text, k))
            .cloned()
            .collect();
        matched_total += matched.len();
        possible_total += keywords.len();

        if (matched.len() as f64) < keywords.len() as f64 * SUGGESTION_THRESHOLD {
            optimization_suggestions.push(format!(
                "Consider adding more {} keywords",
                category.label()
            ));
        }
        keyword_matches.insert(
            *category,
            CategoryMatch {
                count: matched.len(),
                total: keywords.len(),
                matched,
            },
        );
    }

    let overall = if possible_total == 0 {
        0.0
    } else {
        matched_total as f64 / possible_total as f64 * 100.0
    };

    KeywordReport {
        keyword_matches,
        overall_match_percentage: (overall * 10.0).round() / 10.0,
        optimization_suggestions,
    }
}

/// The JSON summary saved next to the generated documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationSummary {
    pub company_name: String,
    pub role_title: String,
    pub generation_date: NaiveDate,
    pub keywords_identified: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_analysis_summary: Option<String>,
    pub must_have_requirements: Vec<String>,
    pub success_metrics: Vec<String>,
    pub optimization_focus: String,
    pub personalization_elements: Vec<String>,
    pub recommendations: Vec<String>,
    pub resume_keyword_report: KeywordReport,
}

pub fn optimization_summary(
    company: &str,
    role: &str,
    analysis: Option<&JobAnalysis>,
    resume_text: &str,
    date: NaiveDate,
) -> OptimizationSummary {
    let empty = JobAnalysis::default();
    let analysis_or_empty = analysis.unwrap_or(&empty);

    OptimizationSummary {
        company_name: company.to_string(),
        role_title: role.to_string(),
        generation_date: date,
        keywords_identified: analysis_or_empty.keyword_count(),
        job_analysis_summary: analysis.map(JobAnalysis::summary),
        must_have_requirements: analysis_or_empty.must_have().to_vec(),
        success_metrics: analysis_or_empty.success_metrics.clone(),
        optimization_focus: optimization_focus(role).to_string(),
        personalization_elements: vec![
            "Company-specific mission and values alignment".to_string(),
            format!("Recent news and developments at {}", company),
            "Product portfolio and competitive positioning insights".to_string(),
            format!("Growth challenges and opportunities specific to {}", company),
        ],
        recommendations: [
            "Review job analysis keywords and ensure resume incorporates key terms naturally",
            "Customize cover letter opening with specific company research insights",
            "Select case stories that best demonstrate relevant experience for this role",
            "Practice articulating quantified outcomes from selected examples",
        ]
        .map(String::from)
        .to_vec(),
        resume_keyword_report: keyword_report(analysis_or_empty, resume_text),
    }
}

/// What to emphasize for a role family.
pub fn optimization_focus(role: &str) -> &'static str {
    let role = role.to_lowercase();
    if role.contains("growth") {
        "Growth metrics, conversion optimization, and user acquisition"
    } else if role.contains("senior") || role.contains("principal") {
        "Leadership experience, strategic thinking, and cross-functional collaboration"
    } else if role.contains("strategy") {
        "Strategic planning, competitive analysis, and roadmap development"
    } else {
        "Product management fundamentals and execution capabilities"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analysis::analyze_job_description;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
    }

    #[test]
    fn test_keyword_report_percentages() {
        let analysis = analyze_job_description("SQL, Python, and Tableau. Figma and Jira daily.");
        let report = keyword_report(&analysis, "Built dashboards in SQL and Tableau with Figma");

        let technical = &report.keyword_matches[&KeywordCategory::TechnicalSkills];
        assert_eq!(technical.matched, ["sql", "tableau"]);
        assert_eq!((technical.count, technical.total), (2, 3));

        let tools = &report.keyword_matches[&KeywordCategory::ToolsPlatforms];
        assert_eq!((tools.count, tools.total), (1, 2));

        // 3 of 5
        assert_eq!(report.overall_match_percentage, 60.0);
        assert!(report.optimization_suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_below_half() {
        let analysis = analyze_job_description("Strong leadership, communication, and mentoring.");
        let report = keyword_report(&analysis, "Led a team");
        assert_eq!(report.overall_match_percentage, 0.0);
        assert_eq!(
            report.optimization_suggestions,
            ["Consider adding more soft skills keywords"]
        );
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let analysis = analyze_job_description("sql python tableau");
        let report = keyword_report(&analysis, "sql");
        assert_eq!(report.overall_match_percentage, 33.3);
    }

    #[test]
    fn test_summary_without_posting() {
        let summary = optimization_summary("Acme", "Growth PM", None, "", date());
        assert_eq!(summary.keywords_identified, 0);
        assert!(summary.job_analysis_summary.is_none());
        assert_eq!(summary.optimization_focus, optimization_focus("growth"));
        assert_eq!(summary.recommendations.len(), 4);
        assert_eq!(summary.resume_keyword_report.overall_match_percentage, 0.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["generation_date"], "2026-10-05");
        assert_eq!(json["personalization_elements"][1], "Recent news and developments at Acme");
    }

    #[test]
    fn test_focus_by_role() {
        assert!(optimization_focus("Principal PM").starts_with("Leadership"));
        assert!(optimization_focus("Strategy Manager").starts_with("Strategic planning"));
        assert!(optimization_focus("PM").starts_with("Product management"));
    }
}
