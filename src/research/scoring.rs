//! The 4-40 priority rubric.
//!
//! Four ratings from 1 to 10, either supplied as JSON on the command line or
//! asked for interactively.

use crate::error::{JobkitError, Result};
use crate::pipeline::PriorityScores;
use serde_json::{Map, Value};
use std::io::{BufRead, Write};

/// Rating used for any key a `--scores` object leaves out.
pub const DEFAULT_RATING: u32 = 8;

pub struct Criterion {
    pub key: &'static str,
    pub label: &'static str,
    pub question: &'static str,
}

/// Rubric criteria in prompting order.
pub const CRITERIA: [Criterion; 4] = [
    Criterion {
        key: "role_appeal",
        label: "Role Appeal",
        question: "How excited are you about this specific role?",
    },
    Criterion {
        key: "company_fit",
        label: "Company Fit",
        question: "How well does the company align with your values/goals?",
    },
    Criterion {
        key: "growth_potential",
        label: "Growth Potential",
        question: "What learning/advancement opportunities exist?",
    },
    Criterion {
        key: "likelihood",
        label: "Likelihood",
        question: "How competitive are you for this role?",
    },
];

/// Parse the `--scores` argument into a JSON object.
///
/// Kept separate from [`scores_from_map`] so callers can treat unparseable
/// input differently from out-of-range ratings.
pub fn parse_scores_json(json: &str) -> std::result::Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Build scores from a JSON object. Missing keys default to
/// [`DEFAULT_RATING`]; anything outside 1-10 is a validation error.
pub fn scores_from_map(map: &Map<String, Value>) -> Result<PriorityScores> {
    let mut ratings = [DEFAULT_RATING; 4];
    for (slot, criterion) in ratings.iter_mut().zip(CRITERIA.iter()) {
        let Some(value) = map.get(criterion.key) else {
            continue;
        };
        *slot = value
            .as_u64()
            .filter(|v| (1..=10).contains(v))
            .map(|v| v as u32)
            .ok_or_else(|| {
                JobkitError::ValidationError(format!(
                    "{} must be a whole number between 1 and 10 (found {})",
                    criterion.key, value
                ))
            })?;
    }
    Ok(from_ratings(ratings))
}

/// Ask for each rating on `output`, reading answers from `input`.
///
/// Non-numbers and out-of-range values are asked again.
pub fn prompt_scores<R: BufRead, W: Write>(
    company: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PriorityScores> {
    let io_err = |e: std::io::Error| JobkitError::UserError(format!("failed to prompt for scores: {}", e));

    writeln!(output, "\nPlease rate {} on a scale of 1-10:", company).map_err(io_err)?;

    let mut ratings = [0u32; 4];
    for (slot, criterion) in ratings.iter_mut().zip(CRITERIA.iter()) {
        loop {
            write!(output, "{} - {} (1-10): ", criterion.label, criterion.question)
                .map_err(io_err)?;
            output.flush().map_err(io_err)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(io_err)? == 0 {
                return Err(JobkitError::UserError(
                    "input ended before all scores were entered".to_string(),
                ));
            }

            match line.trim().parse::<i64>() {
                Ok(n) if (1..=10).contains(&n) => {
                    *slot = n as u32;
                    break;
                }
                Ok(_) => writeln!(output, "Please enter a number between 1 and 10.").map_err(io_err)?,
                Err(_) => writeln!(output, "Please enter a valid number.").map_err(io_err)?,
            }
        }
    }

    let scores = from_ratings(ratings);
    writeln!(output, "\nPriority Scoring Results:").map_err(io_err)?;
    for (criterion, (_, score)) in CRITERIA.iter().zip(scores.entries()) {
        writeln!(output, "  {}: {}/10", criterion.label, score).map_err(io_err)?;
    }
    writeln!(output, "  Total Score: {}/40", scores.total()).map_err(io_err)?;
    Ok(scores)
}

/// Display label for a rubric key, e.g. `role_appeal` -> `Role Appeal`.
pub fn label_for(key: &str) -> &str {
    CRITERIA
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.label)
        .unwrap_or(key)
}

fn from_ratings([role_appeal, company_fit, growth_potential, likelihood]: [u32; 4]) -> PriorityScores {
    PriorityScores {
        role_appeal,
        company_fit,
        growth_potential,
        likelihood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn map(json: &str) -> Map<String, Value> {
        parse_scores_json(json).unwrap()
    }

    #[test]
    fn test_missing_keys_default_to_eight() {
        let scores = scores_from_map(&map(r#"{"role_appeal": 10}"#)).unwrap();
        assert_eq!(scores.role_appeal, 10);
        assert_eq!(scores.company_fit, 8);
        assert_eq!(scores.total(), 34);
    }

    #[test]
    fn test_empty_object_totals_32() {
        assert_eq!(scores_from_map(&map("{}")).unwrap().total(), 32);
    }

    #[test]
    fn test_out_of_range_is_validation_error() {
        let err = scores_from_map(&map(r#"{"likelihood": 11}"#)).unwrap_err();
        assert!(matches!(err, JobkitError::ValidationError(_)));
        assert!(err.to_string().contains("likelihood"));

        let err = scores_from_map(&map(r#"{"company_fit": 0}"#)).unwrap_err();
        assert!(matches!(err, JobkitError::ValidationError(_)));
    }

    #[test]
    fn test_non_integer_is_validation_error() {
        assert!(scores_from_map(&map(r#"{"role_appeal": 7.5}"#)).is_err());
        assert!(scores_from_map(&map(r#"{"role_appeal": "9"}"#)).is_err());
    }

    #[test]
    fn test_malformed_json_is_reported_separately() {
        assert!(parse_scores_json("{role_appeal: 9").is_err());
        assert!(parse_scores_json("[9, 9, 9, 9]").is_err());
    }

    #[test]
    fn test_prompt_reasks_until_valid() {
        let mut input = Cursor::new("nine\n11\n9\n7\n8\n6\n");
        let mut output = Vec::new();

        let scores = prompt_scores("Acme", &mut input, &mut output).unwrap();
        assert_eq!(scores.role_appeal, 9);
        assert_eq!(scores.company_fit, 7);
        assert_eq!(scores.growth_potential, 8);
        assert_eq!(scores.likelihood, 6);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Please rate Acme on a scale of 1-10:"));
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("Please enter a number between 1 and 10."));
        assert!(text.contains("Total Score: 30/40"));
    }

    #[test]
    fn test_prompt_errors_on_eof() {
        let mut input = Cursor::new("9\n");
        let mut output = Vec::new();
        let err = prompt_scores("Acme", &mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("growth_potential"), "Growth Potential");
        assert_eq!(label_for("other"), "other");
    }
}
