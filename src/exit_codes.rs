//! Exit code constants for the jobkit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown company)
//! - 2: Validation failure (scores out of range, unusable input)
//! - 3: Config failure (unreadable or invalid config/profile)
//! - 4: Data failure (unreadable or malformed pipeline)
//! - 5: Template failure (undefined or unbalanced placeholders)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a company that is not in the pipeline.
pub const USER_ERROR: i32 = 1;

/// Validation failure: priority scores or input files that do not pass checks.
pub const VALIDATION_FAILURE: i32 = 2;

/// Config failure: `job_search_config.json` or the candidate profile could not be used.
pub const CONFIG_FAILURE: i32 = 3;

/// Data failure: the pipeline file could not be read, parsed, or written.
pub const DATA_FAILURE: i32 = 4;

/// Template failure: a template referenced a missing placeholder or has broken braces.
pub const TEMPLATE_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            VALIDATION_FAILURE,
            CONFIG_FAILURE,
            DATA_FAILURE,
            TEMPLATE_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
    }
}
