//! Salary string parsing

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit regex"));

/// Largest number embedded in a free-form salary string, or 0 when there is none.
///
/// No unit awareness: "₹8-12 LPA" yields 12. Digit runs too long for `u64`
/// are skipped.
pub fn parse_salary_max(salary: &str) -> u64 {
    DIGIT_RUN
        .find_iter(salary)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_digitless() {
        assert_eq!(parse_salary_max(""), 0);
        assert_eq!(parse_salary_max("no digits here"), 0);
        assert_eq!(parse_salary_max("Not disclosed"), 0);
    }

    #[test]
    fn test_range_takes_upper_bound() {
        assert_eq!(parse_salary_max("₹8-12 LPA"), 12);
        assert_eq!(parse_salary_max("12-8"), 12);
        assert_eq!(parse_salary_max("₹25 LPA"), 25);
    }

    #[test]
    fn test_decimal_is_split_into_runs() {
        assert_eq!(parse_salary_max("₹3.5-6 LPA"), 6);
        assert_eq!(parse_salary_max("₹4.75 LPA"), 75);
    }

    #[test]
    fn test_oversized_run_is_skipped() {
        assert_eq!(parse_salary_max("99999999999999999999999 or 7"), 7);
    }
}
