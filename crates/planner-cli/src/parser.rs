use anyhow::{anyhow, Result};
use chrono::{NaiveDate, TimeZone};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use planner_core::date::{format_date, parse_date};

/// Turns user input into a `YYYYMMDD` date.
///
/// Strict `YYYYMMDD` input is passed through unchanged; anything else is
/// read as a phrase ("tomorrow", "next friday") relative to `today`.
pub fn parse_task_date(input: &str, today: NaiveDate, tz: Tz) -> Result<String> {
    let input = input.trim();
    if input.is_empty() || parse_date(input).is_ok() {
        return Ok(input.to_string());
    }

    let noon = today
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow!("cannot build a reference time for {}", today))?;
    let reference = tz
        .from_local_datetime(&noon)
        .earliest()
        .ok_or_else(|| anyhow!("noon does not exist on {} in {}", today, tz))?;

    parse_date_string(input, reference, Dialect::Uk)
        .map(|dt| format_date(dt.date_naive()))
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", input, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[rstest]
    #[case("20240301", "20240301")]
    #[case("", "")]
    #[case("  20240229 ", "20240229")]
    #[case("tomorrow", "20240116")]
    #[case("today", "20240115")]
    fn test_parse_task_date(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_task_date(input, today(), Tz::UTC).unwrap(), expected);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_task_date("whenever", today(), Tz::UTC).is_err());
    }
}
