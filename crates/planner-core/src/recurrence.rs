use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::date::{format_date, parse_date};
use crate::error::RecurrenceError;

/// Largest step accepted by a daily rule.
pub const MAX_DAILY_INTERVAL: u32 = 400;

/// A parsed repeat rule.
///
/// Only two shapes exist: `"d <n>"` (every `n` days) and `"y"` (every year).
/// Anything else is rejected by [`FromStr`] and never reaches date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceRule {
    Daily(u32),
    Yearly,
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        if rule.is_empty() {
            return Err(RecurrenceError::EmptyRule);
        }

        // Tokens are separated by exactly one ASCII space.
        let tokens: Vec<&str> = rule.split(' ').collect();
        match tokens.first().copied() {
            Some("d") => {
                let invalid = || RecurrenceError::InvalidDailyParameter(rule.to_string());
                let [_, days] = tokens.as_slice() else {
                    return Err(invalid());
                };
                let days: i64 = days.parse().map_err(|_| invalid())?;
                match u32::try_from(days) {
                    Ok(days) if (1..=MAX_DAILY_INTERVAL).contains(&days) => {
                        Ok(RecurrenceRule::Daily(days))
                    }
                    _ => Err(invalid()),
                }
            }
            // Trailing tokens after "y" are ignored.
            Some("y") => Ok(RecurrenceRule::Yearly),
            _ => Err(RecurrenceError::UnsupportedRule(rule.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Daily(days) => write!(f, "d {}", days),
            RecurrenceRule::Yearly => write!(f, "y"),
        }
    }
}

impl RecurrenceRule {
    /// Finds the first occurrence generated from `anchor` that falls
    /// strictly after `reference`.
    ///
    /// The anchor itself is never a candidate: the earliest possible result
    /// is one full step past it.
    pub fn next_after(
        &self,
        anchor: NaiveDate,
        reference: NaiveDate,
    ) -> Result<NaiveDate, RecurrenceError> {
        match *self {
            RecurrenceRule::Daily(days) => next_daily(anchor, reference, days),
            RecurrenceRule::Yearly => next_yearly(anchor, reference),
        }
    }
}

/// Computes the next date for a task.
///
/// # Arguments
/// * `reference` - The date-only "now" the result must come after
/// * `anchor` - The task's current date in `YYYYMMDD` form
/// * `rule` - The raw repeat rule
///
/// # Returns
/// * `Result<String, RecurrenceError>` - The next date in `YYYYMMDD` form
///
/// # Behavior
/// - Anchor is validated before the rule, so a bad anchor wins over a bad rule
/// - The rule is parsed on every call; nothing is cached
pub fn next_date(reference: NaiveDate, anchor: &str, rule: &str) -> Result<String, RecurrenceError> {
    let anchor_date =
        parse_date(anchor).map_err(|_| RecurrenceError::InvalidAnchorDate(anchor.to_string()))?;
    let rule: RecurrenceRule = rule.parse()?;
    let next = rule.next_after(anchor_date, reference)?;
    Ok(format_date(next))
}

// Same result as stepping `days` at a time until past `reference`, without
// the walk: k = max(1, elapsed / days + 1) is the smallest step count that
// lands strictly after it.
fn next_daily(anchor: NaiveDate, reference: NaiveDate, days: u32) -> Result<NaiveDate, RecurrenceError> {
    let step = i64::from(days);
    let elapsed = (reference - anchor).num_days();
    let steps = if elapsed < 0 { 1 } else { elapsed / step + 1 };

    let offset = u64::try_from(steps * step).map_err(|_| RecurrenceError::DateOutOfRange)?;
    anchor
        .checked_add_days(Days::new(offset))
        .ok_or(RecurrenceError::DateOutOfRange)
}

fn next_yearly(anchor: NaiveDate, reference: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
    // Starting at the reference year leaves at most one extra step.
    let mut years = (reference.year() - anchor.year()).max(1);
    loop {
        let candidate = shift_years(anchor, years)?;
        if candidate > reference {
            return Ok(candidate);
        }
        years += 1;
    }
}

/// Moves `anchor` forward by whole years. A Feb 29 anchor lands on Mar 1
/// in non-leap years and back on Feb 29 in leap years.
fn shift_years(anchor: NaiveDate, years: i32) -> Result<NaiveDate, RecurrenceError> {
    let year = anchor
        .year()
        .checked_add(years)
        .ok_or(RecurrenceError::DateOutOfRange)?;
    match anchor.with_year(year) {
        Some(date) => Ok(date),
        None => NaiveDate::from_ymd_opt(year, 3, 1).ok_or(RecurrenceError::DateOutOfRange),
    }
}
