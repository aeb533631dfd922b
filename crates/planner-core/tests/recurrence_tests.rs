use chrono::{Datelike, Days, NaiveDate};
use planner_core::date::{format_date, parse_date};
use planner_core::error::RecurrenceError;
use planner_core::recurrence::{next_date, RecurrenceRule, MAX_DAILY_INTERVAL};
use proptest::prelude::*;

/// Stepwise reference: keep adding the interval until past `now`.
fn walk_daily(anchor: NaiveDate, now: NaiveDate, days: u32) -> NaiveDate {
    let mut candidate = anchor + Days::new(u64::from(days));
    while candidate <= now {
        candidate = candidate + Days::new(u64::from(days));
    }
    candidate
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 ..= 2199-12-31
    (0u64..109_572).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Days::new(offset)
    })
}

proptest! {
    #[test]
    fn daily_matches_stepwise_walk(
        anchor in any_date(),
        now in any_date(),
        days in 1u32..=MAX_DAILY_INTERVAL,
    ) {
        let next = RecurrenceRule::Daily(days).next_after(anchor, now).unwrap();
        prop_assert_eq!(next, walk_daily(anchor, now, days));
    }

    #[test]
    fn daily_is_smallest_step_after_now(
        anchor in any_date(),
        now in any_date(),
        days in 1u32..=MAX_DAILY_INTERVAL,
    ) {
        let next = RecurrenceRule::Daily(days).next_after(anchor, now).unwrap();
        let offset = (next - anchor).num_days();

        prop_assert!(next > now);
        prop_assert!(offset > 0);
        prop_assert_eq!(offset % i64::from(days), 0);
        // One step earlier is either the anchor itself or not after now.
        let previous = next - Days::new(u64::from(days));
        prop_assert!(previous == anchor || previous <= now);
    }

    #[test]
    fn daily_reanchoring_advances_one_interval(
        anchor in any_date(),
        now in any_date(),
        days in 1u32..=MAX_DAILY_INTERVAL,
    ) {
        let rule = format!("d {}", days);
        let first = next_date(now, &format_date(anchor), &rule).unwrap();
        let first_date = parse_date(&first).unwrap();

        let second = next_date(first_date, &first, &rule).unwrap();
        let second_date = parse_date(&second).unwrap();
        prop_assert_eq!((second_date - first_date).num_days(), i64::from(days));
    }

    #[test]
    fn yearly_keeps_month_and_day(anchor in any_date(), now in any_date()) {
        let next = RecurrenceRule::Yearly.next_after(anchor, now).unwrap();

        prop_assert!(next > now);
        prop_assert!(next.year() > anchor.year());
        let leap_target = NaiveDate::from_ymd_opt(next.year(), 2, 29).is_some();
        if anchor.month() == 2 && anchor.day() == 29 && leap_target {
            prop_assert_eq!((next.month(), next.day()), (2, 29));
        } else if anchor.month() == 2 && anchor.day() == 29 {
            prop_assert_eq!((next.month(), next.day()), (3, 1));
        } else {
            prop_assert_eq!((next.month(), next.day()), (anchor.month(), anchor.day()));
        }
    }

    #[test]
    fn yearly_is_smallest_year_after_now(anchor in any_date(), now in any_date()) {
        let next = RecurrenceRule::Yearly.next_after(anchor, now).unwrap();
        let years = next.year() - anchor.year();
        if years > 1 {
            // The candidate one year earlier must not be after now.
            let earlier = anchor.with_year(next.year() - 1)
                .or_else(|| NaiveDate::from_ymd_opt(next.year() - 1, 3, 1))
                .unwrap();
            prop_assert!(earlier <= now);
        }
    }

    #[test]
    fn out_of_range_daily_steps_are_rejected(days in 401u32..100_000) {
        let result = next_date(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "20240101",
            &format!("d {}", days),
        );
        prop_assert!(
            matches!(result, Err(RecurrenceError::InvalidDailyParameter(_))),
            "expected InvalidDailyParameter for d {}", days
        );
    }

    #[test]
    fn unknown_rule_kinds_are_rejected(kind in "[a-ce-xz][a-z]{0,3}", arg in 0u32..50) {
        let result = next_date(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "20240101",
            &format!("{} {}", kind, arg),
        );
        prop_assert!(
            matches!(result, Err(RecurrenceError::UnsupportedRule(_))),
            "expected UnsupportedRule for {} {}", kind, arg
        );
    }
}

#[test]
fn test_anchor_equal_to_now_is_never_returned() {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(next_date(now, "20240601", "d 1").unwrap(), "20240602");
    assert_eq!(next_date(now, "20240601", "y").unwrap(), "20250601");
}
