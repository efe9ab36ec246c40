use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::Semester;
use crate::dates::days_inclusive;

/// A semester that contains the reference date, with its rest-day set
/// generated. Fixed holidays stay on the semester and are checked separately
/// so a holiday falling on a rest day is only ever excluded once.
#[derive(Debug)]
pub struct ActiveSemester<'a> {
    pub semester: &'a Semester,
    pub rest_days: HashSet<NaiveDate>,
}

/// Counts shown in the semester breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterBreakdown {
    pub weekend_count: usize,
    pub holiday_count: usize,
    pub teaching_day_count: u32,
}

/// The `week`-th occurrence bucket a day of month falls in: days 1-7 are
/// week 1, 8-14 week 2, and so on.
fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() + 6) / 7
}

/// Generates the semester's rest days: every Sunday when the weekly rule is
/// on, plus every Saturday matched by an irregular rule. Fixed holidays are
/// not included here.
pub fn rest_days(semester: &Semester) -> HashSet<NaiveDate> {
    let mut days = HashSet::new();

    for date in days_inclusive(semester.start, semester.end) {
        match date.weekday() {
            Weekday::Sun if semester.sundays_off => {
                days.insert(date);
            }
            Weekday::Sat => {
                let week = week_of_month(date);
                let matched = semester
                    .saturday_rules
                    .iter()
                    .any(|rule| rule.month0 == date.month0() && rule.week == week);
                if matched {
                    days.insert(date);
                }
            }
            _ => {}
        }
    }

    days
}

/// Finds the semester whose inclusive range contains `date` and attaches its
/// rest-day set. `None` means the date falls between semesters, which is a
/// normal outcome rather than an error. Configuration validation guarantees
/// at most one semester can match.
pub fn resolve(semesters: &[Semester], date: NaiveDate) -> Option<ActiveSemester<'_>> {
    semesters
        .iter()
        .find(|semester| semester.start <= date && date <= semester.end)
        .map(|semester| ActiveSemester {
            rest_days: rest_days(semester),
            semester,
        })
}

fn is_teaching_day(active: &ActiveSemester<'_>, date: NaiveDate) -> bool {
    !active.rest_days.contains(&date) && !active.semester.holidays.contains(&date)
}

/// Number of teaching days in `[from, semester.end]`: dates in neither the
/// rest-day set nor the holiday list. Zero when `from` is already past the
/// semester end.
pub fn remaining_teaching_days(active: &ActiveSemester<'_>, from: NaiveDate) -> u32 {
    days_inclusive(from, active.semester.end)
        .filter(|&date| is_teaching_day(active, date))
        .count() as u32
}

/// Per-semester totals. The teaching-day count is the remaining count taken
/// from the semester start, so it never double-subtracts a holiday that also
/// falls on a rest day.
pub fn breakdown(active: &ActiveSemester<'_>) -> SemesterBreakdown {
    SemesterBreakdown {
        weekend_count: active.rest_days.len(),
        holiday_count: active.semester.holidays.len(),
        teaching_day_count: remaining_teaching_days(active, active.semester.start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_semesters, SaturdayRule, Semester};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn first_semester() -> Semester {
        Semester {
            name: "First Semester".to_string(),
            start: ymd(2024, 7, 10),
            end: ymd(2024, 10, 6),
            sundays_off: true,
            saturday_rules: vec![SaturdayRule { month0: 6, week: 3 }],
            holidays: vec![ymd(2024, 9, 6)],
        }
    }

    #[test]
    fn third_july_saturday_is_a_rest_day() {
        let days = rest_days(&first_semester());
        // 2024-07-20 is the Saturday in week ceil(20/7) = 3 of July.
        assert!(days.contains(&ymd(2024, 7, 20)));
        // 2024-07-13 is a week-2 Saturday, not covered by the rule.
        assert!(!days.contains(&ymd(2024, 7, 13)));
    }

    #[test]
    fn every_sunday_is_a_rest_day_when_flag_is_on() {
        let semester = first_semester();
        let days = rest_days(&semester);
        assert!(days.contains(&ymd(2024, 7, 14)));
        assert!(days.contains(&ymd(2024, 10, 6)));
        let mut no_sundays = semester;
        no_sundays.sundays_off = false;
        assert!(!rest_days(&no_sundays).contains(&ymd(2024, 7, 14)));
    }

    #[test]
    fn holidays_are_not_part_of_the_rest_day_set() {
        let days = rest_days(&first_semester());
        assert!(!days.contains(&ymd(2024, 9, 6)));
    }

    #[test]
    fn generation_is_deterministic() {
        let semester = first_semester();
        assert_eq!(rest_days(&semester), rest_days(&semester));
    }

    #[test]
    fn resolver_picks_the_containing_semester() {
        let semesters = load_semesters(None).unwrap();
        let active = resolve(&semesters, ymd(2024, 8, 15)).unwrap();
        assert_eq!(active.semester.name, "First Semester");
        let active = resolve(&semesters, ymd(2024, 11, 1)).unwrap();
        assert_eq!(active.semester.name, "Second Semester");
        // Range bounds are inclusive on both ends.
        assert!(resolve(&semesters, ymd(2024, 7, 10)).is_some());
        assert!(resolve(&semesters, ymd(2025, 1, 5)).is_some());
    }

    #[test]
    fn resolver_reports_dates_outside_every_semester() {
        let semesters = load_semesters(None).unwrap();
        assert!(resolve(&semesters, ymd(2024, 7, 9)).is_none());
        assert!(resolve(&semesters, ymd(2025, 1, 6)).is_none());
    }

    #[test]
    fn remaining_days_skip_rest_days_and_holidays() {
        let semester = first_semester();
        let active = ActiveSemester {
            rest_days: rest_days(&semester),
            semester: &semester,
        };
        // Final week of the semester: Sep 30 (Mon) .. Oct 6 (Sun). Only the
        // closing Sunday is excluded.
        assert_eq!(remaining_teaching_days(&active, ymd(2024, 9, 30)), 6);
        // Sep 5 (Thu) .. Oct 6: the Sep 6 holiday drops one more day.
        let with_holiday = remaining_teaching_days(&active, ymd(2024, 9, 5));
        let without_holiday = remaining_teaching_days(&active, ymd(2024, 9, 7));
        assert_eq!(with_holiday, without_holiday + 1);
    }

    #[test]
    fn remaining_days_never_increase_as_the_reference_advances() {
        let semester = first_semester();
        let active = ActiveSemester {
            rest_days: rest_days(&semester),
            semester: &semester,
        };
        let mut previous = u32::MAX;
        for date in crate::dates::days_inclusive(semester.start, semester.end) {
            let remaining = remaining_teaching_days(&active, date);
            assert!(remaining <= previous);
            previous = remaining;
        }
    }

    #[test]
    fn remaining_days_past_the_end_is_zero() {
        let semester = first_semester();
        let active = ActiveSemester {
            rest_days: rest_days(&semester),
            semester: &semester,
        };
        assert_eq!(remaining_teaching_days(&active, ymd(2024, 10, 7)), 0);
    }

    #[test]
    fn breakdown_counts_each_exclusion_once() {
        // Holiday placed on a Sunday: subtracting set sizes from the span
        // would lose a day twice, the counter must not.
        let semester = Semester {
            name: "Overlap".to_string(),
            start: ymd(2024, 7, 8),
            end: ymd(2024, 7, 21),
            sundays_off: true,
            saturday_rules: Vec::new(),
            holidays: vec![ymd(2024, 7, 14)],
        };
        let active = ActiveSemester {
            rest_days: rest_days(&semester),
            semester: &semester,
        };
        let breakdown = breakdown(&active);
        assert_eq!(breakdown.weekend_count, 2);
        assert_eq!(breakdown.holiday_count, 1);
        // 14 days minus 2 Sundays; the holiday is one of those Sundays.
        assert_eq!(breakdown.teaching_day_count, 12);
    }
}
