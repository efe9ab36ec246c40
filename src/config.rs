use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;

/// Academic calendar shipped with the binary; covers the 2024-25 year.
const DEFAULT_CALENDAR: &str = include_str!("../calendars/default.json");

/// Marks one Saturday of a month as a rest day: the `week`-th Saturday, where
/// `week = ceil(day_of_month / 7)`, in the month with 0-based index `month0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SaturdayRule {
    pub month0: u32,
    pub week: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Semester {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sundays_off: bool,
    #[serde(default)]
    pub saturday_rules: Vec<SaturdayRule>,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct CalendarFile {
    semesters: Vec<Semester>,
}

/// Loads the semester list from `path`, or the embedded default calendar when
/// no path is given. The list is validated and then never mutated.
pub fn load_semesters(path: Option<&Path>) -> anyhow::Result<Vec<Semester>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read calendar file {}", path.display()))?,
        None => DEFAULT_CALENDAR.to_string(),
    };

    let file: CalendarFile =
        serde_json::from_str(&raw).context("calendar file is not valid JSON")?;
    validate(&file.semesters)?;
    Ok(file.semesters)
}

/// Rejects calendars the resolver cannot handle unambiguously: inverted
/// ranges, out-of-order or overlapping semesters, and Saturday rules that can
/// never match a real date.
fn validate(semesters: &[Semester]) -> anyhow::Result<()> {
    if semesters.is_empty() {
        bail!("calendar defines no semesters");
    }

    for semester in semesters {
        if semester.start > semester.end {
            bail!(
                "semester '{}' starts {} but ends {}",
                semester.name,
                semester.start,
                semester.end
            );
        }
        for rule in &semester.saturday_rules {
            if rule.month0 > 11 {
                bail!(
                    "semester '{}' has a Saturday rule with month index {} (expected 0-11)",
                    semester.name,
                    rule.month0
                );
            }
            if rule.week == 0 || rule.week > 5 {
                bail!(
                    "semester '{}' has a Saturday rule with week {} (expected 1-5)",
                    semester.name,
                    rule.week
                );
            }
        }
    }

    for pair in semesters.windows(2) {
        if pair[1].start <= pair[0].end {
            bail!(
                "semesters '{}' and '{}' overlap or are out of order",
                pair[0].name,
                pair[1].name
            );
        }
    }

    Ok(())
}
