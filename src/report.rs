use std::fmt::Write;

use chrono::NaiveDate;

use crate::calendar::SemesterBreakdown;
use crate::config::Semester;
use crate::dates::format_iso_date;
use crate::projection::{Projection, ProjectionStatus};

pub fn render_projection(
    semester_name: &str,
    reference_date: NaiveDate,
    projection: &Projection,
) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{} (as of {})",
        semester_name,
        format_iso_date(reference_date)
    );
    let _ = writeln!(output, "Current attendance: {:.2}%", projection.current_pct);
    let _ = writeln!(
        output,
        "Projected attendance if every remaining class is attended: {:.2}%",
        projection.projected_pct
    );

    match projection.status {
        ProjectionStatus::AtOrAboveThreshold => {
            let _ = writeln!(output, "Great job! Your attendance is at or above 80%.");
        }
        ProjectionStatus::NeedsMoreClasses(needed) => {
            let _ = writeln!(
                output,
                "You need to attend at least {needed} more classes to reach 80% attendance."
            );
        }
        ProjectionStatus::Infeasible => {
            let _ = writeln!(
                output,
                "It's not possible to reach 80% attendance this semester."
            );
        }
    }

    output
}

/// Breakdown for the active semester, or the `--` sentinel lines when no
/// semester contains the reference date.
pub fn render_breakdown(active: Option<(&str, SemesterBreakdown)>) -> String {
    let mut output = String::new();

    match active {
        Some((name, breakdown)) => {
            let _ = writeln!(output, "{name}");
            let _ = writeln!(output, "Weekends: {}", breakdown.weekend_count);
            let _ = writeln!(output, "Public holidays: {}", breakdown.holiday_count);
            let _ = writeln!(output, "Working days: {}", breakdown.teaching_day_count);
        }
        None => {
            let _ = writeln!(output, "No active semester.");
            let _ = writeln!(output, "Weekends: --");
            let _ = writeln!(output, "Public holidays: --");
            let _ = writeln!(output, "Working days: --");
        }
    }

    output
}

pub fn render_semester_list(semesters: &[(&Semester, SemesterBreakdown)]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Configured semesters:");
    for (semester, breakdown) in semesters {
        let _ = writeln!(
            output,
            "- {}: {} to {}, {} working days ({} weekends, {} public holidays)",
            semester.name,
            format_iso_date(semester.start),
            format_iso_date(semester.end),
            breakdown.teaching_day_count,
            breakdown.weekend_count,
            breakdown.holiday_count
        );
    }

    output
}
