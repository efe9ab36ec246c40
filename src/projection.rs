use std::fmt;

/// Minimum attendance fraction the student has to maintain.
const REQUIRED_ATTENDANCE: f64 = 0.8;

/// Validated class counts. Built through [`validate`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceInput {
    pub total_held: u32,
    pub attended: u32,
}

/// Input fields that failed validation. Both fields are checked before
/// reporting so the caller sees every problem at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TotalClassesHeld,
    ClassesAttended,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::TotalClassesHeld => write!(f, "total classes held"),
            InputField::ClassesAttended => write!(f, "classes attended"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputErrors {
    pub fields: Vec<InputField>,
}

impl fmt::Display for InputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input for ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{field}")?;
        }
        write!(
            f,
            ": each value must be a non-negative class count and classes attended cannot exceed classes held"
        )
    }
}

impl std::error::Error for InputErrors {}

/// Checks both fields and reports every offending one in a single error.
/// A count is valid when it is non-negative and representable as a `u32`;
/// anything larger is rejected rather than wrapped.
pub fn validate(total_held: i64, attended: i64) -> Result<AttendanceInput, InputErrors> {
    let mut fields = Vec::new();

    let held = u32::try_from(total_held).ok();
    if held.is_none() {
        fields.push(InputField::TotalClassesHeld);
    }

    let attended_count = u32::try_from(attended).ok();
    if attended_count.is_none() || attended > total_held {
        fields.push(InputField::ClassesAttended);
    }

    match (held, attended_count) {
        (Some(total_held), Some(attended)) if fields.is_empty() => Ok(AttendanceInput {
            total_held,
            attended,
        }),
        _ => Err(InputErrors { fields }),
    }
}

/// Where the student stands relative to the 80% threshold. Only the current
/// percentage drives this; the projected figure is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionStatus {
    AtOrAboveThreshold,
    NeedsMoreClasses(u32),
    Infeasible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub current_pct: f64,
    pub projected_pct: f64,
    pub status: ProjectionStatus,
}

/// Projects attendance over the rest of the semester. `remaining` is the
/// number of teaching days left; each is assumed to hold one class.
pub fn project(input: AttendanceInput, remaining: u32) -> Projection {
    let held = f64::from(input.total_held);
    let attended = f64::from(input.attended);
    let remaining_f = f64::from(remaining);

    let current_pct = if input.total_held == 0 {
        0.0
    } else {
        attended / held * 100.0
    };

    let projected_pct = if input.total_held == 0 && remaining == 0 {
        0.0
    } else {
        (attended + remaining_f) / (held + remaining_f) * 100.0
    };

    let status = if current_pct >= 80.0 {
        ProjectionStatus::AtOrAboveThreshold
    } else {
        // Attending x of the remaining classes grows numerator and
        // denominator alike; a partial class cannot be attended, so round up.
        let needed = (REQUIRED_ATTENDANCE * (held + remaining_f) - attended).ceil();
        if needed > remaining_f {
            ProjectionStatus::Infeasible
        } else {
            ProjectionStatus::NeedsMoreClasses(needed.max(0.0) as u32)
        }
    };

    Projection {
        current_pct,
        projected_pct,
        status,
    }
}
