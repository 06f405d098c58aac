//! Reconciles the two stations' readings for a single day.

use crate::{error::PrecondMergeError, reading::DailyValue};

/// Combines two readings of the same day.
///
/// Both missing counts as a dry day, one missing defers to the other station,
/// and two recorded values are averaged. Neither side may be `NotApplicable`.
pub fn merge(a: DailyValue, b: DailyValue) -> Result<DailyValue, PrecondMergeError> {
    use DailyValue::*;

    match (a, b) {
        (NotApplicable, _) | (_, NotApplicable) => Err(PrecondMergeError),
        (Missing, Missing) => Ok(Recorded(0.0)),
        (Missing, Recorded(mm)) | (Recorded(mm), Missing) => Ok(Recorded(mm)),
        (Recorded(x), Recorded(y)) => Ok(Recorded((x + y) / 2.0)),
    }
}

/// Millimetres for a merged day.
pub fn merged_amount(a: DailyValue, b: DailyValue) -> Result<f64, PrecondMergeError> {
    Ok(merge(a, b)?.amount().unwrap_or(0.0))
}

// -- Tests -------------------------------------------------------------------
