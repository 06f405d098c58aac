//! A station-year of daily rainfall laid out on a fixed 12 x 31 calendar grid.

use crate::{
    calendar::{days_in_month, days_in_year, DAY_SLOTS, MONTHS_PER_YEAR},
    error::MalformedInput,
};

use super::{parse_rainfall, DailyValue, RawDay};

#[derive(Debug, Clone, PartialEq)]
pub struct StationYearGrid {
    year: i32,
    slots: [[DailyValue; DAY_SLOTS]; MONTHS_PER_YEAR],
}

impl StationYearGrid {
    /// Lays out one row per calendar day, in order, onto the grid. Slots past
    /// the end of a month stay `NotApplicable`.
    pub fn build(year: i32, rows: &[RawDay]) -> Result<Self, MalformedInput> {
        let expected = days_in_year(year);
        if rows.len() != expected {
            return Err(MalformedInput::RowCount {
                expected,
                found: rows.len(),
            });
        }

        let mut slots = [[DailyValue::NotApplicable; DAY_SLOTS]; MONTHS_PER_YEAR];
        let mut rows = rows.iter().enumerate();

        for (month_idx, month) in slots.iter_mut().enumerate() {
            let days = days_in_month(year, month_idx + 1);
            for slot in month.iter_mut().take(days) {
                // Row count was checked above, so every real day has a row.
                let Some((idx, row)) = rows.next() else {
                    break;
                };
                let field = row.total_precip.as_deref();
                *slot = parse_rainfall(field).ok_or_else(|| MalformedInput::UnparseableField {
                    row: idx + 1,
                    date: row.date.clone(),
                    field: field.unwrap_or("").to_string(),
                })?;
            }
        }

        Ok(StationYearGrid { year, slots })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Value for `month` (1-based) and day-slot index `day` (0-based).
    #[cfg(test)]
    pub fn get(&self, month: usize, day: usize) -> DailyValue {
        self.slots[month - 1][day]
    }

    /// The 31 day-slots of `month` (1-based).
    pub fn month(&self, month: usize) -> &[DailyValue; DAY_SLOTS] {
        &self.slots[month - 1]
    }

    #[cfg(test)]
    pub fn applicable_slots(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|value| value.is_applicable())
            .count()
    }
}

// -- Tests -------------------------------------------------------------------
