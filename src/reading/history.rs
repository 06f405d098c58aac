//! A station's grids over a consecutive run of years.

use crate::error::RainfallError;

use super::{Station, StationYearGrid};

#[derive(Debug, Clone)]
pub struct StationHistory {
    grids: Vec<StationYearGrid>,
}

impl StationHistory {
    /// Accepts grids in any order; they must form a gap-free run of years.
    pub fn new(station: Station, mut grids: Vec<StationYearGrid>) -> Result<Self, RainfallError> {
        grids.sort_by_key(|grid| grid.year());

        for pair in grids.windows(2) {
            if pair[1].year() != pair[0].year() + 1 {
                return Err(RainfallError::NonContiguousYears {
                    station,
                    previous: pair[0].year(),
                    found: pair[1].year(),
                });
            }
        }

        Ok(StationHistory { grids })
    }

    pub fn grids(&self) -> &[StationYearGrid] {
        &self.grids
    }

    /// First and last year covered, if any.
    pub fn span(&self) -> Option<(i32, i32)> {
        match (self.grids.first(), self.grids.last()) {
            (Some(first), Some(last)) => Some((first.year(), last.year())),
            _ => None,
        }
    }
}

/// The two station histories, guaranteed to cover the same years.
#[derive(Debug, Clone)]
pub struct StationPair {
    victoria: StationHistory,
    gonzales: StationHistory,
}

impl StationPair {
    pub fn new(victoria: StationHistory, gonzales: StationHistory) -> Result<Self, RainfallError> {
        if victoria.span() != gonzales.span() {
            return Err(RainfallError::MismatchedYears {
                first: victoria.span(),
                second: gonzales.span(),
            });
        }

        Ok(StationPair { victoria, gonzales })
    }

    pub fn first_year(&self) -> Option<i32> {
        self.victoria.span().map(|(first, _)| first)
    }

    pub fn year_count(&self) -> usize {
        self.victoria.grids().len()
    }

    /// Both stations' grids for each year, chronologically.
    pub fn years(&self) -> impl Iterator<Item = (&StationYearGrid, &StationYearGrid)> {
        self.victoria.grids().iter().zip(self.gonzales.grids())
    }
}

// -- Tests -------------------------------------------------------------------
