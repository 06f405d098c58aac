//! Monthly and yearly rainfall aggregates over a pair of station histories.

use crate::{
    calendar::MONTHS_PER_YEAR,
    error::RainfallError,
    reading::{DailyValue, StationPair, StationYearGrid},
};

use super::merge::merged_amount;

/// A day counts as heavy rain when either station records more than this.
pub const HEAVY_RAIN_THRESHOLD_MM: f64 = 20.0;

/// One value per (year, month), chronologically from January of `first_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    first_year: i32,
    values: Vec<f64>,
}

impl MonthlySeries {
    pub fn new(first_year: i32, values: Vec<f64>) -> Self {
        MonthlySeries { first_year, values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Year and 1-based month of series index `index`.
    pub fn date_of(&self, index: usize) -> (i32, u32) {
        let year = self.first_year + (index / MONTHS_PER_YEAR) as i32;
        let month = (index % MONTHS_PER_YEAR) as u32 + 1;
        (year, month)
    }

    /// `(year, month, value)` for every entry.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32, f64)> + '_ {
        self.values.iter().enumerate().map(|(index, value)| {
            let (year, month) = self.date_of(index);
            (year, month, *value)
        })
    }
}

/// One count per year, starting at `first_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySeries {
    first_year: i32,
    counts: Vec<u32>,
}

impl YearlySeries {
    pub fn new(first_year: i32, counts: Vec<u32>) -> Self {
        YearlySeries { first_year, counts }
    }

    #[cfg(test)]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        (self.first_year..).zip(self.counts.iter().copied())
    }
}

/// Total merged rainfall for each month.
pub fn compute_monthly_totals(pair: &StationPair) -> Result<MonthlySeries, RainfallError> {
    compute_per_month(pair, |days| days.iter().sum())
}

/// Largest merged rainfall over two consecutive days within each month.
/// Months with fewer than two days give 0.
pub fn compute_max_two_day(pair: &StationPair) -> Result<MonthlySeries, RainfallError> {
    compute_per_month(pair, |days| {
        days.windows(2)
            .map(|window| window[0] + window[1])
            .fold(0.0, f64::max)
    })
}

/// Days per year where either station alone recorded heavy rain.
pub fn compute_heavy_rain_days(pair: &StationPair) -> YearlySeries {
    let counts: Vec<u32> = pair
        .years()
        .map(|(victoria, gonzales)| {
            (1..=MONTHS_PER_YEAR)
                .map(|month| {
                    month_days(victoria, gonzales, month)
                        .filter(|(_, a, b)| is_heavy(*a) || is_heavy(*b))
                        .count() as u32
                })
                .sum::<u32>()
        })
        .collect();

    YearlySeries::new(pair.first_year().unwrap_or_default(), counts)
}

fn is_heavy(value: DailyValue) -> bool {
    value
        .amount()
        .is_some_and(|mm| mm > HEAVY_RAIN_THRESHOLD_MM)
}

// Applies `reduce` to each month's merged daily amounts, in chronological order.
fn compute_per_month<F>(pair: &StationPair, reduce: F) -> Result<MonthlySeries, RainfallError>
where
    F: Fn(&[f64]) -> f64,
{
    let mut values = Vec::with_capacity(pair.year_count() * MONTHS_PER_YEAR);

    for (victoria, gonzales) in pair.years() {
        for month in 1..=MONTHS_PER_YEAR {
            let days = merged_month(victoria, gonzales, month)?;
            values.push(reduce(&days));
        }
    }

    Ok(MonthlySeries::new(pair.first_year().unwrap_or_default(), values))
}

fn merged_month(
    a: &StationYearGrid,
    b: &StationYearGrid,
    month: usize,
) -> Result<Vec<f64>, RainfallError> {
    month_days(a, b, month)
        .map(|(day, x, y)| {
            merged_amount(x, y).map_err(|source| RainfallError::PrecondMerge {
                year: a.year(),
                month,
                day: day + 1,
                source,
            })
        })
        .collect()
}

// Day-slots of `month`, up to the first slot that neither station has.
fn month_days<'a>(
    a: &'a StationYearGrid,
    b: &'a StationYearGrid,
    month: usize,
) -> impl Iterator<Item = (usize, DailyValue, DailyValue)> + 'a {
    a.month(month)
        .iter()
        .zip(b.month(month).iter())
        .enumerate()
        .take_while(|(_, (x, y))| x.is_applicable() || y.is_applicable())
        .map(|(day, (x, y))| (day, *x, *y))
}

// -- Tests -------------------------------------------------------------------
