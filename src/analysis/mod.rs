//! Reconciles the two stations and derives the rainfall statistics.

pub mod aggregate;
pub mod merge;
pub mod rank;

pub use aggregate::{
    compute_heavy_rain_days, compute_max_two_day, compute_monthly_totals, MonthlySeries,
    YearlySeries,
};
pub use rank::{top_ten, RankedEntry};

use crate::{error::RainfallError, reading::StationPair};

/// Every derived series and ranking for one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub monthly_totals: MonthlySeries,
    pub max_two_day: MonthlySeries,
    pub heavy_rain_days: YearlySeries,
    pub top_monthly: Vec<RankedEntry>,
    pub top_two_day: Vec<RankedEntry>,
}

pub fn analyse(pair: &StationPair) -> Result<Analysis, RainfallError> {
    let monthly_totals = compute_monthly_totals(pair)?;
    let max_two_day = compute_max_two_day(pair)?;
    let heavy_rain_days = compute_heavy_rain_days(pair);

    let top_monthly = top_ten(&monthly_totals);
    let top_two_day = top_ten(&max_two_day);

    Ok(Analysis {
        monthly_totals,
        max_two_day,
        heavy_rain_days,
        top_monthly,
        top_two_day,
    })
}

#[cfg(test)]
mod tests {

    use crate::{
        calendar::days_in_year,
        reading::{RawDay, Station, StationHistory, StationYearGrid},
    };

    use super::*;

    fn history(station: Station, field: &str) -> StationHistory {
        let grids = (1996..=1997)
            .map(|year| {
                let rows: Vec<RawDay> = (0..days_in_year(year)).map(|_| RawDay::new(field)).collect();
                StationYearGrid::build(year, &rows).unwrap()
            })
            .collect();
        StationHistory::new(station, grids).unwrap()
    }

    #[test]
    fn should_rank_both_series() {
        let pair = StationPair::new(
            history(Station::Victoria, "10"),
            history(Station::Gonzales, ""),
        )
        .unwrap();

        let analysis = analyse(&pair).unwrap();

        assert_eq!(analysis.top_monthly.len(), 10);
        assert_eq!(analysis.top_monthly[0].to_string(), "1996/1 310.00mm");
        assert_eq!(analysis.top_two_day[0].to_string(), "1996/1 20.00mm");
        assert_eq!(analysis.heavy_rain_days.iter().collect::<Vec<_>>(), vec![(1996, 0), (1997, 0)]);
    }
}
