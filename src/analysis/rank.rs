//! Ranks the wettest months of a monthly series.

use std::fmt;

use super::MonthlySeries;

pub const TOP_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub year: i32,
    pub month: u32,
    pub value: f64,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {:.2}mm", self.year, self.month, self.value)
    }
}

/// The ten largest entries, largest first. Equal values keep chronological order.
pub fn top_ten(series: &MonthlySeries) -> Vec<RankedEntry> {
    top_n(series, TOP_COUNT)
}

pub fn top_n(series: &MonthlySeries, n: usize) -> Vec<RankedEntry> {
    let mut indexed: Vec<(usize, f64)> = series.values().iter().copied().enumerate().collect();
    indexed.sort_by(|(a_idx, a), (b_idx, b)| b.total_cmp(a).then(a_idx.cmp(b_idx)));

    indexed
        .into_iter()
        .take(n)
        .map(|(index, value)| {
            let (year, month) = series.date_of(index);
            RankedEntry { year, month, value }
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_rank_largest_first() {
        let values: Vec<f64> = (0..348).map(|i| i as f64).collect();
        let top = top_ten(&MonthlySeries::new(1995, values));

        assert_eq!(top.len(), 10);
        assert_eq!(top[0], RankedEntry { year: 2023, month: 12, value: 347.0 });
        assert_eq!(top[9], RankedEntry { year: 2023, month: 3, value: 338.0 });
    }

    #[test]
    fn should_break_ties_by_earliest_month_without_duplicates() {
        let mut values = vec![1.0; 24];
        values[5] = 9.0;
        values[17] = 9.0;
        let top = top_ten(&MonthlySeries::new(1995, values));

        assert_eq!(top.len(), 10);
        assert_eq!((top[0].year, top[0].month), (1995, 6));
        assert_eq!((top[1].year, top[1].month), (1996, 6));
        assert_eq!((top[2].year, top[2].month), (1995, 1));
        assert_eq!((top[3].year, top[3].month), (1995, 2));
        assert!(top[2..].iter().all(|e| e.value == 1.0));
    }

    #[test]
    fn should_fill_ten_entries_from_constant_series() {
        let top = top_ten(&MonthlySeries::new(1995, vec![0.0; 348]));

        assert_eq!(top.len(), 10);
        let months: Vec<u32> = top.iter().map(|e| e.month).collect();
        assert_eq!(months, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn should_return_fewer_entries_for_short_series() {
        let top = top_ten(&MonthlySeries::new(1995, vec![3.0, 4.0]));
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].value, 4.0);
    }

    #[test]
    fn should_format_label() {
        let series = MonthlySeries::new(1995, vec![0.0; 348]);
        assert_eq!(series.date_of(0), (1995, 1));
        assert_eq!(series.date_of(12), (1996, 1));
        assert_eq!(series.date_of(347), (2023, 12));

        let entry = RankedEntry { year: 2006, month: 11, value: 312.45 };
        assert_eq!(entry.to_string(), "2006/11 312.45mm");
        let entry = RankedEntry { year: 1995, month: 1, value: 80.0 };
        assert_eq!(entry.to_string(), "1995/1 80.00mm");
    }
}
