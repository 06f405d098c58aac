//! Console report of the rankings and heavy-rain counts.

use std::fmt::Write;

use crate::analysis::Analysis;

pub fn format_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Top 10 Monthly Rainfall");
    for entry in &analysis.top_monthly {
        let _ = writeln!(out, "{}", entry);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top 10 Monthly Rainfall Over a 2-Day Period");
    for entry in &analysis.top_two_day {
        let _ = writeln!(out, "{}", entry);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Number of Heavy Rain Days Every Year");
    for (year, count) in analysis.heavy_rain_days.iter() {
        let _ = writeln!(out, "{} {}", year, count);
    }

    out
}

// -- Tests -------------------------------------------------------------------
