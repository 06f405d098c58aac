pub mod daily;
pub mod grid;
pub mod history;
pub mod station;

pub use daily::{parse_rainfall, DailyValue, RawDay};
pub use grid::StationYearGrid;
pub use history::{StationHistory, StationPair};
pub use station::Station;
