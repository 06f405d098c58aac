//! The two precipitation stations being reconciled.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    /// University of Victoria.
    Victoria,
    /// Victoria Gonzales.
    Gonzales,
}

impl Station {
    pub const ALL: [Station; 2] = [Station::Victoria, Station::Gonzales];

    /// Environment Canada climate identifier.
    pub fn climate_id(&self) -> &'static str {
        match self {
            Station::Victoria => "1018598",
            Station::Gonzales => "1018611",
        }
    }

    /// Name of the bulk daily CSV for this station and year.
    pub fn file_name(&self, year: i32) -> String {
        format!("en_climate_daily_BC_{}_{}_P1D.csv", self.climate_id(), year)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Station::Victoria => "Victoria",
            Station::Gonzales => "Gonzales",
        };
        write!(f, "{} ({})", name, self.climate_id())
    }
}

// -- Tests -------------------------------------------------------------------
