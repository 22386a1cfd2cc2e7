use std::fmt;

use serde::Serialize;

use crate::models::Station;
use crate::utils::constants::SEPARATOR_WIDTH;

/// Statistics for one (station, year) group. `data_points` is always the
/// real sample count, never the padded batch length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: u16,
    pub data_points: usize,
    pub min_temp: f32,
    pub max_temp: f32,
    pub avg_temp: f32,
}

impl fmt::Display for YearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Data points: {} Avg: {:.2} Min: {:.2} Max: {:.2}",
            self.year, self.data_points, self.avg_temp, self.min_temp, self.max_temp
        )
    }
}

/// Per-station report section: the station's year summaries in
/// year-of-first-appearance order.
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    pub station: Station,
    pub summaries: Vec<YearSummary>,
}

impl StationReport {
    pub fn new(station: Station, summaries: Vec<YearSummary>) -> Self {
        Self { station, summaries }
    }
}

impl fmt::Display for StationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "_".repeat(SEPARATOR_WIDTH);
        writeln!(f, "{separator}")?;
        writeln!(f)?;
        writeln!(f, "Station: {}", self.station)?;
        writeln!(f, "{separator}")?;
        writeln!(f)?;
        for summary in &self.summaries {
            writeln!(f, "{summary}")?;
        }
        Ok(())
    }
}
