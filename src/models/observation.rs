use serde::{Deserialize, Serialize};

/// A single weather observation parsed from the input file. Date and time
/// fields are kept as raw small integers (time is HHMM); no calendar
/// arithmetic is performed anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub time: u16,
    pub temperature: f32,
}

impl Observation {
    pub fn new(year: u16, month: u16, day: u16, time: u16, temperature: f32) -> Self {
        Self {
            year,
            month,
            day,
            time,
            temperature,
        }
    }
}
