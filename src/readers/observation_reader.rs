use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memmap2::Mmap;
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::{Observation, Station};
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, FIELDS_PER_LINE};

/// Observations grouped by station, in file order within each station.
/// Built once by the loader and read-only thereafter.
pub type StationRecords = HashMap<Station, Vec<Observation>>;

pub struct ObservationReader {
    use_mmap: bool,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    /// Use memory-mapped I/O instead of buffered reads, for large inputs.
    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Read all observations from the input file, keyed by station.
    ///
    /// Lines naming an unknown station are dropped silently. A malformed
    /// numeric field or a wrong field count on a known-station line fails
    /// the whole load.
    pub fn read_observations(&self, path: &Path) -> Result<StationRecords> {
        let records = if self.use_mmap {
            self.read_observations_mmap(path)
        } else {
            self.read_observations_buffered(path)
        }?;

        let total: usize = records.values().map(Vec::len).sum();
        info!(
            stations = records.len(),
            records = total,
            "observation load complete"
        );

        Ok(records)
    }

    fn read_observations_buffered(&self, path: &Path) -> Result<StationRecords> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut records = StationRecords::new();

        for (line_number, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            self.collect_line(&line, line_number + 1, &mut records)?;
        }

        Ok(records)
    }

    fn read_observations_mmap(&self, path: &Path) -> Result<StationRecords> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap)
            .map_err(|e| ProcessingError::InvalidFormat(format!("Invalid UTF-8: {e}")))?;

        let mut records = StationRecords::new();
        for (line_number, line) in content.lines().enumerate() {
            self.collect_line(line, line_number + 1, &mut records)?;
        }

        Ok(records)
    }

    fn collect_line(
        &self,
        line: &str,
        line_number: usize,
        records: &mut StationRecords,
    ) -> Result<()> {
        if let Some((station, observation)) = self.parse_line(line, line_number)? {
            records.entry(station).or_default().push(observation);
        }
        Ok(())
    }

    /// Parse one whitespace-delimited line: station, year, month, day,
    /// time, temperature. Returns `Ok(None)` for blank lines and unknown
    /// stations.
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Option<(Station, Observation)>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let Some(&name) = tokens.first() else {
            return Ok(None);
        };

        let Some(station) = Station::from_name(name) else {
            return Ok(None);
        };

        if tokens.len() != FIELDS_PER_LINE {
            return Err(ProcessingError::InvalidFormat(format!(
                "line {line_number}: expected {FIELDS_PER_LINE} fields, found {}",
                tokens.len()
            )));
        }

        let observation = Observation::new(
            parse_field(tokens[1], "year", line_number)?,
            parse_field(tokens[2], "month", line_number)?,
            parse_field(tokens[3], "day", line_number)?,
            parse_field(tokens[4], "time", line_number)?,
            tokens[5].parse::<f32>().map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "line {line_number}: invalid temperature '{}'",
                    tokens[5]
                ))
            })?,
        );

        Ok(Some((station, observation)))
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(token: &str, field: &str, line_number: usize) -> Result<u16> {
    token.parse::<u16>().map_err(|_| {
        ProcessingError::InvalidFormat(format!("line {line_number}: invalid {field} '{token}'"))
    })
}
