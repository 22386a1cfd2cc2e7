use crate::models::Observation;

/// Group one station's observations into per-year temperature batches.
///
/// Years appear in order of first appearance, not sorted. Every record of
/// a year is collected regardless of where it sits in the file, so the
/// result does not depend on the input being year-contiguous; per-year
/// counts always sum to the record count.
pub fn partition_by_year(records: &[Observation]) -> Vec<(u16, Vec<f32>)> {
    let mut batches: Vec<(u16, Vec<f32>)> = Vec::new();

    for record in records {
        match batches.iter_mut().find(|(year, _)| *year == record.year) {
            Some((_, temps)) => temps.push(record.temperature),
            None => batches.push((record.year, vec![record.temperature])),
        }
    }

    batches
}
