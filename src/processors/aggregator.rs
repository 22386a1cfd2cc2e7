use crate::compute::ComputeBackend;
use crate::error::{ProcessingError, Result};
use crate::models::{Observation, YearSummary};
use crate::processors::partition_by_year;
use crate::utils::constants::{
    DEFAULT_WORK_GROUP_SIZE, ORDER_STATISTICS_KERNEL, REDUCTION_KERNEL,
};

/// Combines the two kernel passes over each year batch into one summary:
/// an order-statistics dispatch for the extremes and a reduction dispatch
/// for the sum. The kernels only ever see the padded buffer, so dividing
/// by the real sample count happens here and nowhere else.
pub struct StationAggregator<'a, B: ComputeBackend + ?Sized> {
    backend: &'a B,
    work_group_size: usize,
}

impl<'a, B: ComputeBackend + ?Sized> StationAggregator<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            work_group_size: DEFAULT_WORK_GROUP_SIZE,
        }
    }

    pub fn with_work_group_size(backend: &'a B, work_group_size: usize) -> Self {
        Self {
            backend,
            work_group_size,
        }
    }

    /// Summarize every year of one station's records, in
    /// year-of-first-appearance order.
    pub fn summarize_station(&self, records: &[Observation]) -> Result<Vec<YearSummary>> {
        partition_by_year(records)
            .into_iter()
            .map(|(year, batch)| self.summarize_year(year, &batch))
            .collect()
    }

    /// Summarize one year batch via two dispatches over the same padded
    /// batch geometry.
    ///
    /// The order-statistics pass is padded with the batch's own first
    /// element, so filler can never displace the true minimum or maximum;
    /// the reduction pass is padded with the additive identity.
    pub fn summarize_year(&self, year: u16, batch: &[f32]) -> Result<YearSummary> {
        let Some(&first) = batch.first() else {
            return Err(ProcessingError::EmptyBatch);
        };

        let ordered =
            self.backend
                .run_kernel(ORDER_STATISTICS_KERNEL, batch, self.work_group_size, first)?;
        let reduced =
            self.backend
                .run_kernel(REDUCTION_KERNEL, batch, self.work_group_size, 0.0)?;

        let min_temp = ordered.first().copied().ok_or(ProcessingError::EmptyBatch)?;
        let max_temp = ordered.last().copied().ok_or(ProcessingError::EmptyBatch)?;
        let sum = reduced.first().copied().ok_or(ProcessingError::EmptyBatch)?;

        Ok(YearSummary {
            year,
            data_points: batch.len(),
            min_temp,
            max_temp,
            avg_temp: sum / batch.len() as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::ReferenceBackend;
    use pretty_assertions::assert_eq;

    fn obs(year: u16, temperature: f32) -> Observation {
        Observation::new(year, 1, 1, 0, temperature)
    }

    #[test]
    fn test_worked_example() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);
        let records = [obs(2023, 5.0), obs(2023, 7.0), obs(2024, 3.0)];

        let summaries = aggregator.summarize_station(&records).unwrap();

        assert_eq!(
            summaries,
            vec![
                YearSummary {
                    year: 2023,
                    data_points: 2,
                    min_temp: 5.0,
                    max_temp: 7.0,
                    avg_temp: 6.0,
                },
                YearSummary {
                    year: 2024,
                    data_points: 1,
                    min_temp: 3.0,
                    max_temp: 3.0,
                    avg_temp: 3.0,
                },
            ]
        );
    }

    #[test]
    fn test_all_positive_batch_minimum_survives_padding() {
        // Three samples pad out to a group of ten; with zero filler the
        // minimum would wrongly come back as 0.
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);

        let summary = aggregator.summarize_year(2023, &[5.0, 7.0, 6.0]).unwrap();

        assert_eq!(summary.min_temp, 5.0);
        assert_eq!(summary.max_temp, 7.0);
        assert_eq!(summary.avg_temp, 6.0);
    }

    #[test]
    fn test_all_negative_batch_maximum_survives_padding() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);

        let summary = aggregator
            .summarize_year(2023, &[-5.0, -7.0, -6.0])
            .unwrap();

        assert_eq!(summary.min_temp, -7.0);
        assert_eq!(summary.max_temp, -5.0);
        assert_eq!(summary.avg_temp, -6.0);
    }

    #[test]
    fn test_count_is_unpadded_length() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);

        let summary = aggregator.summarize_year(2020, &[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(summary.data_points, 3);
    }

    #[test]
    fn test_average_over_exact_group_multiple() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);
        let batch: Vec<f32> = (1..=10).map(|i| i as f32).collect();

        let summary = aggregator.summarize_year(2021, &batch).unwrap();

        assert_eq!(summary.data_points, 10);
        assert_eq!(summary.avg_temp, 5.5);
        assert_eq!(summary.min_temp, 1.0);
        assert_eq!(summary.max_temp, 10.0);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);

        let err = aggregator.summarize_year(2023, &[]).unwrap_err();
        assert!(matches!(err, ProcessingError::EmptyBatch));
    }

    #[test]
    fn test_no_records_yields_no_summaries() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::new(&backend);

        let summaries = aggregator.summarize_station(&[]).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_custom_work_group_size() {
        let backend = ReferenceBackend::new();
        let aggregator = StationAggregator::with_work_group_size(&backend, 4);

        let summary = aggregator.summarize_year(2022, &[2.0, 4.0]).unwrap();

        assert_eq!(summary.data_points, 2);
        assert_eq!(summary.avg_temp, 3.0);
    }
}
