use crate::compute::backend::{pad_batch, ComputeBackend};
use crate::error::{ProcessingError, Result};
use crate::utils::constants::{ORDER_STATISTICS_KERNEL, REDUCTION_KERNEL};

/// CPU implementation of the kernel contracts, operating on the same
/// padded buffers a device would see. Lets the grouping, padding, and
/// aggregation logic be exercised without an OpenCL runtime present.
#[derive(Debug, Default)]
pub struct ReferenceBackend;

impl ReferenceBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ComputeBackend for ReferenceBackend {
    fn run_kernel(
        &self,
        name: &str,
        batch: &[f32],
        work_group_size: usize,
        pad_value: f32,
    ) -> Result<Vec<f32>> {
        if batch.is_empty() {
            return Err(ProcessingError::EmptyBatch);
        }
        if work_group_size == 0 {
            return Err(ProcessingError::Config(
                "work-group size must be positive".to_string(),
            ));
        }

        let mut padded = pad_batch(batch, work_group_size, pad_value);

        match name {
            ORDER_STATISTICS_KERNEL => {
                // Sort contract: minimum at index 0, maximum at the end.
                padded.sort_by(f32::total_cmp);
                Ok(padded)
            }
            REDUCTION_KERNEL => {
                let mut output = vec![0.0f32; padded.len()];
                output[0] = padded.iter().sum();
                Ok(output)
            }
            _ => Err(ProcessingError::UnknownKernel(name.to_string())),
        }
    }
}
