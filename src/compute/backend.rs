use crate::error::Result;

/// Capability interface over an accelerator backend: transfer a batch,
/// invoke a named kernel over it, read the result back.
///
/// Implementations pad the batch to a work-group multiple before dispatch
/// (see [`pad_batch`]) and return the full padded-length output. Callers
/// own the padding semantics: they choose `pad_value` per kernel and divide
/// by the real, pre-padding count themselves.
pub trait ComputeBackend {
    /// Run `name` over `batch` with a 1-D index range equal to the padded
    /// element count, partitioned into groups of `work_group_size`.
    ///
    /// Errors on an empty batch or a zero work-group size; any backend
    /// runtime failure propagates as an error rather than being retried.
    fn run_kernel(
        &self,
        name: &str,
        batch: &[f32],
        work_group_size: usize,
        pad_value: f32,
    ) -> Result<Vec<f32>>;
}

/// Extend `batch` with `pad_value` filler so its length is the smallest
/// multiple of `work_group_size` that is >= the real length.
///
/// The first `batch.len()` elements of the result are real data; everything
/// beyond is filler that kernels will see but callers must discount.
pub fn pad_batch(batch: &[f32], work_group_size: usize, pad_value: f32) -> Vec<f32> {
    let mut padded = batch.to_vec();
    let remainder = padded.len() % work_group_size;
    if remainder != 0 {
        padded.resize(padded.len() + (work_group_size - remainder), pad_value);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_batch_rounds_up_to_group_multiple() {
        let padded = pad_batch(&[1.0, 2.0, 3.0], 10, 0.0);

        assert_eq!(padded.len(), 10);
        assert_eq!(&padded[..3], &[1.0, 2.0, 3.0]);
        assert!(padded[3..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_pad_batch_exact_multiple_unchanged() {
        let batch: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let padded = pad_batch(&batch, 10, -99.0);

        assert_eq!(padded, batch);
    }

    #[test]
    fn test_pad_batch_uses_given_fill_value() {
        let padded = pad_batch(&[4.5], 4, 4.5);

        assert_eq!(padded, vec![4.5, 4.5, 4.5, 4.5]);
    }

    #[test]
    fn test_padded_length_is_smallest_sufficient_multiple() {
        for len in 1..=25usize {
            let batch = vec![1.0; len];
            let padded = pad_batch(&batch, 10, 0.0);

            assert_eq!(padded.len() % 10, 0);
            assert!(padded.len() >= len);
            assert!(padded.len() < len + 10);
            assert!(!padded.is_empty());
        }
    }
}
