/// File names
pub const INPUT_FILE: &str = "temp_lincolnshire_short.txt";
pub const KERNELS_FILE: &str = "kernels.cl";

/// Kernel entry points. `MinMaxSort` leaves the batch minimum in the first
/// output element and the maximum in the last; `ReduceFloatArray` leaves the
/// total sum in the first output element.
pub const ORDER_STATISTICS_KERNEL: &str = "MinMaxSort";
pub const REDUCTION_KERNEL: &str = "ReduceFloatArray";

/// Dispatch defaults
pub const DEFAULT_WORK_GROUP_SIZE: usize = 10;

/// Input format
pub const FIELDS_PER_LINE: usize = 6;

/// Report formatting
pub const SEPARATOR_WIDTH: usize = 72;

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
