use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("OpenCL platform index {index} not found ({available} platform(s) available)")]
    PlatformNotFound { index: usize, available: usize },

    #[error("OpenCL device index {index} not found on platform ({available} device(s) available)")]
    DeviceNotFound { index: usize, available: usize },

    #[error("Kernel program build failed:\n{log}")]
    KernelBuild { log: String },

    #[error("Unknown kernel entry point: {0}")]
    UnknownKernel(String),

    #[error("OpenCL runtime error: {0}")]
    OpenCl(String),

    #[error("Empty batch submitted for dispatch")]
    EmptyBatch,

    #[error("Configuration error: {0}")]
    Config(String),
}
