pub mod backend;
pub mod opencl;
pub mod reference;

pub use backend::{pad_batch, ComputeBackend};
pub use opencl::{list_platforms, OpenClEngine};
pub use reference::ReferenceBackend;
