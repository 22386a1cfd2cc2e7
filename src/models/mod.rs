pub mod observation;
pub mod station;
pub mod summary;

pub use observation::Observation;
pub use station::Station;
pub use summary::{StationReport, YearSummary};
