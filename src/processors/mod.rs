pub mod aggregator;
pub mod year_partitioner;

pub use aggregator::StationAggregator;
pub use year_partitioner::partition_by_year;
