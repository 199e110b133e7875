pub mod aggregation;
pub mod distance;
pub mod ranking;

pub use aggregation::{AggregateGrids, AggregationStage};
pub use distance::DistanceStage;
pub use ranking::{GapRecord, RankingStage};
