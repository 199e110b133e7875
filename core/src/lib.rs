//! Gap-distance engine for finding shared free time across weekly class schedules.
//!
//! Each schedule is a 98-bit string (14 hourly slots by 7 days). The pipeline decodes
//! schedules into occupancy grids, turns every grid into a per-day distance profile,
//! aggregates the profiles across users and ranks the slots that are free for everyone.

#[cfg(test)]
mod fixtures;
pub mod filters;
pub mod finder;
pub mod math;
pub mod meeting;
pub mod prelude;
pub mod processing;
pub mod register;
pub mod schedule;
pub mod telemetry;

pub use finder::{ComputedGaps, GapFinder, GapReport};
pub use prelude::{AnalysisOptions, GapError, GapResult, ProcessingStage, QualityCalibration};
pub use schedule::{BitSchedule, FormatError, SlotIndex};
