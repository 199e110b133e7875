use serde::Serialize;

use crate::prelude::{AnalysisOptions, GapError, GapResult, ProcessingStage};
use crate::processing::{AggregationStage, DistanceStage, GapRecord, RankingStage};
use crate::schedule::{decode, OccupancyGrid};
use crate::telemetry::log::LogManager;

/// Output of a gap-finding run.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub count: usize,
    pub gaps: Vec<GapRecord>,
}

/// Entry point of the pipeline: decoded schedules waiting to be analyzed.
///
/// A finder is single-use. `find_gaps` consumes it and hands back the computed
/// gaps, which can then be filtered any number of times before being read.
pub struct GapFinder {
    grids: Vec<OccupancyGrid>,
    options: AnalysisOptions,
    logger: LogManager,
}

impl GapFinder {
    /// Decodes every schedule up front; the first malformed one aborts the run.
    pub fn new<I, S>(schedules: I, options: AnalysisOptions) -> GapResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grids = schedules
            .into_iter()
            .map(|schedule| decode(schedule.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_grids(grids, options)
    }

    pub fn from_grids(grids: Vec<OccupancyGrid>, options: AnalysisOptions) -> GapResult<Self> {
        if grids.is_empty() {
            return Err(GapError::NoSchedules);
        }
        Ok(Self {
            grids,
            options,
            logger: LogManager::new("finder"),
        })
    }

    pub fn find_gaps(self) -> GapResult<ComputedGaps> {
        self.logger.record(&format!(
            "analyzing {} schedules (sd: {}, no classes day: {}, ignore weekend: {})",
            self.grids.len(),
            self.options.compute_sd,
            self.options.no_classes_day,
            self.options.ignore_weekend
        ));

        let distances = DistanceStage::new().execute(self.grids)?;
        let aggregates = AggregationStage::new(&self.options).execute(distances)?;
        let gaps = RankingStage::new(self.options.calibration).execute(aggregates)?;

        Ok(ComputedGaps { gaps })
    }
}

/// Gap list produced by `GapFinder::find_gaps`, in canonical order.
#[derive(Debug, Clone)]
pub struct ComputedGaps {
    gaps: Vec<GapRecord>,
}

impl ComputedGaps {
    /// Replaces the current list with `filter(list)`.
    pub fn apply_filter<F>(self, filter: F) -> Self
    where
        F: FnOnce(Vec<GapRecord>) -> Vec<GapRecord>,
    {
        Self {
            gaps: filter(self.gaps),
        }
    }

    pub fn results(&self) -> &[GapRecord] {
        &self.gaps
    }

    pub fn into_report(self) -> GapReport {
        GapReport {
            count: self.gaps.len(),
            gaps: self.gaps,
        }
    }
}
