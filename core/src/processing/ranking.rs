use serde::Serialize;

use crate::filters::sort_results;
use crate::prelude::{GapResult, ProcessingStage, QualityCalibration};
use crate::processing::aggregation::AggregateGrids;
use crate::schedule::{day_label, hour_label, SlotIndex, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::telemetry::log::LogManager;

/// One slot that is free for every user, with its aggregate scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRecord {
    pub day: &'static str,
    pub hour: &'static str,
    pub day_index: usize,
    pub hour_index: usize,
    pub avg: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
}

impl GapRecord {
    pub fn new(slot: SlotIndex, avg: f32, sd: Option<f32>) -> Self {
        Self {
            day: day_label(slot.day_index),
            hour: hour_label(slot.hour_index),
            day_index: slot.day_index,
            hour_index: slot.hour_index,
            avg,
            sd,
            quality: None,
        }
    }

    pub fn slot(&self) -> SlotIndex {
        SlotIndex::new(self.hour_index, self.day_index)
    }
}

/// Emits a record for every cell with a non-zero average, in (hour, day) order.
pub fn find_gaps(aggregates: &AggregateGrids) -> Vec<GapRecord> {
    let mut gaps = Vec::new();
    for hour_index in 0..HOURS_PER_DAY {
        for day_index in 0..DAYS_PER_WEEK {
            let avg = aggregates.avg[[hour_index, day_index]];
            if avg == 0.0 {
                continue;
            }
            let sd = aggregates
                .sd
                .as_ref()
                .map(|sd| sd[[hour_index, day_index]]);
            gaps.push(GapRecord::new(
                SlotIndex::new(hour_index, day_index),
                avg,
                sd,
            ));
        }
    }
    gaps
}

/// Fills `quality` on every record; the deviation is used when it was computed.
pub fn score_quality(gaps: &mut [GapRecord], calibration: &QualityCalibration) {
    for gap in gaps.iter_mut() {
        gap.quality = Some(match gap.sd {
            Some(sd) => calibration.quality_from_avg_sd(gap.avg, sd),
            None => calibration.quality_from_avg(gap.avg),
        });
    }
}

/// Turns aggregate grids into the canonically ordered gap list.
pub struct RankingStage {
    calibration: Option<QualityCalibration>,
    logger: LogManager,
}

impl RankingStage {
    pub fn new(calibration: Option<QualityCalibration>) -> Self {
        Self {
            calibration,
            logger: LogManager::new("ranking"),
        }
    }
}

impl ProcessingStage for RankingStage {
    type Input = AggregateGrids;
    type Output = Vec<GapRecord>;

    fn execute(&self, input: Self::Input) -> GapResult<Self::Output> {
        let mut gaps = find_gaps(&input);
        if let Some(calibration) = self.calibration.as_ref() {
            calibration.validate()?;
            score_quality(&mut gaps, calibration);
        }

        let gaps = sort_results(gaps, input.sd.is_some());
        self.logger.record(&format!("found {} gaps", gaps.len()));
        if let Some(best) = gaps.first() {
            self.logger
                .detail(&format!("best gap {} {} avg {:.3}", best.day, best.hour, best.avg));
        }
        Ok(gaps)
    }
}
