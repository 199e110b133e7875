use serde::{Deserialize, Serialize};

use crate::schedule::FormatError;

/// Options controlling which aggregate statistics are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub compute_sd: bool,
    /// Treat a day without any class as fully free (distance 1) instead of zero.
    pub no_classes_day: bool,
    /// Leave Saturday and Sunday out of the `no_classes_day` handling.
    pub ignore_weekend: bool,
    pub calibration: Option<QualityCalibration>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            compute_sd: false,
            no_classes_day: false,
            ignore_weekend: true,
            calibration: None,
        }
    }
}

/// Fixed boundaries used to normalize averages and deviations into a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityCalibration {
    pub min_avg: f32,
    pub max_avg: f32,
    pub min_sd: f32,
    pub max_sd: f32,
}

impl Default for QualityCalibration {
    fn default() -> Self {
        Self {
            min_avg: 1.0,
            max_avg: 13.0,
            min_sd: 0.0,
            max_sd: 6.0,
        }
    }
}

impl QualityCalibration {
    pub fn validate(&self) -> GapResult<()> {
        if self.max_avg <= self.min_avg {
            return Err(GapError::InvalidCalibration(format!(
                "max_avg {} must exceed min_avg {}",
                self.max_avg, self.min_avg
            )));
        }
        if self.max_sd <= self.min_sd {
            return Err(GapError::InvalidCalibration(format!(
                "max_sd {} must exceed min_sd {}",
                self.max_sd, self.min_sd
            )));
        }
        Ok(())
    }

    /// Quality from the average alone: 1 at `min_avg`, 0 at `max_avg`.
    ///
    /// Values outside the boundaries are not clamped.
    pub fn quality_from_avg(&self, avg: f32) -> f32 {
        1.0 - (avg - self.min_avg) / (self.max_avg - self.min_avg)
    }

    /// Quality from the average and the standard deviation combined.
    pub fn quality_from_avg_sd(&self, avg: f32, sd: f32) -> f32 {
        let spread = (self.max_avg - self.min_avg) + (self.max_sd - self.min_sd);
        1.0 - ((avg - self.min_avg) + (sd - self.min_sd)) / spread
    }
}

/// Common error type for the gap-finding pipeline.
#[derive(thiserror::Error, Debug)]
pub enum GapError {
    #[error("malformed schedule: {0}")]
    Format(#[from] FormatError),
    #[error("at least one schedule is required")]
    NoSchedules,
    #[error("invalid quality calibration: {0}")]
    InvalidCalibration(String),
}

pub type GapResult<T> = Result<T, GapError>;

/// A step of the gap-finding pipeline that consumes its input and produces a new value.
pub trait ProcessingStage {
    type Input;
    type Output;

    fn execute(&self, input: Self::Input) -> GapResult<Self::Output>;
}
