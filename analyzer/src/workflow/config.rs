use anyhow::Context;
use clap::ValueEnum;
use gapcore::prelude::{AnalysisOptions, QualityCalibration};
use gapcore::schedule::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smallest `limit` the workflow accepts.
pub const MIN_LIMIT: usize = 2;

/// Final ordering of the gap list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GapOrder {
    /// Ascending average distance (then deviation)
    #[default]
    Average,
    /// Descending quality score
    Quality,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub compute_sd: bool,
    pub no_classes_day: bool,
    pub ignore_weekend: bool,
    pub limit: Option<usize>,
    pub days_to_filter: Vec<usize>,
    pub order: GapOrder,
    pub calibration: Option<QualityCalibration>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        let options = AnalysisOptions::default();
        Self {
            compute_sd: options.compute_sd,
            no_classes_day: options.no_classes_day,
            ignore_weekend: options.ignore_weekend,
            limit: None,
            days_to_filter: Vec::new(),
            order: GapOrder::default(),
            calibration: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        compute_sd: bool,
        no_classes_day: bool,
        include_weekend: bool,
        limit: Option<usize>,
        days_to_filter: Vec<usize>,
        order: GapOrder,
    ) -> anyhow::Result<Self> {
        let config = Self {
            compute_sd,
            no_classes_day,
            ignore_weekend: !include_weekend,
            limit,
            days_to_filter,
            order,
            calibration: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(limit) = self.limit {
            anyhow::ensure!(
                limit >= MIN_LIMIT,
                "limit must be at least {}, got {}",
                MIN_LIMIT,
                limit
            );
        }
        anyhow::ensure!(
            self.days_to_filter.len() <= DAYS_PER_WEEK,
            "at most {} days can be filtered",
            DAYS_PER_WEEK
        );
        if let Some(day) = self.days_to_filter.iter().find(|&&day| day >= DAYS_PER_WEEK) {
            anyhow::bail!("day index {} is outside 0..{}", day, DAYS_PER_WEEK);
        }
        if let Some(calibration) = self.calibration.as_ref() {
            calibration.validate()?;
        }
        Ok(())
    }

    /// Ordering by quality needs scores, so it falls back to the default calibration.
    pub fn to_options(&self) -> AnalysisOptions {
        let calibration = match (self.calibration, self.order) {
            (Some(calibration), _) => Some(calibration),
            (None, GapOrder::Quality) => Some(QualityCalibration::default()),
            (None, GapOrder::Average) => None,
        };
        AnalysisOptions {
            compute_sd: self.compute_sd,
            no_classes_day: self.no_classes_day,
            ignore_weekend: self.ignore_weekend,
            calibration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_options() {
        let cfg =
            WorkflowConfig::from_args(true, false, true, Some(5), vec![0, 2], GapOrder::Average)
                .unwrap();
        let options = cfg.to_options();
        assert!(options.compute_sd);
        assert!(!options.ignore_weekend);
        assert!(options.calibration.is_none());
    }

    #[test]
    fn quality_order_enables_default_calibration() {
        let cfg = WorkflowConfig {
            order: GapOrder::Quality,
            ..Default::default()
        };
        assert_eq!(
            cfg.to_options().calibration,
            Some(QualityCalibration::default())
        );
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"compute_sd: true\nlimit: 4\ndays_to_filter: [1, 3]\norder: quality\ncalibration:\n  max_avg: 10.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert!(cfg.compute_sd);
        assert!(cfg.ignore_weekend);
        assert_eq!(cfg.limit, Some(4));
        assert_eq!(cfg.days_to_filter, vec![1, 3]);
        assert_eq!(cfg.order, GapOrder::Quality);
        let calibration = cfg.calibration.unwrap();
        assert_eq!(calibration.max_avg, 10.0);
        assert_eq!(calibration.min_avg, 1.0);
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        assert!(WorkflowConfig::from_args(false, false, false, Some(1), vec![], GapOrder::Average)
            .is_err());
        assert!(WorkflowConfig::from_args(false, false, false, None, vec![7], GapOrder::Average)
            .is_err());
    }
}
