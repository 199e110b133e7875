use crate::workflow::config::{GapOrder, WorkflowConfig};
use crate::workflow::input::NamedSchedule;
use anyhow::Context;
use gapcore::filters::{filter_by_days, limit_results, sort_results_by_quality};
use gapcore::meeting::{analyze_meeting, MeetingReport};
use gapcore::{GapFinder, GapReport};
use log::info;

/// Fewest users a gap analysis accepts.
pub const MIN_USERS: usize = 2;
/// Most users a gap analysis accepts.
pub const MAX_USERS: usize = 30;

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, schedules: &[NamedSchedule]) -> anyhow::Result<GapReport> {
        anyhow::ensure!(
            (MIN_USERS..=MAX_USERS).contains(&schedules.len()),
            "gap analysis needs between {} and {} users, got {}",
            MIN_USERS,
            MAX_USERS,
            schedules.len()
        );

        let finder = GapFinder::new(
            schedules.iter().map(|named| named.schedule.as_str()),
            self.config.to_options(),
        )
        .context("preparing gap finder")?;
        let mut computed = finder.find_gaps().context("computing gaps")?;

        if self.config.order == GapOrder::Quality {
            computed = computed.apply_filter(sort_results_by_quality);
        }
        if !self.config.days_to_filter.is_empty() {
            let days = self.config.days_to_filter.clone();
            computed = computed.apply_filter(|gaps| filter_by_days(gaps, &days));
        }
        if let Some(limit) = self.config.limit {
            computed = computed.apply_filter(|gaps| limit_results(gaps, Some(limit)));
        }

        let report = computed.into_report();
        info!(
            "gap analysis for {} users -> {} gaps",
            schedules.len(),
            report.count
        );
        Ok(report)
    }

    pub fn analyze_meeting(
        &self,
        schedules: &[NamedSchedule],
        filter_schedule: Option<&str>,
    ) -> anyhow::Result<MeetingReport> {
        anyhow::ensure!(
            schedules.len() >= MIN_USERS,
            "meeting analysis needs at least {} users, got {}",
            MIN_USERS,
            schedules.len()
        );
        let raw: Vec<&str> = schedules
            .iter()
            .map(|named| named.schedule.as_str())
            .collect();
        analyze_meeting(&raw, filter_schedule).context("analyzing meeting availability")
    }
}
