//! Per-slot availability of a group of students, for picking a meeting time.

use ndarray::Array2;
use serde::Serialize;

use crate::prelude::{GapError, GapResult};
use crate::schedule::{decode, OccupancyGrid, SlotIndex, DAYS_PER_WEEK, HOURS_PER_DAY, WEEKDAYS};
use crate::telemetry::log::LogManager;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAvailability {
    pub day_index: usize,
    pub hour_index: usize,
    pub number_of_students: usize,
    pub availability: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingReport {
    pub total_students: usize,
    pub results: Vec<SlotAvailability>,
}

/// Number of students with class in each slot.
pub fn sum_occupancy(grids: &[OccupancyGrid]) -> Array2<usize> {
    let mut counts = Array2::zeros((HOURS_PER_DAY, DAYS_PER_WEEK));
    for grid in grids {
        counts.zip_mut_with(&grid.cells(), |count, &cell| *count += usize::from(cell));
    }
    counts
}

/// Availability of every weekday slot across `schedules`.
///
/// Slots where `filter_schedule` has class are left out of the report.
pub fn analyze_meeting<S: AsRef<str>>(
    schedules: &[S],
    filter_schedule: Option<&str>,
) -> GapResult<MeetingReport> {
    if schedules.is_empty() {
        return Err(GapError::NoSchedules);
    }
    let grids = schedules
        .iter()
        .map(|schedule| decode(schedule.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let filter = filter_schedule.map(decode).transpose()?;

    let counts = sum_occupancy(&grids);
    let total_students = grids.len();
    let mut results = Vec::with_capacity(HOURS_PER_DAY * WEEKDAYS);

    for hour_index in 0..HOURS_PER_DAY {
        for day_index in 0..WEEKDAYS {
            let slot = SlotIndex::new(hour_index, day_index);
            if filter.as_ref().is_some_and(|grid| grid.is_occupied(slot)) {
                continue;
            }
            let number_of_students = total_students - counts[[hour_index, day_index]];
            results.push(SlotAvailability {
                day_index,
                hour_index,
                number_of_students,
                availability: number_of_students as f32 / total_students as f32,
            });
        }
    }

    LogManager::new("meeting").record(&format!(
        "{} students, {} candidate slots",
        total_students,
        results.len()
    ));
    Ok(MeetingReport {
        total_students,
        results,
    })
}
