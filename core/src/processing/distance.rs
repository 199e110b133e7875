use ndarray::ArrayView1;

use crate::prelude::{GapResult, ProcessingStage};
use crate::schedule::{DistanceGrid, OccupancyGrid, DAYS_PER_WEEK};
use crate::telemetry::log::LogManager;

/// Half-open `[start, end)` bounds of every maximal run of free hours in a day.
///
/// Scans with two cursors: both skip class hours (any non-zero cell) together, then
/// `next` alone walks the free run until the next class or the end of the day.
pub fn free_runs(day: &[u8]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut prev = 0;
    let mut next = 0;

    while next < day.len() {
        while next < day.len() && day[next] != 0 {
            next += 1;
            prev += 1;
        }
        while next < day.len() && day[next] == 0 {
            next += 1;
        }
        if next > prev {
            runs.push((prev, next));
            prev = next;
        }
    }

    runs
}

/// Writes the distance-to-class profile of the free run `[start, end)` into `day`.
///
/// A run bounded on one side only counts away from that side; a run bounded on
/// both sides counts from the closer class. A day with no class at all gets zeros.
pub fn fill_run_distances(day: &mut [u8], start: usize, end: usize) {
    let day_len = day.len();
    for position in start..end {
        let distance = match (start == 0, end == day_len) {
            (true, true) => 0,
            (true, false) => end - position,
            (false, true) => position - start + 1,
            (false, false) => (position - start + 1).min(end - position),
        };
        day[position] = distance as u8;
    }
}

/// Replaces a binary day column with its distance profile. Class hours become 0.
///
/// Only defined for binary input; applying it twice yields meaningless values.
pub fn transform_day(day: &mut [u8]) {
    let runs = free_runs(day);
    day.iter_mut()
        .filter(|cell| **cell != 0)
        .for_each(|cell| *cell = 0);
    for (start, end) in runs {
        fill_run_distances(day, start, end);
    }
}

/// Consumes an occupancy grid and returns its distance grid.
pub fn to_distance_grid(grid: OccupancyGrid) -> DistanceGrid {
    let mut class_days = [false; DAYS_PER_WEEK];
    for (day_index, has_classes) in class_days.iter_mut().enumerate() {
        *has_classes = grid.has_classes_on(day_index);
    }

    let mut cells = grid.into_cells();
    for mut column in cells.columns_mut() {
        let mut day = column.to_vec();
        transform_day(&mut day);
        column.assign(&ArrayView1::from(&day[..]));
    }

    DistanceGrid::new(cells, class_days)
}

/// Turns every user's occupancy grid into a distance grid.
pub struct DistanceStage {
    logger: LogManager,
}

impl DistanceStage {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("distance"),
        }
    }
}

impl Default for DistanceStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for DistanceStage {
    type Input = Vec<OccupancyGrid>;
    type Output = Vec<DistanceGrid>;

    fn execute(&self, input: Self::Input) -> GapResult<Self::Output> {
        let grids: Vec<DistanceGrid> = input.into_iter().map(to_distance_grid).collect();
        self.logger
            .record(&format!("transformed {} occupancy grids", grids.len()));
        Ok(grids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        assert_rows_u8, DISTANCES_ONE, DISTANCES_TWO, SCHEDULE_ONE, SCHEDULE_TWO,
    };
    use crate::schedule::decode;

    #[test]
    fn free_runs_finds_every_gap() {
        assert_eq!(
            free_runs(&[0, 0, 0, 1, 1, 1, 0, 1, 0]),
            vec![(0, 3), (6, 7), (8, 9)]
        );
        assert_eq!(free_runs(&[0, 1, 0, 1, 1, 1]), vec![(0, 1), (2, 3)]);
        assert_eq!(free_runs(&[0, 1, 1, 1, 1, 1]), vec![(0, 1)]);
        assert!(free_runs(&[1, 1, 1]).is_empty());
        assert_eq!(free_runs(&[0, 0]), vec![(0, 2)]);
    }

    #[test]
    fn start_of_day_run_counts_down_to_the_class() {
        let mut day = [0, 0, 0, 1, 1, 1, 0, 1, 0];
        fill_run_distances(&mut day, 0, 3);
        assert_eq!(day, [3, 2, 1, 1, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn end_of_day_run_counts_up_from_the_class() {
        let mut day = [1, 0, 0, 0];
        fill_run_distances(&mut day, 1, 4);
        assert_eq!(day, [1, 1, 2, 3]);
    }

    #[test]
    fn interior_runs_are_palindromes() {
        let expected: [&[u8]; 7] = [
            &[1],
            &[1, 1],
            &[1, 2, 1],
            &[1, 2, 2, 1],
            &[1, 2, 3, 2, 1],
            &[1, 2, 3, 3, 2, 1],
            &[1, 2, 3, 4, 3, 2, 1],
        ];
        for (index, profile) in expected.iter().enumerate() {
            let len = index + 1;
            let mut day = vec![1u8; len + 2];
            day[1..=len].fill(0);
            fill_run_distances(&mut day, 1, len + 1);
            assert_eq!(&day[1..=len], *profile, "run of {}", len);
        }
    }

    #[test]
    fn whole_free_day_carries_no_distance() {
        let mut day = [0u8; 14];
        transform_day(&mut day);
        assert_eq!(day, [0u8; 14]);
    }

    #[test]
    fn transform_day_zeroes_classes() {
        let mut day = [0, 0, 1, 1, 0, 1, 1, 0, 0];
        transform_day(&mut day);
        assert_eq!(day, [2, 1, 0, 0, 1, 0, 0, 1, 2]);
    }

    #[test]
    fn non_binary_cells_bound_runs() {
        assert_eq!(free_runs(&[3, 0, 2, 0, 0]), vec![(1, 2), (3, 5)]);
    }

    #[test]
    fn second_transform_terminates() {
        let mut day = [0, 0, 1, 1, 0, 1, 1, 0, 0];
        transform_day(&mut day);
        transform_day(&mut day);
        assert_eq!(day, [0, 0, 1, 1, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn distance_grids_match_reference_schedules() {
        let first = to_distance_grid(decode(SCHEDULE_ONE).unwrap());
        assert_rows_u8(first.cells(), &DISTANCES_ONE);
        assert!(first.has_classes_on(0));
        assert!(!first.has_classes_on(3));
        assert!(!first.has_classes_on(5));

        let second = to_distance_grid(decode(SCHEDULE_TWO).unwrap());
        assert_rows_u8(second.cells(), &DISTANCES_TWO);
    }

    #[test]
    fn stage_transforms_every_grid() {
        let stage = DistanceStage::new();
        let grids = vec![
            decode(SCHEDULE_ONE).unwrap(),
            decode(SCHEDULE_TWO).unwrap(),
        ];
        let output = stage.execute(grids).unwrap();
        assert_eq!(output.len(), 2);
    }
}
