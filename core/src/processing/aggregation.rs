use ndarray::{Array2, ArrayView2, Zip};

use crate::math::stats::StatsHelper;
use crate::prelude::{AnalysisOptions, GapError, GapResult, ProcessingStage};
use crate::schedule::{DistanceGrid, DAYS_PER_WEEK, HOURS_PER_DAY, WEEKDAYS};
use crate::telemetry::log::LogManager;

/// Sum, mean and optional standard deviation of a set of distance grids.
#[derive(Debug, Clone)]
pub struct AggregateGrids {
    pub sum: Array2<f32>,
    pub avg: Array2<f32>,
    pub sd: Option<Array2<f32>>,
}

/// Marks every day without a single class as fully free (distance 1).
pub fn fill_days_without_classes(
    mut grids: Vec<DistanceGrid>,
    ignore_weekend: bool,
) -> Vec<DistanceGrid> {
    let days = if ignore_weekend {
        WEEKDAYS
    } else {
        DAYS_PER_WEEK
    };
    for grid in grids.iter_mut() {
        for day_index in 0..days {
            if !grid.has_classes_on(day_index) {
                grid.fill_day(day_index, 1);
            }
        }
    }
    grids
}

/// Zeroes a cell in every grid as soon as one grid has 0 there.
///
/// Afterwards a cell is non-zero in any grid iff it is non-zero in all of them.
pub fn propagate_zeros(mut grids: Vec<DistanceGrid>) -> Vec<DistanceGrid> {
    let mut blocked = Array2::from_elem((HOURS_PER_DAY, DAYS_PER_WEEK), false);
    for grid in &grids {
        Zip::from(&mut blocked)
            .and(grid.cells())
            .for_each(|blocked, &cell| *blocked |= cell == 0);
    }
    for grid in grids.iter_mut() {
        Zip::from(grid.cells_mut())
            .and(&blocked)
            .for_each(|cell, &blocked| {
                if blocked {
                    *cell = 0;
                }
            });
    }
    grids
}

/// Cell-wise sum, mean and (optionally) population standard deviation.
pub fn aggregate(grids: &[DistanceGrid], compute_sd: bool) -> GapResult<AggregateGrids> {
    let values: Vec<Array2<f32>> = grids.iter().map(DistanceGrid::to_f32).collect();
    let views: Vec<ArrayView2<'_, f32>> = values.iter().map(|grid| grid.view()).collect();
    let stack = StatsHelper::stack(&views).ok_or(GapError::NoSchedules)?;

    let sd = compute_sd.then(|| StatsHelper::population_sd(stack.view()));
    Ok(AggregateGrids {
        sum: StatsHelper::sum(stack.view()),
        avg: StatsHelper::mean(stack.view()),
        sd,
    })
}

/// Combines the distance grids of every user into aggregate grids.
pub struct AggregationStage {
    options: AnalysisOptions,
    logger: LogManager,
}

impl AggregationStage {
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            options: options.clone(),
            logger: LogManager::new("aggregation"),
        }
    }
}

impl ProcessingStage for AggregationStage {
    type Input = Vec<DistanceGrid>;
    type Output = AggregateGrids;

    fn execute(&self, input: Self::Input) -> GapResult<Self::Output> {
        if input.is_empty() {
            return Err(GapError::NoSchedules);
        }
        let count = input.len();

        let grids = if self.options.no_classes_day {
            fill_days_without_classes(input, self.options.ignore_weekend)
        } else {
            input
        };
        let grids = propagate_zeros(grids);
        let aggregates = aggregate(&grids, self.options.compute_sd)?;

        let shared = aggregates.avg.iter().filter(|&&avg| avg != 0.0).count();
        self.logger.record(&format!(
            "aggregated {} grids, {} slots free for everyone",
            count, shared
        ));
        Ok(aggregates)
    }
}
