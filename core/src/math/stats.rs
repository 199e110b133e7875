use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};

/// Cell-wise statistics over a stack of equally shaped grids (axis 0 = user).
pub struct StatsHelper;

impl StatsHelper {
    /// Stacks grids along a new leading axis. Returns `None` for an empty slice.
    pub fn stack(grids: &[ArrayView2<'_, f32>]) -> Option<Array3<f32>> {
        if grids.is_empty() {
            return None;
        }
        ndarray::stack(Axis(0), grids).ok()
    }

    pub fn sum(stack: ArrayView3<'_, f32>) -> Array2<f32> {
        stack.sum_axis(Axis(0))
    }

    pub fn mean(stack: ArrayView3<'_, f32>) -> Array2<f32> {
        let count = stack.len_of(Axis(0)).max(1) as f32;
        stack.sum_axis(Axis(0)) * (1.0 / count)
    }

    /// Population standard deviation (divides by N).
    pub fn population_sd(stack: ArrayView3<'_, f32>) -> Array2<f32> {
        let mean = Self::mean(stack);
        let count = stack.len_of(Axis(0)).max(1) as f32;
        let mut squares = Array2::<f32>::zeros(mean.raw_dim());
        for grid in stack.outer_iter() {
            squares.zip_mut_with(&(&grid - &mean), |acc, &diff| *acc += diff * diff);
        }
        squares.mapv(|value| (value / count).sqrt())
    }
}
