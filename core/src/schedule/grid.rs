use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: usize = 14;
pub const DAYS_PER_WEEK: usize = 7;
/// Monday to Friday; the remaining columns are the weekend.
pub const WEEKDAYS: usize = 5;
pub const SCHEDULE_LENGTH: usize = HOURS_PER_DAY * DAYS_PER_WEEK;

/// One (hour, day) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotIndex {
    pub hour_index: usize,
    pub day_index: usize,
}

impl SlotIndex {
    pub fn new(hour_index: usize, day_index: usize) -> Self {
        Self {
            hour_index,
            day_index,
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self::new(position / DAYS_PER_WEEK, position % DAYS_PER_WEEK)
    }

    /// Row-major position inside a 98-character schedule.
    pub fn position(&self) -> usize {
        self.hour_index * DAYS_PER_WEEK + self.day_index
    }

    pub fn is_in_week(&self) -> bool {
        self.hour_index < HOURS_PER_DAY && self.day_index < DAYS_PER_WEEK
    }
}

impl From<(usize, usize)> for SlotIndex {
    fn from((hour_index, day_index): (usize, usize)) -> Self {
        Self::new(hour_index, day_index)
    }
}

/// 14x7 matrix of class hours for one user, 1 = class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<u8>,
}

impl OccupancyGrid {
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((HOURS_PER_DAY, DAYS_PER_WEEK)),
        }
    }

    pub(crate) fn occupy(&mut self, slot: SlotIndex) {
        self.cells[[slot.hour_index, slot.day_index]] = 1;
    }

    pub fn is_occupied(&self, slot: SlotIndex) -> bool {
        self.cells[[slot.hour_index, slot.day_index]] == 1
    }

    pub fn cells(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    pub fn day(&self, day_index: usize) -> ArrayView1<'_, u8> {
        self.cells.column(day_index)
    }

    pub fn has_classes_on(&self, day_index: usize) -> bool {
        self.day(day_index).iter().any(|&cell| cell == 1)
    }

    pub fn class_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    pub(crate) fn into_cells(self) -> Array2<u8> {
        self.cells
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-day distance-to-class profile derived from one occupancy grid.
///
/// Cells are 0 where the user has class (or where the whole day is free) and the
/// distance in hours to the nearest class of the same day otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceGrid {
    cells: Array2<u8>,
    class_days: [bool; DAYS_PER_WEEK],
}

impl DistanceGrid {
    pub fn new(cells: Array2<u8>, class_days: [bool; DAYS_PER_WEEK]) -> Self {
        Self { cells, class_days }
    }

    pub fn cells(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<u8> {
        &mut self.cells
    }

    pub fn get(&self, slot: SlotIndex) -> u8 {
        self.cells[[slot.hour_index, slot.day_index]]
    }

    /// Whether the source occupancy grid had at least one class on `day_index`.
    pub fn has_classes_on(&self, day_index: usize) -> bool {
        self.class_days[day_index]
    }

    pub fn to_f32(&self) -> Array2<f32> {
        self.cells.mapv(f32::from)
    }

    pub fn fill_day(&mut self, day_index: usize, value: u8) {
        self.cells.index_axis_mut(Axis(1), day_index).fill(value);
    }
}
