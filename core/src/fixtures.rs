//! Reference schedules shared by the unit tests.

pub const SCHEDULE_ONE: &str = "01000000100100001010001000000000000000000000000000000000011010001101001010000111000000000000000000";
pub const SCHEDULE_TWO: &str = "01000000111100011100001010000001000000000000100000010000010100011010001100000000100000000000000000";

pub type Rows = [[u8; 7]; 14];

/// Distance grid of `SCHEDULE_ONE`.
pub const DISTANCES_ONE: Rows = [
    [10, 0, 2, 0, 1, 0, 0],
    [9, 0, 1, 0, 0, 0, 0],
    [8, 1, 0, 0, 0, 0, 0],
    [7, 0, 1, 0, 1, 0, 0],
    [6, 1, 2, 0, 2, 0, 0],
    [5, 2, 3, 0, 3, 0, 0],
    [4, 2, 2, 0, 2, 0, 0],
    [3, 1, 1, 0, 1, 0, 0],
    [2, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 2, 0, 0],
    [1, 1, 1, 0, 3, 0, 0],
    [2, 2, 2, 0, 4, 0, 0],
];

/// Distance grid of `SCHEDULE_TWO`.
pub const DISTANCES_TWO: Rows = [
    [9, 0, 1, 1, 1, 0, 0],
    [8, 0, 0, 0, 0, 0, 0],
    [7, 0, 0, 0, 1, 0, 0],
    [6, 0, 1, 0, 2, 0, 0],
    [5, 1, 2, 0, 3, 0, 0],
    [4, 2, 1, 1, 4, 0, 0],
    [3, 2, 0, 2, 5, 0, 0],
    [2, 1, 0, 1, 6, 0, 0],
    [1, 0, 1, 0, 7, 0, 0],
    [0, 0, 2, 0, 8, 0, 0],
    [0, 0, 3, 1, 9, 0, 0],
    [1, 1, 4, 0, 10, 0, 0],
    [2, 2, 5, 1, 11, 0, 0],
    [3, 3, 6, 2, 12, 0, 0],
];

/// (hour, day) slots free for both reference schedules.
pub const SHARED_GAPS: [(usize, usize); 33] = [
    (0, 0),
    (0, 2),
    (0, 4),
    (1, 0),
    (2, 0),
    (3, 0),
    (3, 2),
    (3, 4),
    (4, 0),
    (4, 1),
    (4, 2),
    (4, 4),
    (5, 0),
    (5, 1),
    (5, 2),
    (5, 4),
    (6, 0),
    (6, 1),
    (6, 4),
    (7, 0),
    (7, 1),
    (7, 4),
    (8, 0),
    (10, 4),
    (11, 4),
    (12, 0),
    (12, 1),
    (12, 2),
    (12, 4),
    (13, 0),
    (13, 1),
    (13, 2),
    (13, 4),
];

pub fn assert_rows_u8(actual: ndarray::ArrayView2<'_, u8>, expected: &Rows) {
    for (hour, row) in expected.iter().enumerate() {
        for (day, &cell) in row.iter().enumerate() {
            assert_eq!(actual[[hour, day]], cell, "hour {} day {}", hour, day);
        }
    }
}

pub fn assert_rows_f32(actual: ndarray::ArrayView2<'_, f32>, expected: &[[f32; 7]; 14]) {
    for (hour, row) in expected.iter().enumerate() {
        for (day, &cell) in row.iter().enumerate() {
            assert!(
                (actual[[hour, day]] - cell).abs() < 1e-5,
                "hour {} day {}: {} != {}",
                hour,
                day,
                actual[[hour, day]],
                cell
            );
        }
    }
}
