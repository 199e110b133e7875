pub mod codec;
pub mod grid;
pub mod labels;

pub use codec::{decode, encode, BitSchedule, FormatError};
pub use grid::{
    DistanceGrid, OccupancyGrid, SlotIndex, DAYS_PER_WEEK, HOURS_PER_DAY, SCHEDULE_LENGTH,
    WEEKDAYS,
};
pub use labels::{day_label, hour_label, DAY_LABELS, HOUR_LABELS};
