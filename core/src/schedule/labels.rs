use super::grid::{DAYS_PER_WEEK, HOURS_PER_DAY};

pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const HOUR_LABELS: [&str; HOURS_PER_DAY] = [
    "6:30 AM - 7:30 AM",
    "7:30 AM - 8:30 AM",
    "8:30 AM - 9:30 AM",
    "9:30 AM - 10:30 AM",
    "10:30 AM - 11:30 AM",
    "11:30 AM - 12:30 PM",
    "12:30 PM - 1:30 PM",
    "1:30 PM - 2:30 PM",
    "2:30 PM - 3:30 PM",
    "3:30 PM - 4:30 PM",
    "4:30 PM - 5:30 PM",
    "5:30 PM - 6:30 PM",
    "6:30 PM - 7:30 PM",
    "7:30 PM - 8:30 PM",
];

pub fn day_label(day_index: usize) -> &'static str {
    DAY_LABELS.get(day_index).copied().unwrap_or("Unknown")
}

pub fn hour_label(hour_index: usize) -> &'static str {
    HOUR_LABELS.get(hour_index).copied().unwrap_or("Unknown")
}
