use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::grid::{OccupancyGrid, SlotIndex, SCHEDULE_LENGTH};

/// Error raised for malformed bit schedules.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected 98 characters, found {found}")]
    WrongLength { found: usize },
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
    #[error("slot (hour {hour_index}, day {day_index}) is outside the week")]
    SlotOutOfRange { hour_index: usize, day_index: usize },
}

/// A validated 98-character schedule string, row-major over (hour, day).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitSchedule(String);

impl BitSchedule {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_grid(&self) -> OccupancyGrid {
        let mut grid = OccupancyGrid::empty();
        for (position, bit) in self.0.bytes().enumerate() {
            if bit == b'1' {
                grid.occupy(SlotIndex::from_position(position));
            }
        }
        grid
    }
}

fn validate(schedule: &str) -> Result<(), FormatError> {
    let found = schedule.chars().count();
    if found != SCHEDULE_LENGTH {
        return Err(FormatError::WrongLength { found });
    }
    match schedule
        .chars()
        .enumerate()
        .find(|(_, c)| *c != '0' && *c != '1')
    {
        Some((position, found)) => Err(FormatError::InvalidCharacter { position, found }),
        None => Ok(()),
    }
}

impl FromStr for BitSchedule {
    type Err = FormatError;

    fn from_str(schedule: &str) -> Result<Self, Self::Err> {
        validate(schedule)?;
        Ok(Self(schedule.to_string()))
    }
}

impl TryFrom<String> for BitSchedule {
    type Error = FormatError;

    fn try_from(schedule: String) -> Result<Self, Self::Error> {
        validate(&schedule)?;
        Ok(Self(schedule))
    }
}

impl From<BitSchedule> for String {
    fn from(schedule: BitSchedule) -> Self {
        schedule.0
    }
}

impl fmt::Display for BitSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decodes a 98-character schedule into its 14x7 occupancy grid.
pub fn decode(schedule: &str) -> Result<OccupancyGrid, FormatError> {
    Ok(schedule.parse::<BitSchedule>()?.to_grid())
}

/// Builds a schedule string with a class at each `(hour, day)` slot.
///
/// Slots outside the week cannot be encoded and are reported instead of ignored.
pub fn encode<I>(slots: I) -> Result<BitSchedule, FormatError>
where
    I: IntoIterator<Item = SlotIndex>,
{
    let mut bits = [b'0'; SCHEDULE_LENGTH];
    for slot in slots {
        if !slot.is_in_week() {
            return Err(FormatError::SlotOutOfRange {
                hour_index: slot.hour_index,
                day_index: slot.day_index,
            });
        }
        bits[slot.position()] = b'1';
    }
    let schedule = bits.iter().map(|&bit| bit as char).collect();
    Ok(BitSchedule(schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::grid::{DAYS_PER_WEEK, HOURS_PER_DAY};
    use crate::fixtures::SCHEDULE_ONE;

    #[test]
    fn decode_sets_exactly_the_marked_positions() {
        let grid = decode(SCHEDULE_ONE).unwrap();
        for (position, c) in SCHEDULE_ONE.chars().enumerate() {
            assert_eq!(
                grid.is_occupied(SlotIndex::from_position(position)),
                c == '1',
                "position {}",
                position
            );
        }
    }

    #[test]
    fn decode_matches_reference_grid() {
        let grid = decode(SCHEDULE_ONE).unwrap();
        let expected: [[u8; DAYS_PER_WEEK]; HOURS_PER_DAY] = [
            [0, 1, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 1, 0, 0],
            [0, 0, 1, 0, 1, 0, 0],
            [0, 1, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 1, 1, 0, 1, 0, 0],
            [0, 1, 1, 0, 1, 0, 0],
            [1, 0, 1, 0, 0, 0, 0],
            [1, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ];
        for (hour, row) in expected.iter().enumerate() {
            for (day, &cell) in row.iter().enumerate() {
                assert_eq!(grid.cells()[[hour, day]], cell);
            }
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode("0101").unwrap_err(),
            FormatError::WrongLength { found: 4 }
        );
        let long = "0".repeat(SCHEDULE_LENGTH + 1);
        assert!(matches!(
            decode(&long),
            Err(FormatError::WrongLength { found: 99 })
        ));
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let mut schedule = "0".repeat(SCHEDULE_LENGTH - 1);
        schedule.insert(10, '2');
        assert_eq!(
            decode(&schedule).unwrap_err(),
            FormatError::InvalidCharacter {
                position: 10,
                found: '2'
            }
        );
    }

    #[test]
    fn encode_marks_hour_day_pairs() {
        let slots: [(usize, usize); 17] = [
            (0, 1),
            (1, 1),
            (1, 4),
            (2, 2),
            (2, 4),
            (3, 1),
            (8, 1),
            (8, 2),
            (8, 4),
            (9, 1),
            (9, 2),
            (9, 4),
            (10, 0),
            (10, 2),
            (11, 0),
            (11, 1),
            (11, 2),
        ];
        let schedule = encode(slots.into_iter().map(SlotIndex::from)).unwrap();
        assert_eq!(schedule.as_str(), SCHEDULE_ONE);
    }

    #[test]
    fn encode_rejects_slots_outside_the_week() {
        let err = encode([SlotIndex::new(14, 2)]).unwrap_err();
        assert_eq!(
            err,
            FormatError::SlotOutOfRange {
                hour_index: 14,
                day_index: 2
            }
        );
    }

    #[test]
    fn bit_schedule_deserializes_only_valid_strings() {
        let json = format!("\"{}\"", SCHEDULE_ONE);
        let schedule: BitSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule.to_string(), SCHEDULE_ONE);
        assert!(serde_json::from_str::<BitSchedule>("\"0110\"").is_err());
    }
}
