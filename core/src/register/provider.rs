use log::warn;
use serde::Deserialize;

use super::{RegisterError, ScheduleSource};
use crate::schedule::{SlotIndex, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Day index used for session letters the provider mapping does not know.
pub const UNMAPPED_DAY_INDEX: usize = DAYS_PER_WEEK - 1;
/// Hour index used for start times outside the 6:30 AM to 7:30 PM range.
pub const UNMAPPED_HOUR_INDEX: usize = HOURS_PER_DAY - 1;

const START_TIMES: [&str; HOURS_PER_DAY] = [
    "6:30 AM", "7:30 AM", "8:30 AM", "9:30 AM", "10:30 AM", "11:30 AM", "12:30 PM", "1:30 PM",
    "2:30 PM", "3:30 PM", "4:30 PM", "5:30 PM", "6:30 PM", "7:30 PM",
];

/// Raw answer of the external schedule provider.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub status: u16,
    pub body: String,
}

/// Fetches a user's enrolled subjects from the external schedule provider.
pub trait ScheduleProvider {
    fn fetch(&self, username: &str, password: &str) -> Result<ProviderReply, RegisterError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSchedule {
    pub data: Vec<Subject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// Maps the provider's day letters, Monday first. Sunday's letter is unknown.
pub fn day_index(letter: &str) -> usize {
    match letter {
        "L" => 0,
        "M" => 1,
        "I" => 2,
        "J" => 3,
        "V" => 4,
        "S" => 5,
        other => {
            warn!("unmapped day letter {:?}, using day {}", other, UNMAPPED_DAY_INDEX);
            UNMAPPED_DAY_INDEX
        }
    }
}

pub fn start_hour_index(start_time: &str) -> usize {
    START_TIMES
        .iter()
        .position(|&label| label == start_time)
        .unwrap_or_else(|| {
            warn!(
                "unmapped start time {:?}, using hour {}",
                start_time, UNMAPPED_HOUR_INDEX
            );
            UNMAPPED_HOUR_INDEX
        })
}

/// Hour of a `"h:mm AM"` label on a 24-hour clock. 12 PM stays 12; hours past 12 are rejected.
fn hour_of_day(label: &str) -> Result<u32, RegisterError> {
    let malformed = || RegisterError::MalformedPayload(format!("bad time label {:?}", label));
    let (hour, _) = label.split_once(':').ok_or_else(malformed)?;
    let hour: u32 = hour.trim().parse().map_err(|_| malformed())?;
    if hour > 12 {
        return Err(malformed());
    }
    if label.ends_with("PM") && hour != 12 {
        Ok(hour + 12)
    } else {
        Ok(hour)
    }
}

pub fn is_two_hour_block(start_time: &str, end_time: &str) -> Result<bool, RegisterError> {
    Ok(hour_of_day(end_time)?.saturating_sub(hour_of_day(start_time)?) == 2)
}

/// Slots covered by one session: its start hour, plus the next one for two-hour blocks.
pub fn session_slots(session: &Session) -> Result<Vec<SlotIndex>, RegisterError> {
    let day = day_index(&session.day);
    let hour = start_hour_index(&session.start_time);
    let mut slots = vec![SlotIndex::new(hour, day)];

    if is_two_hour_block(&session.start_time, &session.end_time)? {
        let second = SlotIndex::new(hour + 1, day);
        if second.is_in_week() {
            slots.push(second);
        } else {
            warn!(
                "dropping second hour of {} session starting {}",
                session.day, session.start_time
            );
        }
    }
    Ok(slots)
}

pub fn parse_class_hours(body: &str) -> Result<Vec<SlotIndex>, RegisterError> {
    let schedule: ProviderSchedule = serde_json::from_str(body)
        .map_err(|err| RegisterError::MalformedPayload(err.to_string()))?;

    let mut class_hours = Vec::new();
    for session in schedule.data.iter().flat_map(|subject| &subject.sessions) {
        class_hours.extend(session_slots(session)?);
    }
    Ok(class_hours)
}

/// Class hours of a user as reported by an external provider.
pub struct ProviderSource<P> {
    provider: P,
    username: String,
    password: String,
}

impl<P: ScheduleProvider> ProviderSource<P> {
    pub fn new(provider: P, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            provider,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl<P: ScheduleProvider> ScheduleSource for ProviderSource<P> {
    fn class_hours(&self) -> Result<Vec<SlotIndex>, RegisterError> {
        let reply = self.provider.fetch(&self.username, &self.password)?;
        match reply.status {
            200 => parse_class_hours(&reply.body),
            401 => Err(RegisterError::Unauthorized),
            status => Err(RegisterError::Provider { status }),
        }
    }
}
