//! Building a user's bit schedule from a source of class hours.

pub mod provider;

use crate::schedule::{encode, BitSchedule, FormatError, SlotIndex};
use crate::telemetry::log::LogManager;

pub use provider::{ProviderReply, ProviderSource, ScheduleProvider};

/// Failure while gathering a user's class hours. `Display` is the user-facing message.
#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("wrong username or password")]
    Unauthorized,
    #[error("schedule provider answered with status {status}")]
    Provider { status: u16 },
    #[error("schedule provider sent an unreadable payload: {0}")]
    MalformedPayload(String),
    #[error("class hours cannot be encoded: {0}")]
    Format(#[from] FormatError),
}

/// Anything able to list the (hour, day) slots where a user has class.
pub trait ScheduleSource {
    fn class_hours(&self) -> Result<Vec<SlotIndex>, RegisterError>;
}

/// Class hours given explicitly, e.g. picked by hand on a weekly grid.
#[derive(Debug, Clone, Default)]
pub struct ManualSource {
    slots: Vec<SlotIndex>,
}

impl ManualSource {
    /// Takes `(hour_index, day_index)` pairs.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_slots(pairs.into_iter().map(SlotIndex::from).collect())
    }

    pub fn from_slots(slots: Vec<SlotIndex>) -> Self {
        Self { slots }
    }
}

impl ScheduleSource for ManualSource {
    fn class_hours(&self) -> Result<Vec<SlotIndex>, RegisterError> {
        Ok(self.slots.clone())
    }
}

/// Collects the class hours of `source` and encodes them as a bit schedule.
pub fn build_schedule<S>(source: &S) -> Result<BitSchedule, RegisterError>
where
    S: ScheduleSource + ?Sized,
{
    let class_hours = source.class_hours()?;
    let schedule = encode(class_hours.iter().copied())?;
    LogManager::new("register").record(&format!(
        "built schedule with {} class hours",
        class_hours.len()
    ));
    Ok(schedule)
}
