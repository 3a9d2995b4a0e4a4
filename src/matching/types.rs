use crate::model::{DayNumber, PersonId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Proposition d'échange : une personne et les jours qu'elle peut céder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwapOffer {
    pub person: PersonId,
    pub days: Vec<DayNumber>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("invalid day {day}: expected 1..={month_length}")]
    InvalidDay { day: DayNumber, month_length: u8 },
    #[error("invalid month length {0}: expected 28..=31")]
    InvalidMonthLength(u8),
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("empty person id")]
    EmptyPersonId,
    #[error("duplicate person id {0}")]
    DuplicatePerson(String),
    #[error("person {person}: expected {expected} day cells, found {found}")]
    RowLength {
        person: String,
        expected: usize,
        found: usize,
    },
}
