use crate::matching::MatchError;
use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Numéro de jour côté utilisateur (1-based).
pub type DayNumber = u8;
/// Index de jour interne (0-based).
pub type DayIndex = usize;

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Case d'une journée : vide, ou marquée d'une valeur numérique (de garde).
///
/// Seule la présence compte pour le calcul ; la valeur n'est jamais comparée.
/// En JSON : `null` ou un nombre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Option<f64>", into = "Option<f64>")
)]
pub enum Cell {
    #[default]
    Empty,
    Numeric(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Numeric(_))
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Empty, Cell::Numeric)
    }
}

impl From<Cell> for Option<f64> {
    fn from(c: Cell) -> Self {
        match c {
            Cell::Empty => None,
            Cell::Numeric(v) => Some(v),
        }
    }
}

/// Nombre de jours de la grille mensuelle (28 à 31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct MonthLength(u8);

impl MonthLength {
    pub const MIN: u8 = 28;
    pub const MAX: u8 = 31;

    pub fn new(days: u8) -> Result<Self, MatchError> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(MatchError::InvalidMonthLength(days));
        }
        Ok(Self(days))
    }

    /// Longueur réelle d'un mois du calendrier grégorien.
    pub fn for_month(year: i32, month: u32) -> Result<Self, MatchError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(MatchError::InvalidMonth { year, month })?;
        let next = if first.month() == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(MatchError::InvalidMonth { year, month })?;
        let days = next.signed_duration_since(first).num_days();
        // toujours dans 28..=31 pour un mois valide
        Self::new(days as u8)
    }

    pub fn days(self) -> u8 {
        self.0
    }

    /// Nombre de cases d'une ligne de planning.
    pub fn len(self) -> usize {
        usize::from(self.0)
    }

    /// `day` est-il un numéro de jour valide (1-based) pour ce mois ?
    pub fn contains(self, day: DayNumber) -> bool {
        (1..=self.0).contains(&day)
    }
}

impl Default for MonthLength {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for MonthLength {
    type Error = MatchError;
    fn try_from(days: u8) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<MonthLength> for u8 {
    fn from(m: MonthLength) -> Self {
        m.0
    }
}

/// Personne du planning et ses cases jour par jour (index `i` = jour `i+1`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub shifts: Vec<Cell>,
}

impl Person {
    pub fn new<I: Into<PersonId>>(id: I, shifts: Vec<Cell>) -> Self {
        Self {
            id: id.into(),
            shifts,
        }
    }

    /// Construit une personne de garde sur les jours donnés (1-based), vide ailleurs.
    /// Les jours hors de la grille sont ignorés.
    pub fn on_days<I: Into<PersonId>>(id: I, month: MonthLength, days: &[DayNumber]) -> Self {
        let mut shifts = vec![Cell::Empty; month.len()];
        for &day in days {
            if let Some(cell) = usize::from(day)
                .checked_sub(1)
                .and_then(|i| shifts.get_mut(i))
            {
                *cell = Cell::Numeric(1.0);
            }
        }
        Self::new(id, shifts)
    }
}

/// Planning mensuel complet, dans l'ordre de la source.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub month_length: MonthLength,
    pub people: Vec<Person>,
}

impl Roster {
    pub fn new(month_length: MonthLength) -> Self {
        Self {
            month_length,
            people: Vec::new(),
        }
    }

    pub fn with_people(month_length: MonthLength, people: Vec<Person>) -> Self {
        Self {
            month_length,
            people,
        }
    }

    pub fn find_person_by_id<'a>(&'a self, id: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    pub fn person_ids(&self) -> Vec<PersonId> {
        self.people.iter().map(|p| p.id.clone()).collect()
    }

    /// Forme de la grille : ids non vides et uniques, une case par jour du mois.
    pub fn validate(&self) -> Result<(), MatchError> {
        let expected = self.month_length.len();
        let mut seen = HashSet::new();
        for p in &self.people {
            if p.id.as_str().trim().is_empty() {
                return Err(MatchError::EmptyPersonId);
            }
            if !seen.insert(&p.id) {
                return Err(MatchError::DuplicatePerson(p.id.as_str().to_string()));
            }
            if p.shifts.len() != expected {
                return Err(MatchError::RowLength {
                    person: p.id.as_str().to_string(),
                    expected,
                    found: p.shifts.len(),
                });
            }
        }
        Ok(())
    }
}
