mod compat;
mod extract;
mod finder;
mod types;
mod util;

pub use compat::is_suitable;
pub use extract::numeric_days;
pub use types::{MatchError, SwapOffer};

use crate::model::{DayIndex, DayNumber, PersonId, Roster};

/// Recherche `requester` et, pour chaque autre personne (ordre du planning),
/// les jours de garde qu'elle pourrait échanger contre `requester_day` (0-based).
///
/// Un index hors grille ne produit aucune proposition ; utiliser
/// [`Matcher::suitable_for`] pour une validation explicite du jour.
pub fn find_suitable_shifts(
    roster: &Roster,
    requester: &PersonId,
    requester_day: DayIndex,
) -> Result<Vec<SwapOffer>, MatchError> {
    finder::find_suitable_shifts(roster, requester, requester_day)
}

/// Matcher : lié à un instantané de roster en lecture seule pour toute une requête
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    roster: &'a Roster,
}

impl<'a> Matcher<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    pub fn person_ids(&self) -> Vec<PersonId> {
        self.roster.person_ids()
    }

    /// Jours de garde (1-based) d'une personne.
    pub fn duty_days(&self, person: &PersonId) -> Result<Vec<DayNumber>, MatchError> {
        self.roster
            .find_person_by_id(person)
            .map(|p| numeric_days(&p.shifts))
            .ok_or_else(|| MatchError::UnknownPerson(person.as_str().to_string()))
    }

    /// Propositions d'échange pour le jour `day` (1-based) de `requester`.
    pub fn suitable_for(
        &self,
        requester: &PersonId,
        day: DayNumber,
    ) -> Result<Vec<SwapOffer>, MatchError> {
        let month = self.roster.month_length;
        if !month.contains(day) {
            return Err(MatchError::InvalidDay {
                day,
                month_length: month.days(),
            });
        }
        finder::find_suitable_shifts(self.roster, requester, usize::from(day) - 1)
    }
}
