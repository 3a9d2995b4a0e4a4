use super::{compat, types::MatchError, SwapOffer};
use crate::model::{DayIndex, DayNumber, PersonId, Roster};

pub(super) fn find_suitable_shifts(
    roster: &Roster,
    requester: &PersonId,
    requester_day: DayIndex,
) -> Result<Vec<SwapOffer>, MatchError> {
    let Some(a) = roster.find_person_by_id(requester) else {
        return Err(MatchError::UnknownPerson(requester.as_str().to_string()));
    };

    let mut out = Vec::new();
    for b in roster.people.iter().filter(|p| &p.id != requester) {
        // seuls les jours où B est réellement de garde sont échangeables
        let days: Vec<DayNumber> = (0..roster.month_length.len())
            .filter(|&j| compat::is_suitable(&a.shifts, &b.shifts, requester_day, j))
            .filter(|&j| b.shifts.get(j).is_some_and(|c| c.is_numeric()))
            .filter_map(|j| DayNumber::try_from(j + 1).ok())
            .collect();

        #[cfg(feature = "logging")]
        tracing::trace!(candidate = b.id.as_str(), ?days, "candidate evaluated");

        if !days.is_empty() {
            out.push(SwapOffer {
                person: b.id.clone(),
                days,
            });
        }
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        requester = requester.as_str(),
        day = requester_day + 1,
        offers = out.len(),
        "swap search done"
    );

    Ok(out)
}
