use crate::matching::SwapOffer;
use crate::model::{DayNumber, PersonId};

/// Permet de customiser le rendu d'un résultat (texte, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, requester: &PersonId, day: DayNumber, offers: &[SwapOffer]) -> String;
}

/// Rendu texte simple : une ligne par personne, `id: j1, j2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, requester: &PersonId, day: DayNumber, offers: &[SwapOffer]) -> String {
        if offers.is_empty() {
            return format!("No compatible swap for {requester} on day {day}.\n");
        }
        offers
            .iter()
            .map(|offer| format!("{}: {}\n", offer.person, join_days(&offer.days)))
            .collect()
    }
}

/// Jours séparés par des virgules.
pub fn join_days(days: &[DayNumber]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_offers(
    requester: &PersonId,
    day: DayNumber,
    offers: &[SwapOffer],
    renderer: &dyn ReportRenderer,
) -> String {
    renderer.render(requester, day, offers)
}
