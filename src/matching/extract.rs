use crate::model::{Cell, DayNumber};

/// Jours (1-based, croissants) où la case est numérique.
pub fn numeric_days(shifts: &[Cell]) -> Vec<DayNumber> {
    shifts
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_numeric())
        .filter_map(|(idx, _)| DayNumber::try_from(idx + 1).ok())
        .collect()
}
