use crate::model::{Cell, DayIndex};

/// Case libre à l'index donné. Hors grille : jamais libre.
pub(super) fn is_free(cells: &[Cell], day: DayIndex) -> bool {
    cells.get(day).is_some_and(Cell::is_empty)
}

/// Voisins existants (veille, lendemain) d'un index dans une grille de `len` cases.
pub(super) fn neighbors(day: DayIndex, len: usize) -> impl Iterator<Item = DayIndex> {
    day.checked_sub(1)
        .into_iter()
        .chain(day.checked_add(1))
        .filter(move |&n| n < len)
}
