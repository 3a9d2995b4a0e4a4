use super::util;
use crate::model::{Cell, DayIndex};

/// A cède `a_day` et prend `b_day` de B ; B fait l'inverse.
///
/// L'échange est permis si :
/// 1. A est libre en `b_day` et B est libre en `a_day` ;
/// 2. A est libre la veille et le lendemain de `b_day` (sauf si ce voisin est `a_day`) ;
/// 3. B est libre la veille et le lendemain de `a_day` (sauf si ce voisin est `b_day`).
///
/// Les voisins hors grille sont ignorés. Un index hors grille fait échouer la règle 1.
pub fn is_suitable(a: &[Cell], b: &[Cell], a_day: DayIndex, b_day: DayIndex) -> bool {
    if !util::is_free(a, b_day) || !util::is_free(b, a_day) {
        return false;
    }
    neighborhood_clear(a, b_day, a_day) && neighborhood_clear(b, a_day, b_day)
}

/// Aucune garde autour de `day`, la case `given_up` (celle qu'on cède) exceptée.
fn neighborhood_clear(cells: &[Cell], day: DayIndex, given_up: DayIndex) -> bool {
    util::neighbors(day, cells.len())
        .filter(|&n| n != given_up)
        .all(|n| util::is_free(cells, n))
}
