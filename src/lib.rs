#![forbid(unsafe_code)]
//! Nobet — recherche des échanges de jours de garde compatibles dans un planning mensuel.
//!
//! - Planning en grille : une ligne par personne, une case par jour (vide ou numérique).
//! - Un échange est permis si chacun est libre le jour repris et qu'aucun
//!   des deux ne se retrouve de garde deux jours d'affilée.
//! - Import CSV, instantané JSON ; calcul pur, sans écriture sur le planning.

pub mod matching;
pub mod model;
pub mod report;

#[cfg(feature = "serde")]
pub mod io;
#[cfg(feature = "serde")]
pub mod storage;

pub use matching::{find_suitable_shifts, is_suitable, numeric_days, MatchError, Matcher, SwapOffer};
pub use model::{Cell, DayIndex, DayNumber, MonthLength, Person, PersonId, Roster};
pub use report::{render_offers, ReportRenderer, TextReport};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
