//! Scheduling algorithms: pair generation, matching enumeration, greedy week
//! selection, division composition.

mod divisions;
mod matchings;
mod pairing;
mod selection;

pub use divisions::schedule_for_divisions;
pub use matchings::available_matchup_sets;
pub use pairing::pairs;
pub use selection::{valid_schedules, valid_schedules_excluding};
