//! Entrant: one slot in a week's pairing, either a real roster or the bye.

use serde::{Deserialize, Serialize};

/// One side of a matchup: a competing roster, or the bye sentinel used to
/// pad an odd roster count to an even one.
///
/// The roster identifier `R` is opaque to the scheduler; it only needs to be
/// comparable and cloneable. Rosters within one scheduling call are assumed
/// distinct.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrant<R> {
    /// No opponent this week.
    Bye,
    /// A real participant.
    Roster(R),
}

impl<R> Entrant<R> {
    /// True for the bye sentinel.
    pub fn is_bye(&self) -> bool {
        matches!(self, Entrant::Bye)
    }

    /// The roster identifier, if this slot is a real participant.
    pub fn roster(&self) -> Option<&R> {
        match self {
            Entrant::Bye => None,
            Entrant::Roster(r) => Some(r),
        }
    }
}
