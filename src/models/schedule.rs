//! Week and Schedule aliases, plus the errors division composition can raise.

use crate::models::matchup::Matchup;

/// One week of play: a complete pairing of all rosters (plus the bye when the
/// count is odd) into disjoint matchups.
pub type Week<R> = Vec<Matchup<R>>;

/// An ordered sequence of weeks.
pub type Schedule<R> = Vec<Week<R>>;

/// Errors raised when composing a division schedule. The per-roster
/// algorithms (`pairs`, `available_matchup_sets`, `valid_schedules`) are
/// total and never fail; validation happens once at the division boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// The same roster appears more than once across the divisions.
    DuplicateRoster,
    /// Divisions produced differing week counts, so their schedules cannot be
    /// zipped week-by-week. Happens when division sizes are unbalanced.
    MismatchedDivisionWeeks { expected: usize, found: usize },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::DuplicateRoster => {
                write!(f, "The same roster appears in more than one division slot")
            }
            ScheduleError::MismatchedDivisionWeeks { expected, found } => {
                write!(
                    f,
                    "Divisions produced differing week counts ({} vs {}); use equal-sized divisions",
                    expected, found
                )
            }
        }
    }
}
