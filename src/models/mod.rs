//! Data structures for the scheduler: entrants, matchups, weeks, schedules.

mod entrant;
mod matchup;
mod schedule;

pub use entrant::Entrant;
pub use matchup::{Matchup, UsedMatchups};
pub use schedule::{Schedule, ScheduleError, Week};
