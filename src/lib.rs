//! Round-robin league scheduler: repeat-free weekly pairings, with byes for
//! odd roster counts and division play (intra-division weeks, cross-division
//! bye merging, then inter-division weeks).

pub mod logic;
pub mod models;

pub use logic::{
    available_matchup_sets, pairs, schedule_for_divisions, valid_schedules,
    valid_schedules_excluding,
};
pub use models::{Entrant, Matchup, Schedule, ScheduleError, UsedMatchups, Week};
