//! Greedy week selection: the longest repeat-free schedule a single
//! left-to-right scan of the enumerated matchings can build.

use crate::logic::matchings::available_matchup_sets;
use crate::models::{Schedule, UsedMatchups};

/// The schedule obtained by greedily selecting, from the enumerated
/// matchings in order, every week whose matchups are all unused so far.
///
/// Greedy and non-backtracking on purpose: it does not guarantee the longest
/// possible repeat-free schedule for arbitrary inputs, but for balanced
/// round-robin pools (n up to about 8) it yields the full n (odd) or n - 1
/// (even) weeks, and its exact output order is part of the contract.
///
/// An empty or singleton roster list yields an empty schedule.
pub fn valid_schedules<R: Clone + PartialEq>(rosters: &[R]) -> Schedule<R> {
    valid_schedules_excluding(rosters, UsedMatchups::new())
}

/// Like [`valid_schedules`], but matchups in `used` are treated as already
/// played: any enumerated week containing one is skipped. Division
/// composition threads its intra-division matchups through here so
/// inter-division weeks never repeat them.
pub fn valid_schedules_excluding<R: Clone + PartialEq>(
    rosters: &[R],
    mut used: UsedMatchups<R>,
) -> Schedule<R> {
    let mut schedule = Schedule::new();
    for week in available_matchup_sets(rosters) {
        if week.iter().any(|m| used.contains(m)) {
            continue;
        }
        used.extend(week.iter().cloned());
        schedule.push(week);
    }
    schedule
}
