//! Division composition: per-division round-robins, bye merging across
//! divisions, then repeat-free inter-division play.

use crate::logic::selection::{valid_schedules, valid_schedules_excluding};
use crate::models::{Matchup, Schedule, ScheduleError, UsedMatchups, Week};
use log::debug;

/// One combined schedule for a season of divisions.
///
/// 1. Schedule each division's round-robin independently.
/// 2. Zip the per-division schedules by week index into combined weeks,
///    merging pairs of division byes into cross-division matchups.
/// 3. Schedule the full roster pool once more, excluding every matchup
///    already played inside a division, to append inter-division weeks.
/// 4. If `num_weeks` is given, cycle the season from its start to that
///    length (truncating the final repetition).
///
/// Fails fast on malformed input: a roster in two division slots, or
/// divisions whose schedules have differing week counts (unbalanced division
/// sizes). Both would otherwise produce ambiguous schedules.
pub fn schedule_for_divisions<R: Clone + PartialEq>(
    divisions: &[Vec<R>],
    num_weeks: Option<usize>,
) -> Result<Schedule<R>, ScheduleError> {
    let pool: Vec<R> = divisions.iter().flatten().cloned().collect();
    for (i, roster) in pool.iter().enumerate() {
        if pool[i + 1..].contains(roster) {
            return Err(ScheduleError::DuplicateRoster);
        }
    }

    let per_division: Vec<Schedule<R>> = divisions.iter().map(|d| valid_schedules(d)).collect();

    let week_count = per_division.first().map_or(0, Vec::len);
    for schedule in &per_division {
        if schedule.len() != week_count {
            return Err(ScheduleError::MismatchedDivisionWeeks {
                expected: week_count,
                found: schedule.len(),
            });
        }
    }

    let mut season: Schedule<R> = (0..week_count)
        .map(|w| {
            let combined = per_division.iter().flat_map(|s| s[w].iter().cloned());
            smoosh_byes(combined.collect())
        })
        .collect();

    let used: UsedMatchups<R> = season.iter().flatten().cloned().collect();
    let inter_division = valid_schedules_excluding(&pool, used);
    debug!(
        "composed {} division week(s) and {} inter-division week(s) for {} roster(s)",
        season.len(),
        inter_division.len(),
        pool.len()
    );
    season.extend(inter_division);

    Ok(match num_weeks {
        Some(n) if !season.is_empty() => (0..n).map(|i| season[i % season.len()].clone()).collect(),
        Some(_) => Schedule::new(),
        None => season,
    })
}

/// Merge division byes within one combined week.
///
/// Walks the concatenated matchups keeping one pending (unconsumed)
/// bye-matchup at a time. A second bye merges with the pending one into a
/// real cross-division matchup at the pending bye's position, consuming
/// both; the next bye after that starts a fresh pending entry, so an odd
/// number of byes leaves the last one standing. Non-bye matchups keep their
/// relative order.
fn smoosh_byes<R: Clone + PartialEq>(week: Week<R>) -> Week<R> {
    let mut out: Week<R> = Vec::with_capacity(week.len());
    let mut pending: Option<(usize, R)> = None;
    for matchup in week {
        match matchup.bye_partner().cloned() {
            Some(partner) => match pending.take() {
                Some((at, earlier)) => out[at] = Matchup::between(earlier, partner),
                None => {
                    pending = Some((out.len(), partner));
                    out.push(matchup);
                }
            },
            None => out.push(matchup),
        }
    }
    out
}
