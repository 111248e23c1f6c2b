//! Matching enumeration: every complete pairing of a roster list.

use crate::logic::pairing::pairs;
use crate::models::{Entrant, Matchup, Week};

/// Every perfect matching of `rosters` as a week, in a fixed deterministic
/// order. An odd roster count gets the bye prepended first, so each week then
/// contains exactly one bye-matchup.
///
/// For n rosters (n even) this returns `(n-1)!!` weeks: 4 rosters give 3,
/// 6 give 15, 8 give 105. The double-factorial growth is the crate's scaling
/// limit; keep roster counts modest.
///
/// Fewer than two rosters cannot be paired and yield no weeks.
pub fn available_matchup_sets<R: Clone + PartialEq>(rosters: &[R]) -> Vec<Week<R>> {
    if rosters.len() < 2 {
        return Vec::new();
    }
    let mut slots: Vec<Entrant<R>> = rosters.iter().cloned().map(Entrant::Roster).collect();
    if slots.len() % 2 == 1 {
        slots.insert(0, Entrant::Bye);
    }
    matchings(&slots)
}

/// Enumerate matchings of an even-length slot list.
///
/// The head's partner is chosen via `pairs` (head against each later slot, in
/// tail order); removing both and recursing enumerates the rest. Each
/// matching is uniquely decomposed by who partners the head, so the union
/// over partner choices has no duplicates. Iterating partners in tail order
/// before recursing gives the stable order the greedy selector scans.
fn matchings<R: Clone + PartialEq>(slots: &[Entrant<R>]) -> Vec<Week<R>> {
    if slots.len() == 2 {
        return vec![vec![Matchup::new(slots[0].clone(), slots[1].clone())]];
    }

    let mut weeks = Vec::new();
    // The i-th pair's partner sits at slot index i + 1 (pairs preserves tail order).
    for (i, (head, partner)) in pairs(slots).into_iter().enumerate() {
        let mut rest = slots.to_vec();
        rest.remove(i + 1);
        rest.remove(0);
        for tail in matchings(&rest) {
            let mut week = Vec::with_capacity(slots.len() / 2);
            week.push(Matchup::new(head.clone(), partner.clone()));
            week.extend(tail);
            weeks.push(week);
        }
    }
    weeks
}
