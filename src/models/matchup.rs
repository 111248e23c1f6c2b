//! Matchup (an unordered pair of entrants) and the grow-only set of
//! already-played matchups used to reject repeat pairings.

use crate::models::entrant::Entrant;
use serde::{Deserialize, Serialize};

/// An unordered pair: two rosters, or one roster and the bye.
///
/// The two sides are stored in the order they were encountered (that order is
/// what schedules display and tests pin), but equality is order-insensitive:
/// `(a, b)` equals `(b, a)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Matchup<R>(pub Entrant<R>, pub Entrant<R>);

impl<R> Matchup<R> {
    /// Pair two entrants as encountered.
    pub fn new(a: Entrant<R>, b: Entrant<R>) -> Self {
        Matchup(a, b)
    }

    /// A real matchup between two rosters.
    pub fn between(a: R, b: R) -> Self {
        Matchup(Entrant::Roster(a), Entrant::Roster(b))
    }

    /// A bye-matchup: `r` rests this week.
    pub fn bye(r: R) -> Self {
        Matchup(Entrant::Bye, Entrant::Roster(r))
    }

    /// True if either side is the bye.
    pub fn is_bye(&self) -> bool {
        self.0.is_bye() || self.1.is_bye()
    }

    /// The roster opposite the bye, when exactly one side is the bye.
    pub fn bye_partner(&self) -> Option<&R> {
        match (&self.0, &self.1) {
            (Entrant::Bye, Entrant::Roster(r)) | (Entrant::Roster(r), Entrant::Bye) => Some(r),
            _ => None,
        }
    }
}

impl<R: PartialEq> PartialEq for Matchup<R> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<R: Eq> Eq for Matchup<R> {}

/// Matchups already consumed by earlier weeks (or by an earlier scheduling
/// pass). Grows monotonically during one selection pass; never shrinks.
///
/// Vec-backed on purpose: the double-factorial growth of matchings caps
/// practical roster counts long before linear `contains` costs anything, and
/// this keeps the roster bound at `PartialEq` (no `Hash`/`Ord` required).
#[derive(Clone, Debug)]
pub struct UsedMatchups<R>(Vec<Matchup<R>>);

impl<R> UsedMatchups<R> {
    /// An empty exclusion set.
    pub fn new() -> Self {
        UsedMatchups(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<R: PartialEq> UsedMatchups<R> {
    /// Whether `matchup` has already been played (order-insensitive).
    pub fn contains(&self, matchup: &Matchup<R>) -> bool {
        self.0.contains(matchup)
    }

    /// Record `matchup` as played. Duplicates are not stored twice.
    pub fn insert(&mut self, matchup: Matchup<R>) {
        if !self.contains(&matchup) {
            self.0.push(matchup);
        }
    }
}

impl<R> Default for UsedMatchups<R> {
    fn default() -> Self {
        UsedMatchups::new()
    }
}

impl<R: PartialEq> Extend<Matchup<R>> for UsedMatchups<R> {
    fn extend<I: IntoIterator<Item = Matchup<R>>>(&mut self, iter: I) {
        for m in iter {
            self.insert(m);
        }
    }
}

impl<R: PartialEq> FromIterator<Matchup<R>> for UsedMatchups<R> {
    fn from_iter<I: IntoIterator<Item = Matchup<R>>>(iter: I) -> Self {
        let mut set = UsedMatchups::new();
        set.extend(iter);
        set
    }
}
