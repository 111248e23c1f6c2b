//! Integration tests for greedy schedule selection.

use league_scheduler::{valid_schedules, valid_schedules_excluding, Matchup, UsedMatchups};

fn m(a: i32, b: i32) -> Matchup<i32> {
    Matchup::between(a, b)
}

fn bye(r: i32) -> Matchup<i32> {
    Matchup::bye(r)
}

fn all_distinct(matchups: &[Matchup<i32>]) -> bool {
    matchups
        .iter()
        .enumerate()
        .all(|(i, a)| !matchups[i + 1..].contains(a))
}

#[test]
fn two_rosters_play_one_week() {
    assert_eq!(valid_schedules(&[1, 2]), vec![vec![m(1, 2)]]);
}

#[test]
fn three_rosters_rotate_the_bye() {
    let schedule = valid_schedules(&[1, 2, 3]);
    assert_eq!(
        schedule,
        vec![
            vec![bye(1), m(2, 3)],
            vec![bye(2), m(1, 3)],
            vec![bye(3), m(1, 2)],
        ]
    );
    let played: Vec<_> = schedule.into_iter().flatten().collect();
    assert!(all_distinct(&played));
}

#[test]
fn six_rosters_get_a_full_round_robin() {
    let schedule = valid_schedules(&[1, 2, 3, 4, 5, 6]);
    // n - 1 weeks, every possible matchup played exactly once
    assert_eq!(schedule.len(), 5);
    let played: Vec<_> = schedule.into_iter().flatten().collect();
    assert_eq!(played.len(), 15);
    assert!(all_distinct(&played));
}

#[test]
fn excluded_matchups_are_never_scheduled() {
    let used: UsedMatchups<i32> = [m(1, 2)].into_iter().collect();
    assert_eq!(
        valid_schedules_excluding(&[1, 2, 3, 4], used),
        vec![vec![m(1, 3), m(2, 4)], vec![m(1, 4), m(2, 3)]]
    );
}

#[test]
fn exclusion_is_order_insensitive() {
    let used: UsedMatchups<i32> = [m(2, 1)].into_iter().collect();
    for week in valid_schedules_excluding(&[1, 2, 3, 4], used) {
        assert!(!week.contains(&m(1, 2)));
    }
}

#[test]
fn degenerate_pools_yield_empty_schedules() {
    assert!(valid_schedules::<i32>(&[]).is_empty());
    assert!(valid_schedules(&[1]).is_empty());
}

#[test]
fn selection_is_deterministic() {
    let rosters = [7, 3, 9, 1, 5];
    assert_eq!(valid_schedules(&rosters), valid_schedules(&rosters));
}
