//! Turn state machine integration tests.
//!
//! These drive a full session through the public API with seeded boards,
//! covering the scripted scenarios and the counter invariants.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pokepairs::game::{
    Card, ClickOutcome, Difficulty, GameOutcome, Grid, Position, Session, TurnState,
};

fn deck(count: usize) -> Vec<Card<()>> {
    (0..count).map(|i| Card::new(format!("pokemon-{i}"), ())).collect()
}

fn seeded_grid(side: usize, seed: u64) -> Grid<()> {
    Grid::build(deck(side * side / 2), side, side, &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Cell positions grouped by label.
fn pairs_of(grid: &Grid<()>) -> Vec<(Position, Position)> {
    let mut by_label: HashMap<&str, Vec<Position>> = HashMap::new();
    for pos in grid.positions() {
        if let Some(label) = grid.label(pos) {
            by_label.entry(label).or_default().push(pos);
        }
    }
    let mut pairs: Vec<(Position, Position)> =
        by_label.into_values().map(|cells| (cells[0], cells[1])).collect();
    pairs.sort();
    pairs
}

// =============================================================================
// Scenarios
// =============================================================================

/// Two differing cards cost a try and come back face down after the delay.
#[test]
fn test_mismatch_then_hide() {
    let grid = seeded_grid(4, 3);
    let (a, b) = {
        let first = (0, 0);
        let second = grid
            .positions()
            .find(|&p| grid.label(p) != grid.label(first))
            .unwrap();
        (first, second)
    };
    let mut session = Session::new(grid, 10);

    session.click(a);
    let outcome = session.click(b);
    assert!(matches!(outcome, ClickOutcome::Mismatched { lost: false, .. }));
    assert_eq!(session.tries(), 1);
    assert_eq!(session.pairs_found(), 0);
    assert!(session.is_input_blocked());

    // Delayed callbacks, in the order they were queued.
    session.hide_pair(a, b);
    session.unblock_input();

    assert!(!session.is_revealed(a));
    assert!(!session.is_revealed(b));
    assert!(!session.is_input_blocked());
    assert_eq!(session.turn_state(), TurnState::Idle);
}

/// A found pair stays face up for the rest of the game.
#[test]
fn test_match_stays_revealed() {
    let grid = seeded_grid(4, 5);
    let (a, b) = pairs_of(&grid)[0];
    let mut session = Session::new(grid, 10);

    session.click(a);
    session.click(b);
    assert_eq!(session.pairs_found(), 1);

    let pairs = pairs_of(session.grid());
    let (c, wrong) = (pairs[1].0, pairs[2].0);
    session.click(c);
    session.click(wrong);
    session.hide_pair(c, wrong);
    session.unblock_input();

    assert!(session.is_revealed(a));
    assert!(session.is_revealed(b));
}

/// Matching every pair wins, after which nothing can change the counters.
#[test]
fn test_clearing_the_board_wins() {
    let grid = seeded_grid(4, 8);
    let pairs = pairs_of(&grid);
    let mut session = Session::new(grid, 10);

    for (i, &(a, b)) in pairs.iter().enumerate() {
        session.click(a);
        let outcome = session.click(b);
        let last = i + 1 == pairs.len();
        assert_eq!(
            outcome,
            ClickOutcome::Matched {
                first: a,
                second: b,
                won: last
            }
        );
    }

    assert_eq!(session.outcome(), Some(GameOutcome::Won));
    assert_eq!(session.pairs_found(), session.total_pairs());
    for pos in session.grid().positions().collect::<Vec<_>>() {
        assert_eq!(session.click(pos), ClickOutcome::Ignored);
    }
    assert_eq!(session.tries(), 0);
}

/// With a single try, the first mismatch ends the game at once.
#[test]
fn test_one_try_loses_on_first_mismatch() {
    let grid = seeded_grid(4, 13);
    let pairs = pairs_of(&grid);
    let (a, b) = (pairs[0].0, pairs[1].0);
    let mut session = Session::new(grid, 1);

    session.click(a);
    let outcome = session.click(b);
    assert_eq!(
        outcome,
        ClickOutcome::Mismatched {
            first: a,
            second: b,
            lost: true
        }
    );
    assert_eq!(session.turn_state(), TurnState::Finished(GameOutcome::Lost));

    // The queued callbacks still fire but the game stays over.
    session.hide_pair(a, b);
    session.unblock_input();
    let (c, d) = pairs[2];
    assert_eq!(session.click(c), ClickOutcome::Ignored);
    assert_eq!(session.click(d), ClickOutcome::Ignored);
    assert_eq!(session.pairs_found(), 0);
    assert_eq!(session.lives(), 0);
}

/// A 5x5 board plays to completion around its empty cell.
#[test]
fn test_hard_board_with_filler() {
    let side = Difficulty::Hard.side();
    let grid = seeded_grid(side, 21);
    assert!(grid.is_filler((4, 4)));
    let pairs = pairs_of(&grid);
    assert_eq!(pairs.len(), Difficulty::Hard.pair_count());

    let mut session = Session::new(grid, 10);
    assert_eq!(session.click((4, 4)), ClickOutcome::Ignored);
    for (a, b) in pairs {
        session.click(a);
        session.click(b);
    }
    assert_eq!(session.outcome(), Some(GameOutcome::Won));
}

/// Every arrangement of a tiny board shows up given enough seeds.
#[test]
fn test_every_layout_reachable() {
    let layouts: std::collections::HashSet<Vec<Option<String>>> = (0..500)
        .map(|seed| {
            seeded_grid(2, seed)
                .labels()
                .into_iter()
                .map(|label| label.map(str::to_owned))
                .collect()
        })
        .collect();
    // 4! / (2! * 2!) ways to place two pairs on four cells.
    assert_eq!(layouts.len(), 6);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every label lands on exactly two cells, whatever the seed.
    #[test]
    fn prop_each_label_twice(side in 1usize..=6, seed in any::<u64>()) {
        prop_assume!(side * side >= 2);
        let grid = seeded_grid(side, seed);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for label in grid.labels().into_iter().flatten() {
            *counts.entry(label).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), side * side / 2);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    /// The same seed always produces the same board.
    #[test]
    fn prop_seeded_shuffle_repeats(seed in any::<u64>()) {
        let a = seeded_grid(4, seed);
        let b = seeded_grid(4, seed);
        prop_assert_eq!(a.labels(), b.labels());
    }

    /// Random click sequences never break the counter invariants, and
    /// clicking a face-up card never changes anything.
    #[test]
    fn prop_random_clicks_hold_invariants(
        seed in any::<u64>(),
        max_tries in 1u32..6,
        clicks in prop::collection::vec((0usize..4, 0usize..4, any::<bool>()), 0..80),
    ) {
        let mut session = Session::new(seeded_grid(4, seed), max_tries);
        let mut pending: Option<(Position, Position)> = None;

        for (row, col, fire_timers) in clicks {
            let pos = (row, col);
            let before = (session.tries(), session.pairs_found());
            let was_revealed = session.is_revealed(pos);
            let outcome = session.click(pos);

            if was_revealed {
                prop_assert_eq!(outcome, ClickOutcome::Ignored);
                prop_assert_eq!(before, (session.tries(), session.pairs_found()));
                prop_assert!(session.is_revealed(pos));
            }
            match outcome {
                ClickOutcome::Matched { .. } => {
                    prop_assert_eq!(session.pairs_found(), before.1 + 1);
                    prop_assert_eq!(session.tries(), before.0);
                }
                ClickOutcome::Mismatched { first, second, .. } => {
                    prop_assert_eq!(session.tries(), before.0 + 1);
                    prop_assert_eq!(session.pairs_found(), before.1);
                    pending = Some((first, second));
                }
                _ => {}
            }

            if fire_timers {
                if let Some((a, b)) = pending.take() {
                    session.hide_pair(a, b);
                    session.unblock_input();
                    prop_assert!(!session.is_revealed(a));
                    prop_assert!(!session.is_revealed(b));
                }
            }

            prop_assert!(session.tries() <= session.max_tries());
            prop_assert!(session.pairs_found() <= session.total_pairs());
            if session.outcome() == Some(GameOutcome::Lost) {
                prop_assert_eq!(session.tries(), session.max_tries());
            }
        }
    }
}
