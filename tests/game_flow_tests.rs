//! Full-game lifecycle tests against the public session API.
//!
//! These drive seeded sessions through complete ten-round games and
//! check the state machine invariants: round advancement, readiness
//! guards, offer shapes, terminal outcomes and reset.

use chroma_dice::{
    DieKind, GameSession, PlayerId, RoundOutcome, MAX_ROUNDS,
};

const ANN: PlayerId = PlayerId(1);
const BOB: PlayerId = PlayerId(2);

fn lobby(seed: u64) -> GameSession {
    let mut session = GameSession::new(seed);
    assert!(session.register_player(ANN, "ann"));
    assert!(session.register_player(BOB, "bob"));
    session
}

/// Play one full game and return the terminal outcome.
fn play_to_the_end(session: &mut GameSession) -> RoundOutcome {
    assert!(session.start_game());

    let mut pending_offers: Option<Vec<(PlayerId, Vec<DieKind>)>> = None;
    loop {
        // Rounds after the first require a pick before rolling.
        if let Some(offers) = pending_offers.take() {
            for (id, choices) in offers {
                assert!(session.pick_die(id, choices[0]));
            }
        }

        for id in session.player_ids() {
            assert!(session.roll_dice(id).is_some());
        }

        match session.check_round_complete().expect("everyone rolled") {
            RoundOutcome::RoundEnd { offers, .. } => {
                pending_offers = Some(
                    offers
                        .into_iter()
                        .map(|(id, menu)| (id, menu.into_vec()))
                        .collect(),
                );
            }
            outcome @ RoundOutcome::GameEnd { .. } => return outcome,
        }
    }
}

#[test]
fn a_full_game_runs_exactly_ten_rounds() {
    let mut session = lobby(42);
    assert!(session.start_game());

    let mut pending_offers: Option<Vec<(PlayerId, Vec<DieKind>)>> = None;
    for round in 1..=MAX_ROUNDS as u32 {
        assert_eq!(session.current_round(), round);

        if let Some(offers) = pending_offers.take() {
            for (id, choices) in offers {
                assert!(session.pick_die(id, choices[0]));
            }
        }
        for id in session.player_ids() {
            assert!(session.roll_dice(id).is_some());
        }

        let outcome = session.check_round_complete().unwrap();
        if round < MAX_ROUNDS as u32 {
            let RoundOutcome::RoundEnd { finished_round, offers, .. } = outcome else {
                panic!("round {round} should not end the game");
            };
            assert_eq!(finished_round, round);
            assert_eq!(session.current_round(), round + 1);
            pending_offers = Some(
                offers
                    .into_iter()
                    .map(|(id, menu)| (id, menu.into_vec()))
                    .collect(),
            );
        } else {
            assert!(matches!(outcome, RoundOutcome::GameEnd { .. }));
        }
    }
}

#[test]
fn winners_are_exactly_the_players_with_the_best_total() {
    let mut session = lobby(7);
    let RoundOutcome::GameEnd { winners, totals } = play_to_the_end(&mut session) else {
        unreachable!();
    };

    assert_eq!(totals.len(), 2);
    let best = totals.iter().map(|&(_, t)| t).max().unwrap();
    let expected: Vec<PlayerId> = totals
        .iter()
        .filter(|&&(_, t)| t == best)
        .map(|&(id, _)| id)
        .collect();
    assert_eq!(winners, expected);
    assert!(!winners.is_empty());

    // Totals match the recorded per-round history.
    for &(id, total) in &totals {
        let player = session.player(id).unwrap();
        assert!(player.history.iter().all(Option::is_some));
        assert_eq!(player.total_score(), total);
    }
}

#[test]
fn inventories_grow_by_one_die_per_completed_round() {
    let mut session = lobby(99);
    play_to_the_end(&mut session);

    // One seed die plus one pick per round 2..=10.
    for id in [ANN, BOB] {
        assert_eq!(
            session.player(id).unwrap().dice.total(),
            MAX_ROUNDS as u32
        );
    }
}

#[test]
fn offers_restrict_top_scorers_to_a_single_choice() {
    let mut session = GameSession::new(3);
    for (i, name) in ["ann", "bob", "cat"].iter().enumerate() {
        session.register_player(PlayerId(i as u64 + 1), *name);
    }
    session.start_game();
    for id in session.player_ids() {
        session.roll_dice(id).unwrap();
    }

    let RoundOutcome::RoundEnd { offers, .. } = session.check_round_complete().unwrap()
    else {
        panic!("round 1 cannot end the game");
    };

    let tops = session.top_scorers(0);
    assert!(!tops.is_empty());
    assert_eq!(offers.len(), 3);
    for (id, menu) in &offers {
        if tops.contains(id) {
            assert_eq!(menu.len(), 1, "{id} is a top scorer");
        } else {
            assert_eq!(menu.len(), 3, "{id} is not a top scorer");
        }
    }
}

#[test]
fn a_stalled_round_never_completes() {
    let mut session = lobby(5);
    session.start_game();
    session.roll_dice(ANN).unwrap();

    // Bob never rolls; the round stays open no matter how often the
    // host asks.
    for _ in 0..10 {
        assert!(session.check_round_complete().is_none());
    }
    assert_eq!(session.current_round(), 1);
}

#[test]
fn seeded_games_replay_identically() {
    let mut first = lobby(1234);
    let mut second = lobby(1234);

    let a = play_to_the_end(&mut first);
    let b = play_to_the_end(&mut second);

    assert_eq!(a, b);
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn reset_after_a_finished_game_allows_a_fresh_one() {
    let mut session = lobby(8);
    play_to_the_end(&mut session);

    session.reset_game();
    assert_eq!(session.current_round(), 0);
    assert!(!session.started());

    // Same players, fresh state; a second game runs fine.
    let outcome = play_to_the_end(&mut session);
    assert!(matches!(outcome, RoundOutcome::GameEnd { .. }));
}

#[test]
fn disconnect_mid_round_lets_the_rest_finish() {
    let mut session = lobby(11);
    session.start_game();
    session.roll_dice(ANN).unwrap();

    // Bob leaves without rolling; Ann alone now satisfies readiness.
    session.remove_player(BOB);
    let outcome = session.check_round_complete().unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::RoundEnd { finished_round: 1, .. }
    ));
}
