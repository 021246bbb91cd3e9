use beadbox::{
    config::{Config, GameSpec},
    losing_positions,
    strategy::AdversaryPolicy,
    Machine, Session,
};

fn nim_config(limit: usize, adversary: AdversaryPolicy) -> Config {
    Config {
        game: GameSpec::Subtraction {
            limit,
            moves: vec![1, 2],
        },
        adversary,
        ..Config::default()
    }
}

#[test]
fn no_box_is_left_depleted_across_a_long_run() {
    for adversary in [
        AdversaryPolicy::Random,
        AdversaryPolicy::Expert,
        AdversaryPolicy::Machine,
    ] {
        let mut session = Session::new(nim_config(8, adversary), Some(100));
        for _ in 0..1000 {
            session.play_round();
            for token_box in session.machine().boxes() {
                assert!(
                    !token_box.is_depleted(),
                    "depleted box after a round against {adversary}"
                );
            }
        }
    }
}

#[test]
fn every_round_yields_a_decreasing_alternating_trace() {
    let mut session = Session::new(nim_config(12, AdversaryPolicy::Machine), Some(101));
    for _ in 0..200 {
        let record = session.play_round();
        assert!(record.plies.len() <= session.machine().len() + 1);
        for pair in record.plies.windows(2) {
            assert!(pair[1].position < pair[0].position);
            assert_ne!(pair[0].machine_turn, pair[1].machine_turn);
        }
    }
}

#[test]
fn grid_game_trains_end_to_end() {
    let config = Config {
        game: GameSpec::Grid {
            width: 3,
            height: 3,
        },
        adversary: AdversaryPolicy::Random,
        ..Config::default()
    };
    let mut session = Session::new(config, Some(102));
    for _ in 0..500 {
        session.play_round();
    }
    assert_eq!(session.tally().total(), 500);
    assert_eq!(session.machine().len(), 9);
}

#[test]
fn expert_never_loses_a_winning_start() {
    // From 10 the first mover wins {1,2}-nim under perfect play; give the
    // expert the opening move and the machine can never win a round.
    let config = Config {
        machine_starts: false,
        ..nim_config(10, AdversaryPolicy::Expert)
    };
    let mut session = Session::new(config, Some(103));
    for _ in 0..300 {
        session.play_round();
    }
    assert_eq!(session.tally().victories, 0);
    assert_eq!(session.tally().losses, 300);
}

#[test]
fn trained_machine_dominates_random_play() {
    let mut session = Session::new(nim_config(8, AdversaryPolicy::Random), Some(104));
    for _ in 0..3000 {
        session.play_round();
    }
    let before = session.tally();
    for _ in 0..500 {
        session.play_round();
    }
    let tail_wins = session.tally().victories - before.victories;
    assert!(
        tail_wins > 350,
        "expected a trained machine to win most of the last 500 rounds, won {tail_wins}"
    );
}

#[test]
fn machine_serializes_and_restores() {
    let machine = Machine::from_graph(
        &GameSpec::Subtraction {
            limit: 6,
            moves: vec![1, 3],
        }
        .graph(),
        4,
    );
    let json = serde_json::to_string(&machine).expect("machine should serialize");
    let restored: Machine = serde_json::from_str(&json).expect("machine should deserialize");
    assert_eq!(restored, machine);
    assert_eq!(losing_positions(&restored), losing_positions(&machine));
}
