//! A running simulation: machine, labeling, score, and the round loop.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    machine::Machine,
    reinforce::apply_outcome,
    simulate::{play_game, GameRecord},
    solver::losing_positions,
};

/// Running win/loss score from the machine's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub victories: usize,
    pub losses: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.victories + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.victories as f64 / self.total() as f64
        }
    }
}

/// A simulation session.
///
/// Owns the machine exclusively; one `play_round` call is the unit of
/// atomicity, simulating a game and applying its reinforcement before
/// returning. The losing-position labeling is computed once per machine
/// shape and only rebuilt when the configuration changes.
#[derive(Debug)]
pub struct Session {
    config: Config,
    machine: Machine,
    losing: Vec<bool>,
    tally: Tally,
    rng: StdRng,
}

impl Session {
    /// Build a fresh machine for `config`. A seed makes the session
    /// reproducible; otherwise one is drawn from the process RNG.
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let machine = Machine::from_graph(&config.game.graph(), config.initial_tokens);
        let losing = losing_positions(&machine);
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Session {
            config,
            machine,
            losing,
            tally: Tally::default(),
            rng,
        }
    }

    /// Simulate one game and apply its reinforcement.
    pub fn play_round(&mut self) -> GameRecord {
        let record = play_game(
            &self.machine,
            &self.losing,
            self.config.game.start(),
            self.config.machine_starts,
            self.config.adversary,
            &mut self.rng,
        );
        if record.machine_won {
            self.tally.victories += 1;
        } else {
            self.tally.losses += 1;
        }
        apply_outcome(
            &mut self.machine,
            &record,
            self.config.adversary,
            self.config.reinforcement,
        );
        record
    }

    /// Replace the configuration, rebuilding the machine and labeling and
    /// discarding all learning and score. Any in-flight round has already
    /// completed by the time this can be called, since rounds run to
    /// completion synchronously.
    pub fn set_config(&mut self, config: Config) {
        self.machine = Machine::from_graph(&config.game.graph(), config.initial_tokens);
        self.losing = losing_positions(&self.machine);
        self.tally = Tally::default();
        self.config = config;
    }

    /// Reset learning and score without changing the configuration.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        self.set_config(config);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn losing(&self) -> &[bool] {
        &self.losing
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GameSpec, strategy::AdversaryPolicy};

    #[test]
    fn rounds_accumulate_into_the_tally() {
        let mut session = Session::new(Config::default(), Some(31));
        for _ in 0..50 {
            session.play_round();
        }
        assert_eq!(session.tally().total(), 50);

        session.reset();
        assert_eq!(session.tally(), Tally::default());
        let fresh = Machine::from_graph(
            &session.config().game.graph(),
            session.config().initial_tokens,
        );
        assert_eq!(session.machine(), &fresh);
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let mut a = Session::new(Config::default(), Some(32));
        let mut b = Session::new(Config::default(), Some(32));
        for _ in 0..20 {
            assert_eq!(a.play_round(), b.play_round());
        }
        assert_eq!(a.tally(), b.tally());
        assert_eq!(a.machine(), b.machine());
    }

    #[test]
    fn set_config_discards_learning_and_score() {
        let mut session = Session::new(Config::default(), Some(33));
        for _ in 0..30 {
            session.play_round();
        }
        let new_config = Config {
            game: GameSpec::Grid {
                width: 3,
                height: 4,
            },
            ..Config::default()
        };
        session.set_config(new_config.clone());
        assert_eq!(session.tally(), Tally::default());
        assert_eq!(session.machine().len(), 12);
        // All learning is gone: the rebuilt machine is exactly a fresh one.
        let fresh = Machine::from_graph(&new_config.game.graph(), new_config.initial_tokens);
        assert_eq!(session.machine(), &fresh);
    }

    #[test]
    fn expert_adversary_wins_from_losing_start_for_machine() {
        // {1,2}-nim from 9: the first mover faces a losing position, so a
        // perfect second player never loses. Machine starts, expert responds.
        let config = Config {
            game: GameSpec::Subtraction {
                limit: 9,
                moves: vec![1, 2],
            },
            adversary: AdversaryPolicy::Expert,
            ..Config::default()
        };
        let mut session = Session::new(config, Some(35));
        for _ in 0..200 {
            session.play_round();
        }
        assert_eq!(session.tally().victories, 0);
    }
}
