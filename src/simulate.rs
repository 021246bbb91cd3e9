//! One full game between the machine and its adversary.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    machine::Machine,
    strategy::{adversary_choice, weighted_choice, AdversaryPolicy},
};

/// One recorded half-move: where it was played from, which edge was taken,
/// and whose turn it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub position: usize,
    pub label: usize,
    pub machine_turn: bool,
}

/// The trace of a finished game plus who won.
///
/// `machine_won` is true iff the adversary was the side left stuck at a
/// terminal position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub plies: Vec<Ply>,
    pub machine_won: bool,
}

/// Play one game from `start`, alternating turns until the mover has no
/// legal move; that mover loses.
///
/// The machine's turns always sample by token weight; the adversary's turns
/// follow `policy`. Each ply records the position before the move. The loop
/// terminates because every edge strictly decreases the node index, so the
/// position sequence is strictly decreasing.
pub fn play_game<R: Rng>(
    machine: &Machine,
    losing: &[bool],
    start: usize,
    machine_starts: bool,
    policy: AdversaryPolicy,
    rng: &mut R,
) -> GameRecord {
    let mut position = start;
    let mut machine_turn = machine_starts;
    let mut plies = Vec::new();

    loop {
        let choice = if machine_turn {
            weighted_choice(machine, position, rng)
        } else {
            adversary_choice(machine, losing, policy, position, rng)
        };
        let Some(choice) = choice else {
            // The side to move is stuck; the other side wins.
            return GameRecord {
                plies,
                machine_won: !machine_turn,
            };
        };
        plies.push(Ply {
            position,
            label: choice.label,
            machine_turn,
        });
        position = choice.dest;
        machine_turn = !machine_turn;
    }
}
