//! Post-game token adjustment.

use serde::{Deserialize, Serialize};

use crate::{machine::Machine, simulate::GameRecord, strategy::AdversaryPolicy};

/// Token deltas applied after a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reinforcement {
    pub reward: i32,
    pub penalty: i32,
}

impl Default for Reinforcement {
    fn default() -> Self {
        Reinforcement {
            reward: 3,
            penalty: -1,
        }
    }
}

/// Apply one game's outcome to the machine, in place.
///
/// Each recorded ply adjusts the exact `(position, label)` slot it played:
/// winners of the game get `reward` on their plies, losers `penalty`, with
/// token counts clamped at zero. Adversary plies carry no learning signal
/// unless the adversary is itself the machine policy (self-play) — only the
/// machine side is being trained. Afterwards every box that has run out of
/// tokens is refilled to the machine's initial weight, so no non-terminal
/// box is ever left without a choice.
///
/// This is the whole of one game's update; callers must not read the machine
/// between the per-ply deltas and the refill scan.
pub fn apply_outcome(
    machine: &mut Machine,
    record: &GameRecord,
    adversary: AdversaryPolicy,
    values: Reinforcement,
) {
    for ply in &record.plies {
        let delta = if !ply.machine_turn && adversary != AdversaryPolicy::Machine {
            0
        } else if record.machine_won == ply.machine_turn {
            values.reward
        } else {
            values.penalty
        };
        machine.token_box_mut(ply.position).adjust(ply.label, delta);
    }

    let refill = machine.initial_tokens();
    for position in 0..machine.len() {
        if machine.token_box(position).is_depleted() {
            machine.token_box_mut(position).refill(refill);
        }
    }
}
