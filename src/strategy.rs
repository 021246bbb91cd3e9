//! Move-selection policies operating over a machine.
//!
//! Every provider returns `None` exactly when the position has no outgoing
//! move, which is the terminal-state signal the simulator relies on; an
//! absent move is never an error.

use std::{fmt, str::FromStr};

use rand::{prelude::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::machine::Machine;

/// The move a policy picked: which edge, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: usize,
    pub dest: usize,
}

/// The policy the machine's opponent plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AdversaryPolicy {
    /// Uniform over legal moves, token counts ignored.
    #[default]
    Random,
    /// Perfect play from the losing-position labeling.
    Expert,
    /// Token-weighted play, i.e. the machine playing itself.
    Machine,
}

impl fmt::Display for AdversaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AdversaryPolicy::Random => "random",
            AdversaryPolicy::Expert => "expert",
            AdversaryPolicy::Machine => "machine",
        };
        f.write_str(label)
    }
}

impl FromStr for AdversaryPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(AdversaryPolicy::Random),
            "expert" => Ok(AdversaryPolicy::Expert),
            "machine" | "self" => Ok(AdversaryPolicy::Machine),
            _ => Err(crate::Error::ParseAdversary {
                input: s.to_string(),
                expected: "random, expert, machine".to_string(),
            }),
        }
    }
}

/// Pick a move uniformly at random, ignoring token counts.
pub fn random_choice<R: Rng>(machine: &Machine, position: usize, rng: &mut R) -> Option<Choice> {
    machine
        .token_box(position)
        .slots()
        .choose(rng)
        .map(|slot| Choice {
            label: slot.label,
            dest: slot.dest,
        })
}

/// Perfect play: move into a losing position for the opponent when one
/// exists (first such slot in box order, so play is reproducible), otherwise
/// the position is already lost and any move is as good as another, so fall
/// back to a random one.
pub fn expert_choice<R: Rng>(
    machine: &Machine,
    losing: &[bool],
    position: usize,
    rng: &mut R,
) -> Option<Choice> {
    if losing[position] {
        return random_choice(machine, position, rng);
    }
    machine
        .token_box(position)
        .slots()
        .iter()
        .find(|slot| losing[slot.dest])
        .map(|slot| Choice {
            label: slot.label,
            dest: slot.dest,
        })
}

/// Token-weighted play: sample a slot with probability proportional to its
/// token count.
///
/// Draws a uniform value in `[0, total)` and walks the box's prefix sums,
/// picking the first slot whose cumulative count exceeds the draw. A box
/// whose tokens are all exhausted yields no move; the reinforcement engine
/// refills such boxes before the next round.
pub fn weighted_choice<R: Rng>(machine: &Machine, position: usize, rng: &mut R) -> Option<Choice> {
    let slots = machine.token_box(position).slots();
    let total: u32 = slots.iter().map(|slot| slot.tokens).sum();
    if total == 0 {
        return None;
    }
    let mut draw = rng.random_range(0..total);
    for slot in slots {
        if draw < slot.tokens {
            return Some(Choice {
                label: slot.label,
                dest: slot.dest,
            });
        }
        draw -= slot.tokens;
    }
    // Fallback: the draw is below the total, so the walk above always returns.
    slots.last().map(|slot| Choice {
        label: slot.label,
        dest: slot.dest,
    })
}

/// Dispatch one adversary move according to the configured policy.
pub fn adversary_choice<R: Rng>(
    machine: &Machine,
    losing: &[bool],
    policy: AdversaryPolicy,
    position: usize,
    rng: &mut R,
) -> Option<Choice> {
    match policy {
        AdversaryPolicy::Random => random_choice(machine, position, rng),
        AdversaryPolicy::Expert => expert_choice(machine, losing, position, rng),
        AdversaryPolicy::Machine => weighted_choice(machine, position, rng),
    }
}
