//! Configuration surface for a simulation session.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    display::GraphDisplay,
    graph::{grid_graph, subtraction_graph, Graph},
    reinforce::Reinforcement,
    strategy::AdversaryPolicy,
};

/// Which game the machine is learning, with its family-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum GameSpec {
    /// Single-pile subtraction game: take any amount in `moves` from a pile
    /// of at most `limit`.
    Subtraction { limit: usize, moves: Vec<usize> },
    /// King's-move game on a grid, racing the piece to the corner.
    Grid { width: usize, height: usize },
}

impl GameSpec {
    /// Build this game's graph.
    pub fn graph(&self) -> Graph {
        match self {
            GameSpec::Subtraction { limit, moves } => subtraction_graph(*limit, moves),
            GameSpec::Grid { width, height } => grid_graph(*width, *height),
        }
    }

    /// The node every game starts from.
    pub fn start(&self) -> usize {
        match self {
            GameSpec::Subtraction { limit, .. } => *limit,
            GameSpec::Grid { width, height } => width * height - 1,
        }
    }

    /// The layout contract handed to presentation layers.
    pub fn display(&self) -> GraphDisplay {
        match self {
            GameSpec::Subtraction { moves, .. } => GraphDisplay::subtraction(moves),
            GameSpec::Grid { width, height } => GraphDisplay::grid(*width, *height),
        }
    }
}

impl Default for GameSpec {
    fn default() -> Self {
        GameSpec::Subtraction {
            limit: 8,
            moves: vec![1, 2],
        }
    }
}

impl fmt::Display for GameSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSpec::Subtraction { limit, moves } => {
                let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                write!(f, "subtraction(limit={limit}, moves={{{}}})", moves.join(","))
            }
            GameSpec::Grid { width, height } => write!(f, "grid({width}x{height})"),
        }
    }
}

/// The game family alone, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameFamily {
    #[default]
    Subtraction,
    Grid,
}

impl fmt::Display for GameFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameFamily::Subtraction => "subtraction",
            GameFamily::Grid => "grid",
        };
        f.write_str(label)
    }
}

impl FromStr for GameFamily {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtraction" | "nim" => Ok(GameFamily::Subtraction),
            "grid" | "king" => Ok(GameFamily::Grid),
            _ => Err(crate::Error::ParseGameFamily {
                input: s.to_string(),
                expected: "subtraction/nim, grid/king".to_string(),
            }),
        }
    }
}

/// Parse a comma-separated move set such as `1,2,4`.
pub fn parse_move_set(s: &str) -> crate::Result<Vec<usize>> {
    let mut moves = Vec::new();
    for part in s.split([',', ';', ' ']).filter(|token| !token.is_empty()) {
        let value: usize = part.parse().map_err(|_| crate::Error::ParseMoveSet {
            input: s.to_string(),
            reason: format!("'{part}' is not a positive integer"),
        })?;
        if value == 0 {
            return Err(crate::Error::ParseMoveSet {
                input: s.to_string(),
                reason: "moves must be positive".to_string(),
            });
        }
        if !moves.contains(&value) {
            moves.push(value);
        }
    }
    if moves.is_empty() {
        return Err(crate::Error::ParseMoveSet {
            input: s.to_string(),
            reason: "expected at least one move".to_string(),
        });
    }
    Ok(moves)
}

/// Everything a session needs to build and train a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: GameSpec,
    pub adversary: AdversaryPolicy,
    /// Tokens each slot starts with, also the refill weight for emptied boxes.
    pub initial_tokens: u32,
    pub reinforcement: Reinforcement,
    pub machine_starts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameSpec::default(),
            adversary: AdversaryPolicy::Random,
            initial_tokens: 6,
            reinforcement: Reinforcement::default(),
            machine_starts: true,
        }
    }
}
