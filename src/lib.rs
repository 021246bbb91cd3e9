//! beadbox: a matchbox-style learning automaton for impartial games.
//!
//! This crate provides:
//! - Graph builders for single-pile subtraction games and a King's-move
//!   grid game, both acyclic by construction
//! - A machine holding one box of weighted tokens per position, trained by
//!   reward/penalty reinforcement after each game
//! - Three adversary policies: random, perfect play via backward induction,
//!   and token-weighted self-play
//! - A session driver producing per-game traces and a running score

pub mod config;
pub mod display;
pub mod error;
pub mod graph;
pub mod machine;
pub mod reinforce;
pub mod session;
pub mod simulate;
pub mod solver;
pub mod strategy;

pub use config::{Config, GameFamily, GameSpec};
pub use display::{GraphDisplay, LegendEntry};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use machine::{Machine, Slot, TokenBox};
pub use reinforce::Reinforcement;
pub use session::{Session, Tally};
pub use simulate::{GameRecord, Ply};
pub use solver::losing_positions;
pub use strategy::AdversaryPolicy;
