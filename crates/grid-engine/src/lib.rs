//! Board state machine for a grid-based number-merging puzzle.
//!
//! - [`engine`]: the `Board`, its directional moves, status and tile spawns.
//! - [`simulate`]: preview a move on a grid without touching the caller's copy.
//! - [`recommend`]: move suggestions built on top of `simulate`.

pub mod engine;
pub mod error;
pub mod recommend;
pub mod simulate;

pub use engine::{Board, Direction, GameRules, GameStatus, Grid, MoveOutcome, Tile};
pub use error::BoardError;
pub use simulate::simulate;
