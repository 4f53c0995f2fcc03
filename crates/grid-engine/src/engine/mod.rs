//! Engine module: square grid board, directional migrate-and-merge, status
//! and random tile spawning. Public API stays small and ergonomic.
//!
//! - `Board` owns the grid and exposes the move/status operations.
//! - `GameRules` carries the numeric parameters for a fresh game.
//! - Line walking, merging and spawn selection live in `ops`.

mod ops;
pub mod rules;
pub mod state;

pub use rules::GameRules;
pub use state::{Board, Coord, Direction, GameStatus, Grid, MoveOutcome, Tile};

pub use ops::{empty_coords, largest_tile, line_coords, migrate_line};
