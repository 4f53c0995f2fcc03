use serde::{Deserialize, Serialize};

use super::state::Tile;

/// Numeric parameters for starting a fresh game.
///
/// The engine takes these as explicit arguments; loading them from a
/// settings file is the caller's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRules {
    /// Width and height of the square grid.
    pub grid_length: usize,
    /// Tile value that wins the game.
    pub goal: Tile,
    pub min_start_count: usize,
    pub max_start_count: usize,
    /// Value of every starting tile. Spawns draw from `[start, start * 2]`.
    pub start_number: Tile,
}

impl GameRules {
    /// Values eligible for placement after a successful move.
    pub fn spawn_pool(&self) -> Vec<Tile> {
        vec![self.start_number, self.start_number * 2]
    }

    /// Inclusive bounds for the number of starting tiles, ordered and
    /// clamped to the number of cells so placement always terminates.
    pub fn start_count_bounds(&self) -> (usize, usize) {
        let cells = self.grid_length * self.grid_length;
        let (lo, hi) = if self.min_start_count <= self.max_start_count {
            (self.min_start_count, self.max_start_count)
        } else {
            (self.max_start_count, self.min_start_count)
        };
        (lo.min(cells), hi.min(cells))
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            grid_length: 4,
            goal: 2048,
            min_start_count: 2,
            max_start_count: 4,
            start_number: 2,
        }
    }
}
