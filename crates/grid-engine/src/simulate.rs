use rand::rngs::mock::StepRng;
use tracing::debug;

use crate::engine::{Board, Direction, Grid, Tile};
use crate::error::BoardError;

/// Grid that `direction` would produce from `grid`, with no tile spawned.
///
/// Only the grid is copied; `grid` itself is never touched. A board that is
/// already won or lost yields `grid` unchanged instead of an error, so a
/// preview is always available. Malformed grids still fail.
///
/// ```
/// use grid_engine::{Direction, simulate};
/// let grid = vec![vec![Some(2), Some(2)], vec![None, Some(4)]];
/// let next = simulate(&grid, 2048, Direction::Left).unwrap();
/// assert_eq!(next, vec![vec![Some(4), None], vec![Some(4), None]]);
/// assert_eq!(grid[0][0], Some(2));
/// ```
pub fn simulate(grid: &Grid, goal: Tile, direction: Direction) -> Result<Grid, BoardError> {
    let mut board = Board::new(grid.clone(), goal, Vec::new(), 0)?;
    // Empty spawn pool: the rng is never drawn from.
    let mut rng = StepRng::new(0, 0);
    match board.apply(direction, &mut rng) {
        Ok(_) => Ok(board.into_grid()),
        Err(BoardError::TerminalState(status)) => {
            debug!(%status, %direction, "simulating on a finished board");
            Ok(grid.clone())
        }
        Err(err) => Err(err),
    }
}
