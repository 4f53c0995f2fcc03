use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Coord, Direction, Grid, Tile};
use crate::error::BoardError;

/// Ordered lines of coordinates for a move in `direction`.
///
/// Rows for left/right, columns for up/down. Each line starts at the cell
/// the tiles slide towards, so moving right walks a row from its last
/// column back to its first.
pub fn line_coords(rows: usize, cols: usize, direction: Direction) -> Vec<Vec<Coord>> {
    match direction {
        Direction::Left => row_lines(rows, cols, false),
        Direction::Right => row_lines(rows, cols, true),
        Direction::Up => col_lines(rows, cols, false),
        Direction::Down => col_lines(rows, cols, true),
    }
}

fn row_lines(rows: usize, cols: usize, reversed: bool) -> Vec<Vec<Coord>> {
    (0..rows)
        .map(|r| {
            let line: Vec<Coord> = (0..cols).map(|c| (r, c)).collect();
            if reversed {
                line.into_iter().rev().collect()
            } else {
                line
            }
        })
        .collect()
}

fn col_lines(rows: usize, cols: usize, reversed: bool) -> Vec<Vec<Coord>> {
    (0..cols)
        .map(|c| {
            let line: Vec<Coord> = (0..rows).map(|r| (r, c)).collect();
            if reversed {
                line.into_iter().rev().collect()
            } else {
                line
            }
        })
        .collect()
}

/// Slide and merge the tiles of one line towards its first coordinate.
///
/// Walks a reference index along the line: an empty reference cell pulls in
/// the next populated tile, then the next populated tile after it is merged
/// in when the values match. Every reference cell merges at most once, so
/// `[2, 2, 2, 2]` becomes `[4, 4, _, _]`.
///
/// Fails with [`BoardError::InvalidBoard`] if a merge would overflow a
/// [`Tile`]; the line may be partly migrated by then.
pub fn migrate_line(grid: &mut Grid, coords: &[Coord]) -> Result<(), BoardError> {
    let mut reference = 0;
    while reference < coords.len() {
        let (row, col) = coords[reference];
        if grid[row][col].is_none() {
            let Some((src_row, src_col)) = next_populated(grid, &coords[reference..]) else {
                return Ok(());
            };
            let value = grid[src_row][src_col].take();
            grid[row][col] = value;
        }

        let Some((next_row, next_col)) = next_populated(grid, &coords[reference + 1..]) else {
            return Ok(());
        };
        if let (Some(acc), Some(value)) = (grid[row][col], grid[next_row][next_col]) {
            if acc == value {
                let merged = acc.checked_add(value).ok_or_else(|| {
                    BoardError::InvalidBoard(format!("merging two {value} tiles overflows"))
                })?;
                grid[row][col] = Some(merged);
                grid[next_row][next_col] = None;
            }
        }
        reference += 1;
    }
    Ok(())
}

fn next_populated(grid: &Grid, coords: &[Coord]) -> Option<Coord> {
    coords
        .iter()
        .copied()
        .find(|&(row, col)| grid[row][col].is_some())
}

/// Coordinates of every empty cell, row-major.
pub fn empty_coords(grid: &Grid) -> Vec<Coord> {
    grid.iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(move |(c, _)| (r, c))
        })
        .collect()
}

/// Largest tile on the grid; empty cells count as 0.
pub fn largest_tile(grid: &Grid) -> Tile {
    grid.iter()
        .flat_map(|row| row.iter().map(|cell| cell.unwrap_or(0)))
        .max()
        .unwrap_or(0)
}

/// True if some tile has an orthogonal neighbour of the same value.
pub(crate) fn has_equal_neighbours(grid: &Grid) -> bool {
    grid.iter().enumerate().any(|(r, row)| {
        row.iter().enumerate().any(|(c, cell)| {
            cell.is_some()
                && neighbours(grid, (r, c))
                    .into_iter()
                    .any(|(nr, nc)| grid[nr][nc] == *cell)
        })
    })
}

fn neighbours(grid: &Grid, (r, c): Coord) -> Vec<Coord> {
    const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    STEPS
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            let row = grid.get(nr)?;
            row.get(nc).map(|_| (nr, nc))
        })
        .collect()
}

/// Choose a value from `pool` and an empty cell to put it in.
///
/// Returns `None` when the grid is full or the pool is empty; the RNG is not
/// consulted in that case.
pub(crate) fn pick_spawn<R: Rng + ?Sized>(
    grid: &Grid,
    pool: &[Tile],
    rng: &mut R,
) -> Option<(Coord, Tile)> {
    let free = empty_coords(grid);
    if free.is_empty() || pool.is_empty() {
        return None;
    }
    let value = *pool.choose(rng)?;
    let coord = *free.choose(rng)?;
    Some((coord, value))
}

pub(crate) fn format_val(val: Option<Tile>) -> String {
    match val {
        None => " ".repeat(7),
        Some(x) => format!("{x:^7}"),
    }
}
