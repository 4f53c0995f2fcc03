use rand::Rng;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ops;
use super::rules::GameRules;
use crate::error::BoardError;

/// A tile value. Conventionally a power of two, but only equality and
/// addition are relied upon.
pub type Tile = u64;

/// `(row, column)` position on the grid.
pub type Coord = (usize, usize);

/// Rows of cells; `None` marks an empty cell.
pub type Grid = Vec<Vec<Option<Tile>>>;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    /// Case-insensitive parse of `up`, `down`, `left` or `right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(BoardError::InvalidDirection(s.to_string())),
        }
    }
}

/// Where a board stands after its latest move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Win,
    Lose,
    Ongoing,
}

impl GameStatus {
    /// `Win` and `Lose` end the game; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Win => "WIN",
            GameStatus::Lose => "LOSE",
            GameStatus::Ongoing => "ONGOING",
        };
        f.write_str(name)
    }
}

/// Result of a move that was allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing slid or merged; turn count and grid are untouched.
    Unchanged,
    /// The grid changed and the turn counter advanced. `spawned` is the
    /// tile placed afterwards, if the pool and free cells allowed one.
    Moved { spawned: Option<(Coord, Tile)> },
}

impl MoveOutcome {
    pub fn changed(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// A rectangular grid of tiles plus the rules needed to play it.
///
/// Built fresh from caller-supplied state for every request, mutated in
/// place by moves, then read back with [`Board::grid`]. Two boards are equal
/// when grid, goal, spawn pool and turn count all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    goal: Tile,
    spawn_pool: Vec<Tile>,
    turns: u64,
}

impl Board {
    /// Wrap an existing grid.
    ///
    /// Fails with [`BoardError::InvalidBoard`] if the grid has no rows, its
    /// first row is empty, rows differ in length, or a cell holds zero.
    ///
    /// ```
    /// use grid_engine::engine::{Board, GameStatus};
    /// let board = Board::new(vec![vec![Some(2), None], vec![None, None]], 2048, vec![2, 4], 0).unwrap();
    /// assert_eq!(board.status(), GameStatus::Ongoing);
    /// assert!(Board::new(Vec::new(), 2048, vec![2], 0).is_err());
    /// ```
    pub fn new(grid: Grid, goal: Tile, spawn_pool: Vec<Tile>, turns: u64) -> Result<Self, BoardError> {
        let cols = match grid.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(BoardError::InvalidBoard("board is empty".into())),
        };
        if grid.iter().any(|row| row.len() != cols) {
            return Err(BoardError::InvalidBoard(
                "rows must all have the same length".into(),
            ));
        }
        if grid.iter().flatten().any(|cell| *cell == Some(0)) {
            return Err(BoardError::InvalidBoard(
                "tile values must be positive".into(),
            ));
        }
        Ok(Self {
            grid,
            goal,
            spawn_pool,
            turns,
        })
    }

    /// Start a fresh game: an empty `grid_length` square with a random
    /// number of `start_number` tiles scattered over it.
    ///
    /// A candidate cell is re-rolled only while it already holds
    /// `start_number`. The returned board spawns from
    /// `[start_number, start_number * 2]` and has played zero turns.
    ///
    /// ```
    /// use grid_engine::engine::{Board, GameRules};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::create_new(&GameRules::default(), &mut rng).unwrap();
    /// let tiles = board.grid().iter().flatten().filter(|c| c.is_some()).count();
    /// assert!((2..=4).contains(&tiles));
    /// ```
    pub fn create_new<R: Rng + ?Sized>(rules: &GameRules, rng: &mut R) -> Result<Self, BoardError> {
        if rules.start_number == 0 {
            return Err(BoardError::InvalidBoard(
                "starting tile value must be positive".into(),
            ));
        }
        let size = rules.grid_length;
        let mut board = Board::new(vec![vec![None; size]; size], rules.goal, rules.spawn_pool(), 0)?;

        let (min, max) = rules.start_count_bounds();
        let count = rng.gen_range(min..=max);
        for _ in 0..count {
            let (mut r, mut c) = (rng.gen_range(0..size), rng.gen_range(0..size));
            while board.grid[r][c] == Some(rules.start_number) {
                r = rng.gen_range(0..size);
                c = rng.gen_range(0..size);
            }
            board.grid[r][c] = Some(rules.start_number);
        }
        Ok(board)
    }

    /// Convenience: like `create_new` but uses thread-local RNG.
    pub fn create_new_thread(rules: &GameRules) -> Result<Self, BoardError> {
        let mut rng = rand::thread_rng();
        Self::create_new(rules, &mut rng)
    }

    /// Owned copy of the grid. Mutating it never affects the board.
    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Consume the board, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn goal(&self) -> Tile {
        self.goal
    }

    pub fn spawn_pool(&self) -> &[Tile] {
        &self.spawn_pool
    }

    /// Number of moves so far that changed the grid.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn empty_coords(&self) -> Vec<Coord> {
        ops::empty_coords(&self.grid)
    }

    /// Largest tile on the board, treating empty cells as 0.
    pub fn largest_number(&self) -> Tile {
        ops::largest_tile(&self.grid)
    }

    /// `Win` once the goal tile is on the board, `Ongoing` while a cell is
    /// free or two equal tiles touch, `Lose` otherwise.
    pub fn status(&self) -> GameStatus {
        if self.largest_number() == self.goal {
            return GameStatus::Win;
        }
        if !self.empty_coords().is_empty() || ops::has_equal_neighbours(&self.grid) {
            return GameStatus::Ongoing;
        }
        GameStatus::Lose
    }

    /// Apply one move in `direction`, spawning from the pool with `rng` if
    /// the grid changed.
    ///
    /// ```
    /// use grid_engine::engine::{Board, Direction, MoveOutcome};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut board = Board::new(vec![vec![None, Some(2)]], 2048, Vec::new(), 0).unwrap();
    /// let outcome = board.apply(Direction::Left, &mut rng).unwrap();
    /// assert_eq!(outcome, MoveOutcome::Moved { spawned: None });
    /// assert_eq!(board.grid(), vec![vec![Some(2), None]]);
    /// ```
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<MoveOutcome, BoardError> {
        match direction {
            Direction::Up => self.move_up(rng),
            Direction::Down => self.move_down(rng),
            Direction::Left => self.move_left(rng),
            Direction::Right => self.move_right(rng),
        }
    }

    /// Convenience: like `apply` but uses thread-local RNG.
    pub fn apply_thread(&mut self, direction: Direction) -> Result<MoveOutcome, BoardError> {
        let mut rng = rand::thread_rng();
        self.apply(direction, &mut rng)
    }

    pub fn move_up<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, BoardError> {
        let lines = ops::line_coords(self.rows(), self.cols(), Direction::Up);
        self.shift_lines(&lines, rng)
    }

    pub fn move_down<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, BoardError> {
        let lines = ops::line_coords(self.rows(), self.cols(), Direction::Down);
        self.shift_lines(&lines, rng)
    }

    pub fn move_left<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, BoardError> {
        let lines = ops::line_coords(self.rows(), self.cols(), Direction::Left);
        self.shift_lines(&lines, rng)
    }

    pub fn move_right<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, BoardError> {
        let lines = ops::line_coords(self.rows(), self.cols(), Direction::Right);
        self.shift_lines(&lines, rng)
    }

    fn shift_lines<R: Rng + ?Sized>(
        &mut self,
        lines: &[Vec<Coord>],
        rng: &mut R,
    ) -> Result<MoveOutcome, BoardError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(BoardError::TerminalState(status));
        }

        let snapshot = self.grid.clone();
        for line in lines {
            if let Err(err) = ops::migrate_line(&mut self.grid, line) {
                self.grid = snapshot;
                return Err(err);
            }
        }
        // Whole-grid comparison: one unchanged line must not veto a spawn.
        if self.grid == snapshot {
            debug!("move left the grid unchanged");
            return Ok(MoveOutcome::Unchanged);
        }

        self.turns += 1;
        let spawned = self.spawn_tile(rng);
        Ok(MoveOutcome::Moved { spawned })
    }

    fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(Coord, Tile)> {
        let ((r, c), value) = ops::pick_spawn(&self.grid, &self.spawn_pool, rng)?;
        self.grid[r][c] = Some(value);
        debug!(row = r, col = c, value, "spawned tile");
        Some(((r, c), value))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(self.cols() * 8);
        for (idx, row) in self.grid.iter().enumerate() {
            if idx > 0 {
                writeln!(f, "{separator}")?;
            }
            let cells: Vec<String> = row.iter().map(|cell| ops::format_val(*cell)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(rows: &[&[Tile]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|&v| if v == 0 { None } else { Some(v) }).collect())
            .collect()
    }

    fn sample_grid() -> Grid {
        grid(&[&[0, 8, 2, 2], &[4, 2, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 2]])
    }

    fn occupied(g: &Grid) -> usize {
        g.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[test]
    fn rejects_empty_and_ragged_grids() {
        assert!(matches!(
            Board::new(Vec::new(), 2048, vec![2], 0),
            Err(BoardError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::new(vec![Vec::new()], 2048, vec![2], 0),
            Err(BoardError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::new(vec![vec![None, None], vec![None]], 2048, vec![2], 0),
            Err(BoardError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::new(vec![vec![Some(0)]], 2048, vec![2], 0),
            Err(BoardError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_move_left() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
        let outcome = board.move_left(&mut rng).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { spawned: None });
        assert_eq!(
            board.grid(),
            grid(&[&[8, 4, 0, 0], &[4, 4, 0, 0], &[0, 0, 0, 0], &[2, 0, 0, 0]])
        );
        assert_eq!(board.turns(), 1);
    }

    #[test]
    fn test_move_right() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
        board.move_right(&mut rng).unwrap();
        assert_eq!(
            board.grid(),
            grid(&[&[0, 0, 8, 4], &[0, 0, 4, 4], &[0, 0, 0, 0], &[0, 0, 0, 2]])
        );
        assert_eq!(board.turns(), 1);
    }

    #[test]
    fn test_move_up() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(sample_grid(), 2048, Vec::new(), 3).unwrap();
        board.move_up(&mut rng).unwrap();
        assert_eq!(
            board.grid(),
            grid(&[&[4, 8, 2, 4], &[0, 2, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 0]])
        );
        assert_eq!(board.turns(), 4);
    }

    #[test]
    fn test_move_down() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
        board.move_down(&mut rng).unwrap();
        assert_eq!(
            board.grid(),
            grid(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 8, 0, 2], &[4, 2, 2, 4]])
        );
    }

    #[test]
    fn apply_dispatches_to_direction() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut via_apply = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
        let mut direct = via_apply.clone();
        via_apply.apply(Direction::Down, &mut rng).unwrap();
        direct.move_down(&mut rng).unwrap();
        assert_eq!(via_apply, direct);
    }

    #[test]
    fn merges_each_tile_once_per_move() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(grid(&[&[2, 2, 2, 2]]), 2048, Vec::new(), 0).unwrap();
        board.move_left(&mut rng).unwrap();
        assert_eq!(board.grid(), grid(&[&[4, 4, 0, 0]]));
    }

    #[test]
    fn changing_move_spawns_exactly_one_tile() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new(sample_grid(), 2048, vec![2, 4], 5).unwrap();
            let outcome = board.apply(Direction::Left, &mut rng).unwrap();
            let after = board.grid();
            // 5 tiles remain after the merges, plus the spawn.
            assert_eq!(occupied(&after), 6);
            let MoveOutcome::Moved { spawned: Some(((r, c), value)) } = outcome else {
                panic!("expected a spawn, got {outcome:?}");
            };
            assert!(value == 2 || value == 4);
            assert_eq!(after[r][c], Some(value));
            // The spawn landed on a cell the merge pass left empty.
            let mut merged_only = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
            merged_only.move_left(&mut rng).unwrap();
            assert_eq!(merged_only.grid()[r][c], None);
            assert_eq!(board.turns(), 6);
        }
    }

    #[test]
    fn spawn_uses_injected_rng() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let mut board = Board::new(grid(&[&[0, 2], &[0, 0]]), 2048, vec![2, 4], 0).unwrap();
        let outcome = board.move_left(&mut rng).unwrap();
        let MoveOutcome::Moved { spawned: Some((coord, value)) } = outcome else {
            panic!("expected a spawn, got {outcome:?}");
        };
        assert!(board.empty_coords().len() == 2);
        assert_eq!(board.grid()[coord.0][coord.1], Some(value));
        assert_ne!(coord, (0, 0));
    }

    #[test]
    fn no_op_move_keeps_turns_and_skips_spawn() {
        let mut rng = StdRng::seed_from_u64(9);
        let start = grid(&[&[2, 4, 0, 0], &[8, 0, 0, 0], &[0, 0, 0, 0], &[16, 2, 0, 0]]);
        let mut board = Board::new(start.clone(), 2048, vec![2, 4], 11).unwrap();
        let outcome = board.apply(Direction::Left, &mut rng).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert!(!outcome.changed());
        assert_eq!(board.grid(), start);
        assert_eq!(board.turns(), 11);
    }

    #[test]
    fn unchanged_row_does_not_block_spawn_from_other_rows() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = grid(&[&[2, 4, 0], &[0, 0, 8], &[0, 0, 0]]);
        let mut board = Board::new(start, 2048, vec![2], 0).unwrap();
        let outcome = board.move_left(&mut rng).unwrap();
        assert!(outcome.changed());
        assert_eq!(occupied(&board.grid()), 4);
    }

    #[test]
    fn terminal_board_rejects_moves_without_mutation() {
        let mut rng = StdRng::seed_from_u64(0);
        let won = grid(&[&[2048, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        let mut board = Board::new(won.clone(), 2048, vec![2, 4], 40).unwrap();
        assert_eq!(board.status(), GameStatus::Win);
        for direction in Direction::ALL {
            let err = board.apply(direction, &mut rng).unwrap_err();
            assert_eq!(err, BoardError::TerminalState(GameStatus::Win));
        }
        assert_eq!(board.grid(), won);
        assert_eq!(board.turns(), 40);

        let lost = grid(&[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 2]]);
        let mut board = Board::new(lost.clone(), 2048, vec![2, 4], 0).unwrap();
        assert_eq!(board.status(), GameStatus::Lose);
        let err = board.move_up(&mut rng).unwrap_err();
        assert_eq!(err, BoardError::TerminalState(GameStatus::Lose));
        assert_eq!(board.grid(), lost);
    }

    #[test]
    fn overflowing_merge_fails_without_mutation() {
        let mut rng = StdRng::seed_from_u64(0);
        let huge = 1 << 63;
        let start = vec![vec![Some(2), Some(2)], vec![Some(huge), Some(huge)]];
        let mut board = Board::new(start.clone(), 2048, vec![2, 4], 5).unwrap();
        let err = board.apply(Direction::Left, &mut rng).unwrap_err();
        assert!(matches!(err, BoardError::InvalidBoard(_)));
        assert_eq!(board.grid(), start);
        assert_eq!(board.turns(), 5);
    }

    #[test]
    fn status_rules() {
        let full_mergeable = grid(&[&[2, 4], &[2, 8]]);
        let board = Board::new(full_mergeable, 2048, vec![2], 0).unwrap();
        assert_eq!(board.status(), GameStatus::Ongoing);

        let full_stuck = grid(&[&[2, 4], &[4, 2]]);
        let board = Board::new(full_stuck, 2048, vec![2], 0).unwrap();
        assert_eq!(board.status(), GameStatus::Lose);
        assert!(board.status().is_terminal());

        // Win is checked before move availability.
        let full_goal = grid(&[&[2048, 4], &[4, 2]]);
        let board = Board::new(full_goal, 2048, vec![2], 0).unwrap();
        assert_eq!(board.largest_number(), 2048);
        assert_eq!(board.status(), GameStatus::Win);

        // Win needs the goal exactly.
        let past_goal = grid(&[&[4096, 0], &[0, 0]]);
        let board = Board::new(past_goal, 2048, vec![2], 0).unwrap();
        assert_eq!(board.status(), GameStatus::Ongoing);
    }

    #[test]
    fn grid_is_a_defensive_copy() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(sample_grid(), 2048, Vec::new(), 0).unwrap();
        let mut copy = board.grid();
        copy[0][0] = Some(2);
        copy[1].clear();
        assert_eq!(board.grid(), sample_grid());
        board.move_left(&mut rng).unwrap();
        assert_eq!(board.grid()[0], vec![Some(8), Some(4), None, None]);
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Board::new(sample_grid(), 2048, vec![2, 4], 1).unwrap();
        assert_eq!(a, Board::new(sample_grid(), 2048, vec![2, 4], 1).unwrap());
        assert_ne!(a, Board::new(sample_grid(), 1024, vec![2, 4], 1).unwrap());
        assert_ne!(a, Board::new(sample_grid(), 2048, vec![2], 1).unwrap());
        assert_ne!(a, Board::new(sample_grid(), 2048, vec![2, 4], 2).unwrap());
    }

    #[test]
    fn create_new_places_starting_tiles() {
        let rules = GameRules::default();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::create_new(&rules, &mut rng).unwrap();
            let g = board.grid();
            assert_eq!(g.len(), 4);
            assert!(g.iter().all(|row| row.len() == 4));
            let tiles = occupied(&g);
            assert!((2..=4).contains(&tiles), "seed {seed}: {tiles} tiles");
            assert!(g.iter().flatten().flatten().all(|&v| v == 2));
            assert_eq!(board.spawn_pool(), &[2, 4]);
            assert_eq!(board.turns(), 0);
            assert_eq!(board.goal(), 2048);
        }
    }

    #[test]
    fn create_new_fills_small_grid_when_count_exceeds_cells() {
        let rules = GameRules {
            grid_length: 1,
            goal: 8,
            min_start_count: 3,
            max_start_count: 5,
            start_number: 4,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::create_new(&rules, &mut rng).unwrap();
        assert_eq!(board.grid(), vec![vec![Some(4)]]);
        assert_eq!(board.spawn_pool(), &[4, 8]);
    }

    #[test]
    fn create_new_rejects_degenerate_rules() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty = GameRules {
            grid_length: 0,
            ..GameRules::default()
        };
        assert!(matches!(
            Board::create_new(&empty, &mut rng),
            Err(BoardError::InvalidBoard(_))
        ));
        let zero_start = GameRules {
            start_number: 0,
            ..GameRules::default()
        };
        assert!(Board::create_new(&zero_start, &mut rng).is_err());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" DOWN ".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(
            "sideways".parse::<Direction>().unwrap_err(),
            BoardError::InvalidDirection("sideways".into())
        );
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&GameStatus::Ongoing).unwrap(), "\"ONGOING\"");
        assert_eq!(GameStatus::Lose.to_string(), "LOSE");
        assert_eq!(serde_json::to_string(&Direction::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn display_renders_rows() {
        let board = Board::new(grid(&[&[2, 0], &[0, 16]]), 2048, Vec::new(), 0).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("16"));
    }
}
