use crate::engine::{Direction, Grid, Tile};
use crate::simulate::simulate;

use super::{ModelInfo, RecommendError, Recommender, Suggestion};

/// Directions tried, in order; ties keep the earliest.
const CANDIDATES: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

const EMPTY_CELL_WEIGHT: i64 = 10;
const CORNER_BONUS: i64 = 50;

/// Greedy one-ply recommender: favours empty cells and the largest tile
/// sitting in the bottom-right corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRecommender;

impl HeuristicRecommender {
    pub const PROVIDER: &'static str = "heuristic";
    pub const MODEL: &'static str = "simple";

    fn score(grid: &Grid) -> i64 {
        let empty = grid.iter().flatten().filter(|cell| cell.is_none()).count() as i64;
        let mut score = empty * EMPTY_CELL_WEIGHT;
        let largest = grid.iter().flatten().flatten().copied().max();
        let corner = grid.last().and_then(|row| row.last()).copied().flatten();
        if largest.is_some() && corner == largest {
            score += CORNER_BONUS;
        }
        score
    }
}

impl Recommender for HeuristicRecommender {
    fn info(&self) -> ModelInfo {
        ModelInfo {
            provider: Self::PROVIDER.to_string(),
            model: Self::MODEL.to_string(),
            display_name: "Heuristic - Simple".to_string(),
        }
    }

    fn suggest_move(&self, grid: &Grid, goal: Tile) -> Result<Suggestion, RecommendError> {
        let mut best: Option<(Direction, i64)> = None;
        for direction in CANDIDATES {
            let next = simulate(grid, goal, direction)?;
            if next == *grid {
                continue;
            }
            let score = Self::score(&next);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((direction, score));
            }
        }

        Ok(match best {
            Some((direction, _)) => Suggestion {
                direction,
                rationale: format!(
                    "Moving {direction} is the best tactical choice right now to maximize empty spaces and tile organization."
                ),
            },
            None => Suggestion {
                direction: Direction::Left,
                rationale: "No moves seem to change the board state.".to_string(),
            },
        })
    }
}
