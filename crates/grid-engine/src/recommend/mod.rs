//! Move recommendations.
//!
//! A [`Recommender`] proposes a direction for a grid; the
//! [`RecommenderRegistry`] maps `(provider, model)` pairs to recommenders and
//! is built once by the caller. [`recommend`] ties them together, falling
//! back to the heuristic when the requested recommender is missing or fails,
//! and previews the suggested move with [`crate::simulate`].

mod heuristic;
mod registry;

pub use heuristic::HeuristicRecommender;
pub use registry::RecommenderRegistry;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{Direction, Grid, Tile};
use crate::error::BoardError;
use crate::simulate::simulate;

/// Longest slice of an upstream error quoted in a fallback rationale.
const FALLBACK_ERROR_CHARS: usize = 100;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("no recommender registered for {provider}/{model}")]
    UnknownModel { provider: String, model: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A recommender as listed to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    pub provider: String,
    pub model: String,
    pub display_name: String,
}

/// A proposed direction and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub direction: Direction,
    pub rationale: String,
}

/// A suggestion together with the grid it would produce.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub suggested_move: Direction,
    pub rationale: String,
    pub predicted_grid: Grid,
}

pub trait Recommender: Send + Sync {
    fn info(&self) -> ModelInfo;

    fn suggest_move(&self, grid: &Grid, goal: Tile) -> Result<Suggestion, RecommendError>;
}

/// Ask `provider`/`model` for a move, or the registry default when either
/// is `None`, and preview it.
///
/// Any failure of the chosen recommender is replaced by a heuristic
/// suggestion whose rationale names the failure. Only an unusable grid
/// is reported as an error.
pub fn recommend(
    registry: &RecommenderRegistry,
    grid: &Grid,
    provider: Option<&str>,
    model: Option<&str>,
    goal: Tile,
) -> Result<Recommendation, RecommendError> {
    let (provider, model) = registry.resolve(provider, model);
    let attempt = registry
        .get(&provider, &model)
        .and_then(|recommender| recommender.suggest_move(grid, goal));

    let suggestion = match attempt {
        Ok(suggestion) => suggestion,
        Err(RecommendError::Board(err)) => return Err(err.into()),
        Err(err) => {
            warn!(%provider, %model, error = %err, "falling back to heuristic");
            let fallback = HeuristicRecommender.suggest_move(grid, goal)?;
            let reason: String = err.to_string().chars().take(FALLBACK_ERROR_CHARS).collect();
            Suggestion {
                direction: fallback.direction,
                rationale: format!(
                    "[Fallback to Heuristic - {provider}/{model} failed: {reason}] {}",
                    fallback.rationale
                ),
            }
        }
    };

    let predicted_grid = simulate(grid, goal, suggestion.direction)?;
    Ok(Recommendation {
        suggested_move: suggestion.direction,
        rationale: suggestion.rationale,
        predicted_grid,
    })
}
