use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use grid_engine::GameRules;
use grid_engine::recommend::RecommenderRegistry;

use crate::config::Settings;
use crate::routes;

/// Read-only state shared by every request. Games themselves are never
/// stored; each request carries its own grid.
#[derive(Clone)]
pub struct AppState {
    pub rules: GameRules,
    pub registry: Arc<RecommenderRegistry>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rules: GameRules::from(&settings.game),
            registry: Arc::new(RecommenderRegistry::from_mode(
                &settings.recommendation.mode,
            )),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/new", post(routes::new_game))
        .route("/move", post(routes::make_move))
        .route("/recommend", post(routes::recommend))
        .route("/models", get(routes::list_models))
        .route("/health", get(routes::get_health));
    Router::new().nest("/api", api).with_state(state)
}
