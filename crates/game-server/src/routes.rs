use axum::{Json, extract::State, http::StatusCode};
use grid_engine::recommend::{self, ModelInfo, RecommendError, Recommendation};
use grid_engine::{Board, BoardError, Direction, GameStatus, Grid};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::app::AppState;

type ApiError = (StatusCode, String);

#[derive(Deserialize)]
pub struct MoveRequest {
    grid: Grid,
    direction: String,
    #[serde(default)]
    turns: u64,
}

#[derive(Serialize)]
pub struct MoveResponse {
    grid: Grid,
    status: GameStatus,
    largest_number: u64,
    turns: u64,
}

#[derive(Deserialize)]
pub struct RecommendationRequest {
    grid: Grid,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Serialize)]
pub struct ModelsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

fn board_error(err: BoardError) -> ApiError {
    match err {
        BoardError::InvalidBoard(_)
        | BoardError::TerminalState(_)
        | BoardError::InvalidDirection(_) => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

pub async fn new_game(State(state): State<AppState>) -> Result<Json<Grid>, ApiError> {
    let board = Board::create_new_thread(&state.rules).map_err(|err| {
        error!("cannot start a game from configured rules: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;
    info!(size = board.rows(), "new game");
    Ok(Json(board.into_grid()))
}

pub async fn make_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let mut board = Board::new(
        request.grid,
        state.rules.goal,
        state.rules.spawn_pool(),
        request.turns,
    )
    .map_err(board_error)?;
    let direction: Direction = request.direction.parse().map_err(board_error)?;

    let outcome = board.apply_thread(direction).map_err(|err| {
        warn!(%direction, "move rejected: {}", err);
        board_error(err)
    })?;
    debug!(%direction, ?outcome, turns = board.turns(), "move applied");

    let status = board.status();
    let largest_number = board.largest_number();
    let turns = board.turns();
    Ok(Json(MoveResponse {
        grid: board.into_grid(),
        status,
        largest_number,
        turns,
    }))
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let result = recommend::recommend(
        &state.registry,
        &request.grid,
        request.provider.as_deref(),
        request.model.as_deref(),
        state.rules.goal,
    );
    match result {
        Ok(recommendation) => Ok(Json(recommendation)),
        Err(RecommendError::Board(err)) => Err(board_error(err)),
        Err(err) => {
            error!("recommendation failed: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.registry.models(),
    })
}

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
