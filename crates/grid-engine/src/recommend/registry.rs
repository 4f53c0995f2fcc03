use tracing::{info, warn};

use super::{HeuristicRecommender, ModelInfo, RecommendError, Recommender};

/// Recommenders keyed by `(provider, model)`, in registration order.
///
/// Built once at startup and shared read-only; the first entry is the
/// default for requests that name no model.
#[derive(Default)]
pub struct RecommenderRegistry {
    entries: Vec<Box<dyn Recommender>>,
}

impl RecommenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for a configured recommendation mode.
    ///
    /// `heuristic` and `auto` both resolve to the built-in heuristic, the
    /// only recommender compiled in; unknown modes log a warning and do
    /// the same.
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "heuristic" | "auto" => {}
            other => warn!(mode = other, "unknown recommendation mode, using heuristic"),
        }
        let mut registry = Self::new();
        registry.register(Box::new(HeuristicRecommender));
        info!(models = registry.entries.len(), "recommender registry ready");
        registry
    }

    /// Add a recommender. A later entry with the same key replaces the
    /// earlier one in place.
    pub fn register(&mut self, recommender: Box<dyn Recommender>) {
        let key = recommender.info();
        match self.entries.iter().position(|entry| {
            let info = entry.info();
            info.provider == key.provider && info.model == key.model
        }) {
            Some(idx) => self.entries[idx] = recommender,
            None => self.entries.push(recommender),
        }
    }

    pub fn models(&self) -> Vec<ModelInfo> {
        self.entries.iter().map(|entry| entry.info()).collect()
    }

    /// Fill a missing provider or model from the default entry.
    pub fn resolve(&self, provider: Option<&str>, model: Option<&str>) -> (String, String) {
        let default = self.entries.first().map(|entry| entry.info());
        let provider = provider
            .map(str::to_string)
            .or_else(|| default.as_ref().map(|info| info.provider.clone()))
            .unwrap_or_else(|| HeuristicRecommender::PROVIDER.to_string());
        let model = model
            .map(str::to_string)
            .or_else(|| default.as_ref().map(|info| info.model.clone()))
            .unwrap_or_else(|| HeuristicRecommender::MODEL.to_string());
        (provider, model)
    }

    pub fn get(&self, provider: &str, model: &str) -> Result<&dyn Recommender, RecommendError> {
        self.entries
            .iter()
            .find(|entry| {
                let info = entry.info();
                info.provider == provider && info.model == model
            })
            .map(|entry| &**entry)
            .ok_or_else(|| RecommendError::UnknownModel {
                provider: provider.to_string(),
                model: model.to_string(),
            })
    }
}

impl std::fmt::Debug for RecommenderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommenderRegistry")
            .field("models", &self.models())
            .finish()
    }
}
