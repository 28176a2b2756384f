use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm::CompletionGateway;
use crate::models::question::QuizSession;
use crate::store::LeaderboardStore;

/// Shared, process-wide quiz state. There is exactly one live session: the
/// generator replaces it wholesale, the grader only reads it.
pub type SharedSession = Arc<RwLock<Option<QuizSession>>>;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub store: LeaderboardStore,
    pub gateway: Arc<dyn CompletionGateway>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
            store: LeaderboardStore::new(&config.leaderboard_file),
            gateway,
            config,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for LeaderboardStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
