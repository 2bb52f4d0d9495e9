use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::Config;
use crate::services;

pub fn app() -> Router<AppState> {
    Router::new()
        .route("/", get(services::root))
        .route("/strategies/debt", post(services::compare_strategies_handler))
}
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
