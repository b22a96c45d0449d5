//! Greeting/health handler.

use crate::response::{self, HomeBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use chrono::{SecondsFormat, Utc};

pub const GREETING: &str = "Hola Mundo!";

/// Always 200. `database` reports whether the store answered a ping.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let database = if state.store.ping().await {
        "connected"
    } else {
        "disconnected"
    };
    response::ok(HomeBody {
        messages: GREETING,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        database,
    })
}
