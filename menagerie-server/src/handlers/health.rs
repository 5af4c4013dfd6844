use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = if state.config().is_persistent() {
        "postgres"
    } else {
        "memory"
    };
    Json(json!({ "status": "ok", "store": store }))
}
