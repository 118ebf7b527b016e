use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use bolao_core::health::{healthz, readyz};
use bolao_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{authenticate, check_user},
    entry::{cancel_entry, claim_entry, edit_entry},
    pool::{create_pool, delete_pool, get_pool, list_pool_users, list_pools, pool_history},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/check", post(check_user))
        .route("/auth", post(authenticate))
        // Pools
        .route("/pools", post(create_pool))
        .route("/pools", get(list_pools))
        .route("/pools/history", get(pool_history))
        .route("/pools/{slug}", get(get_pool))
        .route("/pools/{slug}", delete(delete_pool))
        .route("/pools/{slug}/users", get(list_pool_users))
        // Entries
        .route("/entries/{id}/claim", post(claim_entry))
        .route("/entries/{id}/claim", delete(cancel_entry))
        .route("/entries/{id}/numbers", put(edit_entry))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
