use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use bolao_auth_types::identity::Identity;

use crate::domain::types::PoolWithEntries;
use crate::error::BolaoServiceError;
use crate::handlers::entry::EntryResponse;
use crate::state::AppState;
use crate::usecase::pool::{
    CreatePoolInput, CreatePoolUseCase, DeletePoolUseCase, GetPoolUseCase, ListPoolUsersUseCase,
    ListPoolsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PoolResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub share_slug: String,
    pub share_link: String,
    pub group_key: String,
    pub games: Vec<EntryResponse>,
    #[serde(serialize_with = "bolao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PoolResponse {
    fn from_domain(pool: PoolWithEntries, state: &AppState) -> Self {
        let share_link = state.share_link(&pool.pool.share_slug);
        Self {
            id: pool.pool.id.to_string(),
            title: pool.pool.title,
            description: pool.pool.description,
            share_slug: pool.pool.share_slug,
            share_link,
            group_key: pool.pool.group_key,
            games: pool.entries.into_iter().map(Into::into).collect(),
            created_at: pool.pool.created_at,
        }
    }
}

// ── POST /pools ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePoolRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub group_key: Option<String>,
    pub games: Option<Vec<Vec<i32>>>,
    pub game_count: Option<u32>,
}

pub async fn create_pool(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreatePoolRequest>,
) -> Result<(StatusCode, Json<PoolResponse>), BolaoServiceError> {
    let usecase = CreatePoolUseCase {
        pools: state.pool_repo(),
    };
    let pool = usecase
        .execute(CreatePoolInput {
            title: body.title,
            description: body.description,
            group_key: body.group_key,
            games: body.games,
            game_count: body.game_count,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(PoolResponse::from_domain(pool, &state)),
    ))
}

// ── GET /pools and GET /pools/history ────────────────────────────────────────

pub async fn list_pools(
    State(state): State<AppState>,
) -> Result<Json<Vec<PoolResponse>>, BolaoServiceError> {
    let usecase = ListPoolsUseCase {
        pools: state.pool_repo(),
        entries: state.entry_repo(),
    };
    let pools = usecase.execute().await?;
    Ok(Json(
        pools
            .into_iter()
            .map(|p| PoolResponse::from_domain(p, &state))
            .collect(),
    ))
}

/// Same listing as `list_pools`; kept as its own route because the history
/// page addresses it separately.
pub async fn pool_history(
    state: State<AppState>,
) -> Result<Json<Vec<PoolResponse>>, BolaoServiceError> {
    list_pools(state).await
}

// ── GET /pools/{slug} ────────────────────────────────────────────────────────

pub async fn get_pool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PoolResponse>, BolaoServiceError> {
    let usecase = GetPoolUseCase {
        pools: state.pool_repo(),
        entries: state.entry_repo(),
    };
    let pool = usecase.execute(&slug).await?;
    Ok(Json(PoolResponse::from_domain(pool, &state)))
}

// ── DELETE /pools/{slug} ─────────────────────────────────────────────────────

pub async fn delete_pool(
    _identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, BolaoServiceError> {
    let usecase = DeletePoolUseCase {
        pools: state.pool_repo(),
    };
    usecase.execute(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /pools/{slug}/users ──────────────────────────────────────────────────

pub async fn list_pool_users(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<EntryResponse>>, BolaoServiceError> {
    let usecase = ListPoolUsersUseCase {
        pools: state.pool_repo(),
        entries: state.entry_repo(),
    };
    let entries = usecase.execute(&slug).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
