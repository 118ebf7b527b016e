use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bolao_auth_types::identity::Identity;

use crate::domain::types::EntryWithOwner;
use crate::error::BolaoServiceError;
use crate::handlers::auth::UserResponse;
use crate::state::AppState;
use crate::usecase::entry::{CancelEntryUseCase, ClaimEntryUseCase, EditEntryUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EntryResponse {
    pub id: String,
    pub pool_id: String,
    pub numbers: Vec<i32>,
    pub claimed: bool,
    pub edited: bool,
    pub owner: Option<UserResponse>,
    #[serde(serialize_with = "bolao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<EntryWithOwner> for EntryResponse {
    fn from(row: EntryWithOwner) -> Self {
        Self {
            id: row.entry.id.to_string(),
            pool_id: row.entry.pool_id.to_string(),
            numbers: row.entry.numbers,
            claimed: row.entry.claimed,
            edited: row.entry.edited,
            owner: row.owner.map(Into::into),
            created_at: row.entry.created_at,
        }
    }
}

// ── POST /entries/{id}/claim ─────────────────────────────────────────────────

pub async fn claim_entry(
    identity: Identity,
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<EntryResponse>, BolaoServiceError> {
    let usecase = ClaimEntryUseCase {
        entries: state.entry_repo(),
    };
    let entry = usecase.execute(entry_id, identity.user_id).await?;
    Ok(Json(entry.into()))
}

// ── PUT /entries/{id}/numbers ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EditEntryRequest {
    pub numbers: Option<Vec<i32>>,
}

pub async fn edit_entry(
    identity: Identity,
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
    Json(body): Json<EditEntryRequest>,
) -> Result<Json<EntryResponse>, BolaoServiceError> {
    let usecase = EditEntryUseCase {
        entries: state.entry_repo(),
    };
    let numbers = body.numbers.unwrap_or_default();
    let entry = usecase
        .execute(entry_id, &numbers, identity.user_id)
        .await?;
    Ok(Json(entry.into()))
}

// ── DELETE /entries/{id}/claim ───────────────────────────────────────────────

pub async fn cancel_entry(
    identity: Identity,
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<EntryResponse>, BolaoServiceError> {
    let usecase = CancelEntryUseCase {
        entries: state.entry_repo(),
    };
    let entry = usecase.execute(entry_id, identity.user_id).await?;
    Ok(Json(
        EntryWithOwner {
            entry,
            owner: None,
        }
        .into(),
    ))
}
