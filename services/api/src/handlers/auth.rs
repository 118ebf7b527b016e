use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::BolaoServiceError;
use crate::state::AppState;
use crate::usecase::auth::{
    AuthenticateInput, AuthenticateUseCase, CheckUserInput, CheckUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(serialize_with = "bolao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            phone: user.phone_key,
            created_at: user.created_at,
        }
    }
}

// ── POST /auth/check ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckUserRequest {
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct CheckUserResponse {
    pub exists: bool,
    pub user: Option<UserResponse>,
}

pub async fn check_user(
    State(state): State<AppState>,
    Json(body): Json<CheckUserRequest>,
) -> Result<Json<CheckUserResponse>, BolaoServiceError> {
    let usecase = CheckUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(CheckUserInput {
            phone: body.phone.unwrap_or_default(),
        })
        .await?;
    Ok(Json(CheckUserResponse {
        exists: user.is_some(),
        user: user.map(Into::into),
    }))
}

// ── POST /auth ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct AuthenticateResponse {
    pub token: String,
    pub user: UserResponse,
}

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, BolaoServiceError> {
    let usecase = AuthenticateUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(AuthenticateInput {
            name: body.name,
            phone: body.phone.unwrap_or_default(),
        })
        .await?;
    Ok(Json(AuthenticateResponse {
        token: output.token,
        user: output.user.into(),
    }))
}
