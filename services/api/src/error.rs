use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bolao_domain::game::GameError;

/// Bolão API domain error variants.
///
/// `EntryAlreadyClaimed` maps to 400, not 409 — clients treat the claim
/// conflict as a validation failure and branch on that status.
#[derive(Debug, thiserror::Error)]
pub enum BolaoServiceError {
    #[error("phone number is required")]
    MissingPhone,
    #[error("name is required for registration")]
    MissingName,
    #[error("a pool needs at least one game")]
    NoGames,
    #[error("a game must have exactly 6 numbers")]
    WrongGameLength,
    #[error("numbers must be between 1 and 60")]
    NumberOutOfRange,
    #[error("entry already claimed by another user")]
    EntryAlreadyClaimed,
    #[error("forbidden")]
    Forbidden,
    #[error("pool not found")]
    PoolNotFound,
    #[error("entry not found")]
    EntryNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl BolaoServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingPhone => "MISSING_PHONE",
            Self::MissingName => "MISSING_NAME",
            Self::NoGames => "NO_GAMES",
            Self::WrongGameLength => "WRONG_GAME_LENGTH",
            Self::NumberOutOfRange => "NUMBER_OUT_OF_RANGE",
            Self::EntryAlreadyClaimed => "ENTRY_ALREADY_CLAIMED",
            Self::Forbidden => "FORBIDDEN",
            Self::PoolNotFound => "POOL_NOT_FOUND",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<GameError> for BolaoServiceError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::WrongLength => Self::WrongGameLength,
            GameError::OutOfRange => Self::NumberOutOfRange,
        }
    }
}

impl IntoResponse for BolaoServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingPhone
            | Self::MissingName
            | Self::NoGames
            | Self::WrongGameLength
            | Self::NumberOutOfRange
            | Self::EntryAlreadyClaimed => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::PoolNotFound | Self::EntryNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
