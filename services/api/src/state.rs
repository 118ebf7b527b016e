use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use bolao_auth_types::identity::JwtSecret;

use crate::infra::db::{DbEntryRepository, DbPoolRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub app_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn pool_repo(&self) -> DbPoolRepository {
        DbPoolRepository {
            db: self.db.clone(),
        }
    }

    pub fn entry_repo(&self) -> DbEntryRepository {
        DbEntryRepository {
            db: self.db.clone(),
        }
    }

    /// Shareable link for a pool slug, rooted at the public app URL.
    pub fn share_link(&self, slug: &str) -> String {
        format!("{}/bolao/{slug}", self.app_url)
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        Self(state.jwt_secret.clone())
    }
}
