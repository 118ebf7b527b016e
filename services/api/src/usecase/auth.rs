use chrono::Utc;
use uuid::Uuid;

use bolao_auth_types::token::issue_token;
use bolao_domain::phone::normalize_phone;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::BolaoServiceError;

// ── CheckUser ────────────────────────────────────────────────────────────────

pub struct CheckUserInput {
    pub phone: String,
}

/// Look up a participant by phone without authenticating. The login flow
/// branches on the result to decide whether to ask for a name.
pub struct CheckUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CheckUserUseCase<U> {
    pub async fn execute(
        &self,
        input: CheckUserInput,
    ) -> Result<Option<User>, BolaoServiceError> {
        if input.phone.trim().is_empty() {
            return Err(BolaoServiceError::MissingPhone);
        }
        let phone_key = normalize_phone(&input.phone);
        self.users.find_by_phone(&phone_key).await
    }
}

// ── Authenticate ─────────────────────────────────────────────────────────────

pub struct AuthenticateInput {
    pub name: Option<String>,
    pub phone: String,
}

#[derive(Debug)]
pub struct AuthenticateOutput {
    pub user: User,
    pub token: String,
}

/// Authenticate-or-register: a known phone logs straight in; an unknown
/// phone registers, which requires a name. Either way the caller gets a
/// 7-day bearer token.
pub struct AuthenticateUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> AuthenticateUseCase<U> {
    pub async fn execute(
        &self,
        input: AuthenticateInput,
    ) -> Result<AuthenticateOutput, BolaoServiceError> {
        if input.phone.trim().is_empty() {
            return Err(BolaoServiceError::MissingPhone);
        }
        let phone_key = normalize_phone(&input.phone);

        let user = match self.users.find_by_phone(&phone_key).await? {
            Some(user) => user,
            None => {
                let name = input
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .ok_or(BolaoServiceError::MissingName)?;
                let user = User {
                    id: Uuid::now_v7(),
                    name: name.to_owned(),
                    phone_key,
                    created_at: Utc::now(),
                };
                self.users.create(&user).await?;
                user
            }
        };

        let token = issue_token(user.id, &user.phone_key, &self.jwt_secret)
            .map_err(|e| BolaoServiceError::Internal(e.into()))?;

        Ok(AuthenticateOutput { user, token })
    }
}
