//! Seed the database with the launch participants so a fresh install is
//! usable immediately. Idempotent: existing phone keys are skipped.

use chrono::Utc;
use sea_orm::Database;
use tracing::info;
use uuid::Uuid;

use bolao_api::config::ApiConfig;
use bolao_api::domain::repository::UserRepository;
use bolao_api::domain::types::User;
use bolao_api::infra::db::DbUserRepository;

const LAUNCH_USERS: [(&str, &str); 9] = [
    ("Fernanda", "5512991110001"),
    ("Marcelo", "5519992220002"),
    ("Sérgio", "5512993330003"),
    ("Sheila", "5512994440004"),
    ("Vitor", "5511995550005"),
    ("Vinícius", "5512996660006"),
    ("Lucas", "5512997770007"),
    ("Paula", "5511998880008"),
    ("Márcia", "5512999990009"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bolao_core::tracing::init_tracing();

    let config = ApiConfig::from_env();
    let db = Database::connect(&config.database_url).await?;
    let users = DbUserRepository { db };

    for (name, phone_key) in LAUNCH_USERS {
        if users.find_by_phone(phone_key).await?.is_some() {
            info!(name, phone_key, "user already exists, skipping");
            continue;
        }
        users
            .create(&User {
                id: Uuid::now_v7(),
                name: name.to_owned(),
                phone_key: phone_key.to_owned(),
                created_at: Utc::now(),
            })
            .await?;
        info!(name, phone_key, "user created");
    }

    info!("seed finished");
    Ok(())
}
