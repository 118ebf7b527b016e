use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use bolao_domain::game::{sorted, validate_game};
use bolao_domain::generator::{DEFAULT_GAME_COUNT, generate_games};

use crate::domain::repository::{EntryRepository, PoolRepository};
use crate::domain::types::{Entry, EntryWithOwner, Pool, PoolWithEntries};
use crate::error::BolaoServiceError;

const DEFAULT_TITLE: &str = "Mega da Virada 2025";
const DEFAULT_DESCRIPTION: &str = "Bolão colaborativo";

/// Random 16-hex-char slug for shareable pool links.
fn new_share_slug() -> String {
    let bytes: [u8; 8] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ── CreatePool ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreatePoolInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub group_key: Option<String>,
    /// Explicit games; validated and stored sorted. Takes precedence over
    /// `game_count`.
    pub games: Option<Vec<Vec<i32>>>,
    /// How many games to generate when none are given (default 15).
    pub game_count: Option<u32>,
}

/// Create a pool together with its full, fixed entry set in one
/// transaction. Entries are never added later.
pub struct CreatePoolUseCase<P: PoolRepository> {
    pub pools: P,
}

impl<P: PoolRepository> CreatePoolUseCase<P> {
    pub async fn execute(
        &self,
        input: CreatePoolInput,
    ) -> Result<PoolWithEntries, BolaoServiceError> {
        let games = match (input.games, input.game_count) {
            (Some(games), _) => {
                if games.is_empty() {
                    return Err(BolaoServiceError::NoGames);
                }
                let mut validated = Vec::with_capacity(games.len());
                for game in &games {
                    validate_game(game)?;
                    validated.push(sorted(game));
                }
                validated
            }
            (None, Some(0)) => return Err(BolaoServiceError::NoGames),
            (None, Some(count)) => generate_games(count as usize),
            (None, None) => generate_games(DEFAULT_GAME_COUNT),
        };

        let now = Utc::now();
        let pool = Pool {
            id: Uuid::now_v7(),
            title: input.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            description: input
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            share_slug: new_share_slug(),
            group_key: input
                .group_key
                .unwrap_or_else(|| now.timestamp_millis().to_string()),
            created_at: now,
        };
        let entries: Vec<Entry> = games
            .into_iter()
            .map(|numbers| Entry {
                id: Uuid::now_v7(),
                pool_id: pool.id,
                numbers,
                claimed: false,
                edited: false,
                owner_user_id: None,
                created_at: now,
            })
            .collect();

        self.pools.create_with_entries(&pool, &entries).await?;

        Ok(PoolWithEntries {
            pool,
            entries: entries
                .into_iter()
                .map(|entry| EntryWithOwner { entry, owner: None })
                .collect(),
        })
    }
}

// ── GetPool ──────────────────────────────────────────────────────────────────

pub struct GetPoolUseCase<P: PoolRepository, E: EntryRepository> {
    pub pools: P,
    pub entries: E,
}

impl<P: PoolRepository, E: EntryRepository> GetPoolUseCase<P, E> {
    pub async fn execute(&self, slug: &str) -> Result<PoolWithEntries, BolaoServiceError> {
        let pool = self
            .pools
            .find_by_slug(slug)
            .await?
            .ok_or(BolaoServiceError::PoolNotFound)?;
        let entries = self.entries.list_for_pool(pool.id).await?;
        Ok(PoolWithEntries { pool, entries })
    }
}

// ── ListPools ────────────────────────────────────────────────────────────────

/// All pools, newest first, entries embedded. Backs both the active listing
/// and the history page.
pub struct ListPoolsUseCase<P: PoolRepository, E: EntryRepository> {
    pub pools: P,
    pub entries: E,
}

impl<P: PoolRepository, E: EntryRepository> ListPoolsUseCase<P, E> {
    pub async fn execute(&self) -> Result<Vec<PoolWithEntries>, BolaoServiceError> {
        let pools = self.pools.list().await?;
        let mut out = Vec::with_capacity(pools.len());
        for pool in pools {
            let entries = self.entries.list_for_pool(pool.id).await?;
            out.push(PoolWithEntries { pool, entries });
        }
        Ok(out)
    }
}

// ── DeletePool ───────────────────────────────────────────────────────────────

pub struct DeletePoolUseCase<P: PoolRepository> {
    pub pools: P,
}

impl<P: PoolRepository> DeletePoolUseCase<P> {
    pub async fn execute(&self, slug: &str) -> Result<(), BolaoServiceError> {
        let pool = self
            .pools
            .find_by_slug(slug)
            .await?
            .ok_or(BolaoServiceError::PoolNotFound)?;
        if !self.pools.delete(pool.id).await? {
            return Err(BolaoServiceError::PoolNotFound);
        }
        Ok(())
    }
}

// ── ListPoolUsers ────────────────────────────────────────────────────────────

/// The claimed entries of a pool with their owners — who is in, and with
/// which game.
pub struct ListPoolUsersUseCase<P: PoolRepository, E: EntryRepository> {
    pub pools: P,
    pub entries: E,
}

impl<P: PoolRepository, E: EntryRepository> ListPoolUsersUseCase<P, E> {
    pub async fn execute(&self, slug: &str) -> Result<Vec<EntryWithOwner>, BolaoServiceError> {
        let pool = self
            .pools
            .find_by_slug(slug)
            .await?
            .ok_or(BolaoServiceError::PoolNotFound)?;
        self.entries.list_claimed_for_pool(pool.id).await
    }
}
