use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A participant, created on first authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone_key: String,
    pub created_at: DateTime<Utc>,
}

/// A bolão with its fixed batch of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub share_slug: String,
    pub group_key: String,
    pub created_at: DateTime<Utc>,
}

/// One claimable game inside a pool.
///
/// `owner_user_id` is set iff `claimed`; `edited` is set once a claimed
/// entry's numbers were replaced and cleared again on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub pool_id: Uuid,
    pub numbers: Vec<i32>,
    pub claimed: bool,
    pub edited: bool,
    pub owner_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Entry joined with its owner, as listings and mutations return it.
#[derive(Debug, Clone)]
pub struct EntryWithOwner {
    pub entry: Entry,
    pub owner: Option<User>,
}

/// Pool joined with its entries and their owners.
#[derive(Debug, Clone)]
pub struct PoolWithEntries {
    pub pool: Pool,
    pub entries: Vec<EntryWithOwner>,
}
