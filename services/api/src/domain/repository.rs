#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Entry, EntryWithOwner, Pool, User};
use crate::error::BolaoServiceError;

/// Repository for participants.
pub trait UserRepository: Send + Sync {
    async fn find_by_phone(&self, phone_key: &str) -> Result<Option<User>, BolaoServiceError>;
    async fn create(&self, user: &User) -> Result<(), BolaoServiceError>;
}

/// Repository for pools. A pool and its entries are one unit: created in a
/// single transaction, deleted as a cascade.
pub trait PoolRepository: Send + Sync {
    async fn create_with_entries(
        &self,
        pool: &Pool,
        entries: &[Entry],
    ) -> Result<(), BolaoServiceError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Pool>, BolaoServiceError>;

    /// All pools, newest first.
    async fn list(&self) -> Result<Vec<Pool>, BolaoServiceError>;

    /// Delete a pool and its entries. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BolaoServiceError>;
}

/// Repository for entries.
pub trait EntryRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Entry>, BolaoServiceError>;

    async fn find_with_owner(&self, id: Uuid)
    -> Result<Option<EntryWithOwner>, BolaoServiceError>;

    /// Conditional claim: sets `claimed` and the owner only while the entry
    /// is open or already owned by `owner_user_id`. Returns `true` if the
    /// row was updated — a concurrent claimer that lost the race gets
    /// `false`, never a silent overwrite.
    async fn claim(&self, id: Uuid, owner_user_id: Uuid) -> Result<bool, BolaoServiceError>;

    /// Replace the numbers (already sorted by the caller) and mark edited.
    async fn update_numbers(&self, id: Uuid, numbers: &[i32]) -> Result<(), BolaoServiceError>;

    /// Return the entry to the open state: clears claimed, owner, edited.
    /// The numbers are left as they are.
    async fn release(&self, id: Uuid) -> Result<(), BolaoServiceError>;

    /// Entries of a pool with owners, oldest first.
    async fn list_for_pool(&self, pool_id: Uuid)
    -> Result<Vec<EntryWithOwner>, BolaoServiceError>;

    /// Claimed entries of a pool with owners, oldest first.
    async fn list_claimed_for_pool(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<EntryWithOwner>, BolaoServiceError>;
}
