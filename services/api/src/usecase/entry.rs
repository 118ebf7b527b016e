use uuid::Uuid;

use bolao_domain::game::{sorted, validate_game};

use crate::domain::repository::EntryRepository;
use crate::domain::types::{Entry, EntryWithOwner};
use crate::error::BolaoServiceError;

// ── ClaimEntry ───────────────────────────────────────────────────────────────

/// Take ownership of an open entry. Idempotent for the current owner.
///
/// The write is a conditional update checked by affected-row count, so two
/// concurrent claims on the same open entry serialize in the store: the
/// loser sees `EntryAlreadyClaimed` instead of silently overwriting.
pub struct ClaimEntryUseCase<E: EntryRepository> {
    pub entries: E,
}

impl<E: EntryRepository> ClaimEntryUseCase<E> {
    pub async fn execute(
        &self,
        entry_id: Uuid,
        caller: Uuid,
    ) -> Result<EntryWithOwner, BolaoServiceError> {
        let entry = self
            .entries
            .find(entry_id)
            .await?
            .ok_or(BolaoServiceError::EntryNotFound)?;
        if entry.claimed && entry.owner_user_id != Some(caller) {
            return Err(BolaoServiceError::EntryAlreadyClaimed);
        }
        if !self.entries.claim(entry_id, caller).await? {
            // Lost the race to a concurrent claimer.
            return Err(BolaoServiceError::EntryAlreadyClaimed);
        }
        self.entries
            .find_with_owner(entry_id)
            .await?
            .ok_or(BolaoServiceError::EntryNotFound)
    }
}

// ── EditEntry ────────────────────────────────────────────────────────────────

/// Replace the numbers of an entry the caller owns. Numbers are stored
/// ascending and the entry is marked edited. A missing entry folds into
/// `Forbidden` rather than `EntryNotFound`.
pub struct EditEntryUseCase<E: EntryRepository> {
    pub entries: E,
}

impl<E: EntryRepository> EditEntryUseCase<E> {
    pub async fn execute(
        &self,
        entry_id: Uuid,
        numbers: &[i32],
        caller: Uuid,
    ) -> Result<EntryWithOwner, BolaoServiceError> {
        validate_game(numbers)?;
        let entry = self
            .entries
            .find(entry_id)
            .await?
            .ok_or(BolaoServiceError::Forbidden)?;
        if entry.owner_user_id != Some(caller) {
            return Err(BolaoServiceError::Forbidden);
        }
        self.entries
            .update_numbers(entry_id, &sorted(numbers))
            .await?;
        self.entries
            .find_with_owner(entry_id)
            .await?
            .ok_or(BolaoServiceError::EntryNotFound)
    }
}

// ── CancelEntry ──────────────────────────────────────────────────────────────

/// Return a claimed entry to the open state. Clears owner and the edited
/// flag but keeps the current numbers, edited or not.
pub struct CancelEntryUseCase<E: EntryRepository> {
    pub entries: E,
}

impl<E: EntryRepository> CancelEntryUseCase<E> {
    pub async fn execute(&self, entry_id: Uuid, caller: Uuid) -> Result<Entry, BolaoServiceError> {
        let entry = self
            .entries
            .find(entry_id)
            .await?
            .ok_or(BolaoServiceError::Forbidden)?;
        if entry.owner_user_id != Some(caller) {
            return Err(BolaoServiceError::Forbidden);
        }
        self.entries.release(entry_id).await?;
        self.entries
            .find(entry_id)
            .await?
            .ok_or(BolaoServiceError::EntryNotFound)
    }
}
