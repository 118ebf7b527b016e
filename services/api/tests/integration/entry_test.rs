use std::sync::{Arc, Mutex};

use uuid::Uuid;

use bolao_api::domain::repository::EntryRepository;
use bolao_api::domain::types::{Entry, EntryWithOwner};
use bolao_api::error::BolaoServiceError;
use bolao_api::usecase::entry::{CancelEntryUseCase, ClaimEntryUseCase, EditEntryUseCase};

use crate::helpers::{MockEntryRepo, test_entry, test_user};

fn repo_with_entry(entry: Entry) -> MockEntryRepo {
    MockEntryRepo::new(vec![entry], vec![])
}

// ── ClaimEntryUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_claim_open_entry() {
    let owner = test_user("Fernanda", "5512981968688");
    let entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    let entry_id = entry.id;
    let usecase = ClaimEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let claimed = usecase.execute(entry_id, owner.id).await.unwrap();

    assert!(claimed.entry.claimed);
    assert_eq!(claimed.entry.owner_user_id, Some(owner.id));
    assert_eq!(claimed.owner.unwrap().id, owner.id);
}

#[tokio::test]
async fn should_claim_idempotently_for_current_owner() {
    let owner = test_user("Fernanda", "5512981968688");
    let entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    let entry_id = entry.id;
    let usecase = ClaimEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    usecase.execute(entry_id, owner.id).await.unwrap();
    let again = usecase.execute(entry_id, owner.id).await.unwrap();

    assert!(again.entry.claimed);
    assert_eq!(again.entry.owner_user_id, Some(owner.id));
}

#[tokio::test]
async fn should_reject_claim_on_entry_owned_by_other_user() {
    let owner = test_user("Fernanda", "5512981968688");
    let rival = test_user("Marcelo", "5519984241406");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = ClaimEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner]),
    };

    let result = usecase.execute(entry_id, rival.id).await;
    assert!(
        matches!(result, Err(BolaoServiceError::EntryAlreadyClaimed)),
        "expected EntryAlreadyClaimed, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_claiming_unknown_entry() {
    let usecase = ClaimEntryUseCase {
        entries: MockEntryRepo::new(vec![], vec![]),
    };
    let result = usecase.execute(Uuid::now_v7(), Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(BolaoServiceError::EntryNotFound)),
        "expected EntryNotFound, got {result:?}"
    );
}

/// Wraps a [`MockEntryRepo`] and lets a rival slip in between the
/// read-side ownership check and the conditional write, reproducing two
/// concurrent claims on the same open entry.
struct RacingEntryRepo {
    inner: MockEntryRepo,
    rival: Uuid,
    raced: Arc<Mutex<bool>>,
}

impl EntryRepository for RacingEntryRepo {
    async fn find(&self, id: Uuid) -> Result<Option<Entry>, BolaoServiceError> {
        self.inner.find(id).await
    }

    async fn find_with_owner(
        &self,
        id: Uuid,
    ) -> Result<Option<EntryWithOwner>, BolaoServiceError> {
        self.inner.find_with_owner(id).await
    }

    async fn claim(&self, id: Uuid, owner_user_id: Uuid) -> Result<bool, BolaoServiceError> {
        let first_attempt = {
            let mut raced = self.raced.lock().unwrap();
            !std::mem::replace(&mut *raced, true)
        };
        if first_attempt {
            // The rival's statement lands first.
            self.inner.claim(id, self.rival).await?;
        }
        self.inner.claim(id, owner_user_id).await
    }

    async fn update_numbers(&self, id: Uuid, numbers: &[i32]) -> Result<(), BolaoServiceError> {
        self.inner.update_numbers(id, numbers).await
    }

    async fn release(&self, id: Uuid) -> Result<(), BolaoServiceError> {
        self.inner.release(id).await
    }

    async fn list_for_pool(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<EntryWithOwner>, BolaoServiceError> {
        self.inner.list_for_pool(pool_id).await
    }

    async fn list_claimed_for_pool(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<EntryWithOwner>, BolaoServiceError> {
        self.inner.list_claimed_for_pool(pool_id).await
    }
}

#[tokio::test]
async fn should_surface_conflict_to_loser_of_concurrent_claim() {
    let rival = test_user("Marcelo", "5519984241406");
    let caller = test_user("Fernanda", "5512981968688");
    let entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    let entry_id = entry.id;

    let inner = MockEntryRepo::new(vec![entry], vec![rival.clone(), caller.clone()]);
    let entries_handle = inner.entries_handle();
    let usecase = ClaimEntryUseCase {
        entries: RacingEntryRepo {
            inner,
            rival: rival.id,
            raced: Arc::new(Mutex::new(false)),
        },
    };

    // The precondition sees an open entry, but the rival's write lands
    // first; the conditional update reports zero affected rows.
    let result = usecase.execute(entry_id, caller.id).await;
    assert!(
        matches!(result, Err(BolaoServiceError::EntryAlreadyClaimed)),
        "expected EntryAlreadyClaimed, got {result:?}"
    );

    let entries = entries_handle.lock().unwrap();
    assert_eq!(entries[0].owner_user_id, Some(rival.id), "rival keeps the entry");
}

// ── EditEntryUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_edit_own_entry_sorting_numbers() {
    let owner = test_user("Fernanda", "5512981968688");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let edited = usecase
        .execute(entry_id, &[60, 1, 30, 15, 45, 7], owner.id)
        .await
        .unwrap();

    assert_eq!(edited.entry.numbers, vec![1, 7, 15, 30, 45, 60]);
    assert!(edited.entry.edited);
    assert_eq!(edited.owner.unwrap().id, owner.id);
}

#[tokio::test]
async fn should_reject_edit_by_non_owner() {
    let owner = test_user("Fernanda", "5512981968688");
    let rival = test_user("Marcelo", "5519984241406");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner]),
    };

    let result = usecase
        .execute(entry_id, &[1, 2, 3, 4, 5, 6], rival.id)
        .await;
    assert!(
        matches!(result, Err(BolaoServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_edit_of_unclaimed_entry() {
    let caller = test_user("Fernanda", "5512981968688");
    let entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: repo_with_entry(entry),
    };

    let result = usecase
        .execute(entry_id, &[1, 2, 3, 4, 5, 6], caller.id)
        .await;
    assert!(
        matches!(result, Err(BolaoServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_edit_of_missing_entry_as_forbidden() {
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![], vec![]),
    };
    let result = usecase
        .execute(Uuid::now_v7(), &[1, 2, 3, 4, 5, 6], Uuid::now_v7())
        .await;
    assert!(
        matches!(result, Err(BolaoServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_edit_with_wrong_length() {
    let owner = test_user("Fernanda", "5512981968688");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let result = usecase.execute(entry_id, &[1, 2, 3], owner.id).await;
    assert!(
        matches!(result, Err(BolaoServiceError::WrongGameLength)),
        "expected WrongGameLength, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_edit_with_number_out_of_range() {
    let owner = test_user("Fernanda", "5512981968688");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let result = usecase
        .execute(entry_id, &[0, 2, 3, 4, 5, 6], owner.id)
        .await;
    assert!(
        matches!(result, Err(BolaoServiceError::NumberOutOfRange)),
        "expected NumberOutOfRange, got {result:?}"
    );
}

#[tokio::test]
async fn should_accept_edit_with_duplicate_numbers() {
    let owner = test_user("Fernanda", "5512981968688");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = EditEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let edited = usecase
        .execute(entry_id, &[7, 7, 19, 27, 41, 58], owner.id)
        .await
        .unwrap();
    assert_eq!(edited.entry.numbers, vec![7, 7, 19, 27, 41, 58]);
}

// ── CancelEntryUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_cancel_own_entry_back_to_open() {
    let owner = test_user("Fernanda", "5512981968688");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = CancelEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner.clone()]),
    };

    let cancelled = usecase.execute(entry_id, owner.id).await.unwrap();

    assert!(!cancelled.claimed);
    assert!(cancelled.owner_user_id.is_none());
    assert!(!cancelled.edited);
}

#[tokio::test]
async fn should_reject_cancel_by_non_owner() {
    let owner = test_user("Fernanda", "5512981968688");
    let rival = test_user("Marcelo", "5519984241406");
    let mut entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    entry.claimed = true;
    entry.owner_user_id = Some(owner.id);
    let entry_id = entry.id;
    let usecase = CancelEntryUseCase {
        entries: MockEntryRepo::new(vec![entry], vec![owner]),
    };

    let result = usecase.execute(entry_id, rival.id).await;
    assert!(
        matches!(result, Err(BolaoServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_cancel_of_missing_entry_as_forbidden() {
    let usecase = CancelEntryUseCase {
        entries: MockEntryRepo::new(vec![], vec![]),
    };
    let result = usecase.execute(Uuid::now_v7(), Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(BolaoServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

// ── Full lifecycle ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_edited_numbers_after_cancel() {
    // Claim → edit → cancel: the entry returns to open but the numbers stay
    // as edited; cancel does not restore the generated game.
    let owner = test_user("Fernanda", "5512981968688");
    let entry = test_entry(Uuid::now_v7(), &[5, 12, 19, 27, 41, 58]);
    let entry_id = entry.id;
    let repo = MockEntryRepo::new(vec![entry], vec![owner.clone()]);
    let entries_handle = repo.entries_handle();

    let claimed = ClaimEntryUseCase { entries: repo }
        .execute(entry_id, owner.id)
        .await
        .unwrap();
    assert!(claimed.entry.claimed);
    assert_eq!(claimed.entry.owner_user_id, Some(owner.id));

    let edited = EditEntryUseCase {
        entries: MockEntryRepo::sharing(Arc::clone(&entries_handle), vec![owner.clone()]),
    }
    .execute(entry_id, &[1, 2, 3, 4, 5, 6], owner.id)
    .await
    .unwrap();
    assert_eq!(edited.entry.numbers, vec![1, 2, 3, 4, 5, 6]);
    assert!(edited.entry.edited);

    let cancelled = CancelEntryUseCase {
        entries: MockEntryRepo::sharing(Arc::clone(&entries_handle), vec![owner.clone()]),
    }
    .execute(entry_id, owner.id)
    .await
    .unwrap();

    assert!(!cancelled.claimed);
    assert!(cancelled.owner_user_id.is_none());
    assert!(!cancelled.edited);
    assert_eq!(cancelled.numbers, vec![1, 2, 3, 4, 5, 6]);
}
