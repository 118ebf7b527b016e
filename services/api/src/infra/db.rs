use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use bolao_api_schema::{entries, pools, users};

use crate::domain::repository::{EntryRepository, PoolRepository, UserRepository};
use crate::domain::types::{Entry, EntryWithOwner, Pool, User};
use crate::error::BolaoServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_phone(&self, phone_key: &str) -> Result<Option<User>, BolaoServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::PhoneKey.eq(phone_key))
            .one(&self.db)
            .await
            .context("find user by phone")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), BolaoServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            phone_key: Set(user.phone_key.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        phone_key: model.phone_key,
        created_at: model.created_at,
    }
}

// ── Pool repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPoolRepository {
    pub db: DatabaseConnection,
}

impl PoolRepository for DbPoolRepository {
    async fn create_with_entries(
        &self,
        pool: &Pool,
        entry_list: &[Entry],
    ) -> Result<(), BolaoServiceError> {
        let txn = self.db.begin().await.context("begin pool transaction")?;

        pools::ActiveModel {
            id: Set(pool.id),
            title: Set(pool.title.clone()),
            description: Set(pool.description.clone()),
            share_slug: Set(pool.share_slug.clone()),
            group_key: Set(pool.group_key.clone()),
            created_at: Set(pool.created_at),
        }
        .insert(&txn)
        .await
        .context("insert pool")?;

        let rows = entry_list.iter().map(|entry| entries::ActiveModel {
            id: Set(entry.id),
            pool_id: Set(entry.pool_id),
            numbers: Set(entry.numbers.clone()),
            claimed: Set(entry.claimed),
            edited: Set(entry.edited),
            owner_user_id: Set(entry.owner_user_id),
            created_at: Set(entry.created_at),
        });
        entries::Entity::insert_many(rows)
            .exec(&txn)
            .await
            .context("insert entries")?;

        txn.commit().await.context("commit pool transaction")?;
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Pool>, BolaoServiceError> {
        let model = pools::Entity::find()
            .filter(pools::Column::ShareSlug.eq(slug))
            .one(&self.db)
            .await
            .context("find pool by slug")?;
        Ok(model.map(pool_from_model))
    }

    async fn list(&self) -> Result<Vec<Pool>, BolaoServiceError> {
        let models = pools::Entity::find()
            .order_by_desc(pools::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list pools")?;
        Ok(models.into_iter().map(pool_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BolaoServiceError> {
        // Entries go with the pool via ON DELETE CASCADE.
        let res = pools::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete pool")?;
        Ok(res.rows_affected > 0)
    }
}

fn pool_from_model(model: pools::Model) -> Pool {
    Pool {
        id: model.id,
        title: model.title,
        description: model.description,
        share_slug: model.share_slug,
        group_key: model.group_key,
        created_at: model.created_at,
    }
}

// ── Entry repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEntryRepository {
    pub db: DatabaseConnection,
}

impl EntryRepository for DbEntryRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Entry>, BolaoServiceError> {
        let model = entries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find entry")?;
        Ok(model.map(entry_from_model))
    }

    async fn find_with_owner(
        &self,
        id: Uuid,
    ) -> Result<Option<EntryWithOwner>, BolaoServiceError> {
        let row = entries::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find entry with owner")?;
        Ok(row.map(|(entry, owner)| EntryWithOwner {
            entry: entry_from_model(entry),
            owner: owner.map(user_from_model),
        }))
    }

    async fn claim(&self, id: Uuid, owner_user_id: Uuid) -> Result<bool, BolaoServiceError> {
        // Guarded single statement: only an open entry (or one the caller
        // already owns) is updated, so concurrent claims cannot both win.
        let res = entries::Entity::update_many()
            .col_expr(entries::Column::Claimed, Expr::value(true))
            .col_expr(entries::Column::OwnerUserId, Expr::value(owner_user_id))
            .filter(entries::Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(entries::Column::Claimed.eq(false))
                    .add(entries::Column::OwnerUserId.eq(owner_user_id)),
            )
            .exec(&self.db)
            .await
            .context("claim entry")?;
        Ok(res.rows_affected > 0)
    }

    async fn update_numbers(&self, id: Uuid, numbers: &[i32]) -> Result<(), BolaoServiceError> {
        entries::ActiveModel {
            id: Set(id),
            numbers: Set(numbers.to_vec()),
            edited: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update entry numbers")?;
        Ok(())
    }

    async fn release(&self, id: Uuid) -> Result<(), BolaoServiceError> {
        entries::ActiveModel {
            id: Set(id),
            claimed: Set(false),
            owner_user_id: Set(None),
            edited: Set(false),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("release entry")?;
        Ok(())
    }

    async fn list_for_pool(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<EntryWithOwner>, BolaoServiceError> {
        let rows = entries::Entity::find()
            .filter(entries::Column::PoolId.eq(pool_id))
            .find_also_related(users::Entity)
            .order_by_asc(entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list entries for pool")?;
        Ok(rows_with_owner(rows))
    }

    async fn list_claimed_for_pool(
        &self,
        pool_id: Uuid,
    ) -> Result<Vec<EntryWithOwner>, BolaoServiceError> {
        let rows = entries::Entity::find()
            .filter(entries::Column::PoolId.eq(pool_id))
            .filter(entries::Column::OwnerUserId.is_not_null())
            .find_also_related(users::Entity)
            .order_by_asc(entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list claimed entries for pool")?;
        Ok(rows_with_owner(rows))
    }
}

fn rows_with_owner(rows: Vec<(entries::Model, Option<users::Model>)>) -> Vec<EntryWithOwner> {
    rows.into_iter()
        .map(|(entry, owner)| EntryWithOwner {
            entry: entry_from_model(entry),
            owner: owner.map(user_from_model),
        })
        .collect()
}

fn entry_from_model(model: entries::Model) -> Entry {
    Entry {
        id: model.id,
        pool_id: model.pool_id,
        numbers: model.numbers,
        claimed: model.claimed,
        edited: model.edited,
        owner_user_id: model.owner_user_id,
        created_at: model.created_at,
    }
}
