//! Generic soft-delete aware repository over any SeaORM entity.
//!
//! Domain repositories wrap a `BaseRepository<entity::Entity>` and add their
//! own model conversions and error mapping on top.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::marker::PhantomData;

/// Entities whose rows are hidden by a nullable `deleted_at` timestamp
/// instead of being removed.
pub trait SoftDelete: EntityTrait {
    /// Integer primary key column
    fn id_column() -> Self::Column;

    /// Nullable `timestamptz` marker column
    fn deleted_at_column() -> Self::Column;
}

/// Row offset of a 1-based `page`, capped at `i64::MAX` since Postgres binds
/// OFFSET as a signed integer.
pub fn page_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1)
        .saturating_mul(limit)
        .min(i64::MAX as u64)
}

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: SoftDelete,
    E::Model: Send + Sync,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Base query excluding soft-deleted rows.
    pub fn find_active() -> Select<E> {
        E::find().filter(E::deleted_at_column().is_null())
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        Self::find_active().count(&self.db).await
    }

    /// One window of non-deleted rows ordered by id ascending.
    pub async fn find_page(&self, page: u64, limit: u64) -> Result<Vec<E::Model>, DbErr> {
        Self::find_active()
            .order_by_asc(E::id_column())
            .offset(page_offset(page, limit))
            .limit(limit)
            .all(&self.db)
            .await
    }

    pub async fn find_active_by_id(&self, id: i64) -> Result<Option<E::Model>, DbErr> {
        Self::find_active()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await
    }

    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Updates the columns set on `model`, keyed by its primary key.
    ///
    /// Returns `DbErr::RecordNotUpdated` when no row matched.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Stamps `deleted_at` on a live row. Returns the number of rows affected,
    /// 0 when the id is unknown or already deleted.
    pub async fn soft_delete(&self, id: i64) -> Result<u64, DbErr> {
        let result = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(Utc::now().fixed_offset()))
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
