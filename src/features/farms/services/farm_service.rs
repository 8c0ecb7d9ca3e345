use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::farms::dtos::{
    CreateFarmDto, FarmListQuery, FarmResponseDto, UpdateFarmDto, UpdateGpsCoordinatesDto,
};
use crate::features::farms::errors::FarmError;
use crate::features::farms::models::{Farm, FarmRow, NewFarm};
use crate::shared::types::{Page, PaginationQuery};

macro_rules! farm_columns {
    () => {
        "id, farmer_id, name, location, size_in_acres, crop_types, status, \
         soil_type, irrigation_type, latitude, longitude, contact_number, email, \
         certification, water_source, description, average_rainfall, elevation, \
         registered_at, updated_at, deleted, deleted_at"
    };
}

const INSERT_SQL: &str = concat!(
    "INSERT INTO farms (",
    farm_columns!(),
    ") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
     $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22) RETURNING ",
    farm_columns!()
);

const UPDATE_SQL: &str = concat!(
    "UPDATE farms SET name = $2, location = $3, size_in_acres = $4, crop_types = $5, \
     status = $6, soil_type = $7, irrigation_type = $8, latitude = $9, longitude = $10, \
     contact_number = $11, email = $12, certification = $13, water_source = $14, \
     description = $15, average_rainfall = $16, elevation = $17, updated_at = $18, \
     deleted = $19, deleted_at = $20 \
     WHERE id = $1 RETURNING ",
    farm_columns!()
);

const GET_LIVE_SQL: &str = concat!(
    "SELECT ",
    farm_columns!(),
    " FROM farms WHERE id = $1 AND deleted = FALSE"
);

const GET_ANY_SQL: &str = concat!("SELECT ", farm_columns!(), " FROM farms WHERE id = $1");

const LOCK_LIVE_SQL: &str = concat!(
    "SELECT ",
    farm_columns!(),
    " FROM farms WHERE id = $1 AND deleted = FALSE FOR UPDATE"
);

const LOCK_ANY_SQL: &str = concat!(
    "SELECT ",
    farm_columns!(),
    " FROM farms WHERE id = $1 FOR UPDATE"
);

const LIST_FILTER: &str = "deleted = FALSE \
     AND ($1::uuid IS NULL OR farmer_id = $1) \
     AND ($2::farm_status IS NULL OR status = $2) \
     AND ($3::text IS NULL OR $3 = ANY(crop_types))";

/// Which rows a lookup may see. Normal reads never see soft-deleted farms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowScope {
    Live,
    IncludingDeleted,
}

impl RowScope {
    fn lock_sql(self) -> &'static str {
        match self {
            RowScope::Live => LOCK_LIVE_SQL,
            RowScope::IncludingDeleted => LOCK_ANY_SQL,
        }
    }
}

fn bind_insert(
    query: QueryAs<'_, Postgres, FarmRow, PgArguments>,
    row: FarmRow,
) -> QueryAs<'_, Postgres, FarmRow, PgArguments> {
    query
        .bind(row.id)
        .bind(row.farmer_id)
        .bind(row.name)
        .bind(row.location)
        .bind(row.size_in_acres)
        .bind(row.crop_types)
        .bind(row.status)
        .bind(row.soil_type)
        .bind(row.irrigation_type)
        .bind(row.latitude)
        .bind(row.longitude)
        .bind(row.contact_number)
        .bind(row.email)
        .bind(row.certification)
        .bind(row.water_source)
        .bind(row.description)
        .bind(row.average_rainfall)
        .bind(row.elevation)
        .bind(row.registered_at)
        .bind(row.updated_at)
        .bind(row.deleted)
        .bind(row.deleted_at)
}

fn bind_update(
    query: QueryAs<'_, Postgres, FarmRow, PgArguments>,
    row: FarmRow,
) -> QueryAs<'_, Postgres, FarmRow, PgArguments> {
    query
        .bind(row.id)
        .bind(row.name)
        .bind(row.location)
        .bind(row.size_in_acres)
        .bind(row.crop_types)
        .bind(row.status)
        .bind(row.soil_type)
        .bind(row.irrigation_type)
        .bind(row.latitude)
        .bind(row.longitude)
        .bind(row.contact_number)
        .bind(row.email)
        .bind(row.certification)
        .bind(row.water_source)
        .bind(row.description)
        .bind(row.average_rainfall)
        .bind(row.elevation)
        .bind(row.updated_at)
        .bind(row.deleted)
        .bind(row.deleted_at)
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Farm '{}' not found", id))
}

/// Apply `change` and run the update hook with one timestamp.
///
/// Guarded mutators leave the farm as it was when they fail, and the hook only
/// runs after a successful change.
fn apply_change<T, F>(
    farm: &mut Farm,
    now: DateTime<Utc>,
    change: F,
) -> std::result::Result<T, FarmError>
where
    F: FnOnce(&mut Farm, DateTime<Utc>) -> std::result::Result<T, FarmError>,
{
    let output = change(farm, now)?;
    farm.on_update(now);
    Ok(output)
}

fn rehydrate(row: FarmRow) -> Result<Farm> {
    let id = row.id;
    Farm::try_from(row).map_err(|e| {
        tracing::error!("Stored farm {} is inconsistent: {}", id, e);
        AppError::Internal(format!("Stored farm '{}' is inconsistent", id))
    })
}

/// Persistence for farm records.
///
/// Assigns identifiers, runs the record's creation and update hooks, hides
/// soft-deleted farms from normal reads and serializes concurrent changes to
/// one farm with a row lock.
pub struct FarmService {
    pool: PgPool,
}

impl FarmService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Get a farm that has not been soft-deleted
    pub async fn get(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.fetch(id, GET_LIVE_SQL).await.map(Into::into)
    }

    /// Administrative read that also sees soft-deleted farms
    pub async fn get_including_deleted(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.fetch(id, GET_ANY_SQL).await.map(Into::into)
    }

    async fn fetch(&self, id: Uuid, sql: &'static str) -> Result<Farm> {
        let row = sqlx::query_as::<_, FarmRow>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get farm: {:?}", e);
                AppError::Database(e)
            })?;

        row.map(rehydrate).transpose()?.ok_or_else(|| not_found(id))
    }

    /// List live farms with optional farmer, status and crop filters
    pub async fn list(&self, query: &FarmListQuery) -> Result<Page<FarmResponseDto>> {
        let crop_type = query.normalized_crop_type();

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM farms WHERE {}",
            LIST_FILTER
        ))
        .bind(query.farmer_id)
        .bind(query.status)
        .bind(crop_type.clone())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count farms: {:?}", e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, FarmRow>(&format!(
            "SELECT {} FROM farms WHERE {} ORDER BY registered_at DESC, id OFFSET $4 LIMIT $5",
            farm_columns!(),
            LIST_FILTER
        ))
        .bind(query.farmer_id)
        .bind(query.status)
        .bind(crop_type)
        .bind(query.pagination.offset())
        .bind(query.pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list farms: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|row| rehydrate(row).map(Into::into))
            .collect::<Result<Vec<_>>>()?;

        Ok(Page { items, total })
    }

    /// Administrative listing of soft-deleted farms, most recently deleted first
    pub async fn list_deleted(&self, pagination: &PaginationQuery) -> Result<Page<FarmResponseDto>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM farms WHERE deleted = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count deleted farms: {:?}", e);
                AppError::Database(e)
            })?;

        let rows = sqlx::query_as::<_, FarmRow>(concat!(
            "SELECT ",
            farm_columns!(),
            " FROM farms WHERE deleted = TRUE ORDER BY deleted_at DESC NULLS LAST, id OFFSET $1 LIMIT $2"
        ))
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list deleted farms: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|row| rehydrate(row).map(Into::into))
            .collect::<Result<Vec<_>>>()?;

        Ok(Page { items, total })
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Register a new farm
    pub async fn create(&self, dto: CreateFarmDto) -> Result<FarmResponseDto> {
        dto.validate()?;

        let data = NewFarm::try_from(dto)?;
        let farm = Farm::create(Uuid::now_v7(), data, Utc::now())?;

        let row = bind_insert(sqlx::query_as::<_, FarmRow>(INSERT_SQL), FarmRow::from(&farm))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create farm: {:?}", e);
                AppError::Database(e)
            })?;

        let farm = rehydrate(row)?;
        tracing::info!(
            "Farm registered: id={}, farmer_id={}",
            farm.id(),
            farm.farmer_id()
        );

        Ok(farm.into())
    }

    /// Update name, location, size or descriptive attributes
    pub async fn update(&self, id: Uuid, dto: UpdateFarmDto) -> Result<FarmResponseDto> {
        dto.validate()?;

        let (farm, _) = self
            .mutate(id, RowScope::Live, "update", |farm, now| {
                let update = dto.into_update(farm.details());
                farm.apply_update(update, now)
            })
            .await?;

        Ok(farm.into())
    }

    pub async fn activate(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.transition(id, "activate", Farm::activate).await
    }

    pub async fn deactivate(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.transition(id, "deactivate", Farm::deactivate).await
    }

    pub async fn suspend(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.transition(id, "suspend", Farm::suspend).await
    }

    pub async fn reinstate(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.transition(id, "reinstate", Farm::reinstate).await
    }

    pub async fn begin_inspection(&self, id: Uuid) -> Result<FarmResponseDto> {
        self.transition(id, "begin_inspection", Farm::begin_inspection).await
    }

    /// Archive a farm. Soft-deleted farms can still be archived; archiving twice
    /// keeps the original deletion time.
    pub async fn archive(&self, id: Uuid) -> Result<FarmResponseDto> {
        let (farm, _) = self
            .mutate(id, RowScope::IncludingDeleted, "archive", |farm, now| {
                farm.archive(now);
                Ok(())
            })
            .await?;

        tracing::info!("Farm archived: id={}", id);
        Ok(farm.into())
    }

    /// Hide a farm without archiving it
    pub async fn soft_delete(&self, id: Uuid) -> Result<FarmResponseDto> {
        let (farm, _) = self
            .mutate(id, RowScope::Live, "soft_delete", |farm, now| {
                farm.set_deleted(true, now)
            })
            .await?;

        tracing::info!("Farm soft-deleted: id={}", id);
        Ok(farm.into())
    }

    /// Bring back a soft-deleted farm. Archived farms stay deleted.
    pub async fn restore(&self, id: Uuid) -> Result<FarmResponseDto> {
        let (farm, _) = self
            .mutate(id, RowScope::IncludingDeleted, "restore", |farm, now| {
                farm.set_deleted(false, now)
            })
            .await?;

        tracing::info!("Farm restored: id={}", id);
        Ok(farm.into())
    }

    /// Returns the farm and whether the crop was newly added
    pub async fn add_crop_type(&self, id: Uuid, crop_type: &str) -> Result<(FarmResponseDto, bool)> {
        let (farm, added) = self
            .mutate(id, RowScope::Live, "add_crop_type", |farm, now| {
                farm.add_crop_type(crop_type, now)
            })
            .await?;

        Ok((farm.into(), added))
    }

    /// Returns the farm and whether the crop was present
    pub async fn remove_crop_type(
        &self,
        id: Uuid,
        crop_type: &str,
    ) -> Result<(FarmResponseDto, bool)> {
        let (farm, removed) = self
            .mutate(id, RowScope::Live, "remove_crop_type", |farm, now| {
                Ok(farm.remove_crop_type(crop_type, now))
            })
            .await?;

        Ok((farm.into(), removed))
    }

    pub async fn update_gps_coordinates(
        &self,
        id: Uuid,
        dto: UpdateGpsCoordinatesDto,
    ) -> Result<FarmResponseDto> {
        dto.validate()?;

        let (farm, _) = self
            .mutate(id, RowScope::Live, "update_gps_coordinates", |farm, now| {
                farm.update_gps_coordinates(dto.latitude, dto.longitude, now)
            })
            .await?;

        Ok(farm.into())
    }

    pub async fn clear_gps_coordinates(&self, id: Uuid) -> Result<FarmResponseDto> {
        let (farm, _) = self
            .mutate(id, RowScope::Live, "clear_gps_coordinates", |farm, now| {
                farm.clear_gps_coordinates(now);
                Ok(())
            })
            .await?;

        Ok(farm.into())
    }

    async fn transition(
        &self,
        id: Uuid,
        operation: &'static str,
        apply: fn(&mut Farm, DateTime<Utc>) -> std::result::Result<(), FarmError>,
    ) -> Result<FarmResponseDto> {
        let (farm, _) = self.mutate(id, RowScope::Live, operation, apply).await?;

        tracing::info!("Farm status changed: id={}, status={}", id, farm.status());
        Ok(farm.into())
    }

    /// Lock the row, apply `change`, run the update hook and write back.
    ///
    /// A rejected change rolls the transaction back, leaving the stored row untouched.
    async fn mutate<T, F>(
        &self,
        id: Uuid,
        scope: RowScope,
        operation: &'static str,
        change: F,
    ) -> Result<(Farm, T)>
    where
        F: FnOnce(&mut Farm, DateTime<Utc>) -> std::result::Result<T, FarmError>,
    {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let row = sqlx::query_as::<_, FarmRow>(scope.lock_sql())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to lock farm: {:?}", e);
                AppError::Database(e)
            })?;

        let mut farm = match row {
            Some(row) => rehydrate(row)?,
            None => return Err(not_found(id)),
        };

        let output = apply_change(&mut farm, Utc::now(), change).map_err(|e| {
            tracing::warn!("Farm {} rejected by {}: {}", id, operation, e);
            AppError::from(e)
        })?;

        let row = bind_update(sqlx::query_as::<_, FarmRow>(UPDATE_SQL), FarmRow::from(&farm))
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update farm: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit farm update: {:?}", e);
            AppError::Database(e)
        })?;

        let stored = rehydrate(row)?;
        Ok((stored, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::farms::models::FarmStatus;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn create_dto(farmer_id: Uuid, name: &str, crops: &[&str]) -> CreateFarmDto {
        CreateFarmDto {
            farmer_id,
            name: name.to_string(),
            location: "Pune, Maharashtra".to_string(),
            size_in_acres: Decimal::new(2550, 2),
            crop_types: Some(crops.iter().map(|c| c.to_string()).collect()),
            status: None,
            latitude: None,
            longitude: None,
            soil_type: None,
            irrigation_type: None,
            contact_number: None,
            email: None,
            certification: None,
            water_source: None,
            description: None,
            average_rainfall: None,
            elevation: None,
        }
    }

    fn farm() -> Farm {
        let data = NewFarm::try_from(create_dto(Uuid::new_v4(), "Green Valley Farm", &[])).unwrap();
        Farm::create(Uuid::now_v7(), data, Utc::now()).unwrap()
    }

    fn column_count(sql: &str) -> usize {
        sql.split(',').count()
    }

    #[test]
    fn test_column_list_matches_row_fields() {
        // FarmRow has 22 fields; the insert binds one placeholder per column
        assert_eq!(column_count(farm_columns!()), 22);
        assert!(INSERT_SQL.contains("$22)"));
        assert!(!INSERT_SQL.contains("$23"));
    }

    #[test]
    fn test_live_reads_filter_deleted_rows() {
        assert!(GET_LIVE_SQL.ends_with("deleted = FALSE"));
        assert!(LOCK_LIVE_SQL.contains("deleted = FALSE FOR UPDATE"));
        assert!(LIST_FILTER.starts_with("deleted = FALSE"));
        assert!(GET_ANY_SQL.ends_with("FROM farms WHERE id = $1"));
    }

    #[test]
    fn test_update_never_touches_identity_columns() {
        let set_clause = UPDATE_SQL.split("WHERE").next().unwrap();

        assert!(!set_clause.contains("farmer_id ="));
        assert!(!set_clause.contains("registered_at ="));
        assert!(!set_clause.contains(" id ="));
    }

    #[test]
    fn test_row_scope_lock_sql() {
        assert_eq!(RowScope::Live.lock_sql(), LOCK_LIVE_SQL);
        assert_eq!(RowScope::IncludingDeleted.lock_sql(), LOCK_ANY_SQL);
    }

    #[test]
    fn test_not_found_message() {
        let id = Uuid::nil();

        assert_eq!(
            not_found(id).to_string(),
            "Not found: Farm '00000000-0000-0000-0000-000000000000' not found"
        );
    }

    #[test]
    fn test_apply_change_rejection_leaves_farm_untouched() {
        let mut farm = farm();
        farm.suspend(Utc::now()).unwrap();
        let before = farm.clone();

        let result = apply_change(&mut farm, Utc::now() + Duration::hours(1), Farm::activate);

        assert!(matches!(
            result,
            Err(FarmError::InvalidStateTransition {
                from: FarmStatus::Suspended,
                ..
            })
        ));
        assert_eq!(farm, before);
    }

    #[test]
    fn test_apply_change_runs_update_hook_with_same_time() {
        let mut farm = farm();
        let now = farm.registered_at() + Duration::minutes(30);

        apply_change(&mut farm, now, |farm, now| farm.set_deleted(true, now)).unwrap();

        assert!(farm.is_deleted());
        assert_eq!(farm.deleted_at(), Some(now));
        assert_eq!(farm.updated_at(), now);
    }

    #[test]
    fn test_apply_change_returns_mutator_output() {
        let mut farm = farm();

        let added = apply_change(&mut farm, Utc::now(), |farm, now| {
            farm.add_crop_type("Sorghum", now)
        })
        .unwrap();

        assert!(added);
        assert!(farm.grows_crop("sorghum"));
    }

    // The tests below need a Postgres server: DATABASE_URL=... cargo test -- --ignored

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_rejected_mutation_keeps_stored_row(pool: PgPool) {
        let service = FarmService::new(pool);
        let created = service
            .create(create_dto(Uuid::new_v4(), "Green Valley Farm", &["wheat"]))
            .await
            .unwrap();
        service.suspend(created.id).await.unwrap();
        let before = service.get(created.id).await.unwrap();

        let err = service.activate(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = service.add_crop_type(created.id, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let after = service.get(created.id).await.unwrap();
        assert_eq!(after.status, FarmStatus::Suspended);
        assert_eq!(after.crop_types, vec!["wheat"]);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_archive_reaches_soft_deleted_farm(pool: PgPool) {
        let service = FarmService::new(pool);
        let created = service
            .create(create_dto(Uuid::new_v4(), "Riverbend Acres", &[]))
            .await
            .unwrap();

        let deleted = service.soft_delete(created.id).await.unwrap();
        let first_deleted_at = deleted.deleted_at;
        assert!(first_deleted_at.is_some());
        assert!(matches!(
            service.get(created.id).await,
            Err(AppError::NotFound(_))
        ));

        let archived = service.archive(created.id).await.unwrap();
        assert_eq!(archived.status, FarmStatus::Archived);
        assert!(archived.deleted);
        assert_eq!(archived.deleted_at, first_deleted_at);

        let stored = service.get_including_deleted(created.id).await.unwrap();
        assert_eq!(stored.deleted_at, first_deleted_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_restore_brings_back_soft_deleted_but_not_archived(pool: PgPool) {
        let service = FarmService::new(pool);
        let farmer_id = Uuid::new_v4();
        let hidden = service
            .create(create_dto(farmer_id, "Hidden Meadow", &[]))
            .await
            .unwrap();
        let retired = service
            .create(create_dto(farmer_id, "Old Orchard", &[]))
            .await
            .unwrap();

        service.soft_delete(hidden.id).await.unwrap();
        let restored = service.restore(hidden.id).await.unwrap();
        assert!(!restored.deleted);
        assert_eq!(service.get(hidden.id).await.unwrap().id, hidden.id);

        service.archive(retired.id).await.unwrap();
        let err = service.restore(retired.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(service.get_including_deleted(retired.id).await.unwrap().deleted);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_hides_deleted_and_filters_by_crop(pool: PgPool) {
        let service = FarmService::new(pool);
        let farmer_id = Uuid::new_v4();
        let first = service
            .create(create_dto(farmer_id, "North Field", &["Wheat", "Rice"]))
            .await
            .unwrap();
        let second = service
            .create(create_dto(farmer_id, "South Field", &["rice"]))
            .await
            .unwrap();
        let gone = service
            .create(create_dto(farmer_id, "East Field", &["wheat"]))
            .await
            .unwrap();
        service
            .create(create_dto(Uuid::new_v4(), "Neighbour Farm", &["wheat"]))
            .await
            .unwrap();
        service.soft_delete(gone.id).await.unwrap();

        let all = service
            .list(&FarmListQuery {
                farmer_id: Some(farmer_id),
                ..FarmListQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(all.total, 2);
        let ids: Vec<Uuid> = all.items.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let wheat = service
            .list(&FarmListQuery {
                farmer_id: Some(farmer_id),
                crop_type: Some("  WHEAT ".to_string()),
                ..FarmListQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(wheat.total, 1);
        assert_eq!(wheat.items[0].id, first.id);

        let deleted = service
            .list_deleted(&PaginationQuery::default())
            .await
            .unwrap();
        assert_eq!(deleted.total, 1);
        assert_eq!(deleted.items[0].id, gone.id);
    }
}
