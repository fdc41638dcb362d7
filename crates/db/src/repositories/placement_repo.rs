//! Repository for the `placed_objects` table.
//!
//! Every mutation is a single atomic statement, so no partial write is
//! ever observable and two racing deletes of the same id resolve to
//! exactly one success (the rows-affected count decides).

use uuid::Uuid;

use crate::models::placed_object::{CreatePlacement, PlacedObject};
use crate::DbPool;

/// Column list for `placed_objects` queries.
const PLACED_OBJECT_COLUMNS: &str = "\
    id, latitude, longitude, type, asset, owner, created_at";

/// Provides CRUD operations for placed objects.
pub struct PlacementRepo;

impl PlacementRepo {
    /// Insert a new placement, assigning a fresh UUID id and the current
    /// unix-seconds timestamp. Returns the stored row.
    pub async fn insert(
        pool: &DbPool,
        input: &CreatePlacement,
    ) -> Result<PlacedObject, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().timestamp();

        let query = format!(
            "INSERT INTO placed_objects (id, latitude, longitude, type, asset, owner, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PLACED_OBJECT_COLUMNS}"
        );
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(&id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.object_type)
            .bind(input.asset.as_deref())
            .bind(&input.owner)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// List all placements.
    ///
    /// Ordered by `created_at, id` -- the stable order the API exposes.
    pub async fn list(pool: &DbPool) -> Result<Vec<PlacedObject>, sqlx::Error> {
        let query = format!(
            "SELECT {PLACED_OBJECT_COLUMNS} FROM placed_objects ORDER BY created_at, id"
        );
        sqlx::query_as::<_, PlacedObject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a placement by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: &str,
    ) -> Result<Option<PlacedObject>, sqlx::Error> {
        let query = format!("SELECT {PLACED_OBJECT_COLUMNS} FROM placed_objects WHERE id = $1");
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a placement by id. Returns `false` when no row matched.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placed_objects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
