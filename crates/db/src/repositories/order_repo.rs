//! Repository for the `orders` table.

use chrono::Utc;
use orderdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::order::{NewOrder, Order, OrderChanges};
use crate::models::status::OrderStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone, service, description, budget, status, created_at, updated_at";

/// Provides CRUD operations for orders.
///
/// Inputs are validated before they reach this layer; every method issues
/// a single statement, so a failure never leaves a partial write behind.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order as `pending`, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(pool: &SqlitePool, input: &NewOrder) -> Result<Order, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO orders
                (name, email, phone, service, description, budget, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.service)
            .bind(&input.description)
            .bind(&input.budget)
            .bind(OrderStatus::Pending.as_str())
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = ?1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders, most recently created first. Orders created within
    /// the same timestamp fall back to descending ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    /// Update an order. Only `Some` fields in `changes` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &OrderChanges,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                name = COALESCE(?2, name),
                email = COALESCE(?3, email),
                phone = COALESCE(?4, phone),
                service = COALESCE(?5, service),
                description = COALESCE(?6, description),
                budget = COALESCE(?7, budget),
                status = COALESCE(?8, status),
                updated_at = ?9
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.email)
            .bind(&changes.phone)
            .bind(&changes.service)
            .bind(&changes.description)
            .bind(&changes.budget)
            .bind(changes.status.map(OrderStatus::as_str))
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Set the status of an order, refreshing `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &SqlitePool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
