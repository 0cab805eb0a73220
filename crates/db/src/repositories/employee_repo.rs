//! Repository for the `employees` table.

use crewdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::Employee;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Employee, sqlx::Error> {
        let query = format!("INSERT INTO employees (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Employee>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY created_at DESC");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Rename an employee. Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("UPDATE employees SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by ID. Returns `true` if a row was removed.
    ///
    /// Tasks referencing the employee keep existing; their `assignee_id`
    /// is nulled by the schema (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
