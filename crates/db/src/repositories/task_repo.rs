//! Repository for the `tasks` table.

use crewdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, priority, due_date, status, \
                       assignee_id, project_id, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Tasks start unattached to any project; `PUT /tasks/{id}` attaches them.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (name, description, priority, due_date, status, assignee_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(&input.status)
            .bind(input.assignee_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List the tasks owned by a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a task's fields and attach it to its target project.
    ///
    /// `assignee_id = None` keeps the current assignee (COALESCE), so a
    /// request naming a vanished employee degrades silently. Re-attaching
    /// to the same project is a no-op write, never a duplicate membership.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = $2,
                description = $3,
                priority = $4,
                due_date = $5,
                status = $6,
                assignee_id = COALESCE($7, assignee_id),
                project_id = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(&input.status)
            .bind(input.assignee_id)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    ///
    /// Deleting a task never touches the assignee employee.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
