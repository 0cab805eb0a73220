//! Employee entity model.

use crewdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
