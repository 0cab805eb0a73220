/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (project deadlines, task due dates) carry no time zone
/// and cross the wire as `yyyy-MM-dd` strings.
pub type DateOnly = chrono::NaiveDate;
