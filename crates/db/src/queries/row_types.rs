// crates/db/src/queries/row_types.rs
// Internal row types and timestamp conversions.

use chrono::{DateTime, Utc};
use daytrack_core::Activity;
use sqlx::Row;

/// Columns selected for every activity read, joined with the owning category.
pub(crate) const ACTIVITY_SELECT: &str = r#"
    SELECT a.id, a.title, a.description, a.category_id, c.name AS category_name,
           a.start_time, a.end_time, a.duration_minutes, a.reminder_time,
           a.completed, a.created_at, a.updated_at
    FROM activities a
    INNER JOIN categories c ON c.id = a.category_id
"#;

/// Default listing order: latest start first, unstarted last, then newest created.
pub(crate) const ACTIVITY_ORDER: &str =
    " ORDER BY a.start_time IS NULL, a.start_time DESC, a.created_at DESC, a.id DESC";

pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

fn from_millis(column: &str, millis: i64) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("timestamp {millis} out of range").into(),
    })
}

fn opt_from_millis(column: &str, millis: Option<i64>) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
    millis.map(|m| from_millis(column, m)).transpose()
}

/// An activity row decoded from `ACTIVITY_SELECT`.
#[derive(Debug)]
pub(crate) struct ActivityRow(pub(crate) Activity);

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for ActivityRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Activity {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category_id")?,
            category_name: row.try_get("category_name")?,
            start_time: opt_from_millis("start_time", row.try_get("start_time")?)?,
            end_time: opt_from_millis("end_time", row.try_get("end_time")?)?,
            duration_minutes: row.try_get("duration_minutes")?,
            reminder_time: opt_from_millis("reminder_time", row.try_get("reminder_time")?)?,
            completed: row.try_get("completed")?,
            created_at: from_millis("created_at", row.try_get("created_at")?)?,
            updated_at: from_millis("updated_at", row.try_get("updated_at")?)?,
        }))
    }
}

impl ActivityRow {
    pub(crate) fn into_activity(self) -> Activity {
        self.0
    }
}
