//! Activity CRUD queries.

use chrono::{DateTime, Utc};
use daytrack_core::{Activity, ActivityDraft, CompletionState};

use super::row_types::{to_millis, ActivityRow, ACTIVITY_ORDER, ACTIVITY_SELECT};
use crate::{Database, DbError, DbResult};

/// Map a foreign-key failure on `activities.category_id` to `CategoryNotFound`.
fn missing_category(err: sqlx::Error, category_id: i64) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            DbError::CategoryNotFound(category_id)
        }
        _ => err.into(),
    }
}

impl Database {
    /// All activities in default order (latest start first, then newest created).
    pub async fn list_activities(&self) -> DbResult<Vec<Activity>> {
        let sql = format!("{ACTIVITY_SELECT}{ACTIVITY_ORDER}");
        let rows: Vec<ActivityRow> = sqlx::query_as(&sql).fetch_all(self.pool()).await?;
        Ok(rows.into_iter().map(ActivityRow::into_activity).collect())
    }

    pub async fn get_activity(&self, id: i64) -> DbResult<Option<Activity>> {
        let sql = format!("{ACTIVITY_SELECT} WHERE a.id = ?1");
        let row: Option<ActivityRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row.map(ActivityRow::into_activity))
    }

    pub async fn create_activity(&self, draft: &ActivityDraft) -> DbResult<Activity> {
        self.create_activity_at(draft, Utc::now()).await
    }

    /// Insert an activity with `created_at = updated_at = now`.
    pub async fn create_activity_at(
        &self,
        draft: &ActivityDraft,
        now: DateTime<Utc>,
    ) -> DbResult<Activity> {
        let result = sqlx::query(
            r#"
            INSERT INTO activities (
                title, description, category_id, start_time, end_time,
                duration_minutes, reminder_time, completed, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.category_id)
        .bind(draft.start_time.map(to_millis))
        .bind(draft.end_time.map(to_millis))
        .bind(draft.duration_minutes)
        .bind(draft.reminder_time.map(to_millis))
        .bind(draft.completed)
        .bind(to_millis(now))
        .execute(self.pool())
        .await
        .map_err(|e| missing_category(e, draft.category_id))?;

        self.get_activity(result.last_insert_rowid())
            .await?
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    pub async fn update_activity(
        &self,
        id: i64,
        draft: &ActivityDraft,
    ) -> DbResult<Option<Activity>> {
        self.update_activity_at(id, draft, Utc::now()).await
    }

    /// Overwrite every writable field and refresh `updated_at`.
    ///
    /// Returns `None` if no activity has this id.
    pub async fn update_activity_at(
        &self,
        id: i64,
        draft: &ActivityDraft,
        now: DateTime<Utc>,
    ) -> DbResult<Option<Activity>> {
        let result = sqlx::query(
            r#"
            UPDATE activities SET
                title = ?1, description = ?2, category_id = ?3, start_time = ?4,
                end_time = ?5, duration_minutes = ?6, reminder_time = ?7,
                completed = ?8, updated_at = ?9
            WHERE id = ?10
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.category_id)
        .bind(draft.start_time.map(to_millis))
        .bind(draft.end_time.map(to_millis))
        .bind(draft.duration_minutes)
        .bind(draft.reminder_time.map(to_millis))
        .bind(draft.completed)
        .bind(to_millis(now))
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(|e| missing_category(e, draft.category_id))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_activity(id).await
    }

    /// Returns `false` if no activity has this id.
    pub async fn delete_activity(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn toggle_activity_complete(&self, id: i64) -> DbResult<Option<CompletionState>> {
        self.toggle_activity_complete_at(id, Utc::now()).await
    }

    /// Flip `completed`, touching only it and `updated_at`.
    pub async fn toggle_activity_complete_at(
        &self,
        id: i64,
        now: DateTime<Utc>,
    ) -> DbResult<Option<CompletionState>> {
        let row: Option<(i64, bool)> = sqlx::query_as(
            r#"
            UPDATE activities
            SET completed = NOT completed, updated_at = ?1
            WHERE id = ?2
            RETURNING id, completed
            "#,
        )
        .bind(to_millis(now))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(|(id, completed)| CompletionState { id, completed }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[tokio::test]
    async fn test_create_sets_timestamps_and_category_name() {
        let db = Database::new_in_memory().await.unwrap();
        let cat = db.create_category("Work").await.unwrap();
        let now = at("2024-01-01T08:00:00Z");

        let draft = ActivityDraft::new("Standup", cat.id)
            .with_span(at("2024-01-01T09:00:00Z"), at("2024-01-01T09:15:00Z"));
        let activity = db.create_activity_at(&draft, now).await.unwrap();

        assert_eq!(activity.title, "Standup");
        assert_eq!(activity.category, cat.id);
        assert_eq!(activity.category_name, "Work");
        assert_eq!(activity.created_at, now);
        assert_eq!(activity.updated_at, now);
        assert!(!activity.completed);
        assert_eq!(activity.elapsed_seconds(), 900);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category() {
        let db = Database::new_in_memory().await.unwrap();
        let err = db
            .create_activity(&ActivityDraft::new("Orphan", 42))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::CategoryNotFound(42)));
        assert!(db.list_activities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_only() {
        let db = Database::new_in_memory().await.unwrap();
        let cat = db.create_category("Work").await.unwrap();
        let created_at = at("2024-01-01T08:00:00Z");
        let activity = db
            .create_activity_at(&ActivityDraft::new("Draft", cat.id), created_at)
            .await
            .unwrap();

        let later = created_at + Duration::minutes(5);
        let mut draft = activity.to_draft();
        draft.title = "Final".into();
        draft.duration_minutes = Some(20);
        let updated = db
            .update_activity_at(activity.id, &draft, later)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.duration_minutes, Some(20));
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.updated_at, later);
    }

    #[tokio::test]
    async fn test_update_missing_activity() {
        let db = Database::new_in_memory().await.unwrap();
        let cat = db.create_category("Work").await.unwrap();
        let result = db
            .update_activity(7, &ActivityDraft::new("Ghost", cat.id))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let db = Database::new_in_memory().await.unwrap();
        let cat = db.create_category("Work").await.unwrap();
        let t0 = at("2024-01-01T08:00:00Z");
        let activity = db
            .create_activity_at(&ActivityDraft::new("Read", cat.id), t0)
            .await
            .unwrap();

        let t1 = t0 + Duration::minutes(1);
        let first = db
            .toggle_activity_complete_at(activity.id, t1)
            .await
            .unwrap()
            .unwrap();
        assert!(first.completed);

        let after_first = db.get_activity(activity.id).await.unwrap().unwrap();
        assert_eq!(after_first.updated_at, t1);
        assert_eq!(
            Activity {
                completed: activity.completed,
                updated_at: activity.updated_at,
                ..after_first
            },
            activity,
            "toggle must not touch other fields"
        );

        let t2 = t1 + Duration::minutes(1);
        let second = db
            .toggle_activity_complete_at(activity.id, t2)
            .await
            .unwrap()
            .unwrap();
        assert!(!second.completed);
        let after_second = db.get_activity(activity.id).await.unwrap().unwrap();
        assert_eq!(after_second.completed, activity.completed);
        assert_eq!(after_second.updated_at, t2);
    }

    #[tokio::test]
    async fn test_toggle_missing_activity() {
        let db = Database::new_in_memory().await.unwrap();
        assert_eq!(db.toggle_activity_complete(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_activity() {
        let db = Database::new_in_memory().await.unwrap();
        let cat = db.create_category("Work").await.unwrap();
        let activity = db
            .create_activity(&ActivityDraft::new("Temp", cat.id))
            .await
            .unwrap();
        assert!(db.delete_activity(activity.id).await.unwrap());
        assert!(!db.delete_activity(activity.id).await.unwrap());
        assert!(db.get_category(cat.id).await.unwrap().is_some());
    }
}
