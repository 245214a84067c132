//! Day-scoped activity queries and per-category time totals.
//!
//! Two different day-match predicates live here on purpose:
//! - `activities_for_day`: start, end or creation time falls inside the day.
//! - `activities_for_suggestions`: the start/end span overlaps the day, or a
//!   duration-only activity was last updated during the day.

use std::collections::HashMap;

use daytrack_core::{Activity, CategoryTotal, DayRange};

use super::row_types::{to_millis, ActivityRow, ACTIVITY_ORDER, ACTIVITY_SELECT};
use crate::{Database, DbResult};

impl Database {
    /// Activities whose start, end or creation time lies in `[start, end)` of `day`,
    /// optionally narrowed to one category. Default activity ordering.
    pub async fn activities_for_day(
        &self,
        day: &DayRange,
        category_id: Option<i64>,
    ) -> DbResult<Vec<Activity>> {
        let sql = format!(
            r#"{ACTIVITY_SELECT}
            WHERE ((a.start_time >= ?1 AND a.start_time < ?2)
                OR (a.end_time >= ?1 AND a.end_time < ?2)
                OR (a.created_at >= ?1 AND a.created_at < ?2))
              AND (?3 IS NULL OR a.category_id = ?3)
            {ACTIVITY_ORDER}"#
        );
        let rows: Vec<ActivityRow> = sqlx::query_as(&sql)
            .bind(to_millis(day.start))
            .bind(to_millis(day.end))
            .bind(category_id)
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(ActivityRow::into_activity).collect())
    }

    /// Total elapsed seconds per category for activities matching `day`.
    ///
    /// Every category is reported (ordered by id), including those with no
    /// matching activities.
    pub async fn category_totals(&self, day: &DayRange) -> DbResult<Vec<CategoryTotal>> {
        let activities = self.activities_for_day(day, None).await?;
        let mut seconds: HashMap<i64, i64> = HashMap::new();
        for activity in &activities {
            let total = seconds.entry(activity.category).or_default();
            *total = total.saturating_add(activity.elapsed_seconds());
        }

        let totals = self
            .list_categories()
            .await?
            .into_iter()
            .map(|category| CategoryTotal {
                seconds: seconds.get(&category.id).copied().unwrap_or(0),
                category,
            })
            .collect();
        Ok(totals)
    }

    /// Activities fed to the suggestion prompt for `day`, newest created first.
    ///
    /// Matches when `start_time < end AND end_time >= start`, or when
    /// `duration_minutes` is set and `updated_at` lies in `[start, end]`
    /// (inclusive on both ends).
    pub async fn activities_for_suggestions(&self, day: &DayRange) -> DbResult<Vec<Activity>> {
        let sql = format!(
            r#"{ACTIVITY_SELECT}
            WHERE (a.start_time < ?2 AND a.end_time >= ?1)
               OR (a.duration_minutes IS NOT NULL AND a.updated_at BETWEEN ?1 AND ?2)
            ORDER BY a.created_at DESC, a.id DESC"#
        );
        let rows: Vec<ActivityRow> = sqlx::query_as(&sql)
            .bind(to_millis(day.start))
            .bind(to_millis(day.end))
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(ActivityRow::into_activity).collect())
    }
}
