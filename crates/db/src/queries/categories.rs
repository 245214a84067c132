//! Category CRUD queries.

use daytrack_core::Category;

use crate::{Database, DbError, DbResult};

/// Map a unique-constraint failure on `categories.name` to `DuplicateCategory`.
fn duplicate_name(err: sqlx::Error, name: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DbError::DuplicateCategory(name.to_string())
        }
        _ => err.into(),
    }
}

impl Database {
    /// All categories, ordered by id.
    pub async fn list_categories(&self) -> DbResult<Vec<Category>> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(self.pool())
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| Category { id, name })
            .collect())
    }

    pub async fn get_category(&self, id: i64) -> DbResult<Option<Category>> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.map(|(id, name)| Category { id, name }))
    }

    /// Insert a category. Fails with `DuplicateCategory` if the name is taken.
    pub async fn create_category(&self, name: &str) -> DbResult<Category> {
        let result = sqlx::query("INSERT INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(self.pool())
            .await
            .map_err(|e| duplicate_name(e, name))?;
        Ok(Category {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Rename a category. Returns `None` if no category has this id.
    pub async fn update_category(&self, id: i64, name: &str) -> DbResult<Option<Category>> {
        let result = sqlx::query("UPDATE categories SET name = ?1 WHERE id = ?2")
            .bind(name)
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| duplicate_name(e, name))?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Category {
            id,
            name: name.to_string(),
        }))
    }

    /// Delete a category and, via `ON DELETE CASCADE`, all of its activities.
    ///
    /// Returns `false` if no category has this id.
    pub async fn delete_category(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
