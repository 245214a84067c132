/// Inline SQL migrations for the daytrack database schema.
///
/// We use simple inline migrations rather than sqlx migration files
/// because the schema is small and self-contained. Timestamps are stored
/// as INTEGER unix milliseconds (UTC).

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: categories table
    r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(name) BETWEEN 1 AND 50)
);
"#,
    // Migration 2: activities table (cascade-deleted with their category)
    r#"
CREATE TABLE IF NOT EXISTS activities (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    title            TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 120),
    description      TEXT NOT NULL DEFAULT '',
    category_id      INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    start_time       INTEGER,
    end_time         INTEGER,
    duration_minutes INTEGER CHECK (duration_minutes IS NULL OR duration_minutes >= 0),
    reminder_time    INTEGER,
    completed        BOOLEAN NOT NULL DEFAULT 0,
    created_at       INTEGER NOT NULL,
    updated_at       INTEGER NOT NULL
);
"#,
    // Migration 3: activity indexes
    r#"CREATE INDEX IF NOT EXISTS idx_activities_category ON activities(category_id);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_activities_start ON activities(start_time DESC, created_at DESC);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_activities_end ON activities(end_time);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_activities_created ON activities(created_at);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_activities_updated ON activities(updated_at);"#,
];
