// crates/core/src/types.rs
//! Domain records and write payloads for categories and activities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::day::elapsed_seconds;
use crate::error::ValidationError;

pub const CATEGORY_NAME_MAX_LEN: usize = 50;
pub const ACTIVITY_TITLE_MAX_LEN: usize = 120;
/// Largest accepted `duration_minutes` (a signed 32-bit column upstream).
pub const DURATION_MINUTES_MAX: i64 = 2_147_483_647;

/// Categories inserted into an empty store on first run.
pub const DEFAULT_CATEGORIES: &[&str] = &["Work", "Personal", "Health", "Study"];

// ============================================================================
// Category
// ============================================================================

/// A named grouping for activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Body of a category create/update request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryInput {
    /// Validate and return the trimmed category name.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let name = self
            .name
            .as_deref()
            .ok_or(ValidationError::Required { field: "name" })?;
        required_text("name", name, CATEGORY_NAME_MAX_LEN)
    }
}

// ============================================================================
// Activity
// ============================================================================

/// A logged task or event, as stored and served.
///
/// `category_name` is denormalized from the owning category for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: i64,
    pub category_name: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub reminder_time: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Seconds this activity contributes to time totals.
    pub fn elapsed_seconds(&self) -> i64 {
        elapsed_seconds(self.start_time, self.end_time, self.duration_minutes)
    }

    /// The writable fields of this activity.
    pub fn to_draft(&self) -> ActivityDraft {
        ActivityDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
            reminder_time: self.reminder_time,
            completed: self.completed,
        }
    }
}

/// Validated writable fields of an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub reminder_time: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl ActivityDraft {
    /// Minimal draft with only the required fields set.
    pub fn new(title: impl Into<String>, category_id: i64) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category_id,
            start_time: None,
            end_time: None,
            duration_minutes: None,
            reminder_time: None,
            completed: false,
        }
    }

    pub fn with_span(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    fn validate(self) -> Result<Self, ValidationError> {
        let title = required_text("title", &self.title, ACTIVITY_TITLE_MAX_LEN)?;
        match self.duration_minutes {
            Some(m) if m < 0 => {
                return Err(ValidationError::Negative {
                    field: "duration_minutes",
                })
            }
            Some(m) if m > DURATION_MINUTES_MAX => {
                return Err(ValidationError::TooLarge {
                    field: "duration_minutes",
                    max: DURATION_MINUTES_MAX,
                })
            }
            _ => {}
        }
        Ok(Self { title, ..self })
    }
}

/// Body of an activity create or full-update request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub reminder_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl ActivityInput {
    pub fn validate(self) -> Result<ActivityDraft, ValidationError> {
        let title = self
            .title
            .ok_or(ValidationError::Required { field: "title" })?;
        let category_id = self
            .category
            .ok_or(ValidationError::Required { field: "category" })?;
        ActivityDraft {
            title,
            description: self.description.unwrap_or_default(),
            category_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
            reminder_time: self.reminder_time,
            completed: self.completed.unwrap_or(false),
        }
        .validate()
    }
}

/// Body of an activity partial update.
///
/// Absent fields are left unchanged; an explicit `null` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub start_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    pub end_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    pub duration_minutes: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub reminder_time: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl ActivityPatch {
    /// Overlay this patch on `current` and validate the result.
    pub fn apply(self, current: &Activity) -> Result<ActivityDraft, ValidationError> {
        let base = current.to_draft();
        ActivityDraft {
            title: self.title.unwrap_or(base.title),
            description: self.description.unwrap_or(base.description),
            category_id: self.category.unwrap_or(base.category_id),
            start_time: self.start_time.unwrap_or(base.start_time),
            end_time: self.end_time.unwrap_or(base.end_time),
            duration_minutes: self.duration_minutes.unwrap_or(base.duration_minutes),
            reminder_time: self.reminder_time.unwrap_or(base.reminder_time),
            completed: self.completed.unwrap_or(base.completed),
        }
        .validate()
    }
}

/// Marks a field as present so `null` can be told apart from absence.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn required_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

// ============================================================================
// Aggregates
// ============================================================================

/// Result of a completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionState {
    pub id: i64,
    pub completed: bool,
}

/// Total tracked seconds for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub seconds: i64,
}
