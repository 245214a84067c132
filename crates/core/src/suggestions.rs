// crates/core/src/suggestions.rs
//! Day-summary coaching suggestions.
//!
//! Renders a day's activities as a plain-text table, sends it to an
//! `LlmProvider` with a coaching system prompt, and returns the reply.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::llm::{CompletionRequest, LlmError, LlmProvider};
use crate::types::Activity;

pub const SYSTEM_PROMPT: &str = "You are a focused productivity coach.\n\
Given activity logs, return 3–6 clear, actionable suggestions to improve the user's day.\n\
Keep it specific, prioritised, and concise. Use bullets, not paragraphs.\n\
If data is sparse, say so and suggest helpful next steps.";

/// Rows beyond this are counted in the header but left out of the table.
pub const MAX_PROMPT_ROWS: usize = 200;

pub const SUGGESTION_TEMPERATURE: f32 = 0.4;

/// The slice of an activity that goes into the prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRow {
    pub title: String,
    pub category_name: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub completed: bool,
}

impl From<&Activity> for SuggestionRow {
    fn from(a: &Activity) -> Self {
        Self {
            title: a.title.clone(),
            category_name: a.category_name.clone(),
            start_time: a.start_time,
            end_time: a.end_time,
            duration_minutes: a.duration_minutes,
            completed: a.completed,
        }
    }
}

/// Build the user prompt for `date` (`YYYY-MM-DD`).
pub fn build_user_prompt(date: &str, rows: &[SuggestionRow]) -> String {
    let mut table = vec!["title | category | start | end | mins | completed".to_string()];
    for r in rows.iter().take(MAX_PROMPT_ROWS) {
        let start = r.start_time.map(|t| t.to_rfc3339()).unwrap_or_default();
        let end = r.end_time.map(|t| t.to_rfc3339()).unwrap_or_default();
        // Zero minutes renders blank, same as absent.
        let mins = r
            .duration_minutes
            .filter(|m| *m != 0)
            .map(|m| m.to_string())
            .unwrap_or_default();
        let completed = if r.completed { "yes" } else { "no" };
        table.push(format!(
            "{} | {} | {} | {} | {} | {}",
            r.title, r.category_name, start, end, mins, completed
        ));
    }

    format!(
        "Date: {date}\nTotal rows: {total}\n\n\
Here are the activities from the SQL database (latest first):\n\n\
{table}\n\n\
Return:\n\
- A short title for the day (<=60 chars)\n\
- 3–6 bullet suggestions (each <=180 chars)\n\
- An optional mini plan for tomorrow (<=3 bullets)\n",
        total = rows.len(),
        table = table.join("\n"),
    )
}

/// Turns a day's activity rows into coaching text via an LLM.
#[derive(Clone)]
pub struct SuggestionClient {
    provider: Arc<dyn LlmProvider>,
}

impl SuggestionClient {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// One completion call, no retry. Returns the trimmed reply.
    pub async fn suggest(&self, date: &str, rows: &[SuggestionRow]) -> Result<String, LlmError> {
        let request = CompletionRequest {
            system_prompt: Some(SYSTEM_PROMPT.to_string()),
            user_prompt: build_user_prompt(date, rows),
            temperature: SUGGESTION_TEMPERATURE,
        };
        let response = self.provider.complete(request).await?;
        tracing::info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            latency_ms = response.latency_ms,
            rows = rows.len(),
            "Suggestions generated"
        );
        Ok(response.content.trim().to_string())
    }
}
