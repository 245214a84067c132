// crates/core/src/lib.rs
//! Domain types and pure logic for the daytrack activity tracker.

pub mod day;
pub mod error;
pub mod llm;
pub mod paths;
pub mod suggestions;
pub mod types;

pub use day::{elapsed_seconds, parse_date, DayRange};
pub use error::*;
pub use suggestions::{SuggestionClient, SuggestionRow};
pub use types::*;
