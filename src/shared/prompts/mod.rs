//! Prompt template management module.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use chrono::Utc;
use minijinja::Value;
use std::collections::HashMap;

/// Build a context with current date information.
///
/// Returns a HashMap with:
/// - `day_name`: English day name (e.g., "Monday")
/// - `date`: Date in dd-mm-yyyy format
pub fn datetime_context() -> HashMap<&'static str, String> {
    let now = Utc::now();
    let mut ctx = HashMap::new();
    ctx.insert("day_name", now.format("%A").to_string());
    ctx.insert("date", now.format("%d-%m-%Y").to_string());
    ctx
}

/// Render the mining-law assistant system instruction.
pub fn render_assistant_prompt() -> Result<String, TemplateError> {
    let ctx: HashMap<&str, Value> = datetime_context()
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();

    render_template("assistant/system.jinja", &ctx)
}
