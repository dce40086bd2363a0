pub mod time;
pub mod html;
pub mod text;

use chrono::{DateTime, Utc};

use crate::services::FilterController;
use crate::sources::SourceRegistry;

pub use time::format_relative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML document
    #[default]
    Html,
    /// Plain text list
    Text,
}

pub fn render(
    format: OutputFormat,
    registry: &SourceRegistry,
    controller: &FilterController,
    now: DateTime<Utc>,
) -> String {
    match format {
        OutputFormat::Html => html::render_page(registry, controller, now),
        OutputFormat::Text => text::render_list(controller, now),
    }
}

/// Message for the error region, if the last cycle had anything to report
pub fn notice(controller: &FilterController) -> Option<String> {
    let mut parts = Vec::new();

    if !controller.failed_sources().is_empty() {
        parts.push(format!(
            "Could not load: {}.",
            controller.failed_sources().join(", ")
        ));
    }
    if controller.is_demo() {
        parts.push("Showing demonstration articles; no feed could be loaded.".to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
