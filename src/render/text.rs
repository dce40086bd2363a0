use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::domain::FeedItem;
use crate::render::{html::NO_ARTICLES, notice, time::format_relative};
use crate::services::FilterController;

/// Terminal view of the items matching the active filter
pub fn render_list(controller: &FilterController, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if let Some(message) = notice(controller) {
        let _ = writeln!(out, "! {}\n", message);
    }

    out.push_str(&render_items(&controller.visible(), now));
    out
}

pub fn render_items(items: &[&FeedItem], now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return format!("{}\n", NO_ARTICLES);
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "[{}] {}", item.source, item.title);
        if !item.description.is_empty() {
            let _ = writeln!(out, "  {}", item.description);
        }
        let _ = writeln!(out, "  {}", item.link);
        if let Some(image) = &item.image {
            let _ = writeln!(out, "  Image: {}", image);
        }
        let _ = writeln!(out, "  {}\n", format_relative(item.published, now));
    }

    out
}
