use chrono::{DateTime, NaiveDateTime, Utc};
use scraper::{Html, Selector};

use crate::domain::{FeedItem, FeedSource};
use crate::sources::ApiItem;

/// Maximum number of characters kept from a description
pub const DESCRIPTION_LIMIT: usize = 200;
pub const ELLIPSIS: &str = "...";

/// Plain text of a markup fragment: every text node concatenated, entities decoded
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}

/// Keep the first `DESCRIPTION_LIMIT` characters, marking the cut with an ellipsis
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

pub fn plain_description(html: &str) -> String {
    truncate_description(&strip_html(html))
}

/// Representative image of an item, first match wins:
/// enclosure link, thumbnail, then the first `<img src>` in the markup
pub fn extract_image(item: &ApiItem) -> Option<String> {
    item.enclosure_link()
        .or_else(|| item.thumbnail())
        .map(str::to_string)
        .or_else(|| item.markup().and_then(first_image_src))
}

fn first_image_src(html: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").ok()?;
    let fragment = Html::parse_fragment(html);

    fragment
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .find(|src| !src.is_empty())
        .map(str::to_string)
}

/// Parse the publication date formats seen from the conversion API
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .or_else(|| {
            DateTime::parse_from_rfc2822(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

/// Map one raw API item to a `FeedItem` tagged with its source
pub fn normalize(source: &FeedSource, source_index: usize, item: &ApiItem) -> FeedItem {
    let published = match item.pub_date.as_deref() {
        Some(raw) => parse_pub_date(raw).unwrap_or_else(|| {
            tracing::debug!(source = %source.name, date = raw, "unparseable publication date");
            DateTime::<Utc>::UNIX_EPOCH
        }),
        None => DateTime::<Utc>::UNIX_EPOCH,
    };

    FeedItem::new(
        source,
        source_index,
        item.title.clone().unwrap_or_default(),
        item.link.clone().unwrap_or_default(),
    )
    .with_description(item.markup().map(plain_description).unwrap_or_default())
    .with_published(published)
    .with_image(extract_image(item))
}
