use std::fmt::Write;

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use url::Url;

use crate::domain::{FeedItem, Filter};
use crate::render::{notice, time::format_relative};
use crate::services::FilterController;
use crate::sources::SourceRegistry;

pub const NO_ARTICLES: &str = "No articles found.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 1rem; }
.feed-buttons { display: flex; gap: .5rem; margin-bottom: 1rem; }
.feed-btn { border: 1px solid #ccc; background: #fff; padding: .4rem .8rem; cursor: pointer; }
.feed-btn.active { background: #222; color: #fff; }
.feed-item { display: flex; gap: 1rem; padding: 1rem 0; border-bottom: 1px solid #eee; }
.feed-image { width: 160px; height: 90px; object-fit: cover; }
.feed-source { font-weight: bold; font-size: .85rem; }
.feed-date { color: #777; font-size: .8rem; }
.no-articles { text-align: center; padding: 2rem; }
.error-message { background: #fdecea; color: #611a15; padding: .75rem; margin-bottom: 1rem; }
.hidden { display: none !important; }
"#;

/// Client-side filter switching over the already rendered items
const SCRIPT: &str = r#"
document.querySelectorAll('.feed-btn').forEach(function (button) {
  button.addEventListener('click', function () {
    document.querySelectorAll('.feed-btn').forEach(function (b) { b.classList.remove('active'); });
    button.classList.add('active');
    var value = button.getAttribute('data-feed');
    var shown = 0;
    document.querySelectorAll('.feed-item').forEach(function (item) {
      var match = value === 'all' || item.getAttribute('data-source') === value;
      item.classList.toggle('hidden', !match);
      if (match) { shown++; }
    });
    document.getElementById('noArticles').classList.toggle('hidden', shown > 0);
  });
});
"#;

/// Full document: filter bar, loading indicator, error region and the feed container
pub fn render_page(
    registry: &SourceRegistry,
    controller: &FilterController,
    now: DateTime<Utc>,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Feeds</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_filter_bar(registry, controller.filter()));

    html.push_str("<div id=\"loadingIndicator\" class=\"loading hidden\">Loading feeds...</div>\n");

    match notice(controller) {
        Some(message) => {
            let _ = writeln!(
                html,
                "<div id=\"errorMessage\" class=\"error-message\">{}</div>",
                text(&message)
            );
        }
        None => html.push_str("<div id=\"errorMessage\" class=\"error-message hidden\"></div>\n"),
    }

    html.push_str("<div id=\"feedContainer\">\n");
    html.push_str(&render_items(controller.items(), controller.filter(), now));
    html.push_str("</div>\n");

    let _ = writeln!(html, "<script>{}</script>", SCRIPT);
    html.push_str("</body>\n</html>\n");

    html
}

/// One button per source plus "all"; only the active filter's button is marked
pub fn render_filter_bar(registry: &SourceRegistry, active: Filter) -> String {
    let mut html = String::from("<nav class=\"feed-buttons\">\n");

    let buttons = std::iter::once((Filter::All, "All"))
        .chain(
            registry
                .sources()
                .iter()
                .enumerate()
                .map(|(index, source)| (Filter::Source(index), source.name.as_str())),
        );

    for (filter, label) in buttons {
        let class = if filter == active { "feed-btn active" } else { "feed-btn" };
        let _ = writeln!(
            html,
            "<button class=\"{}\" data-feed=\"{}\">{}</button>",
            class,
            filter.as_data_value(),
            text(label)
        );
    }

    html.push_str("</nav>\n");
    html
}

/// Container content: every retained item, non-matching ones hidden.
/// The placeholder is visible only when the filter leaves nothing to show.
pub fn render_items(items: &[FeedItem], filter: Filter, now: DateTime<Utc>) -> String {
    let mut html = String::new();
    let mut shown = 0;

    for item in items {
        let visible = filter.matches(item.source_index);
        if visible {
            shown += 1;
        }
        html.push_str(&render_item(item, visible, now));
    }

    let placeholder_class = if shown == 0 { "no-articles" } else { "no-articles hidden" };
    let _ = writeln!(
        html,
        "<p id=\"noArticles\" class=\"{}\">{}</p>",
        placeholder_class, NO_ARTICLES
    );

    html
}

pub fn render_item(item: &FeedItem, visible: bool, now: DateTime<Utc>) -> String {
    let mut html = String::new();
    let class = if visible { "feed-item" } else { "feed-item hidden" };

    let _ = writeln!(
        html,
        "<div class=\"{}\" data-source=\"{}\">",
        class, item.source_index
    );

    if let Some(image) = &item.image {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\" class=\"feed-image\" onerror=\"this.classList.add('hidden')\">",
            attr(image),
            attr(&item.title)
        );
    }

    html.push_str("<div class=\"feed-content\">\n");
    let _ = writeln!(
        html,
        "<div class=\"feed-source\" style=\"color: {}\">{}</div>",
        attr(&item.source_color),
        text(&item.source)
    );
    let _ = writeln!(
        html,
        "<h3 class=\"feed-title\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>",
        attr(safe_href(&item.link)),
        text(&item.title)
    );
    let _ = writeln!(
        html,
        "<p class=\"feed-description\">{}</p>",
        text(&item.description)
    );
    let _ = writeln!(
        html,
        "<div class=\"feed-date\">{}</div>",
        format_relative(item.published, now)
    );
    html.push_str("</div>\n</div>\n");

    html
}

/// Link target for an item; anything but an absolute http(s) URL becomes `#`
pub fn safe_href(link: &str) -> &str {
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => link,
        _ => "#",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedSource;
    use crate::services::fetch_service::AggregateOutcome;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn item(index: usize, title: &str, image: Option<&str>) -> FeedItem {
        let registry = SourceRegistry::new();
        let source = registry.get(index).unwrap();
        FeedItem::new(source, index, title.to_string(), "https://example.com/a".to_string())
            .with_description("Plain text".to_string())
            .with_published(now() - Duration::minutes(90))
            .with_image(image.map(str::to_string))
    }

    #[test]
    fn test_item_block_contents() {
        let html = render_item(&item(1, "Hello", Some("https://img/a.png")), true, now());

        assert!(html.contains("class=\"feed-item\" data-source=\"1\""));
        assert!(html.contains("<img src=\"https://img/a.png\""));
        assert!(html.contains("onerror=\"this.classList.add('hidden')\""));
        assert!(html.contains("style=\"color: #FF6600\">Hacker News</div>"));
        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\">Hello</a>"));
        assert!(html.contains("<p class=\"feed-description\">Plain text</p>"));
        assert!(html.contains("<div class=\"feed-date\">1 hour ago</div>"));
    }

    #[test]
    fn test_non_http_links_are_neutralized() {
        let mut unsafe_item = item(0, "Sneaky", None);
        unsafe_item.link = "javascript:alert(document.cookie)".to_string();
        let html = render_item(&unsafe_item, true, now());

        assert!(!html.contains("javascript:"));
        assert!(html.contains("<a href=\"#\" target=\"_blank\""));
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://example.com/a?b=1"), "https://example.com/a?b=1");
        assert_eq!(safe_href("http://example.com"), "http://example.com");
        assert_eq!(safe_href("JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,hi"), "#");
        assert_eq!(safe_href("/relative/path"), "#");
        assert_eq!(safe_href("#"), "#");
        assert_eq!(safe_href(""), "#");
    }

    #[test]
    fn test_item_without_image_has_no_img() {
        let html = render_item(&item(0, "No image", None), true, now());
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_item_text_is_escaped() {
        let html = render_item(&item(0, "<script>alert(1)</script>", None), true, now());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_items_render_placeholder() {
        let html = render_items(&[], Filter::All, now());

        assert!(html.contains("<p id=\"noArticles\" class=\"no-articles\">No articles found.</p>"));
        assert!(!html.contains("feed-item"));
    }

    #[test]
    fn test_filter_hides_other_sources() {
        let items = vec![item(0, "zero", None), item(1, "one", None)];
        let html = render_items(&items, Filter::Source(1), now());

        assert!(html.contains("class=\"feed-item hidden\" data-source=\"0\""));
        assert!(html.contains("class=\"feed-item\" data-source=\"1\""));
        assert!(html.contains("class=\"no-articles hidden\""));
    }

    #[test]
    fn test_filter_with_no_matches_shows_placeholder() {
        let items = vec![item(0, "zero", None)];
        let html = render_items(&items, Filter::Source(2), now());

        assert!(html.contains("<p id=\"noArticles\" class=\"no-articles\">"));
    }

    #[test]
    fn test_filter_bar_single_active_button() {
        let html = render_filter_bar(&SourceRegistry::new(), Filter::Source(2));

        assert_eq!(html.matches("feed-btn active").count(), 1);
        assert!(html.contains("<button class=\"feed-btn active\" data-feed=\"2\">The Verge</button>"));
        assert!(html.contains("<button class=\"feed-btn\" data-feed=\"all\">All</button>"));
    }

    #[test]
    fn test_page_shows_error_region_for_failures() {
        let mut controller = FilterController::new(Filter::All);
        controller.replace(AggregateOutcome {
            items: vec![item(0, "zero", None)],
            failed_sources: vec!["Hacker News".to_string()],
            is_demo: false,
        });

        let html = render_page(&SourceRegistry::new(), &controller, now());

        assert!(html.contains("<div id=\"errorMessage\" class=\"error-message\">Could not load: Hacker News.</div>"));
        assert!(html.contains("id=\"loadingIndicator\" class=\"loading hidden\""));
        assert!(html.contains("<div id=\"feedContainer\">"));
    }

    #[test]
    fn test_page_hides_error_region_when_all_loaded() {
        let source = FeedSource::new("A", "https://a.example/feed", "#111111");
        let mut controller = FilterController::new(Filter::All);
        controller.replace(AggregateOutcome {
            items: vec![FeedItem::new(&source, 0, "a".to_string(), String::new())],
            failed_sources: Vec::new(),
            is_demo: false,
        });

        let html = render_page(&SourceRegistry::new(), &controller, now());
        assert!(html.contains("<div id=\"errorMessage\" class=\"error-message hidden\"></div>"));
    }
}
