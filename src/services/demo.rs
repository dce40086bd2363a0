use chrono::{DateTime, Duration, Utc};

use crate::domain::FeedItem;
use crate::sources::SourceRegistry;

struct DemoEntry {
    source_index: usize,
    title: &'static str,
    description: &'static str,
    hours_ago: i64,
    image: Option<&'static str>,
}

const DEMO_ENTRIES: &[DemoEntry] = &[
    DemoEntry {
        source_index: 0,
        title: "The Future of AI: Latest Developments in Machine Learning",
        description: "Exploring the latest breakthroughs in artificial intelligence and machine learning technologies that are shaping the future of software development.",
        hours_ago: 2,
        image: Some("https://via.placeholder.com/400x200/0A9E00/FFFFFF?text=TechCrunch"),
    },
    DemoEntry {
        source_index: 1,
        title: "Building Scalable Web Applications with Modern Frameworks",
        description: "A comprehensive guide to creating high-performance, scalable web applications using the latest development frameworks and best practices.",
        hours_ago: 5,
        image: Some("https://via.placeholder.com/400x200/FF6600/FFFFFF?text=Hacker+News"),
    },
    DemoEntry {
        source_index: 2,
        title: "Cloud Computing Trends Every Developer Should Know",
        description: "An overview of the most important cloud computing trends and technologies that are revolutionizing how we build and deploy applications.",
        hours_ago: 8,
        image: Some("https://via.placeholder.com/400x200/FA4D56/FFFFFF?text=The+Verge"),
    },
    DemoEntry {
        source_index: 0,
        title: "Cybersecurity Best Practices for Modern Applications",
        description: "Essential security measures and best practices every developer should implement to protect their applications from common vulnerabilities.",
        hours_ago: 12,
        image: None,
    },
    DemoEntry {
        source_index: 1,
        title: "JavaScript Performance Optimization Techniques",
        description: "Learn how to optimize your JavaScript code for better performance and improved user experience in modern web applications.",
        hours_ago: 18,
        image: Some("https://via.placeholder.com/400x200/FF6600/FFFFFF?text=JavaScript"),
    },
    DemoEntry {
        source_index: 2,
        title: "The Rise of Progressive Web Apps",
        description: "Progressive Web Apps are changing how we think about web development, offering native-like experiences through web technologies.",
        hours_ago: 24,
        image: Some("https://via.placeholder.com/400x200/FA4D56/FFFFFF?text=PWA"),
    },
    DemoEntry {
        source_index: 0,
        title: "DevOps Culture: Bridging Development and Operations",
        description: "Understanding the DevOps philosophy and how it can improve collaboration, efficiency, and product quality in software development.",
        hours_ago: 30,
        image: None,
    },
    DemoEntry {
        source_index: 1,
        title: "Microservices Architecture: Pros and Cons",
        description: "A detailed analysis of microservices architecture, including when to use it and potential challenges you might face.",
        hours_ago: 36,
        image: Some("https://via.placeholder.com/400x200/FF6600/FFFFFF?text=Microservices"),
    },
    DemoEntry {
        source_index: 2,
        title: "Getting Started with Docker and Containerization",
        description: "Learn the basics of Docker and containerization technology to streamline your development and deployment processes.",
        hours_ago: 48,
        image: None,
    },
];

/// Fixed demonstration articles, timestamped relative to `now` and already sorted newest first
pub fn demo_items(now: DateTime<Utc>) -> Vec<FeedItem> {
    let registry = SourceRegistry::new();

    DEMO_ENTRIES
        .iter()
        .filter_map(|entry| {
            let source = registry.get(entry.source_index)?;
            Some(
                FeedItem::new(source, entry.source_index, entry.title.to_string(), "#".to_string())
                    .with_description(entry.description.to_string())
                    .with_published(now - Duration::hours(entry.hours_ago))
                    .with_image(entry.image.map(str::to_string)),
            )
        })
        .collect()
}
