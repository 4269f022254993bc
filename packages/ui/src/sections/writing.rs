use api::FeedItem;
use dioxus::prelude::*;
use store::WritingData;

use super::SectionLayout;

/// Placeholder articles shown when the feed bridge reports an error status.
fn fallback_articles() -> Vec<FeedItem> {
    vec![
        FeedItem {
            title: "Finding Purpose in the Journey of Faith".to_string(),
            description: "Exploring what it means to walk in faith as a new man in Christ..."
                .to_string(),
            pub_date: "2025-12-15".to_string(),
            link: "#".to_string(),
        },
        FeedItem {
            title: "The Power of Transformation".to_string(),
            description: "Understanding the transformative power of faith...".to_string(),
            pub_date: "2025-11-28".to_string(),
            link: "#".to_string(),
        },
    ]
}

/// Very small tag stripper for feed descriptions, which arrive as HTML.
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[component]
pub fn WritingSection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    data: WritingData,
) -> Element {
    let feed_url = data.feed_url.clone();
    let articles = use_resource(move || {
        let feed_url = feed_url.clone();
        async move {
            match api::fetch_feed(feed_url).await {
                Ok(feed) if feed.status == "ok" => {
                    feed.items.into_iter().take(3).collect::<Vec<_>>()
                }
                Ok(_) => fallback_articles(),
                Err(e) => {
                    tracing::error!("failed to fetch articles: {e}");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        SectionLayout { title, subtitle,
            match articles() {
                None => rsx! {
                    div { class: "feed-loading", "Loading articles..." }
                },
                Some(items) => rsx! {
                    div { class: "feed-list",
                        for (index, article) in items.iter().enumerate() {
                            a {
                                key: "{index}",
                                class: "feed-article",
                                href: "{article.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                h3 { class: "feed-article-title", "{article.title}" }
                                p { class: "feed-article-description",
                                    "{strip_html(&article.description)}"
                                }
                                div { class: "feed-article-meta",
                                    span { class: "feed-article-date", "{article.pub_date}" }
                                    span { class: "feed-article-cta", "Read Article →" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strip_html;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<p>Hello <strong>world</strong></p>\n<p>again</p>";
        assert_eq!(strip_html(html), "Hello world again");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }
}
