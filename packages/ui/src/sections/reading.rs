use dioxus::prelude::*;
use store::ReadingData;

use super::SectionLayout;

#[component]
pub fn ReadingSection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    data: ReadingData,
) -> Element {
    rsx! {
        SectionLayout { title, subtitle,
            div { class: "reading-list",
                for item in data.items.iter().cloned() {
                    a {
                        key: "{item.id}",
                        class: "reading-item",
                        href: "{item.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        if !item.image.is_empty() {
                            img { class: "reading-cover", src: "{item.image}", alt: "{item.title}" }
                        }
                        div { class: "reading-info",
                            h3 { class: "reading-title", "{item.title}" }
                            p { class: "reading-author", "{item.author}" }
                        }
                    }
                }
            }
        }
    }
}
