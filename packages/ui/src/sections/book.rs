use dioxus::prelude::*;
use store::BookData;

use super::SectionLayout;

#[component]
pub fn BookSection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    data: BookData,
) -> Element {
    rsx! {
        SectionLayout { title, subtitle,
            div { class: "book",
                if !data.image.is_empty() {
                    img { class: "book-cover", src: "{data.image}", alt: "{data.title}" }
                }
                div { class: "book-info",
                    h3 { class: "book-title", "{data.title}" }
                    p { class: "book-description", "{data.description}" }
                    if !data.url.is_empty() {
                        a {
                            class: "book-link",
                            href: "{data.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Get the Book"
                        }
                    }
                }
            }
        }
    }
}
