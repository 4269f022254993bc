use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowUpRightFromSquare;
use dioxus_free_icons::Icon;
use store::LinksData;

use super::SectionLayout;

#[component]
pub fn LinksSection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    data: LinksData,
) -> Element {
    rsx! {
        SectionLayout { title, subtitle,
            div { class: "link-list",
                for link in data.links.iter().cloned() {
                    a {
                        key: "{link.id}",
                        class: "link-item",
                        href: "{link.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        div { class: "link-info",
                            h3 { class: "link-title", "{link.title}" }
                            if !link.subtitle.is_empty() {
                                p { class: "link-subtitle", "{link.subtitle}" }
                            }
                        }
                        Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
