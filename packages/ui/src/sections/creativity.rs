use dioxus::prelude::*;
use store::CreativityData;

use super::SectionLayout;

#[component]
pub fn CreativitySection(
    title: String,
    #[props(default)] subtitle: Option<String>,
    data: CreativityData,
) -> Element {
    rsx! {
        SectionLayout { title, subtitle,
            div { class: "gallery-grid",
                for item in data.items.iter().cloned() {
                    figure {
                        key: "{item.id}",
                        class: "gallery-item",
                        img { class: "gallery-image", src: "{item.image}", alt: "{item.alt}" }
                        figcaption { class: "gallery-caption", "{item.title}" }
                    }
                }
            }
        }
    }
}
