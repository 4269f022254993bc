use dioxus::prelude::*;

/// Shared card frame around every public section: title, optional subtitle,
/// then the kind-specific body.
#[component]
pub fn SectionLayout(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "section-card",
            div { class: "section-heading",
                h2 { class: "section-title", "{title}" }
                if let Some(subtitle) = subtitle.as_ref().filter(|s| !s.is_empty()) {
                    p { class: "section-subtitle", "{subtitle}" }
                }
            }
            div { class: "section-body", {children} }
        }
    }
}
