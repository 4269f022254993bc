//! Public profile page: header plus every visible section in stored order.

use dioxus::prelude::*;
use store::{Section, SectionData};
use ui::{
    use_site, BookSection, CreativitySection, LinksSection, ProfileHeader, ReadingSection,
    WritingSection,
};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let state = site();

    rsx! {
        div { class: "public-page",
            if state.stale {
                div { class: "stale-banner", "Showing saved copy; the content service is unreachable." }
            }
            ProfileHeader { profile: state.document.profile.clone() }
            main { class: "public-sections",
                for section in state.document.sections.iter().filter(|s| s.visible).cloned() {
                    SectionView { key: "{section.id}", section }
                }
            }
            footer { class: "public-footer",
                Link { class: "admin-link", to: Route::Login {}, "Admin" }
            }
        }
    }
}

/// Dispatch one section to its kind-specific renderer.
#[component]
fn SectionView(section: Section) -> Element {
    let title = section.title.clone();
    let subtitle = section.subtitle.clone();

    match section.data {
        SectionData::Book(data) => rsx! {
            BookSection { title, subtitle, data }
        },
        SectionData::Writing(data) => rsx! {
            WritingSection { title, subtitle, data }
        },
        SectionData::Creativity(data) => rsx! {
            CreativitySection { title, subtitle, data }
        },
        SectionData::Reading(data) => rsx! {
            ReadingSection { title, subtitle, data }
        },
        SectionData::Links(data) => rsx! {
            LinksSection { title, subtitle, data }
        },
    }
}
