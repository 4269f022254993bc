//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod remote;
pub use remote::ServerFnRemote;

mod site;
pub use site::{make_cache, make_engine, publish_document, use_site, SiteProvider, SiteState};

pub mod auth;

pub mod toast;
pub use toast::{push_toast, use_toasts, ToastLevel, ToastProvider};

mod header;
pub use header::ProfileHeader;

pub mod sections;
pub use sections::{
    BookSection, CreativitySection, LinksSection, ReadingSection, SectionLayout, WritingSection,
};
