//! Admin dashboard: draft-based editing over the whole content document.
//!
//! Edits accumulate in a local draft and hit the remote store only on an
//! explicit save. A discarded draft (navigating away) leaves both the remote
//! rows and the cached copy untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;
use store::{Document, Loaded, SectionData};
use ui::{make_engine, publish_document, push_toast, use_site, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut site = use_site();

    let mut authed = use_signal(|| None::<bool>);
    let mut draft = use_signal(|| None::<Document>);
    let mut uninitialized = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let run_seed = move || async move {
        busy.set(true);
        match make_engine().seed().await {
            Ok(document) => {
                uninitialized.set(false);
                publish_document(&mut site, document.clone());
                draft.set(Some(document));
                push_toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Seeded",
                    "Default content written to the content service.",
                );
            }
            Err(e) => {
                uninitialized.set(true);
                push_toast(&mut toasts, ToastLevel::Error, "Seed failed", &e.to_string());
            }
        }
        busy.set(false);
    };

    // Gate check plus initial draft load. An empty remote is seeded with the
    // default content right away.
    let _ = use_resource(move || async move {
        let ok = ui::auth::is_authenticated().await;
        authed.set(Some(ok));
        if !ok {
            nav.replace(Route::Login {});
            return;
        }
        match make_engine().load().await {
            Loaded::Fresh(document) => draft.set(Some(document)),
            Loaded::Stale(document) => {
                push_toast(
                    &mut toasts,
                    ToastLevel::Info,
                    "Offline copy",
                    "The content service is unreachable; editing the saved copy.",
                );
                draft.set(Some(document));
            }
            Loaded::Uninitialized => run_seed().await,
        }
    });

    let handle_seed = move |_| async move { run_seed().await };

    let handle_save = move |_| async move {
        let Some(document) = draft() else { return };
        busy.set(true);
        match make_engine().save(&document).await {
            Ok(saved) => {
                publish_document(&mut site, saved.clone());
                draft.set(Some(saved));
                push_toast(&mut toasts, ToastLevel::Success, "Saved", "All changes published.");
            }
            Err(e) => {
                push_toast(&mut toasts, ToastLevel::Error, "Save failed", &e.to_string());
            }
        }
        busy.set(false);
    };

    let handle_reset = move |_| async move {
        if !confirm_reset() {
            return;
        }
        busy.set(true);
        match make_engine().reset().await {
            Ok(document) => {
                publish_document(&mut site, document.clone());
                draft.set(Some(document));
                push_toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Reset",
                    "Content restored to defaults.",
                );
            }
            Err(e) => {
                push_toast(&mut toasts, ToastLevel::Error, "Reset failed", &e.to_string());
            }
        }
        busy.set(false);
    };

    let handle_logout = move |_| async move {
        ui::auth::clear_authenticated().await;
        nav.replace(Route::Home {});
    };

    if authed() != Some(true) {
        return rsx! {
            div { class: "admin-page", p { class: "admin-loading", "Checking access..." } }
        };
    }

    rsx! {
        div { class: "admin-page",
            header { class: "admin-header",
                h1 { "Dashboard" }
                div { class: "admin-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: busy() || draft().is_none(),
                        onclick: handle_save,
                        "Save Changes"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy(),
                        onclick: handle_reset,
                        "Reset to Defaults"
                    }
                    button { class: "btn", onclick: handle_logout, "Log Out" }
                }
            }

            if uninitialized() {
                div { class: "admin-panel seed-panel",
                    p { "The content service holds no content yet and seeding failed." }
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: handle_seed,
                        "Retry Seeding"
                    }
                }
            }

            if draft().is_some() {
                ProfileEditor { draft }
                SectionsEditor { draft }
            }

            PasswordPanel {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn confirm_reset() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("Reset all content to defaults? This cannot be undone.")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_reset() -> bool {
    true
}

fn data_url_mime(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|e| e.to_lowercase()).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

#[component]
fn ProfileEditor(mut draft: Signal<Option<Document>>) -> Element {
    let Some(document) = draft() else {
        return rsx! {};
    };
    let profile = document.profile.clone();

    let mut edit_profile = move |apply: Box<dyn FnOnce(&mut store::Profile)>| {
        if let Some(doc) = draft.write().as_mut() {
            apply(&mut doc.profile);
        }
    };

    let upload_avatar = move |evt: FormEvent| async move {
        let Some(files) = evt.files() else { return };
        let Some(name) = files.files().first().cloned() else {
            return;
        };
        if let Some(bytes) = files.read_file(&name).await {
            let url = format!("data:{};base64,{}", data_url_mime(&name), STANDARD.encode(&bytes));
            if let Some(doc) = draft.write().as_mut() {
                doc.profile.image = url;
            }
        }
    };

    rsx! {
        div { class: "admin-panel",
            h2 { "Profile" }
            div { class: "form-grid",
                label { "Name"
                    input {
                        value: "{profile.name}",
                        oninput: move |evt| edit_profile(Box::new(move |p| p.name = evt.value())),
                    }
                }
                label { "Title"
                    input {
                        value: "{profile.title}",
                        oninput: move |evt| edit_profile(Box::new(move |p| p.title = evt.value())),
                    }
                }
                label { "Location"
                    input {
                        value: "{profile.location}",
                        oninput: move |evt| edit_profile(Box::new(move |p| p.location = evt.value())),
                    }
                }
                label { "Email"
                    input {
                        value: "{profile.email}",
                        oninput: move |evt| edit_profile(Box::new(move |p| p.email = evt.value())),
                    }
                }
                label { "Avatar"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: upload_avatar,
                    }
                }
            }
            if !profile.image.is_empty() {
                img { class: "avatar-preview", src: "{profile.image}", alt: "Avatar preview" }
            }

            h3 { "Social Links" }
            div { class: "form-grid",
                for (index, social) in profile.socials.iter().cloned().enumerate() {
                    label { key: "{social.id}", "{social.platform}"
                        input {
                            value: "{social.url}",
                            oninput: move |evt| {
                                if let Some(doc) = draft.write().as_mut() {
                                    if let Some(s) = doc.profile.socials.get_mut(index) {
                                        s.url = evt.value();
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionsEditor(mut draft: Signal<Option<Document>>) -> Element {
    let Some(document) = draft() else {
        return rsx! {};
    };
    let count = document.sections.len();

    let mut move_section = move |index: usize, delta: isize| {
        let Some(doc) = draft() else { return };
        let target = index as isize + delta;
        if target < 0 || target as usize >= doc.sections.len() {
            return;
        }
        let mut order = doc.section_order();
        order.swap(index, target as usize);
        if let Some(doc) = draft.write().as_mut() {
            doc.reorder_sections(&order);
        }
    };

    rsx! {
        div { class: "admin-panel",
            h2 { "Sections" }
            for (index, section) in document.sections.iter().cloned().enumerate() {
                div { key: "{section.id}", class: "section-editor",
                    div { class: "section-editor-header",
                        span { class: "section-kind", "{section.data.kind()}" }
                        div { class: "section-editor-controls",
                            button {
                                class: "btn btn-small",
                                disabled: index == 0,
                                onclick: move |_| move_section(index, -1),
                                "↑"
                            }
                            button {
                                class: "btn btn-small",
                                disabled: index + 1 == count,
                                onclick: move |_| move_section(index, 1),
                                "↓"
                            }
                            label { class: "visibility-toggle",
                                input {
                                    r#type: "checkbox",
                                    checked: section.visible,
                                    onchange: {
                                        let id = section.id.clone();
                                        move |evt: FormEvent| {
                                            if let Some(doc) = draft.write().as_mut() {
                                                if let Some(s) = doc.section_mut(&id) {
                                                    s.visible = evt.checked();
                                                }
                                            }
                                        }
                                    },
                                }
                                "Visible"
                            }
                        }
                    }
                    div { class: "form-grid",
                        label { "Title"
                            input {
                                value: "{section.title}",
                                oninput: {
                                    let id = section.id.clone();
                                    move |evt: FormEvent| {
                                        if let Some(doc) = draft.write().as_mut() {
                                            if let Some(s) = doc.section_mut(&id) {
                                                s.title = evt.value();
                                            }
                                        }
                                    }
                                },
                            }
                        }
                        label { "Subtitle"
                            input {
                                value: section.subtitle.clone().unwrap_or_default(),
                                oninput: {
                                    let id = section.id.clone();
                                    move |evt: FormEvent| {
                                        if let Some(doc) = draft.write().as_mut() {
                                            if let Some(s) = doc.section_mut(&id) {
                                                let v = evt.value();
                                                s.subtitle = if v.is_empty() { None } else { Some(v) };
                                            }
                                        }
                                    }
                                },
                            }
                        }
                    }
                    PayloadEditor { draft, section_id: section.id.clone() }
                }
            }
        }
    }
}

/// Kind-specific payload form for one section.
#[component]
fn PayloadEditor(draft: Signal<Option<Document>>, section_id: String) -> Element {
    let Some(document) = draft() else {
        return rsx! {};
    };
    let Some(section) = document.section(&section_id).cloned() else {
        return rsx! {};
    };

    match section.data {
        SectionData::Book(data) => rsx! {
            div { class: "form-grid",
                label { "Book Title"
                    input {
                        value: "{data.title}",
                        oninput: {
                            let id = section_id.clone();
                            move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                if let SectionData::Book(b) = d {
                                    b.title = evt.value();
                                }
                            })
                        },
                    }
                }
                label { "Description"
                    textarea {
                        value: "{data.description}",
                        oninput: {
                            let id = section_id.clone();
                            move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                if let SectionData::Book(b) = d {
                                    b.description = evt.value();
                                }
                            })
                        },
                    }
                }
                label { "Purchase URL"
                    input {
                        value: "{data.url}",
                        oninput: {
                            let id = section_id.clone();
                            move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                if let SectionData::Book(b) = d {
                                    b.url = evt.value();
                                }
                            })
                        },
                    }
                }
            }
        },
        SectionData::Writing(data) => rsx! {
            div { class: "form-grid",
                label { "Feed URL"
                    input {
                        value: "{data.feed_url}",
                        oninput: {
                            let id = section_id.clone();
                            move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                if let SectionData::Writing(w) = d {
                                    w.feed_url = evt.value();
                                }
                            })
                        },
                    }
                }
            }
        },
        SectionData::Links(data) => rsx! {
            div { class: "form-grid",
                for (index, link) in data.links.iter().cloned().enumerate() {
                    label { key: "{link.id}-title", "Link {index + 1} Title"
                        input {
                            value: "{link.title}",
                            oninput: {
                                let id = section_id.clone();
                                move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                    if let SectionData::Links(l) = d {
                                        if let Some(item) = l.links.get_mut(index) {
                                            item.title = evt.value();
                                        }
                                    }
                                })
                            },
                        }
                    }
                    label { key: "{link.id}-url", "Link {index + 1} URL"
                        input {
                            value: "{link.url}",
                            oninput: {
                                let id = section_id.clone();
                                move |evt: FormEvent| edit_payload(draft, &id, |d| {
                                    if let SectionData::Links(l) = d {
                                        if let Some(item) = l.links.get_mut(index) {
                                            item.url = evt.value();
                                        }
                                    }
                                })
                            },
                        }
                    }
                }
            }
        },
        // Gallery and reading entries are edited through their image/item
        // URLs directly in the data; only a summary is shown here.
        SectionData::Creativity(data) => rsx! {
            p { class: "payload-summary", "{data.items.len()} gallery items" }
        },
        SectionData::Reading(data) => rsx! {
            p { class: "payload-summary", "{data.items.len()} reading entries" }
        },
    }
}

fn edit_payload(
    mut draft: Signal<Option<Document>>,
    section_id: &str,
    apply: impl FnOnce(&mut SectionData),
) {
    if let Some(doc) = draft.write().as_mut() {
        doc.update_section_data(section_id, apply);
    }
}

#[component]
fn PasswordPanel() -> Element {
    let mut toasts = use_toasts();
    let mut current = use_signal(String::new);
    let mut new = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            busy.set(true);
            match ui::auth::change_password(&current(), &new(), &confirm()).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Password changed",
                        "Use the new password next time you sign in.",
                    );
                }
                Err(e) => {
                    push_toast(&mut toasts, ToastLevel::Error, "Password change failed", &e.to_string());
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        div { class: "admin-panel",
            h2 { "Change Password" }
            form { class: "form-grid", onsubmit: submit,
                label { "Current Password"
                    input {
                        r#type: "password",
                        value: "{current}",
                        oninput: move |evt| current.set(evt.value()),
                    }
                }
                label { "New Password"
                    input {
                        r#type: "password",
                        value: "{new}",
                        oninput: move |evt| new.set(evt.value()),
                    }
                }
                label { "Confirm New Password"
                    input {
                        r#type: "password",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: busy(),
                    "Update Password"
                }
            }
        }
    }
}
