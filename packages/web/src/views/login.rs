//! Admin login page: a single password prompt.

use dioxus::prelude::*;
use ui::{push_toast, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut password = use_signal(String::new);
    let mut checking = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let candidate = password();
        async move {
            checking.set(true);
            if ui::auth::verify_login(&candidate).await {
                ui::auth::set_authenticated().await;
                nav.replace(Route::Admin {});
            } else {
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Login failed",
                    "Incorrect password.",
                );
                password.set(String::new());
            }
            checking.set(false);
        }
    };

    rsx! {
        div { class: "login-page",
            form { class: "login-card", onsubmit: submit,
                h1 { class: "login-title", "Admin Login" }
                input {
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "login-submit",
                    r#type: "submit",
                    disabled: checking(),
                    if checking() { "Checking..." } else { "Sign In" }
                }
                p { class: "login-hint", "Default: admin123" }
            }
        }
    }
}
