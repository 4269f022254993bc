use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub items: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, message: &str) {
    let id = {
        let mut t = toasts.write();
        let id = t.next_id;
        t.next_id += 1;
        t.items.push(Toast {
            id,
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_secs(4)).await;

        toasts.write().items.retain(|t| t.id != id);
    });
}

/// Provider component owning the toast list.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div { class: "toast-host",
            for toast in toasts().items.clone() {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.level.class()}",
                    div { class: "toast-title", "{toast.title}" }
                    if !toast.message.is_empty() {
                        div { class: "toast-message", "{toast.message}" }
                    }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.write().items.retain(|t| t.id != id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
