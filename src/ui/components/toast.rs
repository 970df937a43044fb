use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use dioxus::prelude::*;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

static TOAST_IDS: AtomicUsize = AtomicUsize::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: usize,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: TOAST_IDS.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }
}

/// Appends a toast, dropping the oldest once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 z-40 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = view.id;
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != toast_id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            p { class: "text-sm font-medium", "{view.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let mut toasts = toasts;
                    toasts.with_mut(|items| items.retain(|toast| toast.id != toast_id));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: usize,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => (
                "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
                "✅",
            ),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_keeps_the_newest_five() {
        let mut entries = Vec::new();
        for n in 0..7 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("toast {n}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].text, "toast 2");
        assert_eq!(entries[4].text, "toast 6");
    }

    #[test]
    fn ids_are_unique() {
        let a = ToastMessage::new(ToastKind::Success, "a");
        let b = ToastMessage::new(ToastKind::Error, "b");
        assert_ne!(a.id, b.id);
    }
}
