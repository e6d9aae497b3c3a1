use std::cell::Cell;

use dioxus::prelude::*;
use gloo_console::error as console_error;

use crate::common::async_timeout;

// global toast stack
//
// like a modal stack, notifications can be raised from anywhere in the app,
// so they live in a global signal rather than being threaded through props
pub static NOTIFICATIONS: GlobalSignal<Vec<Notification>> = Signal::global(|| Vec::new());

thread_local! {
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

const INFO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq)]
pub enum NotificationType {
    Info,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub ntype: NotificationType,
}

pub fn notify(message: impl Into<String>, ntype: NotificationType) {
    let id = NEXT_ID.with(|cell| {
        let id = cell.get();
        cell.set(id + 1);
        id
    });

    NOTIFICATIONS.with_mut(|v| {
        v.push(Notification {
            id,
            message: message.into(),
            ntype,
        })
    });
}

// the shared error collaborator: the underlying error goes to the console for
// debugging, the friendly message goes to the viewer
pub fn handle_error(err: &anyhow::Error, message: &str) {
    console_error!(format!("{message}: {err}"));
    notify(message, NotificationType::Error);
}

fn dismiss(id: u64) {
    NOTIFICATIONS.with_mut(|v| v.retain(|notification| notification.id != id));
}

#[derive(Clone, PartialEq, Props)]
struct ToastProps {
    notification: Notification,
}

#[component]
fn Toast(props: ToastProps) -> Element {
    let Notification { id, message, ntype } = props.notification;

    // info toasts clear themselves, errors stay until dismissed
    use_future(move || async move {
        if ntype == NotificationType::Info {
            async_timeout(INFO_DISMISS_MS).await;
            dismiss(id);
        }
    });

    let class = match ntype {
        NotificationType::Info => "toast toast-info",
        NotificationType::Error => "toast toast-error",
    };

    rsx! {
        div { class: "{class}",
            span { class: "toast-message", "{message}" }
            button { class: "toast-close", onclick: move |_| dismiss(id), "×" }
        }
    }
}

#[component]
pub fn NotificationTray() -> Element {
    rsx! {
        div { class: "toast-tray",
            for notification in NOTIFICATIONS.read().iter() {
                Toast {
                    key: "{notification.id}",
                    notification: notification.clone(),
                }
            }
        }
    }
}
