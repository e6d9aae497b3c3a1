use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::info;

use crate::Route;
use crate::common::{
    notify::{NotificationType, handle_error, notify},
    oauth,
};

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut status_signal = use_signal(|| String::from(""));

    // the handshake leaves through authorize() and arrives back here with the
    // provider's markers in the query string
    use_future(move || async move {
        let search = oauth::current_search();

        if oauth::is_callback(&search) {
            status_signal.set(String::from("Completing login..."));

            match oauth::login().await {
                Ok(resp) => {
                    info!("logged in as {}", resp.user.uuid);
                    notify(
                        format!("Welcome, {}!", resp.user.name),
                        NotificationType::Info,
                    );
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    handle_error(&err, "Unable to complete OAuth login");
                    status_signal.set(String::from(""));
                }
            }
        } else if !oauth::is_auto_launch_disabled(&search) {
            status_signal.set(String::from("Redirecting to login provider..."));

            if !oauth::authorize().await {
                status_signal.set(String::from(""));
            }
        }
    });

    rsx! {
        div { class: "container",
            div { class: "login-panel",
                h1 { class: "section-title", "Sign in" }
                p { "{status_signal()}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| async move {
                        oauth::authorize().await;
                    },
                    "Continue with OAuth"
                }
            }
        }
    }
}
