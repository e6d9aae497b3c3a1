use dioxus::prelude::*;

use api::user::{GetCurrentUserReq, get_current_user};

use crate::common::{
    link::profile_image_link,
    locale::{LOCALES, find_locale},
    notify::{NotificationType, handle_error, notify},
    oauth,
    storage::{set_local_storage, try_local_storage},
};

const LOCALE_STORAGE_KEY: &str = "locale";

#[component]
pub fn Profile() -> Element {
    let mut update_signal = use_signal(|| ());

    let user_future = use_resource(move || async move {
        update_signal();
        get_current_user(&GetCurrentUserReq {}).await
    });

    let mut locale_signal = use_signal::<String>(|| try_local_storage(LOCALE_STORAGE_KEY));

    // arriving here with callback markers means the provider redirect was
    // started from the link button below
    use_future(move || async move {
        let search = oauth::current_search();

        if oauth::is_callback(&search) {
            match oauth::link_account().await {
                Ok(_) => {
                    notify("OAuth account linked", NotificationType::Info);
                    update_signal.set(());
                }
                Err(err) => handle_error(&err, "Unable to link OAuth account"),
            }
        }
    });

    match &*user_future.read() {
        Some(Ok(resp)) => {
            let user = resp.user.clone();
            let oauth_linked = !user.oauth_id.is_empty();
            let initial = user.name.chars().next().map(String::from).unwrap_or_default();

            rsx! {
                div { class: "container",
                    div { class: "page-header",
                        h1 { class: "section-title", "Profile" }
                    }

                    div { class: "card profile-card",
                        if user.has_profile_image {
                            img { class: "profile-image", src: profile_image_link(&user.uuid) }
                        } else {
                            div { class: "profile-placeholder", "{initial}" }
                        }
                        div {
                            h2 { "{user.name}" }
                            p { "{user.email}" }
                        }
                    }

                    div { class: "card profile-section",
                        h2 { "Language" }
                        label { class: "form-label", r#for: "locale", "Display language" }
                        select {
                            id: "locale",
                            class: "form-select",
                            onchange: move |event| {
                                let code = event.value();
                                set_local_storage(LOCALE_STORAGE_KEY, code.clone());

                                let name = find_locale(Some(code.as_str()))
                                    .map(|locale| locale.name)
                                    .unwrap_or("browser default");
                                notify(format!("Language set to {name}"), NotificationType::Info);

                                locale_signal.set(code);
                            },
                            option {
                                value: "",
                                selected: locale_signal().is_empty(),
                                "Browser default"
                            }
                            for locale in LOCALES {
                                option {
                                    value: "{locale.code}",
                                    selected: locale_signal() == locale.code,
                                    "{locale.name}"
                                }
                            }
                        }
                    }

                    div { class: "card profile-section",
                        h2 { "OAuth" }
                        if oauth_linked {
                            p { "Your account is linked to an OAuth identity." }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| async move {
                                    match oauth::unlink_account().await {
                                        Ok(_) => {
                                            notify("OAuth account unlinked", NotificationType::Info);
                                            update_signal.set(());
                                        }
                                        Err(err) => {
                                            handle_error(&err, "Unable to unlink OAuth account")
                                        }
                                    }
                                },
                                "Unlink account"
                            }
                        } else {
                            p { "Link an OAuth identity to sign in without a password." }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| async move {
                                    oauth::authorize().await;
                                },
                                "Link account"
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "error-state",
                p { "Error: {err}" }
            }
        },
        None => rsx! {
            div { class: "loading-state",
                p { "Loading..." }
            }
        },
    }
}
