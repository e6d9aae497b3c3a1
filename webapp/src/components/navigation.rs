use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::link::is_shared_link;
use crate::common::notify::NotificationTray;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    // anonymous share viewers get no app chrome beyond the logo; the key
    // sticks for the whole session, so the check covers later navigation too
    let current_path: Route = use_route();
    let shared_view = matches!(current_path, Route::SharedLinkView { .. }) || is_shared_link();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, style: "display: flex; align-items: center;",
                        img {
                            src: "/lightbox/app/assets/header.svg",
                            alt: "Lightbox",
                            style: "height: 32px; margin-right: 8px;",
                        }
                        span { style: "font-weight: 600; font-size: 1.25rem;", "Lightbox" }
                    }
                }

                if !shared_view {
                    nav { class: "nav-links",
                        NavBarButton {
                            name: "Jobs".to_owned(),
                            target: Route::Jobs {},
                        }
                        NavBarButton {
                            name: "Profile".to_owned(),
                            target: Route::Profile {},
                        }
                        NavBarButton {
                            name: "Sign in".to_owned(),
                            target: Route::Login {},
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        NotificationTray {}
        Outlet::<Route> {}
    }
}
