use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "hero-title", "Lightbox" }
                        p { class: "hero-subtitle", "Your photos, organized and shareable" }
                        div { class: "hero-actions",
                            Link {
                                to: Route::Jobs {},
                                class: "btn btn-primary btn-lg",
                                "Manage Jobs"
                            }
                            Link {
                                to: Route::Profile {},
                                class: "btn btn-secondary btn-lg",
                                "Your Profile"
                            }
                        }
                    }
                }
            }
        }
    }
}
