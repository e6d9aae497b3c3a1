use dioxus::prelude::*;

use api::share::{GetSharedLinkReq, get_shared_link};

use crate::common::{
    clipboard::copy_to_clipboard,
    link::{set_share_key, shared_link_url},
    local_time, spawn_logged,
};
use crate::components::asset_card::AssetCard;

#[component]
pub fn SharedLinkView(share_key: String) -> Element {
    // every asset url rendered under this page must carry the access key, so
    // it is stored before the first fetch resolves
    let hook_key = share_key.clone();
    use_hook(move || set_share_key(hook_key));

    let resource_key = share_key.clone();
    let link_future = use_resource(move || {
        let key = resource_key.clone();
        async move { get_shared_link(&GetSharedLinkReq { key }).await }
    });

    match &*link_future.read() {
        Some(Ok(resp)) => {
            let shared_link = resp.shared_link.clone();
            let external_domain = resp.external_domain.clone();

            let title = shared_link
                .description
                .clone()
                .unwrap_or_else(|| String::from("Shared photos"));
            let expiry = shared_link.expires_at.map(local_time);
            let copy_url = shared_link_url(&external_domain, &shared_link.key);

            rsx! {
                div { class: "container",
                    div { class: "page-header",
                        h1 { class: "section-title", "{title}" }
                        match &expiry {
                            Some(expiry) => rsx! {
                                p { "Link expires {expiry}" }
                            },
                            None => rsx! {
                                p { "{shared_link.asset_uuids.len()} items" }
                            },
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                let url = copy_url.clone();
                                spawn_logged(async move {
                                    copy_to_clipboard(&url).await;
                                    Ok(())
                                });
                            },
                            "Copy link"
                        }
                    }

                    if shared_link.asset_uuids.is_empty() {
                        div { class: "empty-state",
                            p { "This link does not contain any photos." }
                        }
                    } else {
                        div { class: "asset-grid",
                            for asset_uuid in shared_link.asset_uuids.iter() {
                                AssetCard {
                                    key: "{asset_uuid}",
                                    asset_uuid: asset_uuid.clone(),
                                    allow_download: shared_link.allow_download,
                                }
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
