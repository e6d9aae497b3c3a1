use dioxus::prelude::*;

use api::asset::{AssetUuid, RunAssetJobReq, ThumbnailFormat, run_asset_job};
use api::job::AssetJobName;

use crate::common::{
    jobs::{asset_job_message, asset_job_name},
    link::{asset_file_link, asset_thumbnail_link},
    notify::{NotificationType, handle_error, notify},
};

#[derive(Clone, PartialEq, Props)]
pub struct AssetCardProps {
    pub asset_uuid: AssetUuid,
    #[props(default)]
    pub allow_download: bool,
}

#[component]
pub fn AssetCard(props: AssetCardProps) -> Element {
    let asset_uuid = props.asset_uuid;

    let mut menu_open = use_signal(|| false);

    rsx! {
        div { class: "asset-card",
            img {
                class: "asset-thumb",
                src: asset_thumbnail_link(&asset_uuid, Some(ThumbnailFormat::Webp)),
            }
            div { class: "asset-actions",
                if props.allow_download {
                    button {
                        class: "btn btn-sm btn-secondary",
                        onclick: {
                            let asset_uuid = asset_uuid.clone();
                            move |_| {
                                let link = asset_file_link(&asset_uuid, false, false);
                                let window = web_sys::window().expect("no global window exists");
                                let _ = window.open_with_url_and_target(&link, "_blank");
                            }
                        },
                        "Download"
                    }
                }
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| { menu_open.set(!menu_open()) },
                    "⋮"
                }
            }
            if menu_open() {
                div { class: "asset-menu",
                    for job in AssetJobName::ALL {
                        button {
                            class: "asset-menu-item",
                            onclick: {
                                let asset_uuid = asset_uuid.clone();
                                move |_| {
                                    let asset_uuid = asset_uuid.clone();
                                    menu_open.set(false);
                                    async move {
                                        match run_asset_job(&RunAssetJobReq {
                                            asset_uuids: vec![asset_uuid],
                                            job,
                                        })
                                        .await
                                        {
                                            Ok(_) => notify(
                                                asset_job_message(job),
                                                NotificationType::Info,
                                            ),
                                            Err(err) => {
                                                handle_error(&err, "Unable to queue asset job")
                                            }
                                        }
                                    }
                                }
                            },
                            {asset_job_name(job)}
                        }
                    }
                }
            }
        }
    }
}
