use dioxus::prelude::*;

use api::job::{JobName, RunJobReq, run_job};

use crate::common::{
    jobs::job_name,
    notify::{NotificationType, handle_error, notify},
};

#[component]
pub fn Jobs() -> Element {
    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "section-title", "Background Jobs" }
                p { "Queue maintenance work on the server" }
            }

            div { class: "job-table",
                for job in JobName::ALL {
                    div { class: "job-row",
                        span { class: "job-name", {job_name(job)} }
                        button {
                            class: "btn btn-sm btn-primary",
                            onclick: move |_| async move {
                                match run_job(&RunJobReq { job, force: false }).await {
                                    Ok(_) => notify(
                                        format!("{} queued", job_name(job)),
                                        NotificationType::Info,
                                    ),
                                    Err(err) => handle_error(&err, "Unable to start job"),
                                }
                            },
                            "Run"
                        }
                    }
                }
            }
        }
    }
}
