use std::future::Future;

use chrono::{Local, TimeZone};
use gloo_console::error as console_error;
use gloo_timers::future::TimeoutFuture;

pub mod clipboard;
pub mod jobs;
pub mod link;
pub mod locale;
pub mod notify;
pub mod oauth;
pub mod storage;
pub mod style;

pub fn local_time(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.to_string(),
        None => String::from("error parsing timestamp"),
    }
}

// resolve after roughly ms; the timer itself cannot fail
pub async fn async_timeout(ms: u32) {
    TimeoutFuture::new(ms).await
}

// fire-and-forget: run the future to completion and report a rejection to the
// console diagnostic channel instead of dropping it silently
pub fn spawn_logged<F>(fut: F)
where
    F: Future<Output = anyhow::Result<()>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = fut.await {
            console_error!(format!("unhandled task error: {err}"));
        }
    });
}
