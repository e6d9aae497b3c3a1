use wasm_bindgen_futures::JsFuture;

use crate::common::notify::{NotificationType, handle_error, notify};

// write text to the system clipboard, reporting the outcome as a toast
//
// the clipboard api is only exposed in secure contexts, hence the hint in the
// failure message
pub async fn copy_to_clipboard(text: &str) {
    let window = web_sys::window().expect("no global window exists");
    let clipboard = window.navigator().clipboard();

    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => notify("Copied to clipboard!", NotificationType::Info),
        Err(err) => handle_error(
            &anyhow::Error::msg(format!("{err:?}")),
            "Cannot copy to clipboard, make sure you are accessing the page through https",
        ),
    }
}
