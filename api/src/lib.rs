use std::cell::RefCell;

pub mod asset;
pub mod auth;
pub mod job;
pub mod person;
pub mod share;
pub mod user;

pub const DEFAULT_BASE_URL: &str = "/lightbox/api";

// client defaults
//
// the webapp runs on a single-threaded wasm runtime, so the defaults are plain
// thread-local state with a setter called at most once during startup.  every
// endpoint call and asset url is prefixed with the base url.
thread_local! {
    static BASE_URL: RefCell<String> = RefCell::new(String::from(DEFAULT_BASE_URL));
}

pub fn set_base_url(url: impl Into<String>) {
    BASE_URL.with(|cell| *cell.borrow_mut() = url.into());
}

pub fn base_url() -> String {
    BASE_URL.with(|cell| cell.borrow().clone())
}

#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste!{
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(
                    format!("{}/{}", $crate::base_url(), stringify!([<$name:camel>])).as_str(),
                )
                .json(&req.clone())?
                .send()
                .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_overrides() {
        assert_eq!(base_url(), DEFAULT_BASE_URL);

        set_base_url("https://photos.example.com/api");
        assert_eq!(base_url(), "https://photos.example.com/api");
    }
}
