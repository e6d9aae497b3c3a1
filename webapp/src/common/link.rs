use std::cell::RefCell;

use api::asset::{AssetUuid, ThumbnailFormat};
use api::person::PersonUuid;
use api::user::UserUuid;

// shared-link access key
//
// when the app is opened through /share/{key}, every asset url must carry the
// key so the server can authorize the unauthenticated viewer.  the key is set
// once when the share page mounts and read by all of the url builders below;
// the runtime is single-threaded, so a thread-local is all the state we need.
thread_local! {
    static SHARE_KEY: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn set_share_key(key: impl Into<String>) {
    SHARE_KEY.with(|cell| *cell.borrow_mut() = Some(key.into()));
}

pub fn share_key() -> Option<String> {
    SHARE_KEY.with(|cell| cell.borrow().clone())
}

pub fn is_shared_link() -> bool {
    share_key().is_some()
}

// parameters with a None value are dropped rather than serialized as "null"
fn create_url(path: &str, parameters: &[(&str, Option<String>)]) -> String {
    let query = parameters
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|value| format!("{name}={value}")))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        format!("{}{}", api::base_url(), path)
    } else {
        format!("{}{}?{}", api::base_url(), path, query)
    }
}

pub fn asset_file_link(asset_uuid: &AssetUuid, is_web: bool, is_thumb: bool) -> String {
    create_url(
        &format!("/asset/file/{asset_uuid}"),
        &[
            ("isThumb", Some(is_thumb.to_string())),
            ("isWeb", Some(is_web.to_string())),
            ("key", share_key()),
        ],
    )
}

pub fn asset_thumbnail_link(asset_uuid: &AssetUuid, format: Option<ThumbnailFormat>) -> String {
    create_url(
        &format!("/asset/thumbnail/{asset_uuid}"),
        &[
            ("format", format.map(|format| format.to_string())),
            ("key", share_key()),
        ],
    )
}

pub fn profile_image_link(user_uuid: &UserUuid) -> String {
    create_url(
        &format!("/user/profile-image/{user_uuid}"),
        &[("key", share_key())],
    )
}

pub fn person_thumbnail_link(person_uuid: &PersonUuid) -> String {
    create_url(
        &format!("/person/{person_uuid}/thumbnail"),
        &[("key", share_key())],
    )
}

// the copyable form of a share url, preferring the server's configured
// external domain over wherever the viewer happens to be browsing from
pub fn shared_link_url(external_domain: &str, key: &str) -> String {
    let base = if external_domain.is_empty() {
        current_origin()
    } else {
        external_domain.to_string()
    };

    join_share_path(&base, key)
}

fn join_share_path(base: &str, key: &str) -> String {
    if base.ends_with('/') {
        format!("{base}share/{key}")
    } else {
        format!("{base}/share/{key}")
    }
}

fn current_origin() -> String {
    web_sys::window()
        .expect("no global window exists")
        .location()
        .origin()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // the page session never clears the key, but tests sharing a thread must
    fn reset_share_key() {
        SHARE_KEY.with(|cell| *cell.borrow_mut() = None);
    }

    #[test]
    fn asset_file_link_without_key() {
        reset_share_key();

        assert_eq!(
            asset_file_link(&String::from("a1"), true, false),
            "/lightbox/api/asset/file/a1?isThumb=false&isWeb=true"
        );
    }

    #[test]
    fn asset_file_link_with_key() {
        reset_share_key();
        set_share_key("abc");

        assert_eq!(
            asset_file_link(&String::from("a1"), false, true),
            "/lightbox/api/asset/file/a1?isThumb=true&isWeb=false&key=abc"
        );
    }

    #[test]
    fn thumbnail_link_formats() {
        reset_share_key();

        assert_eq!(
            asset_thumbnail_link(&String::from("a2"), None),
            "/lightbox/api/asset/thumbnail/a2"
        );
        assert_eq!(
            asset_thumbnail_link(&String::from("a2"), Some(ThumbnailFormat::Webp)),
            "/lightbox/api/asset/thumbnail/a2?format=WEBP"
        );

        set_share_key("xyz");

        assert_eq!(
            asset_thumbnail_link(&String::from("a2"), None),
            "/lightbox/api/asset/thumbnail/a2?key=xyz"
        );
    }

    #[test]
    fn profile_and_person_links_carry_key_iff_set() {
        reset_share_key();

        assert_eq!(
            profile_image_link(&String::from("u1")),
            "/lightbox/api/user/profile-image/u1"
        );
        assert_eq!(
            person_thumbnail_link(&String::from("p1")),
            "/lightbox/api/person/p1/thumbnail"
        );

        set_share_key("tok");

        assert_eq!(
            profile_image_link(&String::from("u1")),
            "/lightbox/api/user/profile-image/u1?key=tok"
        );
        assert_eq!(
            person_thumbnail_link(&String::from("p1")),
            "/lightbox/api/person/p1/thumbnail?key=tok"
        );
    }

    #[test]
    fn share_key_state() {
        reset_share_key();

        assert!(!is_shared_link());
        assert_eq!(share_key(), None);

        set_share_key("abc");

        assert!(is_shared_link());
        assert_eq!(share_key(), Some(String::from("abc")));
    }

    #[test]
    fn shared_link_url_joins_with_one_slash() {
        assert_eq!(
            shared_link_url("https://x.com", "abc"),
            "https://x.com/share/abc"
        );
        assert_eq!(
            shared_link_url("https://x.com/", "abc"),
            "https://x.com/share/abc"
        );
    }

    #[test]
    fn share_path_against_bare_origin() {
        // the empty-domain case resolves the browser origin, which only
        // exists under wasm; the join itself is checked here
        assert_eq!(
            join_share_path("https://photos.example.com", "abc"),
            "https://photos.example.com/share/abc"
        );
    }
}
