use anyhow::Result;

use api::auth::{
    FinishOauthReq, FinishOauthResp, LinkOauthAccountReq, StartOauthReq, UnlinkOauthAccountReq,
    finish_oauth, link_oauth_account, start_oauth, unlink_oauth_account,
};
use api::user::User;

use crate::common::notify::handle_error;

// query markers that indicate the identity provider has redirected back
pub fn is_callback(search: &str) -> bool {
    search.contains("code=") || search.contains("error=")
}

// flags that suppress the automatic redirect on the login page, so that a
// local-password user can still reach the form
pub fn is_auto_launch_disabled(search: &str) -> bool {
    ["autoLaunch=0", "password=1", "password=true"]
        .iter()
        .any(|marker| search.contains(marker))
}

// the provider needs to know where to send the callback: the current page,
// minus whatever query it was opened with
pub fn redirect_uri(href: &str) -> String {
    match href.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => href.to_string(),
    }
}

// kick off the handshake by navigating the browser to the provider
//
// failures surface through the notification collaborator; the caller only
// learns whether a navigation was started
pub async fn authorize() -> bool {
    let attempt = async {
        let href = current_href()?;
        let resp = start_oauth(&StartOauthReq {
            redirect_uri: redirect_uri(&href),
        })
        .await?;

        set_location(&resp.url)
    };

    match attempt.await {
        Ok(()) => true,
        Err(err) => {
            handle_error(&err, "Unable to login with OAuth");
            false
        }
    }
}

// complete the login by handing the full callback url to the server
pub async fn login() -> Result<FinishOauthResp> {
    finish_oauth(&FinishOauthReq {
        url: current_href()?,
    })
    .await
}

pub async fn link_account() -> Result<User> {
    let resp = link_oauth_account(&LinkOauthAccountReq {
        url: current_href()?,
    })
    .await?;

    Ok(resp.user)
}

pub async fn unlink_account() -> Result<User> {
    let resp = unlink_oauth_account(&UnlinkOauthAccountReq {}).await?;

    Ok(resp.user)
}

pub fn current_search() -> String {
    web_sys::window()
        .expect("no global window exists")
        .location()
        .search()
        .unwrap_or_default()
}

fn current_href() -> Result<String> {
    web_sys::window()
        .expect("no global window exists")
        .location()
        .href()
        .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
}

fn set_location(url: &str) -> Result<()> {
    web_sys::window()
        .expect("no global window exists")
        .location()
        .set_href(url)
        .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_detection() {
        assert!(is_callback("?code=12345"));
        assert!(is_callback("?error=access_denied"));
        assert!(is_callback("?state=x&code=12345"));
        assert!(!is_callback(""));
        assert!(!is_callback("?autoLaunch=0"));
    }

    #[test]
    fn auto_launch_markers() {
        assert!(is_auto_launch_disabled("?autoLaunch=0"));
        assert!(is_auto_launch_disabled("?password=1"));
        assert!(is_auto_launch_disabled("?password=true"));
        assert!(is_auto_launch_disabled("?foo=bar&password=true"));
        assert!(!is_auto_launch_disabled(""));
        assert!(!is_auto_launch_disabled("?autoLaunch=1"));
    }

    #[test]
    fn redirect_uri_strips_query() {
        assert_eq!(
            redirect_uri("https://x.com/login?code=123&state=abc"),
            "https://x.com/login"
        );
        assert_eq!(redirect_uri("https://x.com/login"), "https://x.com/login");
    }
}
