use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::user::User;

// messages

// ask the server for the identity provider's authorization url; the browser is
// then navigated there and eventually returns to redirect_uri with the
// callback query attached
endpoint!(StartOauth);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StartOauthReq {
    pub redirect_uri: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StartOauthResp {
    pub url: String,
}

// complete a login by forwarding the full callback url back to the server
endpoint!(FinishOauth);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinishOauthReq {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FinishOauthResp {
    pub user: User,
}

// attach an oauth identity to an account that is already logged in
endpoint!(LinkOauthAccount);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinkOauthAccountReq {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinkOauthAccountResp {
    pub user: User,
}

// detach the oauth identity, leaving password login intact
endpoint!(UnlinkOauthAccount);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UnlinkOauthAccountReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UnlinkOauthAccountResp {
    pub user: User,
}
