use serde::{Deserialize, Serialize};

use crate::asset::AssetUuid;
use crate::endpoint;

// structs and types

// a shared link grants unauthenticated access to a fixed set of assets; the
// key doubles as the access token appended to asset urls by the webapp
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SharedLink {
    pub key: String,
    pub description: Option<String>,
    pub asset_uuids: Vec<AssetUuid>,
    pub allow_download: bool,
    pub expires_at: Option<i64>,
}

// messages

// resolve a share key into the link contents
//
// external_domain is the server's configured public domain for building
// copyable urls, and may be empty when the admin has not set one
endpoint!(GetSharedLink);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetSharedLinkReq {
    pub key: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetSharedLinkResp {
    pub shared_link: SharedLink,
    pub external_domain: String,
}
