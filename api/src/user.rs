use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type UserUuid = String;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub name: String,
    // empty when no oauth identity is linked
    pub oauth_id: String,
    pub has_profile_image: bool,
}

// messages

// fetch the user that owns the current session
endpoint!(GetCurrentUser);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetCurrentUserReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetCurrentUserResp {
    pub user: User,
}
