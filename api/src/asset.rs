use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::job::AssetJobName;

// structs and types

pub type AssetUuid = String;

// encodings the server can produce for thumbnails; the display form matches
// the format query parameter on thumbnail urls
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ThumbnailFormat {
    Jpeg,
    Webp,
}

impl Display for ThumbnailFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Webp => write!(f, "WEBP"),
        }
    }
}

// messages

// queue a maintenance job for a set of assets
endpoint!(RunAssetJob);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunAssetJobReq {
    pub asset_uuids: Vec<AssetUuid>,
    pub job: AssetJobName,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunAssetJobResp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_format_wire_form() {
        assert_eq!(ThumbnailFormat::Jpeg.to_string(), "JPEG");
        assert_eq!(ThumbnailFormat::Webp.to_string(), "WEBP");
    }
}
