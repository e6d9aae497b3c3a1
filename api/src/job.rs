use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

// the background queues that the server runs; the variant names match the
// queue identifiers on the wire
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum JobName {
    ThumbnailGeneration,
    MetadataExtraction,
    Sidecar,
    SmartSearch,
    FaceDetection,
    FacialRecognition,
    VideoConversion,
    StorageTemplateMigration,
    Migration,
    BackgroundTask,
    Search,
    Library,
}

impl JobName {
    pub const ALL: [JobName; 12] = [
        JobName::ThumbnailGeneration,
        JobName::MetadataExtraction,
        JobName::Sidecar,
        JobName::SmartSearch,
        JobName::FaceDetection,
        JobName::FacialRecognition,
        JobName::VideoConversion,
        JobName::StorageTemplateMigration,
        JobName::Migration,
        JobName::BackgroundTask,
        JobName::Search,
        JobName::Library,
    ];
}

// per-asset maintenance jobs, queued from the asset action menu
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AssetJobName {
    RefreshMetadata,
    RegenerateThumbnail,
    TranscodeVideo,
}

impl AssetJobName {
    pub const ALL: [AssetJobName; 3] = [
        AssetJobName::RefreshMetadata,
        AssetJobName::RegenerateThumbnail,
        AssetJobName::TranscodeVideo,
    ];
}

// messages

// start one of the background queues
endpoint!(RunJob);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunJobReq {
    pub job: JobName,
    pub force: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunJobResp {}

// display impls so that we can output these cleanly to logs
impl Display for JobName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for AssetJobName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
