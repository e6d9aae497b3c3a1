use api::job::{AssetJobName, JobName};

// human-readable queue names for the admin jobs page
pub fn job_name(job: JobName) -> &'static str {
    match job {
        JobName::ThumbnailGeneration => "Generate Thumbnails",
        JobName::MetadataExtraction => "Extract Metadata",
        JobName::Sidecar => "Sidecar Metadata",
        JobName::SmartSearch => "Smart Search",
        JobName::FaceDetection => "Face Detection",
        JobName::FacialRecognition => "Facial Recognition",
        JobName::VideoConversion => "Transcode Videos",
        JobName::StorageTemplateMigration => "Storage Template Migration",
        JobName::Migration => "Migration",
        JobName::BackgroundTask => "Background Tasks",
        JobName::Search => "Search",
        JobName::Library => "Library",
    }
}

pub fn asset_job_name(job: AssetJobName) -> &'static str {
    match job {
        AssetJobName::RefreshMetadata => "Refresh metadata",
        AssetJobName::RegenerateThumbnail => "Refresh thumbnails",
        AssetJobName::TranscodeVideo => "Refresh encoded videos",
    }
}

// toast text shown once a per-asset job has been queued
pub fn asset_job_message(job: AssetJobName) -> &'static str {
    match job {
        AssetJobName::RefreshMetadata => "Refreshing metadata",
        AssetJobName::RegenerateThumbnail => "Regenerating thumbnails",
        AssetJobName::TranscodeVideo => "Refreshing encoded video",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_names_are_non_empty() {
        for job in JobName::ALL {
            assert!(!job_name(job).is_empty(), "missing name for {job}");
        }
    }

    #[test]
    fn asset_job_strings_are_non_empty() {
        for job in AssetJobName::ALL {
            assert!(!asset_job_name(job).is_empty(), "missing name for {job}");
            assert!(
                !asset_job_message(job).is_empty(),
                "missing message for {job}"
            );
        }
    }

    #[test]
    fn queue_display_wording() {
        assert_eq!(job_name(JobName::ThumbnailGeneration), "Generate Thumbnails");
        assert_eq!(asset_job_name(AssetJobName::RegenerateThumbnail), "Refresh thumbnails");
        assert_eq!(
            asset_job_message(AssetJobName::RegenerateThumbnail),
            "Regenerating thumbnails"
        );
    }
}
