use crate::shared::Result;
use std::path::Path;

/// Location and content hash of an uploaded artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub url: String,
    pub hash_digest: String,
    pub hash_algo: String,
}

/// ArtifactUploader port for placing large artifacts (OVAs) in object storage
///
/// An upload is all-or-nothing from the caller's point of view. If the
/// product update that follows fails, the uploaded object is left behind.
pub trait ArtifactUploader {
    /// Uploads `file` into `bucket` under `prefix`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the storage service
    /// refuses it
    fn upload(&self, bucket: &str, prefix: &str, file: &Path) -> Result<UploadedFile>;
}
