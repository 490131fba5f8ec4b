use mkpcli::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ArtifactUploader that records uploads without touching the network
#[derive(Default, Clone)]
pub struct MockUploader {
    pub uploads: Arc<Mutex<Vec<(String, String, PathBuf)>>>,
}

impl MockUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

impl ArtifactUploader for MockUploader {
    fn upload(&self, bucket: &str, prefix: &str, file: &Path) -> Result<UploadedFile> {
        self.uploads
            .lock()
            .unwrap()
            .push((bucket.to_string(), prefix.to_string(), file.to_path_buf()));

        let name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file");
        Ok(UploadedFile {
            url: format!("https://storage.example.com/{}/{}/{}", bucket, prefix, name),
            hash_digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_string(),
            hash_algo: "SHA1".to_string(),
        })
    }
}
