use crate::marketplace::domain::HASH_ALGO_SHA1;
use crate::ports::outbound::{ArtifactUploader, UploadedFile};
use crate::shared::error::MarketplaceError;
use crate::shared::security::{validate_path_segment, validate_regular_file};
use crate::shared::Result;
use reqwest::blocking::{Body, Client};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

/// ObjectStoreUploader adapter storing artifacts through an HTTP object store
///
/// Objects are written with a single authenticated PUT to
/// `<endpoint>/<bucket>/<prefix>/<uuid>/<file name>`. The file is opened once,
/// hashed in a streaming pass, rewound and streamed again as the request
/// body, so OVAs of any size never have to fit in memory.
pub struct ObjectStoreUploader {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl ObjectStoreUploader {
    const TIMEOUT_SECONDS: u64 = 60 * 60;
    const READ_BUFFER_SIZE: usize = 64 * 1024;

    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mkpcli/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        })
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), bucket, key)
    }

    fn upload_failed(path: &Path, details: String) -> anyhow::Error {
        MarketplaceError::UploadFailed {
            path: path.to_path_buf(),
            details,
        }
        .into()
    }
}

/// An open file whose SHA-1 digest has been computed and whose read position
/// is back at the start, ready to be streamed as a request body.
///
/// Hashing and streaming go through this one handle; a file replaced on disk
/// in between is never reopened.
struct HashedFile {
    file: File,
    len: u64,
    digest: String,
}

impl HashedFile {
    fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ObjectStoreUploader::upload_failed(path, format!("cannot open file: {}", e)))?;
        let (digest, len) = hash_and_rewind(&mut file)
            .map_err(|e| ObjectStoreUploader::upload_failed(path, format!("cannot read file: {}", e)))?;
        let hashed = Self { file, len, digest };
        hashed.ensure_unchanged(path)?;
        Ok(hashed)
    }

    /// Request body streaming exactly the hashed number of bytes.
    ///
    /// The body reads through a duplicate of the handle, which shares its
    /// read position, so it must be built only once.
    fn body(&self, path: &Path) -> Result<Body> {
        let handle = self
            .file
            .try_clone()
            .map_err(|e| ObjectStoreUploader::upload_failed(path, format!("cannot open file: {}", e)))?;
        Ok(Body::sized(handle.take(self.len), self.len))
    }

    /// Fails when the file length no longer matches the hashed byte count
    fn ensure_unchanged(&self, path: &Path) -> Result<()> {
        let current = self
            .file
            .metadata()
            .map_err(|e| ObjectStoreUploader::upload_failed(path, format!("cannot read file: {}", e)))?
            .len();
        if current != self.len {
            return Err(ObjectStoreUploader::upload_failed(
                path,
                format!(
                    "file changed while uploading: hashed {} bytes, now {} bytes",
                    self.len, current
                ),
            ));
        }
        Ok(())
    }
}

/// Hashes the rest of `file`, then seeks back to its start.
///
/// Returns the hex-encoded SHA-1 digest and the number of bytes hashed.
fn hash_and_rewind(file: &mut File) -> std::io::Result<(String, u64)> {
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; ObjectStoreUploader::READ_BUFFER_SIZE];
    let mut len = 0u64;

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        len += read as u64;
    }

    file.seek(SeekFrom::Start(0))?;
    Ok((format!("{:x}", hasher.finalize()), len))
}

impl ArtifactUploader for ObjectStoreUploader {
    fn upload(&self, bucket: &str, prefix: &str, file: &Path) -> Result<UploadedFile> {
        validate_regular_file(file, "upload file")?;
        validate_path_segment(bucket, "Storage bucket")?;
        validate_path_segment(prefix, "Upload prefix")?;

        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Self::upload_failed(file, "file name is not valid UTF-8".to_string()))?;

        let hashed = HashedFile::open(file)?;

        let key = format!(
            "{}/{}/{}",
            prefix,
            Uuid::new_v4(),
            urlencoding::encode(file_name)
        );
        let url = self.object_url(bucket, &key);

        let body = hashed.body(file)?;

        let response = self
            .client
            .put(&url)
            .header("csp-auth-token", self.api_token.as_str())
            .header("Content-Type", "application/octet-stream")
            .body(body)
            .send()
            .map_err(|e| Self::upload_failed(file, e.to_string()))?;

        let status = response.status();
        let message = response.text().unwrap_or_default();
        if !status.is_success() {
            return Err(Self::upload_failed(
                file,
                format!(
                    "storage service returned status code {}: {}",
                    status.as_u16(),
                    message.trim()
                ),
            ));
        }

        hashed.ensure_unchanged(file)?;

        Ok(UploadedFile {
            url,
            hash_digest: hashed.digest,
            hash_algo: HASH_ALGO_SHA1.to_string(),
        })
    }
}
