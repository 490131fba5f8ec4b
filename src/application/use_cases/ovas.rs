use super::reporting::report_failure;
use super::version_scope::version_for_create;
use crate::application::dto::{CreateOvaRequest, ProductVersionRef, ProductVersionResponse};
use crate::marketplace::domain::ProductDeploymentFile;
use crate::ports::outbound::{ArtifactUploader, ProductRepository, ProgressReporter};
use crate::shared::error::MarketplaceError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

/// OvasUseCase - Lists OVAs and uploads new ones for a product version
///
/// The uploader is only needed by [`OvasUseCase::create`], so listing works
/// without any storage configuration.
///
/// # Type Parameters
/// * `R` - ProductRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct OvasUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> OvasUseCase<R, PR>
where
    R: ProductRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    pub fn list(&self, target: &ProductVersionRef) -> Result<ProductVersionResponse> {
        let (product, version) = report_failure(
            &self.progress_reporter,
            &format!("Fetching the OVAs of product \"{}\"", target.slug),
            self.repository
                .get_product_with_version(&target.slug, &target.version),
        )?;
        Ok(ProductVersionResponse::new(product, version))
    }

    /// Uploads the OVA, then appends it to the product's deployment files
    ///
    /// Checks run before the upload so that a bad request never leaves an
    /// orphaned object in storage. Existing OVAs are kept.
    pub fn create<U: ArtifactUploader>(
        &self,
        uploader: &U,
        request: &CreateOvaRequest,
    ) -> Result<ProductVersionResponse> {
        report_failure(
            &self.progress_reporter,
            &format!("Adding OVA {}", request.file.display()),
            self.upload_and_add(uploader, request),
        )
    }

    fn upload_and_add<U: ArtifactUploader>(
        &self,
        uploader: &U,
        request: &CreateOvaRequest,
    ) -> Result<ProductVersionResponse> {
        validate_regular_file(&request.file, "OVA file")?;

        let mut product = self.repository.get_product(&request.target.slug)?;
        let version = version_for_create(&product, &request.target.version)?;

        let org_id = product
            .org_id()
            .map(str::to_string)
            .ok_or_else(|| MarketplaceError::Validation {
                message: format!(
                    "product \"{}\" has no publisher organisation to upload files for",
                    product.slug()
                ),
            })?;

        self.progress_reporter
            .report(&format!("Uploading {}...", request.file.display()));
        let uploaded = uploader.upload(&request.bucket, &org_id, &request.file)?;

        let mut file = ProductDeploymentFile::uploaded(
            &version,
            uploaded.url,
            uploaded.hash_digest,
            uploaded.hash_algo,
        );
        if let Some(name) = request.file.file_name().and_then(|name| name.to_str()) {
            file.name = Some(name.to_string());
        }
        product.add_deployment_file(file);

        self.progress_reporter.report(&format!(
            "Adding OVA to product \"{}\" {}...",
            product.slug(),
            version
        ));
        let updated = self.repository.put_product(&product, false)?;
        self.progress_reporter.report_completion("OVA added");

        Ok(ProductVersionResponse::new(updated, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{
        product_with_versions, InMemoryRepository, RecordingReporter, RecordingUploader,
    };
    use crate::marketplace::domain::{Product, PublisherDetails};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    type TestUseCase = OvasUseCase<InMemoryRepository, RecordingReporter>;

    fn published_product() -> Product {
        let mut product = product_with_versions();
        product.publisher_details = Some(PublisherDetails {
            org_id: Some("org-123".to_string()),
            ..PublisherDetails::default()
        });
        product
    }

    fn use_case(product: Product) -> TestUseCase {
        OvasUseCase::new(
            InMemoryRepository::with(vec![product]),
            RecordingReporter::default(),
        )
    }

    fn ova_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("appliance.ova");
        fs::write(&path, "abc").unwrap();
        path
    }

    fn request(version: &str, file: PathBuf) -> CreateOvaRequest {
        CreateOvaRequest {
            target: ProductVersionRef::new("my-super-product", version),
            file,
            bucket: "marketplace-uploads".to_string(),
        }
    }

    #[test]
    fn test_create_uploads_and_appends() {
        let dir = TempDir::new().unwrap();
        let file = ova_file(&dir);
        let mut product = published_product();
        product.add_deployment_file(ProductDeploymentFile::uploaded(
            "1.2.3",
            "https://storage.example.com/old.ova",
            "old",
            "SHA1",
        ));
        let use_case = use_case(product);
        let uploader = RecordingUploader::default();

        let response = use_case
            .create(&uploader, &request("2.3.4", file.clone()))
            .unwrap();

        let calls = uploader.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("marketplace-uploads".to_string(), "org-123".to_string(), file));

        assert_eq!(response.product.deployment_files().len(), 2);
        let added = response.product.ovas_for_version("2.3.4");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name(), "appliance.ova");
        assert_eq!(
            added[0].hash_digest.as_deref(),
            Some("a9993e364706816aba3e25717850c26c9cd0d89d")
        );
        assert_eq!(added[0].hash_algo.as_deref(), Some("SHA1"));
        assert_eq!(
            added[0].url(),
            "https://storage.example.com/marketplace-uploads/org-123/file.ova"
        );

        let (_, is_version_update) = use_case.repository.last_put();
        assert!(!is_version_update);
    }

    #[test]
    fn test_create_missing_version_uploads_nothing() {
        let dir = TempDir::new().unwrap();
        let use_case = use_case(published_product());
        let uploader = RecordingUploader::default();

        let err = use_case
            .create(&uploader, &request("9.9.9", ova_file(&dir)))
            .unwrap_err();

        assert!(err.to_string().contains("please add it first"));
        assert!(uploader.calls.borrow().is_empty());
        assert_eq!(use_case.repository.put_count(), 0);
    }

    #[test]
    fn test_create_missing_file_contacts_nothing() {
        let use_case = use_case(published_product());
        let uploader = RecordingUploader::default();

        let err = use_case
            .create(
                &uploader,
                &request("1.2.3", PathBuf::from("/nonexistent/appliance.ova")),
            )
            .unwrap_err();

        assert!(err.to_string().contains("OVA file"));
        assert!(uploader.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_without_publisher_org() {
        let dir = TempDir::new().unwrap();
        let use_case = use_case(product_with_versions());

        let err = use_case
            .create(&RecordingUploader::default(), &request("1.2.3", ova_file(&dir)))
            .unwrap_err();

        assert!(err.to_string().contains("no publisher organisation"));
        assert_eq!(use_case.repository.put_count(), 0);
    }

    #[test]
    fn test_create_upload_failure_skips_put() {
        let dir = TempDir::new().unwrap();
        let use_case = use_case(published_product());
        let uploader = RecordingUploader {
            fail: true,
            ..RecordingUploader::default()
        };

        let err = use_case
            .create(&uploader, &request("1.2.3", ova_file(&dir)))
            .unwrap_err();

        assert!(err.to_string().contains("storage unavailable"));
        assert_eq!(use_case.repository.put_count(), 0);
        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages
            .last()
            .unwrap()
            .starts_with("error: ✗ Adding OVA"));
    }

    #[test]
    fn test_list_latest() {
        let use_case = use_case(published_product());
        let response = use_case
            .list(&ProductVersionRef::new("my-super-product", "latest"))
            .unwrap();
        assert_eq!(response.version, "2.3.4");
    }
}
