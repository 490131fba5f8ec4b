use super::reporting::report_failure;
use crate::application::dto::CreateVersionRequest;
use crate::marketplace::domain::{Product, Version};
use crate::ports::outbound::{ProductRepository, ProgressReporter};
use crate::shared::error::MarketplaceError;
use crate::shared::Result;

/// ProductVersionsUseCase - Lists a product's versions and adds new ones
pub struct ProductVersionsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ProductVersionsUseCase<R, PR>
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

    pub fn list(&self, slug: &str) -> Result<Product> {
        report_failure(
            &self.progress_reporter,
            &format!("Fetching the versions of product \"{}\"", slug),
            self.repository.get_product(slug),
        )
    }

    /// Appends a PENDING version and submits it as a version update
    pub fn create(&self, request: &CreateVersionRequest) -> Result<Product> {
        report_failure(
            &self.progress_reporter,
            &format!("Adding version {}", request.version),
            self.add_version(request),
        )
    }

    fn add_version(&self, request: &CreateVersionRequest) -> Result<Product> {
        let mut product = self.repository.get_product(&request.slug)?;

        if !product.add_version(Version::pending(&request.version, &request.details)) {
            return Err(MarketplaceError::VersionAlreadyExists {
                slug: request.slug.clone(),
                version: request.version.clone(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "Adding version {} to product \"{}\"...",
            request.version, request.slug
        ));
        let updated = self.repository.put_product(&product, true)?;
        self.progress_reporter
            .report_completion(&format!("Version {} added", request.version));
        Ok(updated)
    }
}
