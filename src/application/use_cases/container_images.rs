use super::reporting::report_failure;
use super::version_scope::version_for_create;
use crate::application::dto::{
    CreateContainerImageRequest, ProductVersionRef, ProductVersionResponse,
};
use crate::marketplace::domain::DEPLOYMENT_TYPE_DOCKER;
use crate::ports::outbound::{ProductRepository, ProgressReporter};
use crate::shared::error::MarketplaceError;
use crate::shared::Result;

/// ContainerImagesUseCase - Lists and attaches container image references
pub struct ContainerImagesUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ContainerImagesUseCase<R, PR>
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
            &format!(
                "Fetching the container images of product \"{}\"",
                target.slug
            ),
            self.repository
                .get_product_with_version(&target.slug, &target.version),
        )?;
        Ok(ProductVersionResponse::new(product, version))
    }

    /// Adds an image tag to the version's container image list
    pub fn create(&self, request: &CreateContainerImageRequest) -> Result<ProductVersionResponse> {
        report_failure(
            &self.progress_reporter,
            &format!(
                "Adding container image {}:{}",
                request.image_repository, request.tag
            ),
            self.add_image(request),
        )
    }

    fn add_image(&self, request: &CreateContainerImageRequest) -> Result<ProductVersionResponse> {
        let mut product = self.repository.get_product(&request.target.slug)?;
        let version = version_for_create(&product, &request.target.version)?;

        let added = product.add_container_image(
            &version,
            &request.image_repository,
            &request.tag,
            request.tag_type,
            &request.deployment_instructions,
        );
        if !added {
            return Err(MarketplaceError::Validation {
                message: format!(
                    "product \"{}\" {} already has image {} with tag {}",
                    product.slug(),
                    version,
                    request.image_repository,
                    request.tag
                ),
            }
            .into());
        }
        product.add_deployment_type(DEPLOYMENT_TYPE_DOCKER);

        self.progress_reporter.report(&format!(
            "Adding {}:{} to product \"{}\" {}...",
            request.image_repository,
            request.tag,
            product.slug(),
            version
        ));
        let updated = self.repository.put_product(&product, false)?;
        self.progress_reporter.report_completion("Container image added");

        Ok(ProductVersionResponse::new(updated, version))
    }
}
