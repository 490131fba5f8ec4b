use super::reporting::report_failure;
use super::version_scope::version_for_create;
use crate::application::dto::{CreateChartRequest, ProductVersionRef, ProductVersionResponse};
use crate::marketplace::domain::{ChartVersion, Repo, DEPLOYMENT_TYPE_HELM};
use crate::ports::outbound::{ProductRepository, ProgressReporter};
use crate::shared::Result;

/// ChartsUseCase - Lists and attaches Helm charts for a product version
pub struct ChartsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ChartsUseCase<R, PR>
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
            &format!("Fetching the charts of product \"{}\"", target.slug),
            self.repository
                .get_product_with_version(&target.slug, &target.version),
        )?;
        Ok(ProductVersionResponse::new(product, version))
    }

    /// Adds an externally hosted chart to the version and replaces the product
    ///
    /// The version must already exist; nothing is sent otherwise.
    pub fn create(&self, request: &CreateChartRequest) -> Result<ProductVersionResponse> {
        report_failure(
            &self.progress_reporter,
            &format!("Adding chart {}", request.chart_name),
            self.add_chart(request),
        )
    }

    fn add_chart(&self, request: &CreateChartRequest) -> Result<ProductVersionResponse> {
        let mut product = self.repository.get_product(&request.target.slug)?;
        let version = version_for_create(&product, &request.target.version)?;

        product.add_chart(ChartVersion::external(
            &version,
            &request.chart_name,
            &request.chart_version,
            &request.chart_url,
            Repo::new(&request.repository_name, &request.repository_url),
        ));
        product.add_deployment_type(DEPLOYMENT_TYPE_HELM);

        self.progress_reporter.report(&format!(
            "Adding chart {} {} to product \"{}\" {}...",
            request.chart_name,
            request.chart_version,
            product.slug(),
            version
        ));
        let updated = self.repository.put_product(&product, false)?;
        self.progress_reporter.report_completion("Chart added");

        Ok(ProductVersionResponse::new(updated, version))
    }
}
