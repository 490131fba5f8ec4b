use super::reporting::report_failure;
use crate::application::dto::ListProductsRequest;
use crate::marketplace::domain::Product;
use crate::ports::outbound::{ProductRepository, ProgressReporter};
use crate::shared::Result;

/// ProductsUseCase - Lists and fetches marketplace products
///
/// # Type Parameters
/// * `R` - ProductRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ProductsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ProductsUseCase<R, PR>
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

    /// Fetches every page of the product listing
    pub fn list(&self, request: &ListProductsRequest) -> Result<Vec<Product>> {
        report_failure(
            &self.progress_reporter,
            "Fetching products",
            self.fetch_all(request),
        )
    }

    pub fn get(&self, slug: &str) -> Result<Product> {
        self.progress_reporter
            .report(&format!("Fetching product \"{}\"...", slug));
        report_failure(
            &self.progress_reporter,
            &format!("Fetching product \"{}\"", slug),
            self.repository.get_product(slug),
        )
    }

    fn fetch_all(&self, request: &ListProductsRequest) -> Result<Vec<Product>> {
        if request.search_term.is_empty() {
            self.progress_reporter.report("Fetching products...");
        } else {
            self.progress_reporter.report(&format!(
                "Fetching products matching \"{}\"...",
                request.search_term
            ));
        }

        let on_page = |fetched: usize, expected: usize| {
            self.progress_reporter
                .report_progress(fetched, expected, None);
        };
        let products = self.repository.list_products_with_progress(
            request.all_orgs,
            &request.search_term,
            &on_page,
        )?;

        self.progress_reporter
            .report_completion(&format!("Fetched {} product(s)", products.len()));
        Ok(products)
    }
}
