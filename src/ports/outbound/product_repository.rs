use crate::marketplace::domain::Product;
use crate::shared::error::MarketplaceError;
use crate::shared::Result;

/// ProductRepository port for reading and replacing marketplace products
///
/// Products are updated by read-modify-write: fetch the current document,
/// change only what is needed, and PUT the whole document back. There is no
/// merge or concurrency token on the server, so the last PUT wins.
pub trait ProductRepository {
    /// Fetches a product by slug
    ///
    /// # Errors
    /// - `ProductNotFound` when the marketplace answers 404
    /// - `RequestFailed` / `UnexpectedStatus` for transport failures or other statuses
    /// - `ParseFailed` when the body is not the expected envelope
    fn get_product(&self, slug: &str) -> Result<Product>;

    /// Lists products page by page, calling `on_page(fetched, expected_total)`
    /// after every page
    fn list_products_with_progress(
        &self,
        all_orgs: bool,
        search_term: &str,
        on_page: &dyn Fn(usize, usize),
    ) -> Result<Vec<Product>>;

    /// Replaces the whole product document and returns the server's copy
    ///
    /// # Errors
    /// `UpdateRejected` carries the plain-text body of any non-200 answer
    fn put_product(&self, product: &Product, is_version_update: bool) -> Result<Product>;

    fn list_products(&self, all_orgs: bool, search_term: &str) -> Result<Vec<Product>> {
        self.list_products_with_progress(all_orgs, search_term, &|_, _| {})
    }

    /// Fetches a product and resolves `version` against it
    ///
    /// `latest` (or an empty string) resolves to the last listed version.
    ///
    /// # Returns
    /// The product and the resolved version number
    ///
    /// # Errors
    /// - `NoVersions` when the latest version is asked for and none exist
    /// - `VersionNotFound` when the requested version is not listed
    fn get_product_with_version(&self, slug: &str, version: &str) -> Result<(Product, String)> {
        let product = self.get_product(slug)?;
        let resolved = match product.resolve_version(version) {
            Some(found) => found.number().to_string(),
            None if product.versions().is_empty()
                && (version.is_empty() || version.eq_ignore_ascii_case("latest")) =>
            {
                return Err(MarketplaceError::NoVersions {
                    slug: slug.to_string(),
                }
                .into());
            }
            None => {
                return Err(MarketplaceError::VersionNotFound {
                    slug: slug.to_string(),
                    version: version.to_string(),
                }
                .into());
            }
        };
        Ok((product, resolved))
    }
}
