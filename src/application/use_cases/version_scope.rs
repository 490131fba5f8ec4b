use crate::marketplace::domain::Product;
use crate::shared::error::MarketplaceError;
use crate::shared::Result;

/// Resolves the version a create command attaches an artifact to
///
/// Missing versions are reported as [`MarketplaceError::VersionMustExist`]
/// so the user knows to create the version first.
pub(crate) fn version_for_create(product: &Product, requested: &str) -> Result<String> {
    product
        .resolve_version(requested)
        .map(|version| version.number().to_string())
        .ok_or_else(|| {
            MarketplaceError::VersionMustExist {
                slug: product.slug().to_string(),
                version: requested.to_string(),
            }
            .into()
        })
}
