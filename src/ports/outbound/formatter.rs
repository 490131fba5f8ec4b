use crate::marketplace::domain::Product;
use crate::shared::Result;

/// ResourceFormatter port for rendering products and their collections
///
/// Implementations only read the product. Version-scoped renderers receive
/// the already resolved version number.
pub trait ResourceFormatter {
    fn format_product_list(&self, products: &[Product]) -> Result<String>;

    fn format_product(&self, product: &Product) -> Result<String>;

    fn format_versions(&self, product: &Product) -> Result<String>;

    fn format_charts(&self, product: &Product, version: &str) -> Result<String>;

    fn format_ovas(&self, product: &Product, version: &str) -> Result<String>;

    fn format_container_images(&self, product: &Product, version: &str) -> Result<String>;
}
