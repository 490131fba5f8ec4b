use crate::marketplace::domain::Product;
use crate::ports::outbound::ResourceFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter emitting the marketplace's own JSON shapes
///
/// Output is compact, one document per command, terminated by a newline.
/// Version-scoped collections with no entries render as `[]`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFormatter for JsonFormatter {
    fn format_product_list(&self, products: &[Product]) -> Result<String> {
        Self::to_json(products)
    }

    fn format_product(&self, product: &Product) -> Result<String> {
        Self::to_json(product)
    }

    fn format_versions(&self, product: &Product) -> Result<String> {
        Self::to_json(product.versions())
    }

    fn format_charts(&self, product: &Product, version: &str) -> Result<String> {
        Self::to_json(&product.charts_for_version(version))
    }

    fn format_ovas(&self, product: &Product, version: &str) -> Result<String> {
        Self::to_json(&product.ovas_for_version(version))
    }

    fn format_container_images(&self, product: &Product, version: &str) -> Result<String> {
        Self::to_json(&product.container_images_for_version(version))
    }
}
