use crate::marketplace::domain::Product;

/// A product together with the version a command operated on
///
/// `version` is always a concrete number, already resolved from `latest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVersionResponse {
    pub product: Product,
    pub version: String,
}

impl ProductVersionResponse {
    pub fn new(product: Product, version: impl Into<String>) -> Self {
        Self {
            product,
            version: version.into(),
        }
    }
}
