use crate::marketplace::domain::{Product, Version};
use crate::ports::outbound::{ArtifactUploader, ProductRepository, ProgressReporter, UploadedFile};
use crate::shared::error::MarketplaceError;
use crate::shared::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Repository holding products in memory and recording every PUT
pub(crate) struct InMemoryRepository {
    pub products: RefCell<Vec<Product>>,
    pub puts: RefCell<Vec<(Product, bool)>>,
    pub reject_puts: bool,
    pub fail_listing: bool,
}

impl InMemoryRepository {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products: RefCell::new(products),
            puts: RefCell::new(Vec::new()),
            reject_puts: false,
            fail_listing: false,
        }
    }

    pub fn rejecting(mut self) -> Self {
        self.reject_puts = true;
        self
    }

    /// Reports the first page, then fails like a dropped connection
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn put_count(&self) -> usize {
        self.puts.borrow().len()
    }

    pub fn last_put(&self) -> (Product, bool) {
        self.puts.borrow().last().cloned().unwrap()
    }
}

impl ProductRepository for InMemoryRepository {
    fn get_product(&self, slug: &str) -> Result<Product> {
        self.products
            .borrow()
            .iter()
            .find(|product| product.slug() == slug)
            .cloned()
            .ok_or_else(|| {
                MarketplaceError::ProductNotFound {
                    slug: slug.to_string(),
                }
                .into()
            })
    }

    fn list_products_with_progress(
        &self,
        _all_orgs: bool,
        search_term: &str,
        on_page: &dyn Fn(usize, usize),
    ) -> Result<Vec<Product>> {
        let products: Vec<Product> = self
            .products
            .borrow()
            .iter()
            .filter(|product| search_term.is_empty() || product.slug().contains(search_term))
            .cloned()
            .collect();
        if self.fail_listing {
            on_page(1, products.len());
            return Err(MarketplaceError::RequestFailed {
                action: "sending the request for the list of products".to_string(),
                details: "connection reset".to_string(),
            }
            .into());
        }
        on_page(products.len(), products.len());
        Ok(products)
    }

    fn put_product(&self, product: &Product, is_version_update: bool) -> Result<Product> {
        self.puts
            .borrow_mut()
            .push((product.clone(), is_version_update));
        if self.reject_puts {
            return Err(MarketplaceError::UpdateRejected {
                slug: product.slug().to_string(),
                status: 418,
                body: "Teapots all the way down".to_string(),
            }
            .into());
        }

        let mut products = self.products.borrow_mut();
        if let Some(stored) = products.iter_mut().find(|p| p.product_id == product.product_id) {
            *stored = product.clone();
        }
        Ok(product.clone())
    }
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.messages
            .borrow_mut()
            .push(format!("progress {}/{}", current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Uploader that records calls and hands back a fixed location
#[derive(Default)]
pub(crate) struct RecordingUploader {
    pub calls: RefCell<Vec<(String, String, PathBuf)>>,
    pub fail: bool,
}

impl ArtifactUploader for RecordingUploader {
    fn upload(&self, bucket: &str, prefix: &str, file: &Path) -> Result<UploadedFile> {
        self.calls
            .borrow_mut()
            .push((bucket.to_string(), prefix.to_string(), file.to_path_buf()));
        if self.fail {
            return Err(MarketplaceError::UploadFailed {
                path: file.to_path_buf(),
                details: "storage unavailable".to_string(),
            }
            .into());
        }
        Ok(UploadedFile {
            url: format!("https://storage.example.com/{}/{}/file.ova", bucket, prefix),
            hash_digest: "a9993e364706816aba3e25717850c26c9cd0d89d".to_string(),
            hash_algo: "SHA1".to_string(),
        })
    }
}

/// Product "my-super-product" with versions 1.2.3 and 2.3.4 and nothing attached
pub(crate) fn product_with_versions() -> Product {
    let mut product = Product::new("product-id", "My Super Product", "my-super-product");
    product.add_version(Version::pending("1.2.3", ""));
    product.add_version(Version::pending("2.3.4", ""));
    product
}
