use crate::marketplace::domain::Product;
use crate::marketplace::services::{PageAccumulator, Pagination, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport, ProductRepository};
use crate::shared::error::MarketplaceError;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;

use super::envelope::{GetProductResponse, ListProductResponse};

const API_PREFIX: &str = "/api/v1";

/// Connection settings for one CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceSettings {
    /// Host name, or a full base URL when a scheme is given
    pub host: String,
    pub api_token: String,
    pub max_pages: u32,
    pub page_size: u32,
}

impl MarketplaceSettings {
    pub fn new(host: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_token: api_token.into(),
            max_pages: DEFAULT_MAX_PAGES,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }
}

/// MarketplaceClient adapter implementing the ProductRepository port
///
/// Speaks the marketplace REST API through an injected [`HttpTransport`] and
/// unwraps the `{"response": {...}}` envelope every endpoint returns.
pub struct MarketplaceClient<T> {
    transport: T,
    settings: MarketplaceSettings,
}

impl<T: HttpTransport> MarketplaceClient<T> {
    pub fn new(transport: T, settings: MarketplaceSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    fn make_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.settings.base_url(), path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Adds the headers every marketplace request carries
    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_header("Accept", "application/json")
            .with_header("csp-auth-token", &self.settings.api_token)
    }

    fn send(&self, request: HttpRequest, action: impl FnOnce() -> String) -> Result<HttpResponse> {
        self.transport
            .send(self.authorize(request))
            .map_err(|e| {
                MarketplaceError::RequestFailed {
                    action: action(),
                    details: format!("{:#}", e),
                }
                .into()
            })
    }

    fn parse_product(body: &[u8], slug: &str) -> Result<Product> {
        let envelope: GetProductResponse =
            serde_json::from_slice(body).map_err(|e| MarketplaceError::ParseFailed {
                subject: format!("the response for product \"{}\"", slug),
                details: e.to_string(),
            })?;
        Ok(envelope.response.data)
    }
}

impl<T: HttpTransport> ProductRepository for MarketplaceClient<T> {
    fn get_product(&self, slug: &str) -> Result<Product> {
        validate_path_segment(slug, "Product slug")?;

        let url = self.make_url(
            &format!("{}/products/{}", API_PREFIX, urlencoding::encode(slug)),
            &[("isSlug", "true"), ("increaseViewCount", "false")],
        );

        let response = self.send(HttpRequest::get(url), || {
            format!("sending the request for product \"{}\"", slug)
        })?;

        match response.status {
            200 => Self::parse_product(&response.body, slug),
            404 => Err(MarketplaceError::ProductNotFound {
                slug: slug.to_string(),
            }
            .into()),
            status => Err(MarketplaceError::UnexpectedStatus {
                action: format!("getting product \"{}\"", slug),
                status,
            }
            .into()),
        }
    }

    fn list_products_with_progress(
        &self,
        all_orgs: bool,
        search_term: &str,
        on_page: &dyn Fn(usize, usize),
    ) -> Result<Vec<Product>> {
        let managed = (!all_orgs).to_string();
        let mut params = vec![("managed", managed.as_str())];
        if !search_term.is_empty() {
            params.push(("search", search_term));
        }
        let base_url = self.make_url(&format!("{}/products", API_PREFIX), &params);

        let mut pagination = Pagination::first_page(self.settings.page_size);
        let mut accumulator = PageAccumulator::new(self.settings.max_pages);

        while !accumulator.is_complete() {
            if accumulator.limit_reached() {
                return Err(MarketplaceError::PaginationLimitExceeded {
                    max_pages: self.settings.max_pages,
                    fetched: accumulator.fetched(),
                    expected: accumulator.expected_total(),
                }
                .into());
            }

            let response = self.send(HttpRequest::get(pagination.apply(&base_url)), || {
                "sending the request for the list of products".to_string()
            })?;

            if response.status != 200 {
                return Err(MarketplaceError::UnexpectedStatus {
                    action: "getting the list of products".to_string(),
                    status: response.status,
                }
                .into());
            }

            let envelope: ListProductResponse = serde_json::from_slice(&response.body)
                .map_err(|e| MarketplaceError::ParseFailed {
                    subject: "the list of products".to_string(),
                    details: e.to_string(),
                })?;

            let payload = envelope.response;
            accumulator.record_page(payload.params.product_count, payload.products);
            on_page(accumulator.fetched(), accumulator.expected_total());
            pagination.advance();
        }

        Ok(accumulator.into_items())
    }

    fn put_product(&self, product: &Product, is_version_update: bool) -> Result<Product> {
        validate_path_segment(product.product_id(), "Product id")?;

        let encoded = serde_json::to_vec(product).map_err(|e| MarketplaceError::Validation {
            message: format!("product \"{}\" could not be encoded: {}", product.slug(), e),
        })?;

        let is_version_update = is_version_update.to_string();
        let url = self.make_url(
            &format!(
                "{}/products/{}",
                API_PREFIX,
                urlencoding::encode(product.product_id())
            ),
            &[
                ("archivepreviousversion", "false"),
                ("isversionupdate", is_version_update.as_str()),
            ],
        );

        let response = self.send(
            HttpRequest::put(url, encoded, "application/json"),
            || format!("sending the update for product \"{}\"", product.slug()),
        )?;

        if response.status != 200 {
            return Err(MarketplaceError::UpdateRejected {
                slug: product.slug().to_string(),
                status: response.status,
                body: response.text(),
            }
            .into());
        }

        Self::parse_product(&response.body, product.slug())
    }
}
