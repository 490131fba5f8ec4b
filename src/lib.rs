//! mkpcli - command-line client for a vendor software marketplace
//!
//! This library lists marketplace products and attaches new artifacts
//! (Helm charts, OVAs, container images) to product versions, following
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`marketplace`): the `Product` aggregate, its
//!   version-scoped collections, and pagination
//! - **Application Layer** (`application`): one use case per resource
//! - **Ports** (`ports`): traits for HTTP, storage, rendering, and output
//! - **Adapters** (`adapters`): reqwest transport, marketplace client,
//!   object store uploader, table/JSON renderers, console output
//! - **Shared** (`shared`): error types and validation helpers
//!
//! Every update is a read-modify-write of the whole product document: fetch,
//! change only the targeted collection, PUT everything back.
//!
//! # Example
//!
//! ```no_run
//! use mkpcli::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let settings = MarketplaceSettings::new("gtw.marketplace.cloud.vmware.com", "api-token");
//! let client = MarketplaceClient::new(ReqwestTransport::new()?, settings);
//!
//! let use_case = ChartsUseCase::new(client, StderrProgressReporter::new());
//! let response = use_case.list(&ProductVersionRef::new("my-product", "latest"))?;
//!
//! let output = TableFormatter::new().format_charts(&response.product, &response.version)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod marketplace;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::{
        MarketplaceClient, MarketplaceSettings, ObjectStoreUploader, ReqwestTransport,
    };
    pub use crate::application::dto::{
        CreateChartRequest, CreateContainerImageRequest, CreateOvaRequest, CreateVersionRequest,
        ListProductsRequest, OutputFormat, ProductVersionRef, ProductVersionResponse,
    };
    pub use crate::application::use_cases::{
        ChartsUseCase, ContainerImagesUseCase, OvasUseCase, ProductVersionsUseCase,
        ProductsUseCase,
    };
    pub use crate::marketplace::domain::{
        ChartVersion, ContainerImageList, ImageTagType, Product, ProductDeploymentFile, Repo,
        Version,
    };
    pub use crate::ports::outbound::{
        ArtifactUploader, HttpMethod, HttpRequest, HttpResponse, HttpTransport, OutputPresenter,
        ProductRepository, ProgressReporter, ResourceFormatter, UploadedFile,
    };
    pub use crate::shared::error::MarketplaceError;
    pub use crate::shared::Result;
}
