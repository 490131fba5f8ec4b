/// Data Transfer Objects for the application layer
///
/// Requests carry what the CLI collected into the use cases, keeping clap
/// types out of the core.
mod output_format;
mod requests;
mod responses;

pub use output_format::OutputFormat;
pub use requests::{
    CreateChartRequest, CreateContainerImageRequest, CreateOvaRequest, CreateVersionRequest,
    ListProductsRequest, ProductVersionRef,
};
pub use responses::ProductVersionResponse;
