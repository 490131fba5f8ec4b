/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (marketplace API, object storage, console, etc.).
pub mod artifact_uploader;
pub mod formatter;
pub mod http_transport;
pub mod output_presenter;
pub mod product_repository;
pub mod progress_reporter;

pub use artifact_uploader::{ArtifactUploader, UploadedFile};
pub use formatter::ResourceFormatter;
pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use output_presenter::OutputPresenter;
pub use product_repository::ProductRepository;
pub use progress_reporter::ProgressReporter;
