/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_transport;
mod mock_uploader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_transport::MockTransport;
pub use mock_uploader::MockUploader;
