/// Console adapters for progress and status output
mod progress_reporter;

pub use progress_reporter::{QuietProgressReporter, StderrProgressReporter};
