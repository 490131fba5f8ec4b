/// Filesystem adapters for presenting rendered output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
