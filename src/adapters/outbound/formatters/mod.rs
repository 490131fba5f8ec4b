/// Formatter adapters for the table and JSON output formats
mod json_formatter;
mod table;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use table_formatter::TableFormatter;
