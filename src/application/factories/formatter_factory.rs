use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ResourceFormatter;

/// Factory for creating resource formatters
///
/// Selects the renderer adapter for the requested output format so that use
/// cases and `main` only ever see the `ResourceFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use mkpcli::application::dto::OutputFormat;
    /// use mkpcli::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Table);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ResourceFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
