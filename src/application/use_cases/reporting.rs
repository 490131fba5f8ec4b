use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// Hands `result` back unchanged, telling the reporter first when it failed.
///
/// The reporter clears any progress bar it is drawing, so the caller's error
/// message starts on a clean line.
pub(crate) fn report_failure<T, PR: ProgressReporter>(
    reporter: &PR,
    action: &str,
    result: Result<T>,
) -> Result<T> {
    if result.is_err() {
        reporter.report_error(&format!("✗ {} failed", action));
    }
    result
}
