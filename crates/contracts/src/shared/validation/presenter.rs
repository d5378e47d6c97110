use super::evaluator::FormReport;
use super::rules::ValidationResult;

/// Presentation channel for validation errors.
///
/// The validator never calls this itself; the host page feeds results into
/// whatever presenter it uses (inline messages, a summary box, ...).
pub trait ErrorPresenter {
    fn show_error(&mut self, field: &str, message: &str);

    fn clear_error(&mut self, field: &str);

    fn present(&mut self, field: &str, result: &ValidationResult) {
        match result.message() {
            Some(message) => self.show_error(field, message),
            None => self.clear_error(field),
        }
    }

    fn present_report(&mut self, report: &FormReport) {
        for outcome in report.iter() {
            self.present(&outcome.field, &outcome.result);
        }
    }
}
