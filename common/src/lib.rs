pub mod config;
pub mod database;
pub mod logger;

use validator::ValidationErrors;

/// Flattens field errors into a single `; `-separated message.
///
/// Errors without a message fall back to their code.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter().map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => e.code.to_string(),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
