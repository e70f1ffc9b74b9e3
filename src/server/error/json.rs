use axum::extract::rejection::JsonRejection;

use crate::server::{error::AppError, model::validation::ValidationErrors};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Converts request body rejections into application errors.
///
/// A well-formed body whose field holds a value of the wrong type becomes a
/// validation error keyed by that field. Syntax errors, a missing JSON content
/// type and unreadable bodies become 400 with the rejection message.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let text = err.body_text();
                tracing::debug!("Rejected request body: {}", text);

                let mut errors = ValidationErrors::new();
                match failing_field(&text) {
                    Some(field) => {
                        errors.add(field, format!("The {} field has an invalid value", field))
                    }
                    None => errors.add("$", "The request body has an invalid shape"),
                }

                AppError::Validation(errors)
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Extracts the JSON path of the failing field from a data error message.
///
/// Messages read `<prefix><path>: <reason>`; errors at the document root carry
/// no path.
fn failing_field(text: &str) -> Option<&str> {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX)?;
    let (path, _) = detail.split_once(": ")?;

    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));

    is_path.then_some(path)
}
