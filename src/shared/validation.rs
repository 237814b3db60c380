use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};

/// Validate `dto` and report only the first failing field, checked in
/// `field_order`.
pub fn validate_in_order<T: Validate>(dto: &T, field_order: &[&str]) -> Result<()> {
    dto.validate()
        .map_err(|errors| AppError::bad_request(first_error_message(&errors, field_order)))
}

pub fn first_error_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let fields = errors.field_errors();

    field_order
        .iter()
        .find_map(|field| {
            fields
                .get(*field)
                .and_then(|errs| errs.first())
                .and_then(|err| err.message.as_ref())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| errors.to_string())
}
