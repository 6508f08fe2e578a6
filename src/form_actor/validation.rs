use crate::domain::{Field, OrderForwardingRequest};
use crate::error::ValidationError;

/// Checks that every required field has been filled in. The error lists the
/// empty ones in form order.
pub fn validate(record: &OrderForwardingRequest) -> Result<(), ValidationError> {
    let missing: Vec<Field> = Field::REQUIRED
        .into_iter()
        .filter(|field| record.field_value(*field).is_empty())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
