//! Quote service composing validation and calculation.
//!
//! Mirrors how the booking platform consumes the engine: check the request
//! first, then price it, with rejections reported as typed errors instead
//! of silently nonsensical numbers.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::calculators::{calculate_price, validate_request};
use crate::requests::PricingRequest;
use crate::responses::PricingResult;

/// Quote calculation error types
#[derive(Debug, Clone, Error)]
pub enum PricingError {
    /// The request failed validation; one entry per problem found.
    #[error("invalid pricing request: {}", .errors.join("; "))]
    InvalidRequest { errors: Vec<String> },
}

/// Validate a request and price it in one step.
///
/// Wraps the separate [`validate_request`] and [`calculate_price`]
/// operations so callers cannot price an unchecked request by accident.
///
/// # Arguments
/// * `request` - The job to price
/// * `as_of` - Reference time for schedule validation (default: now)
pub fn price_quote(
    request: &PricingRequest,
    as_of: Option<DateTime<Utc>>,
) -> Result<PricingResult, PricingError> {
    let outcome = validate_request(request, as_of);
    if !outcome.is_valid {
        tracing::debug!(errors = ?outcome.errors, "pricing request rejected");
        return Err(PricingError::InvalidRequest {
            errors: outcome.errors,
        });
    }

    let result = calculate_price(request);
    tracing::debug!(
        vehicle = result.recommended_vehicle.as_str(),
        total = result.total_price,
        "quote calculated"
    );
    Ok(result)
}
