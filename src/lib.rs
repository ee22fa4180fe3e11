//! Pricing engine for the Speedy Van moving platform.
//!
//! Provides quote calculations for moving jobs: great-circle distance and
//! duration estimates, vehicle selection, and an itemised price breakdown.
//! The wider booking platform consumes these results as JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_price, round_total, validate_request};
pub use requests::{Coordinates, Dimensions, PricingItem, PricingRequest};
pub use responses::{PriceLine, PricingResult, ValidationOutcome};
pub use services::{price_quote, PricingError};
