//! Response DTOs for quote calculations.

use serde::{Deserialize, Serialize};

use crate::models::VehicleType;

/// One line of a price breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLine {
    pub component: String,
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Itemised quote for a moving job.
///
/// All amounts are unrounded; `total_price` is the sum of the five price
/// components, and the breakdown lines sum to the same value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub base_price: f64,
    pub distance_price: f64,
    pub items_price: f64,
    pub time_price: f64,
    pub urgency_price: f64,
    pub total_price: f64,
    /// Door-to-door estimate, in minutes.
    pub estimated_duration: f64,
    pub recommended_vehicle: VehicleType,
    pub breakdown: Vec<PriceLine>,
}

/// Outcome of request validation.
///
/// Collects every applicable problem rather than stopping at the first, so
/// a caller can surface all of them to the customer at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}
