//! Request DTOs for quote calculations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ItemCategory, Urgency, VehicleType};

/// WGS84 coordinate pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// True when both components are within the WGS84 value range.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Item dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Volume of a single unit, in cubic metres.
    pub fn volume_m3(&self) -> f64 {
        self.length * self.width * self.height / 1_000_000.0
    }
}

/// One line of goods to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingItem {
    pub category: ItemCategory,
    pub quantity: u32,
    /// Declared weight in kilograms, when known.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// Request to price a moving job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    pub pickup_location: Coordinates,
    pub delivery_location: Coordinates,
    pub items: Vec<PricingItem>,
    pub scheduled_at: DateTime<Utc>,
    /// Preferred vehicle; honoured as-is when its capacity suffices.
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub urgency: Urgency,
}
