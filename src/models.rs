//! Rate tables and enumerations for the pricing engine.
//!
//! Pure data: vehicle capacities and rates, item-category multipliers, and
//! urgency multipliers. Everything here is fixed at compile time and shared
//! read-only by all calculations.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the great-circle distance calculation, in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed door-to-door average speed for duration estimates, in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 40.0;

/// Flat price per item before the category multiplier is applied.
pub const BASE_ITEM_PRICE: f64 = 5.0;

/// Surcharge per kilogram of declared item weight.
pub const WEIGHT_PRICE_PER_KG: f64 = 0.5;

/// Surcharge per cubic metre of declared item volume.
pub const VOLUME_PRICE_PER_M3: f64 = 10.0;

/// Vehicle classes offered by the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Pickup,
    Van,
    Truck,
}

/// Search order when no vehicle is requested: smallest class first. The
/// iteration order is fixed and the rate tables are not assumed to be
/// cost-ascending.
pub const VEHICLE_SEARCH_ORDER: [VehicleType; 3] =
    [VehicleType::Pickup, VehicleType::Van, VehicleType::Truck];

/// Capacity limits and rates for one vehicle class.
///
/// Weights are in kilograms, volumes in cubic metres, prices in the
/// platform's implied currency unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VehicleCapacity {
    pub max_weight: f64,
    pub max_volume: f64,
    pub max_items: u32,
    pub base_price: f64,
    pub price_per_km: f64,
    pub price_per_minute: f64,
}

impl VehicleType {
    /// Capacity limits and rates for this vehicle class.
    pub const fn capacity(self) -> VehicleCapacity {
        match self {
            VehicleType::Pickup => VehicleCapacity {
                max_weight: 400.0,
                max_volume: 4.0,
                max_items: 15,
                base_price: 20.0,
                price_per_km: 2.0,
                price_per_minute: 0.5,
            },
            VehicleType::Van => VehicleCapacity {
                max_weight: 1200.0,
                max_volume: 15.0,
                max_items: 40,
                base_price: 35.0,
                price_per_km: 2.8,
                price_per_minute: 0.8,
            },
            VehicleType::Truck => VehicleCapacity {
                max_weight: 3500.0,
                max_volume: 35.0,
                max_items: 100,
                base_price: 60.0,
                price_per_km: 4.0,
                price_per_minute: 1.2,
            },
        }
    }

    /// Lowercase wire name, as used in JSON and breakdown descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            VehicleType::Pickup => "pickup",
            VehicleType::Van => "van",
            VehicleType::Truck => "truck",
        }
    }
}

/// What kind of goods an item line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Furniture,
    Appliances,
    Boxes,
    Fragile,
    Other,
}

impl ItemCategory {
    /// Multiplier applied to the per-item base price.
    pub const fn multiplier(self) -> f64 {
        match self {
            ItemCategory::Furniture => 1.5,
            ItemCategory::Appliances => 1.8,
            ItemCategory::Boxes => 1.0,
            ItemCategory::Fragile => 2.0,
            ItemCategory::Other => 1.2,
        }
    }
}

/// Service level for the job. Defaults to standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    #[default]
    Standard,
    Express,
    SameDay,
}

impl Urgency {
    /// Multiplier applied to the standard-rate subtotal. Only the increment
    /// above 1.0 is charged as a surcharge.
    pub const fn multiplier(self) -> f64 {
        match self {
            Urgency::Standard => 1.0,
            Urgency::Express => 1.5,
            Urgency::SameDay => 2.0,
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::Express => "express",
            Urgency::SameDay => "same-day",
        }
    }
}
