//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no shared mutable state, safe to
//! call from any number of threads. Callers are expected to run
//! [`validate_request`] before pricing; [`calculate_price`] itself performs
//! no input checking.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::models::{
    VehicleCapacity, VehicleType, AVERAGE_SPEED_KMH, BASE_ITEM_PRICE, EARTH_RADIUS_KM,
    VEHICLE_SEARCH_ORDER, VOLUME_PRICE_PER_M3, WEIGHT_PRICE_PER_KG,
};
use crate::requests::{Coordinates, PricingItem, PricingRequest};
use crate::responses::{PriceLine, PricingResult, ValidationOutcome};

/// Great-circle distance between two coordinates in km, by the Haversine
/// formula.
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlng = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Door-to-door duration estimate in minutes.
///
/// Uses a flat assumed average speed, not routed travel times.
pub fn estimate_duration_minutes(distance_km: f64) -> f64 {
    distance_km / AVERAGE_SPEED_KMH * 60.0
}

/// Aggregated weight, volume and count of a request's items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemLoad {
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub item_count: u32,
}

/// Sum the declared load across all item lines.
///
/// Declared weights count once per line; volumes scale with quantity.
pub fn aggregate_load(items: &[PricingItem]) -> ItemLoad {
    let mut load = ItemLoad::default();
    for item in items {
        if let Some(weight) = item.weight {
            load.weight_kg += weight;
        }
        if let Some(dims) = &item.dimensions {
            load.volume_m3 += dims.volume_m3() * f64::from(item.quantity);
        }
        load.item_count += item.quantity;
    }
    load
}

fn load_fits(capacity: &VehicleCapacity, load: &ItemLoad) -> bool {
    load.weight_kg <= capacity.max_weight
        && load.volume_m3 <= capacity.max_volume
        && load.item_count <= capacity.max_items
}

/// Pick the vehicle for a load.
///
/// A requested vehicle whose capacity suffices is honoured as-is, even when
/// a smaller class would also fit. Otherwise classes are tried smallest
/// first, and when nothing fits the largest class is assigned without
/// error.
pub fn select_vehicle(preferred: Option<VehicleType>, load: &ItemLoad) -> VehicleType {
    if let Some(vehicle) = preferred {
        if load_fits(&vehicle.capacity(), load) {
            return vehicle;
        }
    }

    for vehicle in VEHICLE_SEARCH_ORDER {
        if load_fits(&vehicle.capacity(), load) {
            return vehicle;
        }
    }

    VehicleType::Truck
}

/// Price of the item list.
///
/// Each line charges the flat per-item rate scaled by quantity and category
/// multiplier, plus weight and volume surcharges for declared measurements.
/// The surcharges apply once per line, not per unit.
pub fn items_price(items: &[PricingItem]) -> f64 {
    let mut total = 0.0;
    for item in items {
        total += BASE_ITEM_PRICE * f64::from(item.quantity) * item.category.multiplier();
        if let Some(weight) = item.weight {
            total += weight * WEIGHT_PRICE_PER_KG;
        }
        if let Some(dims) = &item.dimensions {
            total += dims.volume_m3() * VOLUME_PRICE_PER_M3;
        }
    }
    total
}

/// Price a moving job.
///
/// Input is assumed valid; run [`validate_request`] first. All amounts are
/// left unrounded - display rounding is the caller's concern (see
/// [`round_total`]).
pub fn calculate_price(request: &PricingRequest) -> PricingResult {
    let distance_km = haversine_km(&request.pickup_location, &request.delivery_location);
    let duration_minutes = estimate_duration_minutes(distance_km);

    let load = aggregate_load(&request.items);
    let vehicle = select_vehicle(request.vehicle_type, &load);
    let capacity = vehicle.capacity();

    let base_price = capacity.base_price;
    let distance_price = distance_km * capacity.price_per_km;
    let items_total = items_price(&request.items);
    let time_price = duration_minutes * capacity.price_per_minute;

    let subtotal = base_price + distance_price + items_total + time_price;
    let urgency_price = subtotal * (request.urgency.multiplier() - 1.0);
    let total_price = subtotal + urgency_price;

    let mut breakdown = vec![
        PriceLine {
            component: "base".to_string(),
            description: format!("Base rate ({})", vehicle.as_str()),
            amount: base_price,
            unit: None,
        },
        PriceLine {
            component: "distance".to_string(),
            description: format!("Distance ({:.1} km)", distance_km),
            amount: distance_price,
            unit: Some("km".to_string()),
        },
        PriceLine {
            component: "items".to_string(),
            description: format!("Items ({} total)", load.item_count),
            amount: items_total,
            unit: None,
        },
        PriceLine {
            component: "time".to_string(),
            description: format!("Crew time ({:.0} min)", duration_minutes),
            amount: time_price,
            unit: Some("min".to_string()),
        },
    ];

    if urgency_price > 0.0 {
        breakdown.push(PriceLine {
            component: "urgency".to_string(),
            description: format!("Urgency ({})", request.urgency.as_str()),
            amount: urgency_price,
            unit: None,
        });
    }

    PricingResult {
        base_price,
        distance_price,
        items_price: items_total,
        time_price,
        urgency_price,
        total_price,
        estimated_duration: duration_minutes,
        recommended_vehicle: vehicle,
        breakdown,
    }
}

/// Check a request for problems the calculator cannot price around.
///
/// Collects every applicable error so a caller can present all of them at
/// once. `as_of` is the reference time for the schedule check (default:
/// now).
pub fn validate_request(
    request: &PricingRequest,
    as_of: Option<DateTime<Utc>>,
) -> ValidationOutcome {
    let check_time = as_of.unwrap_or_else(Utc::now);
    let mut errors = Vec::new();

    if !request.pickup_location.in_range() {
        errors.push("Pickup location coordinates are out of range".to_string());
    }
    if !request.delivery_location.in_range() {
        errors.push("Delivery location coordinates are out of range".to_string());
    }
    if request.items.is_empty() {
        errors.push("At least one item is required".to_string());
    }
    if request.scheduled_at <= check_time {
        errors.push("Scheduled time must be in the future".to_string());
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Round a monetary amount for display using banker's rounding
/// (ROUND_HALF_EVEN).
///
/// The calculator never rounds internally; apply this when formatting
/// amounts for a customer-facing currency.
///
/// # Examples
/// ```
/// use speedyvan_pricing::round_total;
///
/// assert_eq!(round_total(2.5, 0), 2.0);   // rounds to even
/// assert_eq!(round_total(3.5, 0), 4.0);   // rounds to even
/// assert_eq!(round_total(1.234, 2), 1.23);
/// ```
pub fn round_total(amount: f64, places: u32) -> f64 {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(amount)
}
