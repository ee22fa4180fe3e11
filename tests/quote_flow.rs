//! End-to-end quote flow over the JSON contract.

use chrono::{Duration, Utc};
use serde_json::json;

use speedyvan_pricing::{price_quote, PricingRequest, PricingResult};

fn request_json(urgency: Option<&str>) -> serde_json::Value {
    let mut request = json!({
        "pickup_location": { "latitude": 51.5074, "longitude": -0.1278 },
        "delivery_location": { "latitude": 53.4808, "longitude": -2.2426 },
        "items": [
            { "category": "furniture", "quantity": 2, "weight": 45.0 },
            {
                "category": "boxes",
                "quantity": 8,
                "dimensions": { "length": 50.0, "width": 40.0, "height": 40.0 }
            }
        ],
        "scheduled_at": (Utc::now() + Duration::days(3)).to_rfc3339(),
    });
    if let Some(urgency) = urgency {
        request["urgency"] = json!(urgency);
    }
    request
}

#[test]
fn quote_round_trips_through_json() {
    let request: PricingRequest = serde_json::from_value(request_json(Some("same-day"))).unwrap();
    let result = price_quote(&request, None).unwrap();

    let encoded = serde_json::to_value(&result).unwrap();
    assert_eq!(encoded["recommended_vehicle"], "pickup");
    assert!(encoded["total_price"].as_f64().unwrap() > 0.0);
    assert_eq!(encoded["breakdown"].as_array().unwrap().len(), 5);

    // Unit fields are omitted when absent and present on measured lines
    assert!(encoded["breakdown"][0].get("unit").is_none());
    assert_eq!(encoded["breakdown"][1]["unit"], "km");

    let decoded: PricingResult = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded.recommended_vehicle, result.recommended_vehicle);
    assert!((decoded.total_price - result.total_price).abs() < 1e-9);
}

#[test]
fn urgency_defaults_to_standard_when_omitted() {
    let request: PricingRequest = serde_json::from_value(request_json(None)).unwrap();
    let result = price_quote(&request, None).unwrap();

    assert!(result.urgency_price.abs() < 1e-9);
    assert_eq!(result.breakdown.len(), 4);
}

#[test]
fn invalid_request_reports_every_problem() {
    let mut raw = request_json(None);
    raw["items"] = json!([]);
    raw["pickup_location"] = json!({ "latitude": 95.0, "longitude": 0.0 });
    raw["scheduled_at"] = json!((Utc::now() - Duration::hours(2)).to_rfc3339());

    let request: PricingRequest = serde_json::from_value(raw).unwrap();
    let err = price_quote(&request, None).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Pickup"));
    assert!(message.contains("item"));
    assert!(message.contains("future"));
}
