//! Structured shipment data produced by the extractor.

use serde::{Deserialize, Serialize};

/// Structured record extracted from one shipment-notification email.
///
/// Every field is optional (or an empty list): extraction is best-effort
/// and anything the patterns could not match is simply absent. A record is
/// built fresh per extraction call and is not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    /// Buyer's purchase order number, if mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    /// Our sales order number — often parenthetical in the source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_number: Option<String>,
    /// Product line items, in the order they appear in the source text.
    pub line_items: Vec<LineItem>,
    /// Total net weight in kilograms (lbs are converted on extraction).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_net_weight_kg: Option<f64>,
    /// Number of pallets in the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_count: Option<u32>,
    /// Pallet dimensions in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_dimensions: Option<PalletDimensions>,
}

impl ShipmentRecord {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.purchase_order_number.is_none()
            && self.sales_order_number.is_none()
            && self.line_items.is_empty()
            && self.total_net_weight_kg.is_none()
            && self.pallet_count.is_none()
            && self.pallet_dimensions.is_none()
    }
}

/// One product entry within a shipment.
///
/// All four fields are required for a line to count as a line item —
/// a line missing any of them is discarded rather than half-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Free-form product name, e.g. "MOV Extra 0". May contain digits.
    pub product_name: String,
    /// Manufacturer lot identifier, kept verbatim (case and hyphens intact).
    pub batch_number: String,
    /// Unit count, always ≥ 1.
    pub quantity: u32,
    /// Container/unit word as written, e.g. "drums" or "drum".
    pub unit_label: String,
}

/// Pallet dimensions (length × width × height) in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PalletDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        let record = ShipmentRecord::default();
        assert!(record.is_empty());
        assert!(record.line_items.is_empty());
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = ShipmentRecord {
            purchase_order_number: Some("8931".into()),
            sales_order_number: Some("3085".into()),
            line_items: vec![LineItem {
                product_name: "MOV Extra 0".into(),
                batch_number: "CCL-25337".into(),
                quantity: 3,
                unit_label: "drums".into(),
            }],
            total_net_weight_kg: Some(720.0),
            pallet_count: Some(1),
            pallet_dimensions: Some(PalletDimensions {
                length: 45.0,
                width: 45.0,
                height: 40.0,
            }),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["purchaseOrderNumber"], "8931");
        assert_eq!(json["lineItems"][0]["productName"], "MOV Extra 0");
        assert_eq!(json["lineItems"][0]["batchNumber"], "CCL-25337");
        assert_eq!(json["lineItems"][0]["unitLabel"], "drums");
        assert_eq!(json["totalNetWeightKg"], 720.0);
        assert_eq!(json["palletCount"], 1);
        assert_eq!(json["palletDimensions"]["length"], 45.0);
    }

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let json = serde_json::to_value(ShipmentRecord::default()).unwrap();
        assert!(json.get("purchaseOrderNumber").is_none());
        assert!(json.get("totalNetWeightKg").is_none());
        // lineItems is always present, even when empty
        assert!(json["lineItems"].as_array().unwrap().is_empty());
    }
}
