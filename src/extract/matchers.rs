//! Pattern matchers for shipment-notification text.
//!
//! Each field class (order numbers, line items, weight, pallets) has its own
//! keyword-anchored regex and its own matcher returning an optional fragment.
//! `Extractor::extract` composes the fragments into a [`ShipmentRecord`].
//! There is no monolithic email regex, and no matcher ever fails — unmatched
//! fields are simply absent.

use regex::Regex;
use tracing::debug;

use super::types::{LineItem, PalletDimensions, ShipmentRecord};

/// Pounds-to-kilograms conversion factor.
const LBS_TO_KG: f64 = 0.453_592_37;

/// Extractor configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Container/unit words recognized in line items, singular and plural.
    pub unit_labels: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            unit_labels: [
                "drum", "drums", "case", "cases", "pallet", "pallets", "box", "boxes", "pail",
                "pails", "tote", "totes",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ExtractorConfig {
    /// Build the extractor configuration from the environment.
    ///
    /// `SHIPDOCS_UNIT_LABELS` (comma-separated) extends the default unit
    /// vocabulary, e.g. `SHIPDOCS_UNIT_LABELS=bag,bags,reel,reels`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(extra) = std::env::var("SHIPDOCS_UNIT_LABELS") {
            config.unit_labels.extend(
                extra
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty()),
            );
        }
        config
    }
}

/// Best-effort extractor for shipment-notification emails.
///
/// All patterns are compiled once at construction; `extract` is a pure
/// function of its input and is safe to share across request handlers.
pub struct Extractor {
    purchase_order: Regex,
    sales_order: Regex,
    line_item: Regex,
    weight_before_label: Regex,
    weight_after_label: Regex,
    pallet_count: Regex,
    pallet_dimensions: Regex,
}

impl Extractor {
    /// Compile the pattern set for the given configuration.
    ///
    /// Only the line-item pattern depends on the configuration (the unit
    /// vocabulary is spliced into its alternation); everything else is fixed.
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        let units = config
            .unit_labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        // <qty> <unit> of <product>, batch number <batch>
        // The product boundary is the comma before the batch label, so names
        // like "MOV Extra 0" keep their digits. The batch identifier is
        // captured verbatim: no case folding, hyphens intact.
        let line_item = Regex::new(&format!(
            r"(?i)\b(\d+)\s+({units})\s+of\s+(.+?)\s*,\s*(?:batch|lot)\s+(?:number|no\.?|#)\s*:?\s*([A-Za-z0-9][A-Za-z0-9\-]*)"
        ))?;

        Ok(Self {
            purchase_order: Regex::new(
                r"(?i)\b(?:purchase\s+order(?:\s+(?:number|no\.?|#))?|po\s*#|p\.\s*o\.)\s*[:#]?\s*(\d+)",
            )?,
            sales_order: Regex::new(
                r"(?i)\b(?:sales\s+order(?:\s+(?:number|no\.?|#))?|so\s*#|s\.\s*o\.)\s*[:#]?\s*(\d+)",
            )?,
            line_item,
            // "720 kg total net weight"
            weight_before_label: Regex::new(
                r"(?i)\b([\d,]+(?:\.\d+)?)\s*(kg|kgs|kilograms?|lbs?|pounds?)\b[\s,]*(?:of\s+)?total\s+net\s+weight",
            )?,
            // "total net weight: 720 kg" (unit optional, kg assumed)
            weight_after_label: Regex::new(
                r"(?i)total\s+net\s+weight\s*(?:of|:|is|=)?\s*([\d,]+(?:\.\d+)?)\s*(kg|kgs|kilograms?|lbs?|pounds?)?",
            )?,
            pallet_count: Regex::new(r"(?i)\b(\d+)\s+pallets?\b")?,
            pallet_dimensions: Regex::new(
                r"(?i)\b(\d+(?:\.\d+)?)\s*[x×]\s*(\d+(?:\.\d+)?)\s*[x×]\s*(\d+(?:\.\d+)?)\s*(?:inches?|in\b\.?)",
            )?,
        })
    }

    /// Extract a structured shipment record from free text.
    ///
    /// Never fails: each matcher contributes its fragment independently and
    /// anything unmatched stays absent. Empty input yields an empty record.
    pub fn extract(&self, text: &str) -> ShipmentRecord {
        ShipmentRecord {
            purchase_order_number: self.match_order_number(&self.purchase_order, text),
            sales_order_number: self.match_order_number(&self.sales_order, text),
            line_items: self.match_line_items(text),
            total_net_weight_kg: self.match_total_net_weight(text),
            pallet_count: self.match_pallet_count(text),
            pallet_dimensions: self.match_pallet_dimensions(text),
        }
    }

    fn match_order_number(&self, pattern: &Regex, text: &str) -> Option<String> {
        let number = pattern.captures(text).map(|cap| cap[1].to_string())?;
        debug!(number = %number, "Matched order number");
        Some(number)
    }

    /// Scan line by line for the line-item shape. Lines that only partially
    /// match (e.g. missing the batch number) contribute nothing.
    fn match_line_items(&self, text: &str) -> Vec<LineItem> {
        let mut items = Vec::new();
        for line in text.lines() {
            for cap in self.line_item.captures_iter(line) {
                let Ok(quantity) = cap[1].parse::<u32>() else {
                    continue;
                };
                if quantity == 0 {
                    continue;
                }
                let item = LineItem {
                    product_name: cap[3].trim().to_string(),
                    batch_number: cap[4].to_string(),
                    quantity,
                    unit_label: cap[2].to_string(),
                };
                debug!(
                    product = %item.product_name,
                    batch = %item.batch_number,
                    quantity = item.quantity,
                    "Matched line item"
                );
                items.push(item);
            }
        }
        items
    }

    /// Find the total net weight in kilograms.
    ///
    /// Anchoring on the phrase "total net weight" (number before or after it)
    /// means incidental weight mentions elsewhere in the email never win.
    fn match_total_net_weight(&self, text: &str) -> Option<f64> {
        let cap = self
            .weight_before_label
            .captures(text)
            .or_else(|| self.weight_after_label.captures(text))?;
        let value = parse_number(&cap[1])?;
        let unit = cap
            .get(2)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_else(|| "kg".to_string());
        let kg = if unit.starts_with("lb") || unit.starts_with("pound") {
            value * LBS_TO_KG
        } else {
            value
        };
        debug!(kg, "Matched total net weight");
        Some(kg)
    }

    fn match_pallet_count(&self, text: &str) -> Option<u32> {
        let count = self
            .pallet_count
            .captures(text)
            .and_then(|cap| cap[1].parse().ok())?;
        debug!(count, "Matched pallet count");
        Some(count)
    }

    fn match_pallet_dimensions(&self, text: &str) -> Option<PalletDimensions> {
        let cap = self.pallet_dimensions.captures(text)?;
        let dims = PalletDimensions {
            length: parse_number(&cap[1])?,
            width: parse_number(&cap[2])?,
            height: parse_number(&cap[3])?,
        };
        debug!(?dims, "Matched pallet dimensions");
        Some(dims)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default()).expect("default patterns compile")
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}
