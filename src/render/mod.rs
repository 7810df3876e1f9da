//! Shipping-document rendering.
//!
//! Populates HTML templates (commercial invoice, bill of lading) with a
//! [`ShipmentRecord`]. Scalar fields are `{{placeholder}}` tokens; line items
//! expand a row section delimited by `{{#line_items}}` / `{{/line_items}}`.
//! Absent optional fields render as blanks — a record with nothing extracted
//! still produces a document, per the best-effort contract.

pub mod store;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::error::RenderError;
use crate::extract::{LineItem, ShipmentRecord};

pub use store::{FileTemplateStore, TemplateStore};

/// Opening marker of the line-item row section.
const SECTION_OPEN: &str = "{{#line_items}}";
/// Closing marker of the line-item row section.
const SECTION_CLOSE: &str = "{{/line_items}}";

/// Renders shipment records into named HTML templates.
pub struct Renderer {
    store: Arc<dyn TemplateStore>,
}

impl Renderer {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Render `record` into the template named `template`.
    ///
    /// Fails only for template-level problems ([`RenderError::TemplateNotFound`],
    /// I/O); missing shipment fields degrade to blank placeholders.
    pub async fn render(
        &self,
        template: &str,
        record: &ShipmentRecord,
    ) -> Result<String, RenderError> {
        let body = self.store.load(template).await?;
        let body = expand_line_items(&body, &record.line_items);
        let html = fill_scalars(&body, record);
        info!(
            template,
            line_items = record.line_items.len(),
            "Rendered document"
        );
        Ok(html)
    }
}

/// Expand every `{{#line_items}}…{{/line_items}}` section into one copy of
/// its inner row per line item. Sections with no items expand to nothing.
fn expand_line_items(template: &str, items: &[LineItem]) -> String {
    let mut out = template.to_string();
    while let (Some(open), Some(close)) = (out.find(SECTION_OPEN), out.find(SECTION_CLOSE)) {
        if close < open {
            break;
        }
        let row = &out[open + SECTION_OPEN.len()..close];
        let rendered: String = items.iter().map(|item| fill_row(row, item)).collect();
        out.replace_range(open..close + SECTION_CLOSE.len(), &rendered);
    }
    out
}

fn fill_row(row: &str, item: &LineItem) -> String {
    row.replace("{{product_name}}", &item.product_name)
        .replace("{{batch_number}}", &item.batch_number)
        .replace("{{quantity}}", &item.quantity.to_string())
        .replace("{{unit_label}}", &item.unit_label)
}

fn fill_scalars(body: &str, record: &ShipmentRecord) -> String {
    let dimensions = record
        .pallet_dimensions
        .map(|d| {
            format!(
                "{} × {} × {} in",
                format_number(d.length),
                format_number(d.width),
                format_number(d.height)
            )
        })
        .unwrap_or_default();

    body.replace(
        "{{purchase_order_number}}",
        record.purchase_order_number.as_deref().unwrap_or(""),
    )
    .replace(
        "{{sales_order_number}}",
        record.sales_order_number.as_deref().unwrap_or(""),
    )
    .replace(
        "{{total_net_weight_kg}}",
        &record
            .total_net_weight_kg
            .map(format_number)
            .unwrap_or_default(),
    )
    .replace(
        "{{pallet_count}}",
        &record
            .pallet_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
    )
    .replace("{{pallet_dimensions}}", &dimensions)
    .replace(
        "{{generated_date}}",
        &Utc::now().format("%Y-%m-%d").to_string(),
    )
}

/// Format a numeric value without a spurious trailing ".0", keeping two
/// decimals otherwise (converted lbs weights are not round numbers).
fn format_number(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
