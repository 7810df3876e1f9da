//! Email-to-shipment-record extraction.
//!
//! The extractor turns the free-text body of a shipment-notification email
//! into a [`ShipmentRecord`]: order numbers, product line items, total net
//! weight, and pallet description. Extraction is best-effort by contract —
//! it never fails, it just leaves unmatched fields absent — so a thin or
//! garbled email produces a partial record rather than an error.

pub mod matchers;
pub mod types;

pub use matchers::{Extractor, ExtractorConfig};
pub use types::{LineItem, PalletDimensions, ShipmentRecord};
