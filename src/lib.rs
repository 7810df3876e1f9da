//! Shipdocs — shipping-document backend.
//!
//! Turns free-text shipment-notification emails into structured shipment
//! records, and renders those records into shipping documents (commercial
//! invoices, bills of lading) from HTML templates.

pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod server;
