//! Geography lookup: domain records, the service seam and the IBGE client.

mod client;
mod error;
mod service;
mod types;

pub use client::IbgeClient;
pub use error::GeoError;
pub use service::GeoLookupService;
pub use types::{Municipality, Subdivision};
