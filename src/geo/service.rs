//! Seam between the picker and whatever serves geography data.

use async_trait::async_trait;

use super::error::GeoError;
use super::types::{Municipality, Subdivision};

/// Source of subdivision and municipality listings.
///
/// No ordering is guaranteed by implementors; the picker sorts results
/// itself before storing them.
#[async_trait]
pub trait GeoLookupService: Send + Sync {
    /// Returns every subdivision. Small and unpaginated.
    async fn list_subdivisions(&self) -> Result<Vec<Subdivision>, GeoError>;

    /// Returns the municipalities of one subdivision.
    async fn list_municipalities(
        &self,
        subdivision_code: &str,
    ) -> Result<Vec<Municipality>, GeoError>;
}
