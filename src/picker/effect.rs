//! Fetches described as values.
//!
//! The picker never awaits. A transition that needs data yields an
//! [`Effect`]; whoever drives the picker executes it and feeds the resulting
//! intent back through `dispatch`.

use crate::geo::{GeoError, GeoLookupService};

use super::intent::PickerIntent;
use super::state::PickerState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch every subdivision. Issued once, on mount.
    LoadSubdivisions,
    /// Fetch the municipalities of `code`, tagged with the generation of the
    /// selection that asked for them.
    LoadMunicipalities { code: String, generation: u64 },
}

impl Effect {
    /// Runs the fetch and returns the intent that stores its result.
    pub async fn execute(
        &self,
        service: &dyn GeoLookupService,
    ) -> Result<PickerIntent, GeoError> {
        match self {
            Effect::LoadSubdivisions => {
                let subdivisions = service.list_subdivisions().await?;
                Ok(PickerIntent::SubdivisionsLoaded { subdivisions })
            }
            Effect::LoadMunicipalities { code, generation } => {
                let municipalities = service.list_municipalities(code).await?;
                Ok(PickerIntent::MunicipalitiesLoaded {
                    generation: *generation,
                    municipalities,
                })
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Effect::LoadSubdivisions => "load subdivisions".to_string(),
            Effect::LoadMunicipalities { code, .. } => format!("load municipalities of {code}"),
        }
    }
}

/// Reactive rule: a change of the subdivision code to a non-empty value
/// loads that subdivision's municipalities. No change, or a change to
/// empty, loads nothing.
pub fn derive_effect(previous_code: &str, next: &PickerState) -> Option<Effect> {
    let code = &next.selection.subdivision_code;
    if code.is_empty() || code == previous_code {
        return None;
    }
    Some(Effect::LoadMunicipalities {
        code: code.clone(),
        generation: next.municipality_generation,
    })
}
