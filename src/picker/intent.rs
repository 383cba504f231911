use crate::geo::{Municipality, Subdivision};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PickerIntent {
    /// Subdivision fetch completed. Order as received from the service.
    SubdivisionsLoaded { subdivisions: Vec<Subdivision> },

    /// User picked a subdivision (empty code = no selection).
    SelectSubdivision { code: String },

    /// Municipality fetch completed for the fetch tagged `generation`.
    MunicipalitiesLoaded {
        generation: u64,
        municipalities: Vec<Municipality>,
    },

    /// User picked a municipality. Not validated against the loaded list.
    SelectMunicipality { name: String },

    /// Clear both selection fields. Fetched lists stay.
    Reset,
}

impl Intent for PickerIntent {}
