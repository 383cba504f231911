use crate::geo::{Municipality, Subdivision};
use crate::mvi::ModelState;

/// The two selection fields. Empty string means "unselected".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub subdivision_code: String,
    pub municipality_name: String,
}

impl Selection {
    pub fn has_subdivision(&self) -> bool {
        !self.subdivision_code.is_empty()
    }

    pub fn has_municipality(&self) -> bool {
        !self.municipality_name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerState {
    /// Sorted by code. Fetched once, replaced wholesale.
    pub subdivisions: Vec<Subdivision>,
    /// Sorted by name. Belongs to the subdivision that was selected when it
    /// was requested, which may no longer be the current one.
    pub municipalities: Vec<Municipality>,
    pub selection: Selection,
    /// Bumped on every change of `selection.subdivision_code`. Municipality
    /// results tagged with an older generation are discarded.
    pub municipality_generation: u64,
    /// Generation `municipalities` was loaded under.
    pub municipalities_generation: u64,
}

impl ModelState for PickerState {}

impl PickerState {
    pub fn is_current(&self, generation: u64) -> bool {
        self.municipality_generation == generation
    }

    /// Whether `municipalities` belongs to the current subdivision selection.
    /// False from a subdivision change until its fetch lands, and for good
    /// if that fetch fails.
    pub fn has_current_municipalities(&self) -> bool {
        self.selection.has_subdivision() && self.is_current(self.municipalities_generation)
    }
}
