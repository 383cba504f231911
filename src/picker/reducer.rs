use crate::collation::sort_by_key_str;
use crate::mvi::Reducer;

use super::intent::PickerIntent;
use super::state::{PickerState, Selection};

/// Pure transitions for the location picker.
///
/// Fetches implied by a transition are derived separately
/// (see [`super::effect::derive_effect`]).
pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::SubdivisionsLoaded { mut subdivisions } => {
                sort_by_key_str(&mut subdivisions, |s| s.code.as_str());
                PickerState {
                    subdivisions,
                    ..state
                }
            }

            PickerIntent::SelectSubdivision { code } => {
                // The municipality is cleared in the same step, even when the
                // code is unchanged.
                let generation = if code == state.selection.subdivision_code {
                    state.municipality_generation
                } else {
                    state.municipality_generation.wrapping_add(1)
                };
                PickerState {
                    selection: Selection {
                        subdivision_code: code,
                        municipality_name: String::new(),
                    },
                    municipality_generation: generation,
                    ..state
                }
            }

            PickerIntent::MunicipalitiesLoaded {
                generation,
                mut municipalities,
            } => {
                if !state.is_current(generation) {
                    return state;
                }
                sort_by_key_str(&mut municipalities, |m| m.name.as_str());
                PickerState {
                    municipalities,
                    municipalities_generation: generation,
                    ..state
                }
            }

            PickerIntent::SelectMunicipality { name } => PickerState {
                selection: Selection {
                    municipality_name: name,
                    ..state.selection
                },
                ..state
            },

            PickerIntent::Reset => {
                let generation = if state.selection.has_subdivision() {
                    state.municipality_generation.wrapping_add(1)
                } else {
                    state.municipality_generation
                };
                PickerState {
                    selection: Selection::default(),
                    municipality_generation: generation,
                    ..state
                }
            }
        }
    }
}
