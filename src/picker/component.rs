use crate::mvi::Reducer;

use super::effect::{derive_effect, Effect};
use super::intent::PickerIntent;
use super::reducer::PickerReducer;
use super::state::PickerState;
use super::view::StatusView;

/// The location picker component: state plus the rules that decide which
/// fetches a transition implies.
///
/// Every operation returns the effect it triggers (if any). Executing it is
/// the caller's job; the result comes back through [`LocationPicker::dispatch`].
#[derive(Debug, Default)]
pub struct LocationPicker {
    state: PickerState,
    mounted: bool,
}

impl LocationPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Activates the component. Only the first call yields the subdivision
    /// fetch; the list is never refetched.
    pub fn initialize(&mut self) -> Option<Effect> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        tracing::debug!("Location picker mounted");
        Some(Effect::LoadSubdivisions)
    }

    pub fn dispatch(&mut self, intent: PickerIntent) -> Option<Effect> {
        if let PickerIntent::MunicipalitiesLoaded { generation, .. } = &intent {
            if !self.state.is_current(*generation) {
                tracing::debug!(
                    generation,
                    current = self.state.municipality_generation,
                    "Discarding stale municipality response"
                );
            }
        }

        let previous_code = self.state.selection.subdivision_code.clone();
        self.state = PickerReducer::reduce(std::mem::take(&mut self.state), intent);
        derive_effect(&previous_code, &self.state)
    }

    pub fn on_subdivision_selected(&mut self, code: impl Into<String>) -> Option<Effect> {
        self.dispatch(PickerIntent::SelectSubdivision { code: code.into() })
    }

    pub fn on_municipality_selected(&mut self, name: impl Into<String>) -> Option<Effect> {
        self.dispatch(PickerIntent::SelectMunicipality { name: name.into() })
    }

    pub fn reset(&mut self) -> Option<Effect> {
        self.dispatch(PickerIntent::Reset)
    }

    pub fn status(&self) -> StatusView {
        StatusView::from_selection(&self.state.selection)
    }
}
