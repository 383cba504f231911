//! Non-interactive commands, driven through the same picker as the UI.

use crate::geo::{GeoError, GeoLookupService, Municipality, Subdivision};
use crate::picker::{Effect, LocationPicker};

/// Mounts a picker and returns its sorted subdivision list.
pub async fn list_states(service: &dyn GeoLookupService) -> Result<Vec<Subdivision>, GeoError> {
    let mut picker = LocationPicker::new();
    let effect = picker.initialize();
    settle(&mut picker, effect, service).await?;
    Ok(picker.state().subdivisions.clone())
}

/// Selects `code` (trimmed, upper-cased) and returns the sorted
/// municipality list it loads.
pub async fn list_municipalities(
    service: &dyn GeoLookupService,
    code: &str,
) -> Result<Vec<Municipality>, GeoError> {
    let code = code.trim().to_ascii_uppercase();
    let mut picker = LocationPicker::new();
    let Some(effect) = picker.on_subdivision_selected(code.clone()) else {
        return Err(GeoError::InvalidCode(code));
    };
    settle(&mut picker, Some(effect), service).await?;
    Ok(picker.state().municipalities.clone())
}

/// Runs effects until the picker stops asking for more.
async fn settle(
    picker: &mut LocationPicker,
    mut next: Option<Effect>,
    service: &dyn GeoLookupService,
) -> Result<(), GeoError> {
    while let Some(effect) = next.take() {
        let intent = effect.execute(service).await?;
        next = picker.dispatch(intent);
    }
    Ok(())
}

pub fn format_states(subdivisions: &[Subdivision]) -> String {
    subdivisions
        .iter()
        .map(|s| format!("{:<3} {}\n", s.code, s.name))
        .collect()
}

pub fn format_municipalities(municipalities: &[Municipality]) -> String {
    municipalities
        .iter()
        .map(|m| format!("{}\n", m.name))
        .collect()
}
