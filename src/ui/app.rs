use crate::geo::{Municipality, Subdivision};
use crate::picker::{Effect, LocationPicker, PickerIntent, StatusView};
use tokio::sync::mpsc;

/// The two selection controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Subdivision,
    Municipality,
}

pub type EffectSender = mpsc::Sender<Effect>;

/// Front-end state around the picker: focus, highlighted rows and the
/// channel effects leave through.
///
/// Row 0 of every control is the non-selectable placeholder, so a cursor
/// of `n` highlights option `n - 1`.
pub struct App {
    should_quit: bool,
    focus: Control,
    picker: LocationPicker,
    subdivision_cursor: usize,
    municipality_cursor: usize,
    effect_sender: Option<EffectSender>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Control::Subdivision,
            picker: LocationPicker::new(),
            subdivision_cursor: 0,
            municipality_cursor: 0,
            effect_sender: None,
        }
    }

    pub fn set_effect_sender(&mut self, sender: EffectSender) {
        self.effect_sender = Some(sender);
    }

    /// Activates the picker, issuing the one-time subdivision fetch.
    pub fn mount(&mut self) {
        if let Some(effect) = self.picker.initialize() {
            self.send_effect(effect);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn picker(&self) -> &LocationPicker {
        &self.picker
    }

    pub fn status(&self) -> StatusView {
        self.picker.status()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Control::Subdivision => Control::Municipality,
            Control::Municipality => Control::Subdivision,
        };
    }

    pub fn subdivision_options(&self) -> &[Subdivision] {
        &self.picker.state().subdivisions
    }

    /// Empty unless the held list was loaded for the current subdivision
    /// selection, so a previous subdivision's names are never offered.
    pub fn municipality_options(&self) -> &[Municipality] {
        if self.picker.state().has_current_municipalities() {
            &self.picker.state().municipalities
        } else {
            &[]
        }
    }

    pub fn cursor(&self, control: Control) -> usize {
        match control {
            Control::Subdivision => self.subdivision_cursor,
            Control::Municipality => self.municipality_cursor,
        }
    }

    /// Moves the highlight in the focused control, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: i32) {
        let rows = self.option_count(self.focus) + 1;
        let current = self.cursor(self.focus).min(rows - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                rows - 1
            } else {
                current - 1
            }
        } else if current + 1 >= rows {
            0
        } else {
            current + 1
        };
        self.set_cursor(self.focus, next);
    }

    /// Selects the highlighted option of the focused control. The
    /// placeholder row selects nothing.
    pub fn confirm(&mut self) {
        let Some(index) = self.cursor(self.focus).checked_sub(1) else {
            return;
        };

        match self.focus {
            Control::Subdivision => {
                let Some(code) = self.subdivision_options().get(index).map(|s| s.code.clone())
                else {
                    return;
                };
                tracing::info!(code = %code, "Subdivision selected");
                self.municipality_cursor = 0;
                self.dispatch(PickerIntent::SelectSubdivision { code });
                self.focus = Control::Municipality;
            }
            Control::Municipality => {
                let Some(name) = self.municipality_options().get(index).map(|m| m.name.clone())
                else {
                    return;
                };
                tracing::info!(name = %name, "Municipality selected");
                self.dispatch(PickerIntent::SelectMunicipality { name });
            }
        }
    }

    pub fn reset(&mut self) {
        tracing::info!("Selection reset");
        self.dispatch(PickerIntent::Reset);
        self.subdivision_cursor = 0;
        self.municipality_cursor = 0;
        self.focus = Control::Subdivision;
    }

    /// Feeds a completed fetch back into the picker.
    pub fn apply(&mut self, intent: PickerIntent) {
        let accepted_municipalities = matches!(
            intent,
            PickerIntent::MunicipalitiesLoaded { generation, .. }
                if self.picker.state().is_current(generation)
        );
        self.dispatch(intent);
        if accepted_municipalities {
            self.municipality_cursor = 0;
        }
        self.clamp_cursors();
    }

    fn dispatch(&mut self, intent: PickerIntent) {
        if let Some(effect) = self.picker.dispatch(intent) {
            self.send_effect(effect);
        }
    }

    fn send_effect(&mut self, effect: Effect) {
        let Some(sender) = &self.effect_sender else {
            tracing::warn!(effect = %effect.label(), "No effect runner attached");
            return;
        };

        if let Err(err) = sender.try_send(effect) {
            tracing::error!("Effect send failed: {}", err);
        }
    }

    fn option_count(&self, control: Control) -> usize {
        match control {
            Control::Subdivision => self.subdivision_options().len(),
            Control::Municipality => self.municipality_options().len(),
        }
    }

    fn set_cursor(&mut self, control: Control, value: usize) {
        match control {
            Control::Subdivision => self.subdivision_cursor = value,
            Control::Municipality => self.municipality_cursor = value,
        }
    }

    fn clamp_cursors(&mut self) {
        self.subdivision_cursor = self
            .subdivision_cursor
            .min(self.option_count(Control::Subdivision));
        self.municipality_cursor = self
            .municipality_cursor
            .min(self.option_count(Control::Municipality));
    }
}
