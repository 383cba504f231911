//! Status readout derived from the selection alone.

use super::state::Selection;

pub const SUBDIVISION_PROMPT: &str = "Please select a state!";
pub const MUNICIPALITY_PROMPT: &str = "Please select a municipality!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub subdivision_prompt: bool,
    pub municipality_prompt: bool,
    /// `"<code> / <name>"` once both fields are set.
    pub selected: Option<String>,
}

impl StatusView {
    pub fn from_selection(selection: &Selection) -> Self {
        let selected = (selection.has_subdivision() && selection.has_municipality()).then(|| {
            format!(
                "{} / {}",
                selection.subdivision_code, selection.municipality_name
            )
        });
        Self {
            subdivision_prompt: !selection.has_subdivision(),
            municipality_prompt: !selection.has_municipality(),
            selected,
        }
    }

    /// Lines in display order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.subdivision_prompt {
            lines.push(SUBDIVISION_PROMPT.to_string());
        }
        if self.municipality_prompt {
            lines.push(MUNICIPALITY_PROMPT.to_string());
        }
        if let Some(pair) = &self.selected {
            lines.push(format!("Selected: {pair}"));
        }
        lines
    }
}
