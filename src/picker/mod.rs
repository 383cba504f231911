//! Cascading subdivision → municipality selection.
//!
//! # Architecture
//!
//! Uses the MVI primitives from [`crate::mvi`]:
//! - `state.rs` - selection fields, fetched lists, fetch generation
//! - `intent.rs` - user selections and completed fetches
//! - `reducer.rs` - transitions (pure, sorts incoming lists)
//! - `effect.rs` - fetches implied by transitions, and how to run them
//! - `view.rs` - status readout derived from the selection
//! - `component.rs` - [`LocationPicker`], tying the above together

mod component;
mod effect;
mod intent;
mod reducer;
mod state;
mod view;

pub use component::LocationPicker;
pub use effect::{derive_effect, Effect};
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::{PickerState, Selection};
pub use view::{StatusView, MUNICIPALITY_PROMPT, SUBDIVISION_PROMPT};
