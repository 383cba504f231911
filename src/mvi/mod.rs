//! Model-View-Intent (MVI) primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                     │
//!    │                     └──→ Effect ──→ runner (async I/O)
//!    └───────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, replaced wholesale on every transition
//! - **Intent**: user actions or completed fetches
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Effects are derived from transitions by the feature module and executed
//! outside the reducer, so no state transition ever awaits.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;
