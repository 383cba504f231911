/// Marker trait for intents.
///
/// Intents represent user actions (selecting an entry, resetting) and
/// system events (a fetch completed).
pub trait Intent: Send + 'static {}
