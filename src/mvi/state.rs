/// Marker trait for state records.
///
/// States are cloneable snapshots, comparable for change detection, with a
/// `Default` so a reducer can take ownership through `std::mem::take`.
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}
