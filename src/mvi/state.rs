//! Base trait for state in the MVI layer.

/// Marker trait for state objects.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// defaulted to the resting state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
