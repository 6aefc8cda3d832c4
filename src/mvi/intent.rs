//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Navigation requests that were already resolved to indices
/// - Effect completion signals coming back from the presenter
pub trait Intent: Send + 'static {}
