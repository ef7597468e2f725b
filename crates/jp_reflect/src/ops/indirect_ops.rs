use crate::Reflect;

// -----------------------------------------------------------------------------
// Indirect

/// A value that refers to zero or one other value.
///
/// `Option<T>` is absent when `None`; `Box<T>` and `Arc<T>` always refer to
/// their contents.
pub trait Indirect: Reflect {
    /// Returns the referenced value, or `None` for a null reference.
    fn target(&self) -> Option<&dyn Reflect>;
}
