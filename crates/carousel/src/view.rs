//! Leaf item view capability.
//!
//! The controller treats the per-item view the way the model/view/delegate
//! pattern treats a delegate: a capability that renders exactly one data
//! value, attached under a host node, created and destroyed explicitly. No
//! pooling, no in-place patching, one instantiation per binding.

use crate::engine::SlotHandle;

/// An instantiated leaf view mounted under one slide slot.
///
/// The only operation the controller ever needs is [`detach`](Self::detach):
/// remove the rendered output from its hosting container and release every
/// resource the instantiation holds.
pub trait ItemView: Send {
    /// Detach and destroy the view.
    ///
    /// Must be idempotent, and must tolerate the hosting node having already
    /// been discarded by the engine: a second detach, or a detach after the
    /// engine re-rendered the strip, is a no-op rather than a fault.
    fn detach(&mut self);
}

/// Instantiates leaf views for item data.
///
/// `create` covers the whole mount sequence: instantiate the view, inject
/// the item value, force a synchronous render pass, and append the rendered
/// output under `host`. The controller calls it once per discovered slot
/// during a reconciliation.
pub trait ItemViewFactory<T>: Send {
    /// Instantiate a view for `item`, mounted under `host`.
    fn create(&mut self, host: SlotHandle, item: &T) -> Box<dyn ItemView>;

    /// Force a change-detection/render pass on the host surface.
    ///
    /// Called once at the end of every rebuild so newly attached views become
    /// visible. Surfaces that render synchronously in `create` can keep the
    /// default no-op.
    fn commit(&mut self) {}
}
