//! Slot binding.
//!
//! The slot binder keeps the set of child view bindings synchronized with the
//! slide slots the engine currently exposes. Bindings are rebuilt wholesale
//! on every reconciliation (released, re-discovered, re-bound), never
//! patched in place; after a rebuild the bindings are a bijection with the
//! discovered slots (minus slots skipped for stale metadata).

use crate::config::BindFailurePolicy;
use crate::engine::{SlideSlot, SliderEngine};
use crate::error::{CarouselError, Result};
use crate::view::{ItemView, ItemViewFactory};

/// The owned pairing of one slide slot with one instantiated leaf view.
///
/// Releasing is idempotent, and dropping an unreleased binding releases it,
/// so a binding can never outlive its teardown path.
pub struct ChildBinding {
    slot: SlideSlot,
    view: Option<Box<dyn ItemView>>,
}

impl ChildBinding {
    fn new(slot: SlideSlot, view: Box<dyn ItemView>) -> Self {
        Self {
            slot,
            view: Some(view),
        }
    }

    /// The slot this binding is attached to.
    pub fn slot(&self) -> &SlideSlot {
        &self.slot
    }

    /// Whether the view has already been detached.
    pub fn is_released(&self) -> bool {
        self.view.is_none()
    }

    /// Detach and destroy the view.
    ///
    /// Safe to call repeatedly and safe when the engine has already
    /// discarded the hosting node.
    pub fn release(&mut self) {
        if let Some(mut view) = self.view.take() {
            view.detach();
        }
    }
}

impl Drop for ChildBinding {
    fn drop(&mut self) {
        self.release();
    }
}

/// Counters describing one rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebindOutcome {
    /// Slots discovered by the engine.
    pub discovered: usize,
    /// Bindings created.
    pub bound: usize,
    /// Slots skipped for stale metadata (skip-and-continue policy).
    pub skipped: usize,
    /// Whether the rebuild was aborted (abort policy).
    pub aborted: bool,
}

/// Discovers slide slots and owns the child view bindings attached to them.
pub struct SlotBinder<T> {
    factory: Box<dyn ItemViewFactory<T>>,
    bindings: Vec<ChildBinding>,
}

impl<T> SlotBinder<T> {
    /// Create a binder around a leaf-view factory.
    pub fn new(factory: Box<dyn ItemViewFactory<T>>) -> Self {
        Self {
            factory,
            bindings: Vec::new(),
        }
    }

    /// The current bindings, in slot discovery order.
    pub fn bindings(&self) -> &[ChildBinding] {
        &self.bindings
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Release every binding.
    ///
    /// Order does not matter; no binding depends on another.
    pub fn release_all(&mut self) {
        let count = self.bindings.len();
        for binding in &mut self.bindings {
            binding.release();
        }
        self.bindings.clear();
        if count > 0 {
            tracing::trace!(target: "carousel::binder", count, "released bindings");
        }
    }

    /// Bind one discovered slot.
    ///
    /// Looks up the item at the slot's encoded logical index, instantiates a
    /// leaf view for it, and mounts it under the slot's host.
    fn bind_slot(&mut self, items: &[T], slot: SlideSlot) -> Result<ChildBinding> {
        let item = items.get(slot.encoded_index).ok_or_else(|| {
            CarouselError::index_out_of_range(slot.encoded_index, items.len())
        })?;
        let view = self.factory.create(slot.host, item);
        Ok(ChildBinding::new(slot, view))
    }

    /// Full rebuild: release all bindings, discover slots afresh, bind each,
    /// then force a render pass on the host surface.
    ///
    /// A slot whose encoded index has no corresponding item is handled per
    /// `policy`. Under [`BindFailurePolicy::AbortRebuild`] the bindings
    /// created before the failure are released immediately, so partial state
    /// never dangles.
    pub fn rebind(
        &mut self,
        engine: &dyn SliderEngine,
        items: &[T],
        policy: BindFailurePolicy,
    ) -> RebindOutcome {
        self.release_all();

        let slots = engine.slots();
        let mut outcome = RebindOutcome {
            discovered: slots.len(),
            ..RebindOutcome::default()
        };

        for slot in slots {
            match self.bind_slot(items, slot) {
                Ok(binding) => {
                    self.bindings.push(binding);
                    outcome.bound += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        target: "carousel::binder",
                        position = slot.position,
                        encoded = slot.encoded_index,
                        %err,
                        "stale slot metadata"
                    );
                    match policy {
                        BindFailurePolicy::SkipAndContinue => {
                            outcome.skipped += 1;
                        }
                        BindFailurePolicy::AbortRebuild => {
                            self.release_all();
                            outcome.bound = 0;
                            outcome.aborted = true;
                            break;
                        }
                    }
                }
            }
        }

        self.factory.commit();
        tracing::debug!(
            target: "carousel::binder",
            discovered = outcome.discovered,
            bound = outcome.bound,
            skipped = outcome.skipped,
            aborted = outcome.aborted,
            "rebind complete"
        );
        outcome
    }
}
