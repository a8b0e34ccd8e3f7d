//! Slider engine capability.
//!
//! The carousel controller never drives the rendered slide strip itself; it
//! delegates to an injected [`SliderEngine`]. Any concrete slider library can
//! sit behind this trait as long as it can enumerate its current slide
//! placeholders, report which one is active, navigate with loop wraparound,
//! and toggle autoplay.
//!
//! A looping engine typically pads the strip with duplicated copies of the
//! first and last items so wraparound animates seamlessly. Several
//! [`SlideSlot`]s encoding the same logical index are therefore expected and
//! never treated as an error.

use std::time::Duration;

/// Opaque mount handle for a slide placeholder.
///
/// The engine assigns one handle per placeholder node; the
/// [`ItemViewFactory`](crate::view::ItemViewFactory) uses it to decide where
/// a leaf view's rendered output is appended. The controller never interprets
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHandle(pub u64);

/// A visual slide placeholder as reported by the engine.
///
/// `encoded_index` is the logical index the engine stamped onto the
/// placeholder when it last rendered. It can go stale: after the item
/// sequence shrinks, a slot may still encode an index that no longer has a
/// corresponding item until the next reconciliation replaces the bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSlot {
    /// Raw position of the slot within the engine's slide strip, in
    /// discovery (DOM) order. Not a logical index.
    pub position: usize,
    /// The logical item index this slot currently represents.
    pub encoded_index: usize,
    /// Where child views mount.
    pub host: SlotHandle,
}

impl SlideSlot {
    /// Create a slot descriptor.
    pub fn new(position: usize, encoded_index: usize, host: SlotHandle) -> Self {
        Self {
            position,
            encoded_index,
            host,
        }
    }
}

/// The injected slider engine.
///
/// Discovery methods (`slots`, `active_slot`) take `&self`; navigation and
/// autoplay mutate engine state and take `&mut self`. All calls happen on the
/// UI event loop; the trait is `Send` so a controller can be handed between
/// threads before it is attached.
pub trait SliderEngine: Send {
    /// Enumerate the current slide placeholders in discovery order.
    ///
    /// The returned set is a snapshot; the engine may re-render placeholders
    /// at any time, which is why bindings are rebuilt rather than patched.
    fn slots(&self) -> Vec<SlideSlot>;

    /// The currently active slide placeholder, if the strip is non-empty.
    fn active_slot(&self) -> Option<SlideSlot>;

    /// Navigate to the slot representing `logical_index`, loop-aware.
    ///
    /// The engine is free to pick the nearest loop-padded copy of the
    /// logical index rather than a specific raw position, and to wrap
    /// out-of-range indices.
    fn slide_to_loop(&mut self, logical_index: usize, speed: Duration);

    /// Start the engine's autoplay capability.
    fn start_autoplay(&mut self);

    /// Stop the engine's autoplay capability.
    fn stop_autoplay(&mut self);
}
