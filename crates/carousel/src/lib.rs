//! A looping, auto-advancing slide carousel controller.
//!
//! This crate synchronizes a caller-supplied sequence of data items with the
//! slide slots of an external slider engine, attaching one dynamically
//! created leaf view per slot and publishing the currently visible item's
//! logical index. The slider engine and the leaf view are injected
//! capabilities ([`SliderEngine`], [`ItemViewFactory`]); the controller owns
//! only the synchronization protocol:
//!
//! - **Slot binding**: the engine's slot set may contain loop-padding
//!   duplicates of the same logical index; every discovered slot gets
//!   exactly one child view binding, rebuilt wholesale on each
//!   reconciliation.
//! - **Debounced reconciliation**: bursts of data or layout changes coalesce
//!   into a single trailing-edge rebuild, cancellable at teardown.
//! - **Index translation**: raw active-slot positions translate to stable
//!   logical indices, published through a change-only signal that never
//!   emits consecutive duplicates and closes permanently at teardown.
//!
//! # Example
//!
//! ```ignore
//! use carousel::{Carousel, CarouselConfig};
//! use std::time::Instant;
//!
//! let mut carousel = Carousel::new(engine, factory, CarouselConfig::default());
//! carousel.active_index_changed.connect(|&index| {
//!     println!("now showing item {index}");
//! });
//!
//! carousel.set_items(vec![10, 20, 30], Instant::now());
//! carousel.attach();
//!
//! // Host event loop, each turn:
//! carousel.tick(Instant::now());
//! ```
//!
//! # Logging
//!
//! Instrumented with the `tracing` crate; install a subscriber such as
//! `tracing_subscriber::fmt::init()` to see logs. Filter by the targets in
//! [`targets`].

pub mod binding;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod signal;
pub mod view;

#[cfg(test)]
pub(crate) mod mock;

pub use binding::{ChildBinding, RebindOutcome, SlotBinder};
pub use config::{BindFailurePolicy, CarouselConfig};
pub use controller::{Carousel, LifecycleState};
pub use engine::{SlideSlot, SliderEngine, SlotHandle};
pub use error::{CarouselError, Result};
pub use scheduler::ReconcileScheduler;
pub use signal::{ChangeSignal, ConnectionId};
pub use view::{ItemView, ItemViewFactory};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Controller lifecycle and index publication.
    pub const CONTROLLER: &str = "carousel::controller";
    /// Reconciliation scheduling and execution.
    pub const RECONCILE: &str = "carousel::reconcile";
    /// Slot discovery and child view binding.
    pub const BINDER: &str = "carousel::binder";
    /// The change-only index channel.
    pub const SIGNAL: &str = "carousel::signal";
}
