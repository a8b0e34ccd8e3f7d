//! Carousel controller.
//!
//! [`Carousel`] keeps an ordered item sequence synchronized with the slide
//! slots of an injected [`SliderEngine`], owning the leaf-view binding per
//! slot and republishing the active logical index on change. It is the glue
//! between three collaborators it does not implement itself: the slider
//! engine (slot discovery, navigation, autoplay), the leaf item view
//! (rendering one data value), and the hosting event loop (which drives
//! [`tick`](Carousel::tick) and forwards the engine's active-slot
//! notifications).
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --attach()--> Ready --reconcile--> Ready --teardown()--> Destroyed
//! ```
//!
//! `Destroyed` is terminal: the pending reconciliation (if any) is cancelled,
//! all bindings are released, and the index channel is closed so no further
//! events are emitted. Dropping an undestroyed controller tears it down.
//!
//! # Ordering
//!
//! Everything runs single-threaded on the UI event loop. A reconciliation
//! always runs to completion (release-all, discover, bind-all) within one
//! `tick` turn, so an active-slot notification arriving afterwards is always
//! translated against the new bindings, never against partial rebuild state.

use std::time::{Duration, Instant};

use crate::binding::{RebindOutcome, SlotBinder};
use crate::config::CarouselConfig;
use crate::engine::SliderEngine;
use crate::scheduler::ReconcileScheduler;
use crate::signal::ChangeSignal;
use crate::view::ItemViewFactory;

/// Lifecycle state of a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed but not yet attached to the rendered surface.
    Uninitialized,
    /// Attached; reconciliations run and indices publish.
    Ready,
    /// Torn down. Terminal.
    Destroyed,
}

/// A looping slide carousel controller.
///
/// Generic over the caller-supplied item identifier type `T`; the sequence
/// order defines logical indices `0..len`. The sequence is replaceable only
/// wholesale via [`set_items`](Self::set_items); the controller reads it,
/// never mutates it.
///
/// # Signals
///
/// - `active_index_changed(usize)`: the currently visible item's logical
///   index, duplicate consecutive values suppressed, closed at teardown.
pub struct Carousel<T> {
    engine: Box<dyn SliderEngine>,
    binder: SlotBinder<T>,
    scheduler: ReconcileScheduler,
    config: CarouselConfig,
    items: Vec<T>,
    state: LifecycleState,

    /// Signal carrying the active logical index, change-only.
    pub active_index_changed: ChangeSignal<usize>,
}

impl<T> Carousel<T> {
    /// Create a controller around an engine and a leaf-view factory.
    ///
    /// The controller starts `Uninitialized`; nothing binds and nothing
    /// publishes until [`attach`](Self::attach).
    pub fn new(
        engine: Box<dyn SliderEngine>,
        factory: Box<dyn ItemViewFactory<T>>,
        config: CarouselConfig,
    ) -> Self {
        let scheduler = ReconcileScheduler::new(config.debounce);
        Self {
            engine,
            binder: SlotBinder::new(factory),
            scheduler,
            config,
            items: Vec::new(),
            state: LifecycleState::Uninitialized,
            active_index_changed: ChangeSignal::new(),
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the controller has been torn down.
    pub fn is_destroyed(&self) -> bool {
        self.state == LifecycleState::Destroyed
    }

    /// Number of items in the current sequence.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of live child view bindings.
    pub fn binding_count(&self) -> usize {
        self.binder.binding_count()
    }

    /// The configuration the controller was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The most recently published logical index, if any.
    pub fn last_published_index(&self) -> Option<usize> {
        self.active_index_changed.last()
    }

    /// Translate the engine's current active slot to a logical index.
    ///
    /// Returns `None` when the strip is empty or the active slot's metadata
    /// is stale. Reads only; does not publish.
    pub fn active_logical_index(&self) -> Option<usize> {
        let slot = self.engine.active_slot()?;
        if slot.encoded_index < self.items.len() {
            Some(slot.encoded_index)
        } else {
            None
        }
    }

    /// Time remaining until a pending reconciliation is due.
    ///
    /// `None` when nothing is pending. Hosts can sleep this long between
    /// event-loop turns.
    pub fn time_until_reconcile(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to the rendered surface.
    ///
    /// Transitions `Uninitialized -> Ready`, runs the first full
    /// reconciliation immediately (not debounced), publishes the initial
    /// active index, and starts autoplay when configured. Returns `true` on
    /// the transition; attaching twice or after teardown is a logged no-op.
    pub fn attach(&mut self) -> bool {
        match self.state {
            LifecycleState::Uninitialized => {}
            LifecycleState::Ready => {
                tracing::debug!(target: "carousel::controller", "attach on attached controller ignored");
                return false;
            }
            LifecycleState::Destroyed => {
                tracing::warn!(target: "carousel::controller", "attach after teardown ignored");
                return false;
            }
        }

        self.state = LifecycleState::Ready;
        self.reconcile_now();
        self.publish_active_index();
        if self.config.autoplay_on_attach {
            self.engine.start_autoplay();
        }
        true
    }

    /// Tear down the controller. Terminal, idempotent.
    ///
    /// Cancels any pending reconciliation so it cannot fire against
    /// destroyed state, releases every binding, and closes the index
    /// channel permanently.
    pub fn teardown(&mut self) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        self.scheduler.cancel();
        self.binder.release_all();
        self.active_index_changed.close();
        self.state = LifecycleState::Destroyed;
        tracing::debug!(target: "carousel::controller", "controller destroyed");
    }

    // =========================================================================
    // Data and reconciliation
    // =========================================================================

    /// Replace the item sequence.
    ///
    /// Schedules a debounced reconciliation once the controller is `Ready`;
    /// before [`attach`](Self::attach) the sequence is stored and the first
    /// population happens during attach. Ignored after teardown.
    pub fn set_items(&mut self, items: Vec<T>, now: Instant) {
        match self.state {
            LifecycleState::Destroyed => {
                tracing::warn!(target: "carousel::controller", "set_items after teardown ignored");
            }
            LifecycleState::Uninitialized => {
                self.items = items;
            }
            LifecycleState::Ready => {
                self.items = items;
                self.scheduler.request(now);
            }
        }
    }

    /// Request a full rebuild of all bindings, debounced.
    ///
    /// For explicit triggers such as structural layout changes on the
    /// consuming surface.
    pub fn request_reconcile(&mut self, now: Instant) {
        if self.state != LifecycleState::Ready {
            tracing::debug!(
                target: "carousel::reconcile",
                state = ?self.state,
                "reconcile request outside Ready ignored"
            );
            return;
        }
        self.scheduler.request(now);
    }

    /// One cooperative event-loop turn.
    ///
    /// Runs the pending reconciliation if its debounce window has elapsed.
    /// Returns `true` when a rebuild ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != LifecycleState::Ready {
            return false;
        }
        if !self.scheduler.fire_if_due(now) {
            return false;
        }
        self.reconcile_now();
        true
    }

    /// Run the full unbind-all/discover/bind-all cycle immediately.
    #[tracing::instrument(skip(self), target = "carousel::reconcile", level = "debug")]
    fn reconcile_now(&mut self) -> RebindOutcome {
        self.binder
            .rebind(self.engine.as_ref(), &self.items, self.config.bind_failure)
    }

    // =========================================================================
    // Index translation
    // =========================================================================

    /// Handle the engine's active-slot-changed notification.
    ///
    /// Translates the active slot's encoded index to a logical index and
    /// publishes it; the channel suppresses consecutive duplicates. A stale
    /// encoded index is logged and not published; the stream stays on the
    /// last good value until the next reconciliation. Ignored after
    /// teardown.
    pub fn on_active_slot_changed(&mut self) {
        if self.state != LifecycleState::Ready {
            return;
        }
        self.publish_active_index();
    }

    fn publish_active_index(&mut self) {
        let Some(slot) = self.engine.active_slot() else {
            return;
        };
        if slot.encoded_index >= self.items.len() {
            tracing::warn!(
                target: "carousel::controller",
                position = slot.position,
                encoded = slot.encoded_index,
                len = self.items.len(),
                "active slot metadata stale, index not published"
            );
            return;
        }
        self.active_index_changed.publish(slot.encoded_index);
    }

    // =========================================================================
    // Navigation and autoplay
    // =========================================================================

    /// Navigate to the slot representing `logical_index`, loop-aware.
    ///
    /// Always stops autoplay first: manual navigation means the user or API
    /// is taking control. `speed` falls back to the configured
    /// [`slide_speed`](CarouselConfig::slide_speed). Returns `false` after
    /// teardown.
    pub fn slide_to(&mut self, logical_index: usize, speed: Option<Duration>) -> bool {
        if self.state == LifecycleState::Destroyed {
            tracing::warn!(target: "carousel::controller", "slide_to after teardown ignored");
            return false;
        }
        self.engine.stop_autoplay();
        let speed = speed.unwrap_or(self.config.slide_speed);
        self.engine.slide_to_loop(logical_index, speed);
        true
    }

    /// Start the engine's autoplay.
    ///
    /// With `reset`, first navigates to logical index 0 with zero
    /// transition duration.
    pub fn start_autoplay(&mut self, reset: bool) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        if reset {
            self.engine.slide_to_loop(0, Duration::ZERO);
        }
        self.engine.start_autoplay();
    }

    /// Stop the engine's autoplay.
    ///
    /// With `reset`, first navigates to logical index 0 with zero
    /// transition duration.
    pub fn stop_autoplay(&mut self, reset: bool) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        if reset {
            self.engine.slide_to_loop(0, Duration::ZERO);
        }
        self.engine.stop_autoplay();
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// Controllers are handed between threads before attach; everything they own
// must travel with them.
static_assertions::assert_impl_all!(Carousel<i64>: Send);
