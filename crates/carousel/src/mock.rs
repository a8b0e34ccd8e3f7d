//! Mock collaborators shared by the unit tests.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::engine::{SlideSlot, SliderEngine, SlotHandle};
use crate::view::{ItemView, ItemViewFactory};

/// Install a fmt subscriber filtered to the crate's tracing targets so
/// failing tests carry the controller's logs. The filter can be overridden
/// through `RUST_LOG`. First caller wins; later calls are no-ops.
pub(crate) fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=trace,{}=trace,{}=trace,{}=trace",
            crate::targets::CONTROLLER,
            crate::targets::RECONCILE,
            crate::targets::BINDER,
            crate::targets::SIGNAL,
        ))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Shared, inspectable state behind a [`MockEngine`].
#[derive(Default)]
pub(crate) struct EngineState {
    /// Slots the engine reports from `slots()`.
    pub slots: Vec<SlideSlot>,
    /// Raw position of the active slot, if any.
    pub active_position: Option<usize>,
    /// Chronological record of navigation/autoplay calls.
    pub calls: Vec<String>,
}

/// A scripted slider engine. Tests mutate the shared state to stage slots
/// and the active position, and assert on the recorded calls.
#[derive(Clone)]
pub(crate) struct MockEngine {
    pub state: Arc<Mutex<EngineState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(EngineState::default())),
        }
    }

    /// Stage `encoded` as the slots, positions and hosts numbered in order.
    pub fn stage_slots(&self, encoded: &[usize]) {
        let mut state = self.state.lock();
        state.slots = encoded
            .iter()
            .enumerate()
            .map(|(position, &index)| SlideSlot::new(position, index, SlotHandle(position as u64)))
            .collect();
    }

    pub fn set_active_position(&self, position: usize) {
        self.state.lock().active_position = Some(position);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }
}

impl SliderEngine for MockEngine {
    fn slots(&self) -> Vec<SlideSlot> {
        self.state.lock().slots.clone()
    }

    fn active_slot(&self) -> Option<SlideSlot> {
        let state = self.state.lock();
        let position = state.active_position?;
        state.slots.iter().find(|s| s.position == position).copied()
    }

    fn slide_to_loop(&mut self, logical_index: usize, speed: Duration) {
        self.state
            .lock()
            .calls
            .push(format!("slide_to_loop({logical_index}, {}ms)", speed.as_millis()));
    }

    fn start_autoplay(&mut self) {
        self.state.lock().calls.push("start_autoplay".to_string());
    }

    fn stop_autoplay(&mut self) {
        self.state.lock().calls.push("stop_autoplay".to_string());
    }
}

/// Shared, inspectable state behind a [`MockFactory`].
#[derive(Default)]
pub(crate) struct FactoryState {
    /// `(host, item)` per `create` call, in order.
    pub created: Vec<(SlotHandle, i64)>,
    /// Number of views detached so far.
    pub detached: usize,
    /// Number of `commit` passes.
    pub commits: usize,
}

pub(crate) struct MockView {
    state: Arc<Mutex<FactoryState>>,
    detached: bool,
}

impl ItemView for MockView {
    fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.state.lock().detached += 1;
    }
}

/// A leaf-view factory that records every instantiation.
#[derive(Clone)]
pub(crate) struct MockFactory {
    pub state: Arc<Mutex<FactoryState>>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FactoryState::default())),
        }
    }

    /// Items injected into created views, in creation order.
    pub fn created_items(&self) -> Vec<i64> {
        self.state.lock().created.iter().map(|(_, item)| *item).collect()
    }

    pub fn detached_count(&self) -> usize {
        self.state.lock().detached
    }
}

impl ItemViewFactory<i64> for MockFactory {
    fn create(&mut self, host: SlotHandle, item: &i64) -> Box<dyn ItemView> {
        self.state.lock().created.push((host, *item));
        Box::new(MockView {
            state: self.state.clone(),
            detached: false,
        })
    }

    fn commit(&mut self) {
        self.state.lock().commits += 1;
    }
}
