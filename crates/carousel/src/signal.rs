//! Change-only publication channel.
//!
//! [`ChangeSignal`] is the signal/slot mechanism the controller publishes the
//! active logical index through. It differs from a plain signal in two ways
//! the synchronization protocol depends on:
//!
//! - **Distinct-until-changed**: a candidate value equal to the previously
//!   published one is suppressed, so consumers never see two identical
//!   consecutive emissions even when the engine reports the same active slot
//!   twice.
//! - **Terminal close**: [`close`](ChangeSignal::close) permanently shuts the
//!   channel at controller teardown. Existing connections are dropped, later
//!   publishes do nothing, and late subscribers receive nothing.

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};
use std::sync::atomic::{AtomicBool, Ordering};

new_key_type! {
    /// A unique identifier for a subscriber connection.
    ///
    /// Returned by [`ChangeSignal::connect`]; use it with
    /// [`ChangeSignal::disconnect`] to remove a specific subscriber.
    pub struct ConnectionId;
}

type Slot<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A publication channel that suppresses consecutive duplicate values and
/// can be closed permanently.
///
/// All publication happens on the UI event loop; subscribers are invoked
/// synchronously, in connection order, on the publishing thread.
pub struct ChangeSignal<T> {
    /// All active subscriber connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<T>>>,
    /// The most recently published value, for duplicate suppression.
    last: Mutex<Option<T>>,
    /// Whether the channel has been closed.
    closed: AtomicBool,
}

impl<T: Clone + PartialEq + Send + 'static> Default for ChangeSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + Send + 'static> ChangeSignal<T> {
    /// Create an open channel with no subscribers and no published value.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            last: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    /// Connect a subscriber.
    ///
    /// On a closed channel this is a no-op returning a dead connection ID;
    /// the subscriber will never be invoked.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        if self.is_closed() {
            tracing::debug!(
                target: "carousel::signal",
                "connect on closed channel ignored"
            );
            return ConnectionId::default();
        }
        self.connections.lock().insert(Box::new(slot))
    }

    /// Disconnect a specific subscriber.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Get the number of connected subscribers.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// The most recently published value, if any.
    pub fn last(&self) -> Option<T> {
        self.last.lock().clone()
    }

    /// Whether the channel has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Publish a candidate value.
    ///
    /// The value reaches subscribers only if it differs from the immediately
    /// prior published value and the channel is open. Returns `true` if the
    /// value was forwarded.
    pub fn publish(&self, value: T) -> bool {
        if self.is_closed() {
            tracing::trace!(target: "carousel::signal", "channel closed, dropping publish");
            return false;
        }

        {
            let mut last = self.last.lock();
            if last.as_ref() == Some(&value) {
                tracing::trace!(target: "carousel::signal", "duplicate value suppressed");
                return false;
            }
            *last = Some(value.clone());
        }

        let connections = self.connections.lock();
        tracing::trace!(
            target: "carousel::signal",
            connection_count = connections.len(),
            "publishing changed value"
        );
        for (_, slot) in connections.iter() {
            slot(&value);
        }
        true
    }

    /// Close the channel permanently.
    ///
    /// Drops every connection; subsequent publishes and connects are no-ops.
    /// Closing an already-closed channel does nothing.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.connections.lock().clear();
        tracing::debug!(target: "carousel::signal", "channel closed");
    }
}
