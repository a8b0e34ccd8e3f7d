//! Error types for the carousel controller.

/// A specialized Result type for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors that can occur while synchronizing bindings with slide slots.
///
/// Two failure modes named by the design are deliberately *not* error
/// values: releasing an already-released binding is an idempotent no-op, and
/// tearing down while a rebuild is pending cancels the pending work. Neither
/// is ever surfaced to the caller; the published index stream carries no
/// errors at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A discovered slot encodes a logical index with no corresponding item.
    ///
    /// Typically a race between a sequence shrink and the engine
    /// re-rendering its slots; the slot metadata is stale until the next
    /// reconciliation.
    #[error("slot encodes logical index {encoded} but only {len} items exist")]
    IndexOutOfRange { encoded: usize, len: usize },
}

impl CarouselError {
    /// Create an out-of-range error for a stale slot.
    pub fn index_out_of_range(encoded: usize, len: usize) -> Self {
        Self::IndexOutOfRange { encoded, len }
    }
}
