//! Carousel configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a rebuild does when binding one slot fails with stale metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindFailurePolicy {
    /// Skip the stale slot, log, and keep binding the remaining slots. The
    /// skipped slot stays visually blank until the next reconciliation
    /// corrects it.
    #[default]
    SkipAndContinue,
    /// Abort the rebuild at the first stale slot. Bindings created up to the
    /// failure point are released, leaving the strip unbound until the next
    /// reconciliation.
    AbortRebuild,
}

/// Tunables for a [`Carousel`](crate::controller::Carousel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Trailing-edge debounce window for reconciliation requests.
    pub debounce: Duration,
    /// Transition duration passed to the engine for [`slide_to`]
    /// navigations that do not specify one.
    ///
    /// [`slide_to`]: crate::controller::Carousel::slide_to
    pub slide_speed: Duration,
    /// Policy applied when binding a discovered slot fails.
    pub bind_failure: BindFailurePolicy,
    /// Start the engine's autoplay when the controller first attaches.
    pub autoplay_on_attach: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            slide_speed: Duration::from_millis(300),
            bind_failure: BindFailurePolicy::default(),
            autoplay_on_attach: false,
        }
    }
}

impl CarouselConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce window using builder pattern.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the default navigation speed using builder pattern.
    pub fn with_slide_speed(mut self, speed: Duration) -> Self {
        self.slide_speed = speed;
        self
    }

    /// Set the bind failure policy using builder pattern.
    pub fn with_bind_failure(mut self, policy: BindFailurePolicy) -> Self {
        self.bind_failure = policy;
        self
    }

    /// Set whether autoplay starts on attach using builder pattern.
    pub fn with_autoplay_on_attach(mut self, autoplay: bool) -> Self {
        self.autoplay_on_attach = autoplay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.bind_failure, BindFailurePolicy::SkipAndContinue);
        assert!(!config.autoplay_on_attach);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CarouselConfig::new()
            .with_debounce(Duration::from_millis(10))
            .with_slide_speed(Duration::from_millis(150))
            .with_bind_failure(BindFailurePolicy::AbortRebuild)
            .with_autoplay_on_attach(true);

        assert_eq!(config.debounce, Duration::from_millis(10));
        assert_eq!(config.slide_speed, Duration::from_millis(150));
        assert_eq!(config.bind_failure, BindFailurePolicy::AbortRebuild);
        assert!(config.autoplay_on_attach);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CarouselConfig::new()
            .with_debounce(Duration::from_millis(25))
            .with_bind_failure(BindFailurePolicy::AbortRebuild);

        let json = serde_json::to_string(&config).unwrap();
        let back: CarouselConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
