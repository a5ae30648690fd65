//! Fluent builder for constructing a [`Day`].

use std::sync::Arc;

use isle_core::{IslandConfig, IslandObserver, NoopObserver, RandomSource, SharedRng};

use crate::{Day, SimResult};

/// Fluent builder for [`Day`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                         |
/// |------------------|---------------------------------|
/// | `.rng(r)`        | `SharedRng::from_entropy()`     |
/// | `.seed(s)`       | (shorthand for a seeded rng)    |
/// | `.observer(o)`   | `NoopObserver`                  |
///
/// # Example
///
/// ```rust,ignore
/// let day = DayBuilder::new(config)
///     .seed(42)
///     .observer(Arc::new(TracingObserver))
///     .build()?;
/// let report = day.run()?;
/// ```
pub struct DayBuilder {
    config:   IslandConfig,
    rng:      Option<Arc<dyn RandomSource>>,
    observer: Option<Arc<dyn IslandObserver>>,
}

impl DayBuilder {
    pub fn new(config: IslandConfig) -> Self {
        Self { config, rng: None, observer: None }
    }

    /// Inject the random source shared by every thread of the day.
    pub fn rng(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Use a `SharedRng` seeded with `seed`.  Draws repeat; thread
    /// interleaving, and therefore the day, does not.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(Arc::new(SharedRng::seeded(seed)))
    }

    pub fn observer(mut self, observer: Arc<dyn IslandObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Day`].
    pub fn build(self) -> SimResult<Day> {
        self.config.validate()?;
        let rng = self
            .rng
            .unwrap_or_else(|| Arc::new(SharedRng::from_entropy()) as Arc<dyn RandomSource>);
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(NoopObserver) as Arc<dyn IslandObserver>);
        Ok(Day::new(Arc::new(self.config), rng, observer))
    }
}
