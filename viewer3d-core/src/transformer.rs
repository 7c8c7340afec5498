/// Facade forwarding transform requests to the currently selected strategy
use std::fmt;

use log::{trace, warn};

use crate::error::TransformError;
use crate::geometry::Point;
use crate::movement::Movement;
use crate::transform::TransformationStrategy;

/// Binds one [`TransformationStrategy`] at a time and applies it to models.
///
/// The transformer only borrows the strategy; the caller keeps it alive for
/// `'a`. Vertex data is borrowed per call and never retained.
#[derive(Clone, Copy, Default)]
pub struct ObjectTransformer<'a> {
    strategy: Option<&'a dyn TransformationStrategy>,
}

impl<'a> ObjectTransformer<'a> {
    /// A transformer with no strategy bound
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: &'a dyn TransformationStrategy) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Bind `strategy`, replacing any previous one
    pub fn set_strategy(&mut self, strategy: &'a dyn TransformationStrategy) {
        trace!("binding {} strategy", strategy.name());
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn strategy(&self) -> Option<&'a dyn TransformationStrategy> {
        self.strategy
    }

    pub fn is_bound(&self) -> bool {
        self.strategy.is_some()
    }

    /// Apply `movement` with `magnitude` to every vertex through the bound
    /// strategy.
    ///
    /// Fails with [`TransformError::NoStrategy`] without touching `vertices`
    /// when nothing is bound. A movement the strategy does not handle is
    /// logged and leaves the vertices unchanged.
    pub fn transform_model(
        &self,
        vertices: &mut [Point],
        movement: Movement,
        magnitude: f64,
    ) -> Result<(), TransformError> {
        let strategy = self.strategy.ok_or(TransformError::NoStrategy)?;

        if !strategy.supports(movement) {
            warn!(
                "{} strategy does not handle {}, vertices left unchanged",
                strategy.name(),
                movement
            );
        }

        strategy.transform(vertices, movement, magnitude);
        Ok(())
    }
}

impl fmt::Debug for ObjectTransformer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectTransformer")
            .field("strategy", &self.strategy.map(|s| s.name()))
            .finish()
    }
}
