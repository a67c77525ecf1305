//! Step observer trait for monitoring batched spring updates.

/// Trait for observing [`SpringGroup`](crate::group::SpringGroup) steps.
///
/// Implement this trait to monitor stepping (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called once per step after the shared decay has been computed.
    fn on_premult(&mut self, _factor_dt: f64, _decay: f64) {}

    /// Called after the spring at `index` has been advanced.
    fn on_spring_updated(&mut self, _index: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
