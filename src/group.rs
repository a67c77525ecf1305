//! Batches of vector springs stepped with one shared decay.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::spring::VecSpring;
use crate::step::Premult;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// A set of springs that always share a factor and timestep.
///
/// Each [`SpringGroup::step`] evaluates the exponential once and reuses it
/// for every spring, which is the point of the pre-multiplied step.
#[derive(Clone, Debug, Default)]
pub struct SpringGroup<V: Vec> {
    springs: AllocVec<VecSpring<V>>,
}

impl<V: Vec> SpringGroup<V> {
    pub fn new() -> Self {
        SpringGroup { springs: AllocVec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SpringGroup { springs: AllocVec::with_capacity(capacity) }
    }

    /// Add a spring and return its index.
    pub fn add(&mut self, spring: VecSpring<V>) -> usize {
        let idx = self.springs.len();
        self.springs.push(spring);
        idx
    }

    pub fn step<O: StepObserver>(
        &mut self,
        dt: V::Scalar,
        config: &SpringConfig<V::Scalar>,
        observer: &mut O,
    ) {
        self.step_premult(&config.premult(dt), observer);
    }

    /// Step with a decay shared with springs outside the group.
    pub fn step_premult<O: StepObserver>(&mut self, premult: &Premult<V::Scalar>, observer: &mut O) {
        observer.on_premult(premult.factor_dt().to_f64(), premult.decay().to_f64());

        for (i, spring) in self.springs.iter_mut().enumerate() {
            spring.update_premult(premult);
            observer.on_spring_updated(i);
        }

        observer.on_step_complete();
    }

    pub fn set_target(&mut self, index: usize, target: V) {
        self.springs[index].set_target(target);
    }

    /// Point every spring at the same target.
    pub fn set_all_targets(&mut self, target: V) {
        for spring in self.springs.iter_mut() {
            spring.set_target(target);
        }
    }

    pub fn is_settled(&self, eps_pos: V::Scalar, eps_vel: V::Scalar) -> bool {
        self.springs.iter().all(|s| s.is_settled(eps_pos, eps_vel))
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.springs.iter().map(|s| s.position()).collect()
    }

    pub fn len(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.springs.is_empty() }
    pub fn spring(&self, index: usize) -> &VecSpring<V> { &self.springs[index] }
    pub fn spring_mut(&mut self, index: usize) -> &mut VecSpring<V> { &mut self.springs[index] }

    pub fn remove(&mut self, index: usize) -> VecSpring<V> {
        self.springs.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.springs.clear();
    }
}
