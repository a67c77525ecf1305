//! Spring tuning.

use crate::error::SpringError;
use crate::float::Float;
use crate::step::Premult;

const DEFAULT_FACTOR: f32 = 10.0;
const SETTLE_MAX_ITERATIONS: usize = 100;
const SETTLE_TOLERANCE: f64 = 1e-12;

/// Stiffness configuration shared by one or more springs.
///
/// # Builder Pattern
/// ```
/// use spring_lerp::config::SpringConfig;
///
/// let config: SpringConfig<f32> = SpringConfig::new().with_factor(12.0);
/// let premult = config.premult(1.0 / 60.0);
/// assert_eq!(premult.factor(), 12.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Decay rate in inverse seconds. Larger converges faster. Default: 10.
    factor: F,
}

impl<F: Float> SpringConfig<F> {
    /// Create a new config with the default factor.
    pub fn new() -> Self {
        SpringConfig { factor: F::from_f32(DEFAULT_FACTOR) }
    }

    /// Set the stiffness factor. Negative values are clamped to zero.
    pub fn with_factor(mut self, factor: F) -> Self {
        self.factor = factor.max(F::zero());
        self
    }

    /// Set the stiffness factor, rejecting negative or non-finite values.
    pub fn try_with_factor(mut self, factor: F) -> Result<Self, SpringError> {
        if !factor.is_finite() || factor < F::zero() {
            return Err(SpringError::InvalidFactor);
        }
        self.factor = factor;
        Ok(self)
    }

    /// Pick the factor so that a spring released at rest keeps only
    /// `remaining` of its displacement after `time` seconds.
    ///
    /// `from_settle_time(0.5, 0.1)` gives a spring that covers 90% of the
    /// distance in half a second.
    pub fn from_settle_time(time: F, remaining: F) -> Result<Self, SpringError> {
        if !time.is_finite() || time <= F::zero() {
            return Err(SpringError::InvalidSettleTime);
        }
        if !remaining.is_finite() || remaining <= F::zero() || remaining >= F::one() {
            return Err(SpringError::InvalidRemainingFraction);
        }
        let u = solve_settle_exponent(remaining.to_f64())?;
        let factor = F::from_f64(u / time.to_f64());
        // A tiny time can overflow the narrowed factor.
        if !factor.is_finite() {
            return Err(SpringError::InvalidSettleTime);
        }
        Ok(SpringConfig { factor })
    }

    pub fn factor(&self) -> F {
        self.factor
    }

    /// Precompute the decay for a timestep.
    pub fn premult(&self, dt: F) -> Premult<F> {
        Premult::new(self.factor, dt)
    }

    /// [`SpringConfig::premult`], rejecting negative or non-finite timesteps.
    pub fn try_premult(&self, dt: F) -> Result<Premult<F>, SpringError> {
        if !dt.is_finite() || dt < F::zero() {
            return Err(SpringError::InvalidTimestep);
        }
        Ok(self.premult(dt))
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Displacement left at `u = factor * t` for a spring released at rest.
fn remaining_at(u: f64) -> f64 {
    (1.0 + u) * libm::exp(-u)
}

/// Solve `(1 + u) * e^(-u) = remaining` for `u > 0`.
///
/// Newton's method kept inside a shrinking bracket; falls back to bisection
/// whenever the Newton step would leave it.
fn solve_settle_exponent(remaining: f64) -> Result<f64, SpringError> {
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    while remaining_at(hi) > remaining {
        lo = hi;
        hi *= 2.0;
        if !hi.is_finite() {
            return Err(SpringError::SettleTimeDidNotConverge { iterations: 0 });
        }
    }

    let mut u = 0.5 * (lo + hi);
    for _ in 0..SETTLE_MAX_ITERATIONS {
        let g = remaining_at(u) - remaining;
        if g > 0.0 {
            lo = u;
        } else {
            hi = u;
        }

        // d/du (1 + u) e^(-u) = -u e^(-u)
        let slope = -u * libm::exp(-u);
        let newton = u - g / slope;
        let next = if slope != 0.0 && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if libm::fabs(next - u) <= SETTLE_TOLERANCE * u.max(1.0) {
            return Ok(next);
        }
        u = next;
    }

    Err(SpringError::SettleTimeDidNotConverge { iterations: SETTLE_MAX_ITERATIONS })
}
