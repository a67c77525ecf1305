//! Error types for spring tuning.

use core::fmt;

/// Errors reported when validating spring configuration.
///
/// The step functions themselves never fail; these only come from the
/// checked constructors in [`crate::config`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpringError {
    /// Stiffness factor must be finite and non-negative.
    InvalidFactor,
    /// Timestep must be finite and non-negative.
    InvalidTimestep,
    /// Settle time must be finite and positive.
    InvalidSettleTime,
    /// Remaining displacement fraction must be in (0, 1).
    InvalidRemainingFraction,
    /// The factor search did not converge within the iteration limit.
    SettleTimeDidNotConverge { iterations: usize },
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidFactor => write!(f, "stiffness factor must be finite and non-negative"),
            SpringError::InvalidTimestep => write!(f, "timestep must be finite and non-negative"),
            SpringError::InvalidSettleTime => write!(f, "settle time must be finite and positive"),
            SpringError::InvalidRemainingFraction => {
                write!(f, "remaining fraction must be in (0, 1)")
            }
            SpringError::SettleTimeDidNotConverge { iterations } => {
                write!(f, "factor search did not converge after {} iterations", iterations)
            }
        }
    }
}
