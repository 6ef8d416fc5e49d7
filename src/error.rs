//! Taper computation error types

use thiserror::Error;

/// Result type for taper operations
pub type TaperResult<T> = Result<T, TaperError>;

/// Errors surfaced at the boundaries of coefficient computation and
/// point evaluation. The computation itself is deterministic and pure,
/// so there is no partial-failure or retry model; any failure goes
/// straight back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaperError {
    /// Series must have at least one term
    #[error("term count must be at least 1")]
    InvalidTermCount,

    /// The polynomial fit behind the moved zeros is only defined for
    /// negative sidelobe levels
    #[error("sidelobe level must be a finite negative number of dB, got {0}")]
    InvalidSidelobeLevel(f64),

    /// Supplied aperture radius was not a positive finite number
    #[error("aperture radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// A retained denominator factor collapsed to (near) zero. Happens
    /// only when an asymptotic zero location numerically collides with
    /// a root, a known precision limit of the series for pathological
    /// term counts.
    #[error("near-zero denominator factor {factor:e} in coefficient {term}")]
    NumericDegeneracy { term: usize, factor: f64 },
}
