//! Error types for the smallworld core library.
//!
//! Defines the pipeline error enum, its stable machine-readable codes, and
//! a convenient result alias. Degenerate-network conditions (NaN
//! clustering, infinite path length) are deliberately absent: they are
//! values, not errors, and the composer's override rules resolve them.

use std::fmt;

use thiserror::Error;

pub use crate::matrix::MatrixError;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running the propensity
/// pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SwpError {
    /// The input matrix had no nodes.
    #[error("adjacency matrix is empty")]
    EmptyMatrix,
    /// An adjacency entry was negative.
    #[error("adjacency entry ({row}, {col}) is negative: {value}")]
    NegativeWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The negative value supplied by the caller.
        value: f64,
    },
    /// An adjacency entry was NaN or infinite.
    #[error("adjacency entry ({row}, {col}) is not finite")]
    NonFiniteWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
    /// A symmetry tolerance was negative or non-finite.
    #[error("symmetry tolerances must be finite and non-negative (rtol={rtol}, atol={atol})")]
    InvalidTolerance {
        /// Relative tolerance supplied to the builder.
        rtol: f64,
        /// Absolute tolerance supplied to the builder.
        atol: f64,
    },
    /// A batch call supplied differing numbers of matrices and flags.
    #[error("batch has {matrices} matrices but {flags} binary flags")]
    BatchLengthMismatch {
        /// Number of matrices in the batch.
        matrices: usize,
        /// Number of binary flags in the batch.
        flags: usize,
    },
    /// A batch element failed; the index identifies which.
    #[error("batch element {index} failed: {source}")]
    BatchElement {
        /// Zero-based index of the failing matrix.
        index: usize,
        /// Underlying failure for that element.
        #[source]
        source: Box<SwpError>,
    },
}

define_error_codes! {
    /// Stable codes describing [`SwpError`] variants.
    enum SwpErrorCode for SwpError {
        /// The input matrix had no nodes.
        EmptyMatrix => EmptyMatrix => "SWP_EMPTY_MATRIX",
        /// An adjacency entry was negative.
        NegativeWeight => NegativeWeight { .. } => "SWP_NEGATIVE_WEIGHT",
        /// An adjacency entry was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "SWP_NON_FINITE_WEIGHT",
        /// A symmetry tolerance was negative or non-finite.
        InvalidTolerance => InvalidTolerance { .. } => "SWP_INVALID_TOLERANCE",
        /// A batch call supplied differing numbers of matrices and flags.
        BatchLengthMismatch => BatchLengthMismatch { .. } => "SWP_BATCH_LENGTH_MISMATCH",
        /// A batch element failed.
        BatchElementFailure => BatchElement { .. } => "SWP_BATCH_ELEMENT_FAILURE",
    }
}

impl SwpError {
    /// Retrieve the failing element's index when the error arose inside a
    /// batch run.
    #[must_use]
    pub const fn batch_index(&self) -> Option<usize> {
        match self {
            Self::BatchElement { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SwpError>;
