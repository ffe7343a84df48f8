//! Reference-network construction.
//!
//! A propensity measurement compares the input network against two
//! synthetic baselines built from the same weight multiset: a ring lattice
//! that concentrates the strongest weights locally (the high-clustering,
//! long-path extreme) and a uniform rewiring that destroys all positional
//! structure (the low-clustering, short-path extreme). Both constructions
//! consume an explicitly owned random generator so callers control
//! reproducibility.

mod lattice;
mod randomize;

pub use self::lattice::regular_lattice;
pub use self::randomize::randomize_matrix;
