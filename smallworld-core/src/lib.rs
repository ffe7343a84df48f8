//! Smallworld core library.
//!
//! Computes the small-world propensity of weighted or binary undirected
//! networks: a bounded `[0, 1]` scalar (with companion statistics)
//! quantifying how strongly a network combines the high clustering of a
//! regular lattice with the short paths of a random network. The pipeline
//! symmetrises and normalises the input adjacency matrix, constructs a
//! degree-matched ring lattice and a uniformly rewired reference from the
//! same weight multiset, computes weighted clustering and characteristic
//! path length for all three networks, and composes the six scalars into a
//! [`PropensityRecord`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
pub mod error;
mod matrix;
mod metrics;
mod propensity;
mod reference;
mod swp;
mod symmetrize;

#[cfg(test)]
mod property;

pub use crate::{
    builder::{DEFAULT_ATOL, DEFAULT_RTOL, SwpBuilder},
    error::{MatrixError, Result, SwpError, SwpErrorCode},
    matrix::SquareMatrix,
    metrics::{characteristic_path_length, clustering_coefficient, effective_radius},
    propensity::{NetworkMetrics, PropensityRecord, compose},
    reference::{randomize_matrix, regular_lattice},
    swp::Swp,
    symmetrize::make_symmetric,
};
