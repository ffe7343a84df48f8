//! Adjacency-matrix providers backed by Parquet and Arrow columnar data.
//!
//! Loads a square weighted adjacency matrix from a
//! `FixedSizeList<Float64, n>` column and validates the adjacency
//! contract (squareness, no nulls) at the ingestion boundary, before any
//! propensity computation begins.

mod errors;
mod ingest;
mod provider;

pub use errors::AdjacencyProviderError;
pub use provider::AdjacencyProvider;
