//! Composition of per-network metrics into the small-world propensity
//! record.
//!
//! The composer is pure arithmetic over six scalars. Degenerate metrics
//! (infinite path lengths, NaN clusterings) are resolved here by forcing
//! the affected fractional deviation to one rather than surfacing an
//! error.

use std::f64::consts::PI;

/// Clustering coefficient and characteristic path length for one network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkMetrics {
    /// Weighted clustering coefficient (`[0, 1]`, or NaN when undefined).
    pub clustering: f64,
    /// Weighted characteristic path length (`+inf` when disconnected).
    pub path_length: f64,
}

/// Small-world propensity and companion statistics for one network.
///
/// One record is produced per input network; batch runs concatenate
/// records in input order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropensityRecord {
    /// Clustering coefficient of the input network.
    pub clustering: f64,
    /// Characteristic path length of the input network.
    pub path_length: f64,
    /// Fractional deviation of clustering from the regular lattice.
    pub delta_clustering: f64,
    /// Fractional deviation of path length from the random network.
    pub delta_path_length: f64,
    /// Small-world propensity in `[0, 1]`.
    pub propensity: f64,
    /// Angle of the deviation vector, `atan(delta_L / delta_C)`.
    pub alpha: f64,
    /// Normalised angular balance, `4 * alpha / pi - 1`.
    pub delta: f64,
    /// Clustering coefficient of the regular lattice reference.
    pub regular_clustering: f64,
    /// Clustering coefficient of the randomised reference.
    pub random_clustering: f64,
    /// Characteristic path length of the regular lattice reference.
    pub regular_path_length: f64,
    /// Characteristic path length of the randomised reference.
    pub random_path_length: f64,
}

/// Combines the three networks' metrics into a [`PropensityRecord`].
///
/// The path deviation is `max(0, L_W - L_rand) / (L_reg - L_rand)`, forced
/// to one when any path length is infinite; the clustering deviation is
/// `max(0, C_reg - C_W) / (C_reg - C_rand)`, forced to one when any
/// clustering is NaN. Both are clamped to at most one. The propensity is
/// the complement of the deviation vector's normalised magnitude. `alpha`
/// deliberately leans on IEEE-754 division semantics: a zero clustering
/// deviation yields `atan(inf) = pi / 2` with no special-case branch.
///
/// # Examples
/// ```
/// use smallworld_core::{NetworkMetrics, compose};
///
/// let record = compose(
///     NetworkMetrics { clustering: 0.4, path_length: 2.0 },
///     NetworkMetrics { clustering: 0.5, path_length: 4.0 },
///     NetworkMetrics { clustering: 0.1, path_length: 1.5 },
/// );
/// assert!(record.propensity >= 0.0 && record.propensity <= 1.0);
/// ```
#[must_use]
pub fn compose(
    network: NetworkMetrics,
    regular: NetworkMetrics,
    random: NetworkMetrics,
) -> PropensityRecord {
    let path_excess = (network.path_length - random.path_length).max(0.0);
    let mut delta_path_length = path_excess / (regular.path_length - random.path_length);
    if network.path_length.is_infinite()
        || regular.path_length.is_infinite()
        || random.path_length.is_infinite()
    {
        delta_path_length = 1.0;
    }
    if delta_path_length > 1.0 {
        delta_path_length = 1.0;
    }

    let clustering_deficit = (regular.clustering - network.clustering).max(0.0);
    let mut delta_clustering = clustering_deficit / (regular.clustering - random.clustering);
    if network.clustering.is_nan() || regular.clustering.is_nan() || random.clustering.is_nan() {
        delta_clustering = 1.0;
    }
    if delta_clustering > 1.0 {
        delta_clustering = 1.0;
    }

    let deviation = (delta_clustering.powi(2) + delta_path_length.powi(2)).sqrt();
    let propensity = 1.0 - deviation / 2.0_f64.sqrt();
    let alpha = (delta_path_length / delta_clustering).atan();
    let delta = 4.0 * alpha / PI - 1.0;

    PropensityRecord {
        clustering: network.clustering,
        path_length: network.path_length,
        delta_clustering,
        delta_path_length,
        propensity,
        alpha,
        delta,
        regular_clustering: regular.clustering,
        random_clustering: random.clustering,
        regular_path_length: regular.path_length,
        random_path_length: random.path_length,
    }
}
