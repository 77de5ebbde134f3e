// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-depth allocation along the scene depth axis.
//!
//! The scene gets one depth slot per cluster. Slot thickness derives from the
//! smallest interval between x values across all series (so bars keep roughly
//! square footprints), scaled by the user depth percentage and split across
//! side-by-side series; the gap between slots is a fraction of that.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::cluster::ClusterTable;
use crate::series::Series;

/// Smallest positive interval between x values across all series, in axis
/// units (log units when `log_base` is set, for logarithmic x axes).
///
/// Duplicate x values are ignored; if no positive interval exists at all
/// (every series has at most one distinct x), the interval defaults to 1.0 so
/// downstream depth math stays non-degenerate.
pub fn smallest_x_interval(series: &[Series], log_base: Option<f64>) -> f64 {
    let mut smallest = f64::INFINITY;
    let mut xs: Vec<f64> = Vec::new();

    for s in series {
        xs.clear();
        xs.extend(s.values.iter().filter_map(|&(x, _)| {
            let x = match log_base {
                Some(base) if x > 0.0 && base > 0.0 && base != 1.0 => x.ln() / base.ln(),
                Some(_) => return None,
                None => x,
            };
            x.is_finite().then_some(x)
        }));
        xs.sort_unstable_by(f64::total_cmp);
        for pair in xs.windows(2) {
            let gap = pair[1] - pair[0];
            if gap > 0.0 && gap < smallest {
                smallest = gap;
            }
        }
    }

    if smallest.is_finite() { smallest } else { 1.0 }
}

/// Per-pass depth slot geometry: slot thickness, gap, and cluster count.
///
/// All outputs are in the same drawing units as the interval fed in; the
/// chart area measures the smallest x interval in plot pixels and the slots
/// come out in plot pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthAllocation {
    point_depth: f64,
    gap_depth: f64,
    clusters: usize,
}

/// The gap between depth slots maxes out at this fraction of the slot depth.
const GAP_SHARE: f64 = 0.8;

impl DepthAllocation {
    /// Computes slot geometry for one pass.
    ///
    /// `interval` is the smallest x interval in drawing units;
    /// `depth_percent` is the user depth setting (100 keeps bars square);
    /// `gap_percent` scales the inter-slot gap. The slot depth is split
    /// across the series that draw side-by-side, so wide clusters do not
    /// deepen the scene.
    pub fn compute(
        series: &[Series],
        clusters: &ClusterTable,
        interval: f64,
        depth_percent: f64,
        gap_percent: f64,
    ) -> Self {
        let side_by_side = series.iter().filter(|s| s.draws_side_by_side()).count();
        let interval = if interval.is_finite() { interval.max(0.0) } else { 0.0 };
        let point_depth =
            interval * depth_percent.max(0.0) / 100.0 / side_by_side.max(1) as f64;
        let gap_depth = point_depth * GAP_SHARE * gap_percent.max(0.0) / 100.0;
        Self {
            point_depth,
            gap_depth,
            clusters: clusters.len(),
        }
    }

    /// Total scene depth spanned by all slots and gaps.
    pub fn total_depth(&self) -> f64 {
        (self.point_depth + self.gap_depth) * self.clusters as f64
    }

    /// Slot thickness shared by every cluster.
    pub fn point_depth(&self) -> f64 {
        self.point_depth
    }

    /// Returns `(depth, z_position)` for a cluster index.
    ///
    /// The slot spans `[z_position, z_position + depth]`; half a gap pads the
    /// back wall and half a gap remains before the front wall, so
    /// `z_position + depth <= total_depth()` always holds.
    pub fn slot(&self, cluster_index: usize) -> (f64, f64) {
        let z = self.gap_depth / 2.0
            + (self.point_depth + self.gap_depth) * cluster_index as f64;
        (self.point_depth, z)
    }
}
