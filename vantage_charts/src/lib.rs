// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth clustering and draw ordering for 3D charts.
//!
//! `vantage_scene` answers the purely geometric questions (projection, wall
//! visibility, center-of-projection). This crate layers the chart semantics on
//! top:
//! - **Series and clusters**: series that stack or draw side-by-side share one
//!   depth slot; [`ClusterTable`] partitions a series list deterministically.
//! - **Depth allocation**: [`DepthAllocation`] converts the smallest x
//!   interval, the user depth percentage and the gap percentage into a
//!   per-cluster z position and thickness.
//! - **Draw order**: [`compare_draw_order`] is the painter's-algorithm total
//!   order over [`DataPoint3`] records; [`compare_hit_test_order`] is its
//!   exact reverse for topmost-first hit testing.
//! - **[`ChartArea3`]**: the pass-scoped facade tying it together: configure
//!   a scene, bind series, run a pass, hand the ordered points and the
//!   projection to a painter.
//!
//! Actual pixel painting, text, and the chart property system are out of
//! scope; see `vantage_charts_demo` for a painter that consumes this output.

#![no_std]

extern crate alloc;

#[cfg(test)]
mod area_tests;
mod chart_area;
mod cluster;
mod depth;
#[cfg(not(feature = "std"))]
mod float;
mod log;
mod order;
mod points;
mod scale;
mod series;

pub use chart_area::{ChartArea3, Pass};
pub use cluster::ClusterTable;
pub use depth::{DepthAllocation, smallest_x_interval};
pub use order::{OrderContext, compare_draw_order, compare_hit_test_order, sort_draw_order,
    sort_hit_test_order};
pub use points::DataPoint3;
pub use scale::{ScaleContinuous, ScaleLinear, ScaleLog};
pub use series::{ChartType, ConfigError, Series, SideBySide, default_series_fills};
