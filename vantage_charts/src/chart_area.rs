// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pass-scoped 3D chart area facade.
//!
//! A chart area owns the view configuration, the bound series, and the lazy
//! cluster cache. Each layout/paint pass runs strictly in sequence on the
//! calling thread: build the projection, classify the walls, allocate depth,
//! expand and order the data points, hand everything to the painter. Nothing
//! here locks; embedders with multiple threads must serialize access per
//! chart area.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use vantage_scene::{
    CopAxes, Point3, Projection, Scene3, Surface, SurfaceSet, center_of_projection,
    visible_surfaces,
};

use crate::cluster::ClusterTable;
use crate::depth::{DepthAllocation, smallest_x_interval};
use crate::log;
use crate::order::{OrderContext, sort_draw_order, sort_hit_test_order};
use crate::points::DataPoint3;
use crate::scale::ScaleContinuous;
use crate::series::Series;

/// Bars occupy this share of the smallest x interval; the rest is spacing.
const BAND_SHARE: f64 = 0.8;

/// Everything computed for one layout/paint pass.
///
/// A `Pass` bakes in the scene parameters it was built from. It must be
/// rebuilt whenever the series list, the axis scales, or any view parameter
/// changes; stale passes silently misorder geometry.
#[derive(Clone, Debug)]
pub struct Pass {
    projection: Projection,
    visible: SurfaceSet,
    cop: Point3,
    allocation: DepthAllocation,
    ctx: OrderContext,
}

impl Pass {
    /// The finalized projection transform for this pass.
    ///
    /// The painter uses it to map remaining 2D decorations (gridlines,
    /// outlines) through the same view as the ordered points.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// The scene walls currently facing the viewer.
    pub fn visible_surfaces(&self) -> SurfaceSet {
        self.visible
    }

    /// The center of projection, NaN per axis without a flip (always all-NaN
    /// under parallel projection).
    pub fn center_of_projection(&self) -> Point3 {
        self.cop
    }

    /// The ordering context derived from this pass's visibility and view.
    pub fn order_context(&self) -> &OrderContext {
        &self.ctx
    }

    /// Total scene depth in drawing units.
    pub fn total_depth(&self) -> f64 {
        self.allocation.total_depth()
    }
}

/// A chart area rendering its series into a simulated 3D scene.
#[derive(Clone, Debug)]
pub struct ChartArea3 {
    view: Scene3,
    plot_rect: Rect,
    x_scale: ScaleContinuous,
    y_scale: ScaleContinuous,
    clustered: bool,
    gap_percent: f64,
    series: Vec<Series>,
    /// Lazily built cluster partition; `None` after any series change.
    clusters: Option<ClusterTable>,
}

impl ChartArea3 {
    /// Creates a chart area.
    ///
    /// `view.depth()` is treated as the user depth *percentage* (100 keeps
    /// bar footprints square); the actual scene depth in drawing units is
    /// computed per pass from the data intervals. `plot_rect` is the 2D plot
    /// rectangle in drawing units (pixels).
    pub fn new(
        view: Scene3,
        plot_rect: Rect,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            view,
            plot_rect,
            x_scale,
            y_scale,
            clustered: false,
            gap_percent: 100.0,
            series: Vec::new(),
            clusters: None,
        }
    }

    /// Enables clustered mode: side-by-side series of the same chart type
    /// share one depth slot instead of receding into the scene.
    pub fn with_clustered(mut self, clustered: bool) -> Self {
        self.clustered = clustered;
        self.clusters = None;
        self
    }

    /// Sets the gap percentage between depth slots.
    pub fn with_gap_percent(mut self, gap_percent: f64) -> Self {
        self.gap_percent = gap_percent;
        self
    }

    /// Adds a series, invalidating the cluster cache.
    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
        self.invalidate_clusters();
    }

    /// The bound series.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Drops the cached cluster partition.
    ///
    /// Called automatically on series changes through this API; callers that
    /// mutate series data in place (or change axis intervals) must invalidate
    /// explicitly before the next pass.
    pub fn invalidate_clusters(&mut self) {
        self.clusters = None;
    }

    /// The cluster partition, building it on first use after invalidation.
    pub fn clusters(&mut self) -> &ClusterTable {
        let series = &self.series;
        let clustered = self.clustered;
        self.clusters.get_or_insert_with(|| {
            let table = ClusterTable::build(series, clustered);
            log::debug!(
                series = series.len(),
                clusters = table.len(),
                "built cluster table"
            );
            table
        })
    }

    /// Number of depth clusters for the current series list.
    pub fn number_of_clusters(&mut self) -> usize {
        self.clusters().len()
    }

    /// Returns `(depth, z_position)` of a series' depth slot, in drawing
    /// units, or zeros for a series index outside the bound list.
    pub fn series_z_position_and_depth(&mut self, series: usize) -> (f64, f64) {
        let allocation = self.allocation();
        match self.clusters().cluster_of(series) {
            Some(cluster) => allocation.slot(cluster),
            None => (0.0, 0.0),
        }
    }

    fn interval_in_pixels(&self) -> f64 {
        smallest_x_interval(&self.series, self.x_scale.log_base())
            * self.x_scale.units_per_interval()
    }

    fn allocation(&mut self) -> DepthAllocation {
        let interval = self.interval_in_pixels();
        let clusters = self.clusters().clone();
        DepthAllocation::compute(
            &self.series,
            &clusters,
            interval,
            self.view.depth(),
            self.gap_percent,
        )
    }

    /// Builds everything pass-scoped: projection, wall visibility, center of
    /// projection, the depth allocation, and the ordering context.
    ///
    /// The view parameters are finalized here; the returned [`Pass`] must not
    /// outlive a change to series, scales, or view.
    pub fn begin_pass(&mut self) -> Pass {
        let allocation = self.allocation();
        let total_depth = allocation.total_depth();
        let scene = self
            .view
            .with_depth(total_depth)
            .unwrap_or(self.view);

        let projection = Projection::new(self.plot_rect, &scene);
        let visible = visible_surfaces(self.plot_rect, 0.0, total_depth, &projection);

        // Scene units are pixels here, so half a pixel of tolerance.
        let cop = if scene.perspective() != 0.0 {
            center_of_projection(
                &projection,
                self.plot_rect,
                0.0,
                total_depth,
                CopAxes { x: true, y: true, z: false },
                0.5,
            )
        } else {
            Point3::UNDEFINED
        };

        let ctx = OrderContext {
            bottom_visible: visible.contains(Surface::Bottom),
            cop,
            rotation: scene.rotation(),
        };

        log::debug!(
            visible = ?visible,
            total_depth,
            "began 3D pass"
        );

        Pass {
            projection,
            visible,
            cop,
            allocation,
            ctx,
        }
    }

    /// Expands every bound data point into a [`DataPoint3`] and sorts the
    /// flat list into paint order for `pass`.
    pub fn draw_points(&mut self, pass: &Pass) -> Vec<DataPoint3> {
        let mut points = self.expand_points(pass);
        sort_draw_order(&mut points, &pass.ctx);
        points
    }

    /// Like [`Self::draw_points`] but in hit-test order: the topmost-painted
    /// element comes first.
    pub fn hit_test_points(&mut self, pass: &Pass) -> Vec<DataPoint3> {
        let mut points = self.expand_points(pass);
        sort_hit_test_order(&mut points, &pass.ctx);
        points
    }

    fn expand_points(&mut self, pass: &Pass) -> Vec<DataPoint3> {
        let band = self.interval_in_pixels() * BAND_SHARE;
        let clusters = self.clusters().clone();
        let baseline = self.y_scale.map(0.0);

        // Running stack tops per (cluster, x value) for stacked series.
        let mut stacks: HashMap<(usize, u64), f64> = HashMap::new();
        let mut out = Vec::new();

        for cluster in 0..clusters.len() {
            let members = clusters.members(cluster);
            let (depth, z_position) = pass.allocation.slot(cluster);
            let side_by_side: Vec<usize> = members
                .iter()
                .copied()
                .filter(|&i| self.series[i].draws_side_by_side())
                .collect();

            for &series_index in members {
                let series = &self.series[series_index];
                let stacked = series.chart_type.is_stacked();
                let (width, x_offset) = match side_by_side
                    .iter()
                    .position(|&i| i == series_index)
                {
                    Some(k) if side_by_side.len() > 1 => {
                        let w = band / side_by_side.len() as f64;
                        (w, -band / 2.0 + w * k as f64)
                    }
                    _ => (band, -band / 2.0),
                };

                for (point_index, &(x, y)) in series.values.iter().enumerate() {
                    let x_px = self.x_scale.map(x);
                    let (y0, y1) = if stacked {
                        let base = stacks.entry((cluster, x.to_bits())).or_insert(0.0);
                        let span = (self.y_scale.map(*base), self.y_scale.map(*base + y));
                        *base += y;
                        span
                    } else {
                        (baseline, self.y_scale.map(y))
                    };

                    out.push(DataPoint3 {
                        x_position: x_px + x_offset,
                        x_center: x_px + x_offset + width / 2.0,
                        width,
                        y_position: y0.min(y1),
                        height: (y1 - y0).abs(),
                        z_position,
                        depth,
                        series: series_index,
                        point: point_index,
                        indexed_series: series.indexed,
                    });
                }
            }
        }
        out
    }
}
