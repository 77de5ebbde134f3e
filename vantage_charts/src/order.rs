// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painter's-algorithm draw ordering.
//!
//! There is no Z-buffer: 3D points are painted strictly in sequence, so the
//! sequence has to put occluded geometry first. Under parallel projection a
//! fixed back-to-front sweep along x works; under perspective the sweep must
//! run from the scene edges toward the center of projection, where the wall
//! orientation flips.
//!
//! Both comparators are pure functions of `(point, point, context)`. Every
//! comparison reduces to a per-point sort key, so the induced order is total
//! and cycle-free by construction, and hit-test order is the exact reverse of
//! draw order.

use core::cmp::Ordering;

use vantage_scene::Point3;

use crate::points::DataPoint3;

/// Pass-scoped inputs to the draw-order comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderContext {
    /// Whether the bottom scene wall currently faces the viewer; flips the
    /// vertical sweep so elements nearer the visible floor draw first.
    pub bottom_visible: bool,
    /// Center of projection; NaN components mean "no flip on that axis"
    /// (always the case under parallel projection).
    pub cop: Point3,
    /// Scene rotation in degrees; its sign drives the horizontal sweep
    /// direction when no center-of-projection x exists.
    pub rotation: f64,
}

impl OrderContext {
    /// A context for parallel projection with no visible bottom wall.
    pub fn parallel(rotation: f64, bottom_visible: bool) -> Self {
        Self {
            bottom_visible,
            cop: Point3::UNDEFINED,
            rotation,
        }
    }
}

/// Horizontal sweep key.
///
/// With a center-of-projection x, points farther from the flip coordinate
/// draw first (edges toward center); the near/far side of the viewer comes
/// out of the distance automatically because the winding flip *is* the
/// near/far boundary. Without one, the sweep runs toward the rotation: the
/// far edge of the scene first. Both modes key on the bar center so
/// asymmetric bars sort the same way under either sweep.
fn x_key(p: &DataPoint3, ctx: &OrderContext) -> f64 {
    if ctx.cop.x.is_finite() {
        -(p.x_center - ctx.cop.x).abs()
    } else if ctx.rotation >= 0.0 {
        p.x_center
    } else {
        -p.x_center
    }
}

/// Center-of-projection y classification: points whose y extent straddles the
/// flip coordinate, or sits wholly on its near side, are forced later so they
/// paint on top.
fn cop_y_class(p: &DataPoint3, ctx: &OrderContext) -> u8 {
    if !ctx.cop.y.is_finite() {
        return 0;
    }
    let (top, bottom) = (p.y_position, p.y_position + p.height);
    let straddles = top <= ctx.cop.y && ctx.cop.y <= bottom;
    let near = if ctx.bottom_visible {
        top >= ctx.cop.y
    } else {
        bottom <= ctx.cop.y
    };
    u8::from(straddles || near)
}

/// Vertical sweep key: toward the visible floor.
fn y_key(p: &DataPoint3, ctx: &OrderContext) -> f64 {
    if ctx.bottom_visible {
        -p.y_position
    } else {
        p.y_position
    }
}

/// Compares two points in paint order (first = painted first = occluded).
///
/// Key priority: horizontal sweep, then the center-of-projection y rule, then
/// the vertical sweep. Inputs with NaN positions are a caller contract
/// violation; the comparison itself never produces an inconsistent order
/// because every key is compared with a total float order.
pub fn compare_draw_order(a: &DataPoint3, b: &DataPoint3, ctx: &OrderContext) -> Ordering {
    x_key(a, ctx)
        .total_cmp(&x_key(b, ctx))
        .then_with(|| cop_y_class(a, ctx).cmp(&cop_y_class(b, ctx)))
        .then_with(|| y_key(a, ctx).total_cmp(&y_key(b, ctx)))
}

/// Compares two points in hit-test order: the pairwise reverse of
/// [`compare_draw_order`], so the topmost-painted element is tested first.
///
/// A stable sort with this comparator keeps key-tied elements in input
/// order; [`sort_hit_test_order`] reverses the draw-sorted list instead so
/// the full order, ties included, comes out mirrored.
pub fn compare_hit_test_order(a: &DataPoint3, b: &DataPoint3, ctx: &OrderContext) -> Ordering {
    compare_draw_order(b, a, ctx)
}

/// Stable-sorts points into paint order.
pub fn sort_draw_order(points: &mut [DataPoint3], ctx: &OrderContext) {
    points.sort_by(|a, b| compare_draw_order(a, b, ctx));
}

/// Sorts points into hit-test order: the paint order reversed end to end.
pub fn sort_hit_test_order(points: &mut [DataPoint3], ctx: &OrderContext) {
    sort_draw_order(points, ctx);
    points.reverse();
}
