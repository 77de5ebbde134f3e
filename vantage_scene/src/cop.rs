// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center-of-projection search.
//!
//! Under perspective, a pair of opposing walls can both be partly visible: the
//! winding of a wall-aligned plane flips somewhere *inside* the scene volume.
//! Painter's-algorithm ordering then has to run from the edges toward that
//! flip coordinate instead of strictly back-to-front. This module finds the
//! flip coordinate per axis by bisection over the winding predicate; the
//! predicate is monotone in sign along each axis because the projection is a
//! fixed homogeneous transform.
//!
//! Under parallel projection the winding sign is constant along every axis,
//! so no flip point exists and the draw order falls back to a fixed heuristic
//! (see `vantage_charts`).

use kurbo::Rect;

use crate::point3::Point3;
use crate::projection::Projection;
use crate::surface::winding;

/// Which scene axes a center-of-projection query should resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopAxes {
    /// Solve along the x axis.
    pub x: bool,
    /// Solve along the y axis.
    pub y: bool,
    /// Solve along the z axis.
    pub z: bool,
}

impl CopAxes {
    /// Only the x axis.
    pub const X: Self = Self {
        x: true,
        y: false,
        z: false,
    };
    /// Only the y axis.
    pub const Y: Self = Self {
        x: false,
        y: true,
        z: false,
    };
    /// Only the z axis.
    pub const Z: Self = Self {
        x: false,
        y: false,
        z: true,
    };
    /// All three axes.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };
}

/// Bisection gives up after this many halvings; 128 is far below f64
/// resolution for any plausible scene extent, so this only guards against a
/// non-positive tolerance.
const MAX_ITERATIONS: u32 = 128;

/// Finds the scene coordinate at which wall visibility flips, per axis.
///
/// For each requested axis the two scene corners spanning the full bounding
/// box bracket the search. If both ends project with the same winding sign,
/// no flip exists inside the volume and the component is NaN. Otherwise the
/// bracket is bisected until it is narrower than `tolerance` (scene units;
/// callers typically pass half a pixel).
///
/// Components for axes not requested are NaN. Only meaningful when the
/// projection has non-zero perspective; a parallel projection yields all-NaN.
pub fn center_of_projection(
    projection: &Projection,
    scene_rect: Rect,
    z_offset: f64,
    depth: f64,
    axes: CopAxes,
    tolerance: f64,
) -> Point3 {
    debug_assert!(tolerance > 0.0, "tolerance must be positive");

    let mut cop = Point3::UNDEFINED;
    if axes.x {
        cop.x = bisect(scene_rect.x0, scene_rect.x1, tolerance, |x| {
            orientation(projection, Axis::X, x, scene_rect, z_offset, depth)
        });
    }
    if axes.y {
        cop.y = bisect(scene_rect.y0, scene_rect.y1, tolerance, |y| {
            orientation(projection, Axis::Y, y, scene_rect, z_offset, depth)
        });
    }
    if axes.z {
        cop.z = bisect(z_offset, z_offset + depth, tolerance, |z| {
            orientation(projection, Axis::Z, z, scene_rect, z_offset, depth)
        });
    }
    cop
}

enum Axis {
    X,
    Y,
    Z,
}

/// Winding of a wall-aligned triangle in the plane `axis = at`.
///
/// The corner orderings match the Right/Bottom/Front triples used by the
/// surface visibility engine, with the fixed coordinate swapped for `at`.
fn orientation(
    projection: &Projection,
    axis: Axis,
    at: f64,
    scene_rect: Rect,
    z_offset: f64,
    depth: f64,
) -> f64 {
    let Rect { x0, y0, x1, y1 } = scene_rect;
    let (z0, z1) = (z_offset, z_offset + depth);
    let corners = match axis {
        Axis::X => [
            Point3::new(at, y0, z1),
            Point3::new(at, y0, z0),
            Point3::new(at, y1, z0),
        ],
        Axis::Y => [
            Point3::new(x0, at, z1),
            Point3::new(x1, at, z1),
            Point3::new(x1, at, z0),
        ],
        Axis::Z => [
            Point3::new(x0, y0, at),
            Point3::new(x1, y0, at),
            Point3::new(x1, y1, at),
        ],
    };
    let [a, b, c] = corners.map(|p| projection.transform_point(p));
    winding(a, b, c)
}

/// Bisects `[lo, hi]` for the sign change of `orient`, if any.
fn bisect(mut lo: f64, mut hi: f64, tolerance: f64, orient: impl Fn(f64) -> f64) -> f64 {
    let w_lo = orient(lo);
    let w_hi = orient(hi);
    if !w_lo.is_finite() || !w_hi.is_finite() || sign(w_lo) == sign(w_hi) {
        return f64::NAN;
    }

    for _ in 0..MAX_ITERATIONS {
        if hi - lo <= tolerance {
            break;
        }
        let mid = lo + (hi - lo) / 2.0;
        let w_mid = orient(mid);
        if !w_mid.is_finite() || sign(w_mid) == 0 {
            return mid;
        }
        if sign(w_mid) == sign(w_lo) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo + (hi - lo) / 2.0
}

fn sign(w: f64) -> i8 {
    if w > 0.0 {
        1
    } else if w < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene3;

    #[test]
    fn parallel_projection_has_no_flip_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scene = Scene3::new(30.0, 30.0, 50.0).unwrap();
        let proj = Projection::new(rect, &scene);
        let cop = center_of_projection(&proj, rect, 0.0, 50.0, CopAxes::ALL, 0.01);
        assert!(cop.x.is_nan() && cop.y.is_nan() && cop.z.is_nan(), "got {cop:?}");
    }

    #[test]
    fn unrequested_axes_stay_undefined() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scene = Scene3::new(0.0, 0.0, 50.0)
            .unwrap()
            .with_perspective(60.0)
            .unwrap();
        let proj = Projection::new(rect, &scene);
        let cop = center_of_projection(&proj, rect, 0.0, 50.0, CopAxes::X, 0.01);
        assert!(cop.x.is_finite(), "got {cop:?}");
        assert!(cop.y.is_nan() && cop.z.is_nan(), "got {cop:?}");
    }

    #[test]
    fn head_on_perspective_flips_at_the_scene_center() {
        // With zero rotation/inclination the x and y flip coordinates have the
        // analytic solution "center of the scene rect": the winding of an
        // x-aligned wall plane is proportional to -(x - cx) under a pure
        // perspective divide.
        let rect = Rect::new(10.0, 20.0, 110.0, 100.0);
        let scene = Scene3::new(0.0, 0.0, 50.0)
            .unwrap()
            .with_perspective(40.0)
            .unwrap();
        let proj = Projection::new(rect, &scene);

        let tolerance = 0.005;
        let cop = center_of_projection(
            &proj,
            rect,
            0.0,
            50.0,
            CopAxes { x: true, y: true, z: false },
            tolerance,
        );
        let center = rect.center();
        assert!(
            (cop.x - center.x).abs() <= tolerance,
            "x flip {} not within {tolerance} of {}",
            cop.x,
            center.x
        );
        assert!(
            (cop.y - center.y).abs() <= tolerance,
            "y flip {} not within {tolerance} of {}",
            cop.y,
            center.y
        );
    }

    #[test]
    fn front_wall_plane_never_flips_head_on() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scene = Scene3::new(0.0, 0.0, 50.0)
            .unwrap()
            .with_perspective(40.0)
            .unwrap();
        let proj = Projection::new(rect, &scene);
        let cop = center_of_projection(&proj, rect, 0.0, 50.0, CopAxes::Z, 0.01);
        assert!(cop.z.is_nan(), "got {cop:?}");
    }

    #[test]
    fn tightening_the_tolerance_narrows_the_answer() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scene = Scene3::new(10.0, 25.0, 50.0)
            .unwrap()
            .with_perspective(70.0)
            .unwrap();
        let proj = Projection::new(rect, &scene);

        let coarse = center_of_projection(&proj, rect, 0.0, 50.0, CopAxes::X, 1.0);
        let fine = center_of_projection(&proj, rect, 0.0, 50.0, CopAxes::X, 1e-6);
        if coarse.x.is_finite() {
            assert!(
                (coarse.x - fine.x).abs() <= 1.0,
                "coarse {} and fine {} disagree beyond the coarse tolerance",
                coarse.x,
                fine.x
            );
        } else {
            assert!(fine.x.is_nan(), "bracketing must not depend on tolerance");
        }
    }
}
