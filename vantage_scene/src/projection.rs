// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene projection transform.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;

use crate::light::{self, LightStyle};
use crate::matrix::Mat4;
use crate::point3::Point3;
use crate::scene::Scene3;

/// A configured projection from scene-relative 3D coordinates to 2D drawing
/// coordinates.
///
/// The transform is fixed at construction: a `Projection` cannot exist
/// uninitialized, and identical inputs always produce identical outputs. That
/// purity is load-bearing: the center-of-projection bisection in
/// [`crate::center_of_projection`] terminates only because repeated
/// evaluations agree.
///
/// Coordinate convention: scene x/y are plot-area drawing units (y increases
/// downward), scene z runs from `0` at the back wall to `scene.depth()` at the
/// front wall, toward the viewer. Positive rotation turns the right wall
/// toward the viewer; positive inclination tips the bottom wall toward the
/// viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    matrix: Mat4,
    /// Rotation-only transform used to orient face normals for lighting.
    normal_matrix: Mat4,
    light: LightStyle,
}

impl Projection {
    /// Builds the projection for one layout pass.
    ///
    /// `scene_rect` is the 2D plot rectangle the scene occupies. The scene's
    /// rotation/inclination pivot is the center of the scene cuboid.
    ///
    /// The caller guarantees `scene.perspective() != 0` implies
    /// `!scene.right_angle_axes()`; [`Scene3`] enforces this at configuration
    /// time and the constructor asserts it in debug builds.
    pub fn new(scene_rect: Rect, scene: &Scene3) -> Self {
        debug_assert!(
            scene.perspective() == 0.0 || !scene.right_angle_axes(),
            "perspective and right-angle axes are mutually exclusive"
        );

        let incl = scene.inclination().to_radians();
        let rot = scene.rotation().to_radians();
        let depth = scene.depth();
        let center = scene_rect.center();

        let to_origin = Mat4::translation(-center.x, -center.y, -depth / 2.0);
        let from_origin = Mat4::translation(center.x, center.y, 0.0);
        let rotate = Mat4::rotation_x(incl).concat(&Mat4::rotation_y(rot));

        let view = if scene.right_angle_axes() {
            // Oblique axes: vertical lines stay vertical, depth is sheared
            // into the drawing plane and the front wall stays anchored.
            let (sx, sy) = (rot.sin(), incl.sin());
            let shear = Mat4::shear_z(sx, -sy);
            let anchor = Mat4::translation(-sx * depth / 2.0, sy * depth / 2.0, 0.0);
            anchor.concat(&shear)
        } else if scene.perspective() > 0.0 && scene_rect.width() + scene_rect.height() > 0.0 {
            let d = (scene_rect.width() + scene_rect.height()) * 100.0 / scene.perspective();
            Mat4::perspective(d).concat(&rotate)
        } else {
            rotate
        };

        Self {
            matrix: from_origin.concat(&view).concat(&to_origin),
            normal_matrix: rotate,
            light: scene.light(),
        }
    }

    /// Reconfigures the lighting computation without touching the geometry.
    pub fn init_light(&mut self, light: LightStyle) {
        self.light = light;
    }

    /// Transforms a single scene point into 2D drawing coordinates with a
    /// residual depth.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.matrix.transform(p)
    }

    /// Transforms every point in place, preserving order and length.
    pub fn transform_points(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            *p = self.matrix.transform(*p);
        }
    }

    /// Returns the brightness in `[0, 1]` for the flat face spanned by three
    /// non-collinear scene points, ordered so their normal points out of the
    /// painted solid.
    pub fn surface_brightness(&self, a: Point3, b: Point3, c: Point3) -> f64 {
        let normal = (b - a).cross(c - a);
        let rotated = self.normal_matrix.transform_vector(normal);
        light::brightness(self.light, normal, rotated)
    }
}
