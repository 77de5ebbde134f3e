// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal homogeneous 4x4 matrix.
//!
//! kurbo's affine types are strictly 2D, so the scene transform carries its
//! own 4x4. Only the constructors the projection pipeline needs are provided;
//! this is not a general linear-algebra library.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::point3::Point3;

/// A homogeneous 4x4 transform over [`Point3`], row-major.
///
/// Points transform as column vectors: `p' = M * (x, y, z, 1)`, followed by a
/// divide by the resulting `w` component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    m: [[f64; 4]; 4],
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = {
        let mut m = [[0.0; 4]; 4];
        m[0][0] = 1.0;
        m[1][1] = 1.0;
        m[2][2] = 1.0;
        m[3][3] = 1.0;
        Self { m }
    };

    /// A translation by `(tx, ty, tz)`.
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][3] = tx;
        m[1][3] = ty;
        m[2][3] = tz;
        Self { m }
    }

    /// A rotation of `angle` radians about the x axis.
    ///
    /// With drawing-space y (downward) and z toward the viewer, a positive
    /// angle tips the bottom wall of the scene toward the viewer.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let mut m = Self::IDENTITY.m;
        m[1][1] = c;
        m[1][2] = -s;
        m[2][1] = s;
        m[2][2] = c;
        Self { m }
    }

    /// A rotation of `angle` radians about the y axis.
    ///
    /// A positive angle turns the right wall of the scene toward the viewer.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let mut m = Self::IDENTITY.m;
        m[0][0] = c;
        m[0][2] = -s;
        m[2][0] = s;
        m[2][2] = c;
        Self { m }
    }

    /// A shear mapping depth into the drawing plane: `x' = x + sx * z`,
    /// `y' = y + sy * z`. Used for right-angled (oblique) axes, where vertical
    /// scene lines must stay vertical on screen.
    pub const fn shear_z(sx: f64, sy: f64) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0][2] = sx;
        m[1][2] = sy;
        Self { m }
    }

    /// A perspective divide with the viewer at distance `d` on the +z axis.
    ///
    /// Points at `z = 0` are unchanged; points nearer the viewer grow by
    /// `d / (d - z)`. `d` must be positive and larger than any scene `z`.
    pub fn perspective(d: f64) -> Self {
        debug_assert!(d > 0.0, "viewer distance must be positive");
        let mut m = Self::IDENTITY.m;
        m[3][2] = -1.0 / d;
        Self { m }
    }

    /// Returns `self * rhs` (so `rhs` applies first when transforming).
    #[must_use]
    pub fn concat(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: out }
    }

    /// Transforms a direction vector, ignoring translation and the
    /// homogeneous divide.
    pub fn transform_vector(&self, v: Point3) -> Point3 {
        Point3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Transforms a point, applying the homogeneous divide.
    ///
    /// The residual z is divided through as well so relative depth is kept.
    pub fn transform(&self, p: Point3) -> Point3 {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0; 4];
        for (i, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|k| self.m[i][k] * v[k]).sum();
        }
        let w = out[3];
        if w == 0.0 {
            return Point3::UNDEFINED;
        }
        Point3::new(out[0] / w, out[1] / w, out[2] / w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point3, b: Point3) {
        let eps = 1e-12;
        assert!((a.x - b.x).abs() <= eps, "x: {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y: {a:?} != {b:?}");
        assert!((a.z - b.z).abs() <= eps, "z: {a:?} != {b:?}");
    }

    #[test]
    fn identity_is_a_no_op() {
        let p = Point3::new(1.0, -2.0, 3.0);
        assert_close(Mat4::IDENTITY.transform(p), p);
    }

    #[test]
    fn concat_applies_right_hand_side_first() {
        let translate = Mat4::translation(10.0, 0.0, 0.0);
        let rotate = Mat4::rotation_y(core::f64::consts::FRAC_PI_2);
        // Rotate first, then translate: (0, 0, 1) -> (-1, 0, 0) -> (9, 0, 0).
        let m = translate.concat(&rotate);
        assert_close(m.transform(Point3::new(0.0, 0.0, 1.0)), Point3::new(9.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_y_turns_right_wall_toward_viewer() {
        let m = Mat4::rotation_y(0.5);
        // A point on the +x side gains positive z (moves toward the viewer).
        let p = m.transform(Point3::new(1.0, 0.0, 0.0));
        assert!(p.z > 0.0, "expected +x to rotate toward viewer, got {p:?}");
    }

    #[test]
    fn rotation_x_tips_bottom_wall_toward_viewer() {
        let m = Mat4::rotation_x(0.5);
        // A point on the +y side (bottom, y down) gains positive z.
        let p = m.transform(Point3::new(0.0, 1.0, 0.0));
        assert!(p.z > 0.0, "expected +y to rotate toward viewer, got {p:?}");
    }

    #[test]
    fn perspective_grows_near_points_and_keeps_far_plane() {
        let m = Mat4::perspective(10.0);
        assert_close(m.transform(Point3::new(2.0, 2.0, 0.0)), Point3::new(2.0, 2.0, 0.0));
        let near = m.transform(Point3::new(2.0, 2.0, 5.0));
        assert_close(near, Point3::new(4.0, 4.0, 10.0));
    }
}
