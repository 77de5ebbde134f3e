// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 3D point in scene-relative coordinates.

use core::ops::{Add, Sub};

use kurbo::Point;

/// A point in the 3D chart scene.
///
/// Before projection, `x`/`y` are plot-area drawing units and `z` runs along
/// the scene depth axis, increasing toward the viewer. After projection, `x`
/// and `y` are 2D drawing coordinates and `z` is the residual depth left over
/// by the transform (useful for diagnostics, not for ordering).
///
/// Components may be NaN where a value is undefined by convention, e.g. the
/// axes of a center-of-projection query that produced no flip point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (drawing convention: increases downward).
    pub y: f64,
    /// Depth position (increases toward the viewer).
    pub z: f64,
}

impl Point3 {
    /// A point with every component undefined.
    pub const UNDEFINED: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
    };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the 2D drawing position, dropping the depth component.
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns the cross product of two vectors (points used as vectors).
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
