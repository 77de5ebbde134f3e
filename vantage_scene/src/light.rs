// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat-surface lighting.
//!
//! Lighting here is not geometric output: a shaded wall or bar face is still
//! painted at the coordinates the projection produces. The light model only
//! yields a brightness scalar in `[0, 1]` that the (out-of-scope) painter can
//! multiply into a fill color.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::point3::Point3;

/// How flat surfaces are shaded in the 3D scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightStyle {
    /// No shading; every face is painted at full brightness.
    #[default]
    None,
    /// Fixed brightness per face class (front, top/bottom, side), independent
    /// of the actual view angle.
    Simplistic,
    /// Lambertian brightness from the angle between the rotated face normal
    /// and the viewer direction.
    Realistic,
}

/// Fraction of brightness that is ambient (never shaded away) in
/// [`LightStyle::Realistic`] mode.
const AMBIENT: f64 = 0.25;

/// Computes the brightness for a face given its scene-space normal and the
/// same normal taken through the scene rotation.
///
/// Degenerate normals (zero area, NaN) yield full brightness so broken faces
/// stay visible rather than painting black.
pub(crate) fn brightness(style: LightStyle, normal: Point3, rotated: Point3) -> f64 {
    match style {
        LightStyle::None => 1.0,
        LightStyle::Simplistic => {
            let (ax, ay, az) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
            if !(ax + ay + az).is_finite() || ax + ay + az == 0.0 {
                1.0
            } else if az >= ax && az >= ay {
                1.0
            } else if ay >= ax {
                0.85
            } else {
                0.7
            }
        }
        LightStyle::Realistic => {
            let len =
                (rotated.x * rotated.x + rotated.y * rotated.y + rotated.z * rotated.z).sqrt();
            if !len.is_finite() || len == 0.0 {
                return 1.0;
            }
            // Light sits at the viewer: brightness falls off with the angle
            // between the rotated normal and the +z axis.
            let cos = (rotated.z / len).max(0.0);
            AMBIENT + (1.0 - AMBIENT) * cos
        }
    }
}
