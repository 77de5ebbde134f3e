// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D scene math for business charts.
//!
//! Charts that simulate a 3D view (rotated, inclined "walls" with series drawn
//! as extruded shapes) need a small amount of genuine computational geometry:
//! - a projection transform mapping scene-relative `(x, y, z)` points into 2D
//!   drawing coordinates ([`Projection`]),
//! - a classification of which of the six scene walls currently face the
//!   viewer ([`visible_surfaces`]),
//! - under perspective, a bisection search for the scene coordinate at which a
//!   wall pair's orientation flips ([`center_of_projection`]), used by the
//!   painter's-algorithm ordering in `vantage_charts`.
//!
//! Everything here is pure: the same configuration always produces the same
//! output, so results may be compared, cached, or bisected over. Painting,
//! text, and the chart property system live elsewhere; this crate only hands
//! back transformed coordinates, visibility sets, and brightness scalars.

#![no_std]

extern crate alloc;

mod cop;
#[cfg(not(feature = "std"))]
mod float;
mod light;
mod matrix;
mod point3;
mod projection;
mod scene;
mod surface;


pub use cop::{CopAxes, center_of_projection};
pub use light::LightStyle;
pub use matrix::Mat4;
pub use point3::Point3;
pub use projection::Projection;
pub use scene::{Scene3, SceneError};
pub use surface::{Surface, SurfaceSet, visible_surfaces};
