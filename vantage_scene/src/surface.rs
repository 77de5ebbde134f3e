// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility classification for the six scene walls.
//!
//! Each wall of the scene cuboid is tested by projecting three of its corners
//! and reading the winding of the resulting 2D triangle. The corner triples
//! below are ordered so a wall facing the viewer yields a positive signed
//! area; this works unchanged under parallel projection, perspective, and
//! right-angled (sheared) axes, because the winding is evaluated *after* the
//! full transform.

use core::fmt;

use kurbo::Rect;

use crate::point3::Point3;
use crate::projection::Projection;

/// One of the six walls of the scene cuboid.
///
/// Names follow the drawing convention of [`Projection`]: `Front` is the wall
/// nearest the viewer at zero rotation (`z = z_offset + depth`), `Top` is the
/// wall with the smallest drawing-space y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Surface {
    /// The wall at maximum z (toward the viewer at rest).
    Front = 1,
    /// The wall at minimum z.
    Back = 1 << 1,
    /// The wall at minimum x.
    Left = 1 << 2,
    /// The wall at maximum x.
    Right = 1 << 3,
    /// The wall at minimum drawing-space y.
    Top = 1 << 4,
    /// The wall at maximum drawing-space y.
    Bottom = 1 << 5,
}

impl Surface {
    /// All six walls, in a fixed enumeration order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// The wall on the opposite side of the cuboid.
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// A set of scene walls, stored as a bitset.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSet(u8);

impl SurfaceSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` if the set contains `surface`.
    pub const fn contains(self, surface: Surface) -> bool {
        self.0 & surface as u8 != 0
    }

    /// Adds a wall to the set.
    pub fn insert(&mut self, surface: Surface) {
        self.0 |= surface as u8;
    }

    /// Returns `true` if no wall is in the set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of walls in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained walls in the order of [`Surface::ALL`].
    pub fn iter(self) -> impl Iterator<Item = Surface> {
        Surface::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<Surface> for SurfaceSet {
    fn from_iter<T: IntoIterator<Item = Surface>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for s in iter {
            set.insert(s);
        }
        set
    }
}

impl fmt::Debug for SurfaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Signed area (doubled) of a transformed 2D triangle.
///
/// With drawing-space y increasing downward, a positive value means the
/// corner triple reads clockwise on screen, which is how a front-facing wall
/// comes out given the orderings in [`surface_corners`].
pub(crate) fn winding(a: Point3, b: Point3, c: Point3) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Three corners of `surface` for the cuboid spanning `scene_rect` in x/y and
/// `[z_offset, z_offset + depth]` in z, ordered to give a positive winding
/// when the wall faces the viewer.
pub(crate) fn surface_corners(
    surface: Surface,
    scene_rect: Rect,
    z_offset: f64,
    depth: f64,
) -> [Point3; 3] {
    let Rect { x0, y0, x1, y1 } = scene_rect;
    let (z0, z1) = (z_offset, z_offset + depth);
    match surface {
        Surface::Front => [
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
        ],
        Surface::Back => [
            Point3::new(x1, y0, z0),
            Point3::new(x0, y0, z0),
            Point3::new(x0, y1, z0),
        ],
        Surface::Left => [
            Point3::new(x0, y0, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x0, y1, z1),
        ],
        Surface::Right => [
            Point3::new(x1, y0, z1),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
        ],
        Surface::Top => [
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y0, z1),
        ],
        Surface::Bottom => [
            Point3::new(x0, y1, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x1, y1, z0),
        ],
    }
}

/// Classifies which walls of the scene cuboid currently face the viewer.
///
/// This is cheap (six fixed-size triangle tests) and is recomputed whenever
/// the scene parameters change rather than cached across passes. Degenerate
/// geometry (a zero-size scene, or NaN creeping through the transform) yields
/// the empty set by convention.
pub fn visible_surfaces(
    scene_rect: Rect,
    z_offset: f64,
    depth: f64,
    projection: &Projection,
) -> SurfaceSet {
    Surface::ALL
        .into_iter()
        .filter(|&surface| {
            let [a, b, c] = surface_corners(surface, scene_rect, z_offset, depth)
                .map(|p| projection.transform_point(p));
            let w = winding(a, b, c);
            w.is_finite() && w > 0.0
        })
        .collect()
}
