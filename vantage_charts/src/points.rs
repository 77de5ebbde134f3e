// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient per-point draw records.

use smallvec::SmallVec;
use vantage_scene::{Point3, Surface, SurfaceSet};

/// One rendered data point, expanded for a single draw pass.
///
/// Positions are plot-area drawing units: `x_position`/`y_position` name the
/// left/top edge of the bar footprint, `z_position` the back edge of its depth
/// slab. Records are created fresh per pass and never persisted; the draw
/// order comparator consumes them and the painter paints them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint3 {
    /// Left edge of the bar footprint.
    pub x_position: f64,
    /// Horizontal center, used for center-of-projection ordering.
    pub x_center: f64,
    /// Footprint width.
    pub width: f64,
    /// Top edge of the bar extent.
    pub y_position: f64,
    /// Vertical extent of the bar.
    pub height: f64,
    /// Back edge of the depth slab.
    pub z_position: f64,
    /// Depth slab thickness.
    pub depth: f64,
    /// Index of the owning series in the chart area.
    pub series: usize,
    /// Index of the source point within the series.
    pub point: usize,
    /// Whether the owning series uses implicit x indices.
    pub indexed_series: bool,
}

impl DataPoint3 {
    /// The eight cuboid corners of this point's extruded bar, untransformed.
    pub fn corners(&self) -> [Point3; 8] {
        let (x0, x1) = (self.x_position, self.x_position + self.width);
        let (y0, y1) = (self.y_position, self.y_position + self.height);
        let (z0, z1) = (self.z_position, self.z_position + self.depth);
        [
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x0, y1, z1),
        ]
    }

    /// The four untransformed corners of one bar face, wound so the first
    /// three corners give the outward-facing order used by the surface
    /// visibility tests and [`vantage_scene::Projection::surface_brightness`].
    pub fn face(&self, surface: Surface) -> [Point3; 4] {
        let (x0, x1) = (self.x_position, self.x_position + self.width);
        let (y0, y1) = (self.y_position, self.y_position + self.height);
        let (z0, z1) = (self.z_position, self.z_position + self.depth);
        match surface {
            Surface::Front => [
                Point3::new(x0, y0, z1),
                Point3::new(x1, y0, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x0, y1, z1),
            ],
            Surface::Back => [
                Point3::new(x1, y0, z0),
                Point3::new(x0, y0, z0),
                Point3::new(x0, y1, z0),
                Point3::new(x1, y1, z0),
            ],
            Surface::Left => [
                Point3::new(x0, y0, z0),
                Point3::new(x0, y0, z1),
                Point3::new(x0, y1, z1),
                Point3::new(x0, y1, z0),
            ],
            Surface::Right => [
                Point3::new(x1, y0, z1),
                Point3::new(x1, y0, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x1, y1, z1),
            ],
            Surface::Top => [
                Point3::new(x0, y0, z0),
                Point3::new(x1, y0, z0),
                Point3::new(x1, y0, z1),
                Point3::new(x0, y0, z1),
            ],
            Surface::Bottom => [
                Point3::new(x0, y1, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y1, z0),
                Point3::new(x0, y1, z0),
            ],
        }
    }

    /// The faces of this bar that can face the viewer, given the walls
    /// currently visible for the whole scene.
    ///
    /// A bar face points the same way as the matching scene wall, so the
    /// scene-level classification carries over directly.
    pub fn visible_faces(&self, visible: SurfaceSet) -> SmallVec<[(Surface, [Point3; 4]); 3]> {
        Surface::ALL
            .into_iter()
            .filter(|&s| visible.contains(s))
            .map(|s| (s, self.face(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> DataPoint3 {
        DataPoint3 {
            x_position: 10.0,
            x_center: 15.0,
            width: 10.0,
            y_position: 40.0,
            height: 60.0,
            z_position: 5.0,
            depth: 20.0,
            series: 0,
            point: 0,
            indexed_series: false,
        }
    }

    #[test]
    fn faces_use_cuboid_corners() {
        let p = point();
        let corners = p.corners();
        for surface in Surface::ALL {
            for c in p.face(surface) {
                assert!(corners.contains(&c), "{surface:?} corner {c:?} not on the cuboid");
            }
        }
    }

    #[test]
    fn visible_faces_follow_the_scene_walls() {
        let p = point();
        let visible: SurfaceSet = [Surface::Front, Surface::Right, Surface::Bottom]
            .into_iter()
            .collect();
        let faces = p.visible_faces(visible);
        assert_eq!(faces.len(), 3);
        assert!(faces.iter().all(|(s, _)| visible.contains(*s)));
    }
}
