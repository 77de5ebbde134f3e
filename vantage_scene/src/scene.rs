// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pass 3D scene configuration.

use thiserror::Error;

use crate::light::LightStyle;

/// Errors rejected when configuring a [`Scene3`].
///
/// Out-of-range view parameters are configuration errors surfaced to the
/// caller, not silently clamped.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SceneError {
    /// Inclination must lie in [-90, 90] degrees.
    #[error("inclination {0} out of range [-90, 90]")]
    Inclination(f64),
    /// Rotation must lie in [-180, 180] degrees.
    #[error("rotation {0} out of range [-180, 180]")]
    Rotation(f64),
    /// Perspective must lie in [0, 100] percent.
    #[error("perspective {0} out of range [0, 100]")]
    Perspective(f64),
    /// Scene depth must be non-negative.
    #[error("negative scene depth {0}")]
    Depth(f64),
}

/// View parameters for one 3D layout/paint pass.
///
/// A `Scene3` is built once per pass by the chart area and never mutated
/// mid-pass: surface visibility, cluster depth slots, and draw order all bake
/// these parameters in, so recomputing any of them against a stale scene is a
/// correctness bug rather than a staleness issue.
///
/// Perspective and right-angle axes are mutually exclusive. The builder
/// resolves the conflict at configuration time: setting a non-zero perspective
/// clears `right_angle_axes`, and enabling `right_angle_axes` zeroes the
/// perspective.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene3 {
    inclination: f64,
    rotation: f64,
    perspective: f64,
    depth: f64,
    right_angle_axes: bool,
    light: LightStyle,
}

impl Scene3 {
    /// Creates a scene with the given inclination and rotation (degrees) and
    /// depth (scene-relative units), parallel projection, no lighting.
    pub fn new(inclination: f64, rotation: f64, depth: f64) -> Result<Self, SceneError> {
        if !(-90.0..=90.0).contains(&inclination) {
            return Err(SceneError::Inclination(inclination));
        }
        if !(-180.0..=180.0).contains(&rotation) {
            return Err(SceneError::Rotation(rotation));
        }
        if depth < 0.0 || depth.is_nan() {
            return Err(SceneError::Depth(depth));
        }
        Ok(Self {
            inclination,
            rotation,
            perspective: 0.0,
            depth,
            right_angle_axes: false,
            light: LightStyle::None,
        })
    }

    /// Sets the perspective strength in percent.
    ///
    /// A non-zero perspective forces `right_angle_axes` off.
    pub fn with_perspective(mut self, perspective: f64) -> Result<Self, SceneError> {
        if !(0.0..=100.0).contains(&perspective) {
            return Err(SceneError::Perspective(perspective));
        }
        self.perspective = perspective;
        if perspective != 0.0 {
            self.right_angle_axes = false;
        }
        Ok(self)
    }

    /// Enables or disables right-angled (oblique) axes.
    ///
    /// Enabling right-angle axes forces the perspective to zero.
    pub fn with_right_angle_axes(mut self, right_angle_axes: bool) -> Self {
        self.right_angle_axes = right_angle_axes;
        if right_angle_axes {
            self.perspective = 0.0;
        }
        self
    }

    /// Replaces the scene depth, keeping every other parameter.
    pub fn with_depth(mut self, depth: f64) -> Result<Self, SceneError> {
        if depth < 0.0 || depth.is_nan() {
            return Err(SceneError::Depth(depth));
        }
        self.depth = depth;
        Ok(self)
    }

    /// Sets the lighting style used when shading walls and bar faces.
    pub fn with_light(mut self, light: LightStyle) -> Self {
        self.light = light;
        self
    }

    /// Inclination in degrees.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Perspective strength in percent (0 = parallel projection).
    pub fn perspective(&self) -> f64 {
        self.perspective
    }

    /// Scene depth in scene-relative units.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Whether the scene uses right-angled (oblique) axes.
    pub fn right_angle_axes(&self) -> bool {
        self.right_angle_axes
    }

    /// The configured lighting style.
    pub fn light(&self) -> LightStyle {
        self.light
    }
}
