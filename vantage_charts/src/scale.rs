// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! The depth allocator and the data-point builder need just enough scale
//! machinery to map x/y data values into plot coordinates and to measure
//! intervals in axis units, including logarithmic axes where intervals live
//! in log space. Tick generation and axis guides are out of scope.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// The log base, or `None` for linear scales.
    ///
    /// Interval measurements (and therefore depth allocation) happen in log
    /// space when this is set.
    pub fn log_base(&self) -> Option<f64> {
        match self {
            Self::Linear(_) => None,
            Self::Log(s) => Some(s.base()),
        }
    }

    /// Range units per axis unit, where "axis unit" is a domain unit for
    /// linear scales and a log-base step for log scales.
    pub fn units_per_interval(&self) -> f64 {
        match self {
            Self::Linear(s) => {
                let (d0, d1) = s.domain;
                let (r0, r1) = s.range;
                let denom = (d1 - d0).abs();
                if denom == 0.0 { 0.0 } else { (r1 - r0).abs() / denom }
            }
            Self::Log(s) => {
                let (d0, d1) = s.domain;
                let (r0, r1) = s.range;
                if d0 <= 0.0 || d1 <= 0.0 {
                    return 0.0;
                }
                let denom = (s.log_base(d1) - s.log_base(d0)).abs();
                if denom == 0.0 { 0.0 } else { (r1 - r0).abs() / denom }
            }
        }
    }
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLog> for ScaleContinuous {
    fn from(value: ScaleLog) -> Self {
        Self::Log(value)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base; non-finite, non-positive or unit bases fall back
    /// to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    /// The log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints_and_midpoint() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(5.0), 50.0);
    }

    #[test]
    fn log_maps_decades_evenly() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 200.0));
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert_eq!(s.map(-5.0), 0.0);
    }

    #[test]
    fn units_per_interval_measures_log_scales_in_decades() {
        let lin: ScaleContinuous = ScaleLinear::new((0.0, 10.0), (0.0, 200.0)).into();
        assert!((lin.units_per_interval() - 20.0).abs() < 1e-9);

        let log: ScaleContinuous = ScaleLog::new((1.0, 100.0), (0.0, 200.0)).into();
        assert!((log.units_per_interval() - 100.0).abs() < 1e-9);
        assert_eq!(log.log_base(), Some(10.0));
    }
}
