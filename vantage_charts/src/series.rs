// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The series model the depth allocator works over.
//!
//! A series is deliberately thin: a chart-type tag with a small capability
//! set (stacked / side-by-side / stack groups), the raw `(x, y)` values, and
//! the per-series overrides that influence clustering. Everything a painter
//! needs beyond that (markers, borders, labels) lives outside this core.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use peniko::Brush;
use peniko::color::palette::css;
use thiserror::Error;

/// Errors rejected when configuring a series.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The custom side-by-side attribute accepts only `"True"`, `"False"` or
    /// `"Auto"` (case-insensitive).
    #[error("unrecognized side-by-side override {0:?} (expected True/False/Auto)")]
    SideBySide(String),
}

/// The chart type a series is rendered as.
///
/// Only the properties that matter for depth allocation are modeled: whether
/// series of this type stack, draw side-by-side, and honor stack groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Vertical bars drawn side-by-side per category.
    Column,
    /// Vertical bars stacked within a stack group.
    StackedColumn,
    /// A line per series; never stacked, never side-by-side.
    Line,
    /// A filled area per series.
    Area,
    /// Areas stacked within a stack group.
    StackedArea,
}

impl ChartType {
    /// Whether series of this type are drawn stacked onto each other.
    pub fn is_stacked(self) -> bool {
        matches!(self, Self::StackedColumn | Self::StackedArea)
    }

    /// Whether series of this type compete for horizontal space per category
    /// and can share one depth slot in clustered mode.
    pub fn is_side_by_side(self) -> bool {
        matches!(self, Self::Column)
    }

    /// Whether series of this type honor an explicit stack group name.
    pub fn supports_stack_groups(self) -> bool {
        self.is_stacked()
    }
}

/// Per-series override of the chart type's side-by-side default.
///
/// Parsed from the attribute strings `"True"`, `"False"` and `"Auto"`
/// (case-insensitive); any other value is a configuration error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SideBySide {
    /// Follow the chart type default.
    #[default]
    Auto,
    /// Force side-by-side drawing.
    True,
    /// Force an own depth slot.
    False,
}

impl FromStr for SideBySide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if s.eq_ignore_ascii_case("true") {
            Ok(Self::True)
        } else if s.eq_ignore_ascii_case("false") {
            Ok(Self::False)
        } else {
            Err(ConfigError::SideBySide(String::from(s)))
        }
    }
}

/// One data series bound to a 3D chart area.
#[derive(Clone, Debug)]
pub struct Series {
    /// Series name, unique within a chart area.
    pub name: String,
    /// The chart type this series renders as.
    pub chart_type: ChartType,
    /// Stack group name for stacked chart types; series of the same stacked
    /// type sharing a group stack onto each other.
    pub stack_group: Option<String>,
    /// Side-by-side override; [`SideBySide::Auto`] follows the chart type.
    pub side_by_side: SideBySide,
    /// Whether x values are implicit 1-based indices rather than data values.
    pub indexed: bool,
    /// The raw `(x, y)` values in data units.
    pub values: Vec<(f64, f64)>,
    /// Fill used by painters for this series.
    pub fill: Brush,
}

impl Series {
    /// Creates an empty series of the given type.
    pub fn new(name: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            name: name.into(),
            chart_type,
            stack_group: None,
            side_by_side: SideBySide::Auto,
            indexed: false,
            values: Vec::new(),
            fill: Brush::Solid(css::CORNFLOWER_BLUE),
        }
    }

    /// Sets the data values.
    pub fn with_values(mut self, values: Vec<(f64, f64)>) -> Self {
        self.values = values;
        self
    }

    /// Sets y values with implicit 1-based x indices.
    pub fn with_indexed_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.values = values
            .into_iter()
            .enumerate()
            .map(|(i, y)| ((i + 1) as f64, y))
            .collect();
        self.indexed = true;
        self
    }

    /// Sets the stack group name.
    pub fn with_stack_group(mut self, group: impl Into<String>) -> Self {
        self.stack_group = Some(group.into());
        self
    }

    /// Sets the side-by-side override from its attribute string.
    pub fn with_side_by_side(mut self, attr: &str) -> Result<Self, ConfigError> {
        self.side_by_side = attr.parse()?;
        Ok(self)
    }

    /// Sets the fill brush.
    pub fn with_fill(mut self, fill: Brush) -> Self {
        self.fill = fill;
        self
    }

    /// Resolves the effective side-by-side behavior, override first.
    pub fn draws_side_by_side(&self) -> bool {
        match self.side_by_side {
            SideBySide::Auto => self.chart_type.is_side_by_side(),
            SideBySide::True => true,
            SideBySide::False => false,
        }
    }
}

/// Returns a default categorical fill palette for `count` series.
///
/// Colors are taken from named CSS colors and repeat if `count` exceeds the
/// palette length.
pub fn default_series_fills(count: usize) -> Vec<Brush> {
    const PALETTE: [peniko::Color; 8] = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];

    (0..count)
        .map(|i| Brush::Solid(PALETTE[i % PALETTE.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_by_side_parse_is_case_insensitive() {
        assert_eq!("TRUE".parse(), Ok(SideBySide::True));
        assert_eq!("false".parse(), Ok(SideBySide::False));
        assert_eq!("Auto".parse(), Ok(SideBySide::Auto));
    }

    #[test]
    fn unknown_side_by_side_attribute_is_rejected() {
        let err = "sideways".parse::<SideBySide>().unwrap_err();
        assert_eq!(err, ConfigError::SideBySide(String::from("sideways")));
    }

    #[test]
    fn override_takes_precedence_over_chart_type() {
        let series = Series::new("a", ChartType::Line)
            .with_side_by_side("true")
            .unwrap();
        assert!(series.draws_side_by_side());

        let series = Series::new("b", ChartType::Column)
            .with_side_by_side("False")
            .unwrap();
        assert!(!series.draws_side_by_side());

        assert!(Series::new("c", ChartType::Column).draws_side_by_side());
        assert!(!Series::new("d", ChartType::StackedColumn).draws_side_by_side());
    }

    #[test]
    fn indexed_values_number_from_one() {
        let series = Series::new("a", ChartType::Column).with_indexed_values([5.0, 7.0]);
        assert!(series.indexed);
        assert_eq!(series.values, alloc::vec![(1.0, 5.0), (2.0, 7.0)]);
    }
}
