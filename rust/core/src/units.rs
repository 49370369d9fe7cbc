// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and the scale transform applied on import
//!
//! View3D files carry no units. The user supplies a scale factor and the
//! unit the coordinates are written in; the importer converts them to the
//! host's length unit (inches by default).

use std::fmt;
use std::str::FromStr;

use crate::error::{Field, UnitError};
use crate::numeric::parse_float;

/// Length units accepted for View3D coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Foot,
    Inch,
}

impl LengthUnit {
    /// Length of one unit in metres
    #[inline]
    pub fn metres(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    /// Short name used on input and in summaries
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Ok(LengthUnit::Meter),
            "cm" => Ok(LengthUnit::Centimeter),
            "ft" => Ok(LengthUnit::Foot),
            "in" => Ok(LengthUnit::Inch),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scale plus unit conversion from file coordinates to host lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTransform {
    pub scale: f64,
    pub source: LengthUnit,
    pub target: LengthUnit,
}

impl Default for UnitTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            source: LengthUnit::Meter,
            target: LengthUnit::Inch,
        }
    }
}

impl UnitTransform {
    /// Transform into the default target unit (inches)
    pub fn new(scale: f64, source: LengthUnit) -> Self {
        Self {
            scale,
            source,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: LengthUnit) -> Self {
        self.target = target;
        self
    }

    /// Build a transform from the strings a user typed for scale and units.
    ///
    /// The scale accepts the same float shapes as vertex coordinates.
    pub fn from_input(scale: &str, units: &str) -> Result<Self, UnitError> {
        let value = parse_float(scale.trim(), Field::ScaleFactor)
            .map_err(|_| UnitError::InvalidScale(scale.to_string()))?;
        if !value.is_finite() {
            return Err(UnitError::InvalidScale(scale.to_string()));
        }
        Ok(Self::new(value, units.parse()?))
    }

    /// Multiplier applied to every coordinate
    #[inline]
    pub fn factor(&self) -> f64 {
        self.scale * self.source.metres() / self.target.metres()
    }

    #[inline]
    pub fn apply(&self, position: [f64; 3]) -> [f64; 3] {
        let k = self.factor();
        [position[0] * k, position[1] * k, position[2] * k]
    }
}
