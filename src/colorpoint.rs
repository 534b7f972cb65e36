//! This file implements the standard color functions that essentially work on 3D space: Euclidean
//! distance, midpoints, and weighted averages. All of these methods work on `Color` types that
//! implement `Into<Coord>` and `From<Coord>`, so every color type in this crate gets them. The most
//! common use is stepping between two HSLuv or HPLuv colors to build a palette whose lightness
//! changes evenly.

use std::error::Error;
use std::fmt;

use color::Color;
use coord::Coord;

/// Some errors that might pop up when dealing with colors as coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCalcError {
    /// The number of weights did not match the number of colors.
    MismatchedWeights,
}

impl fmt::Display for ColorCalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorCalcError::MismatchedWeights => {
                write!(f, "number of weights does not match number of colors")
            }
        }
    }
}

impl Error for ColorCalcError {}

/// A trait that indicates that the current Color can be embedded in 3D space. This also requires
/// `Clone` and `Copy`: there shouldn't be any necessary information outside of the coordinate data.
///
/// Note that these methods treat hue as an ordinary axis: the midpoint of hues 350 and 10 is 180,
/// not 0. Interpolate between colors with nearby hues, or adjust one hue by 360 first.
pub trait ColorPoint: Color + Into<Coord> + From<Coord> + Clone + Copy {
    /// Gets the Euclidean distance between these two points when embedded in 3D space. Formally
    /// speaking, this is a *metric*: it is 0 if and only if self and other are the same, the distance
    /// between two points A and B is never larger than the distance from A to C and the distance
    /// from B to C summed, and it is never negative.
    fn euclidean_distance(self, other: Self) -> f64 {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        c1.euclidean_distance(&c2)
    }

    /// Gets the *weighted midpoint* of two colors in a space as a new `Color`. A weight of 1 gives
    /// back `self`, a weight of 0 gives back `other`, and anything in between moves along the line
    /// segment connecting them.
    ///
    /// # Example
    /// ```
    /// # use hsluv::prelude::*;
    /// // five steps from dark to light at a fixed hue and saturation
    /// let dark = HSLuvColor { h: 250.0, s: 90.0, l: 20.0 };
    /// let light = HSLuvColor { h: 250.0, s: 90.0, l: 80.0 };
    /// let steps: Vec<HSLuvColor> = (0..5u8)
    ///     .map(|i| light.weighted_midpoint(dark, f64::from(i) / 4.0))
    ///     .collect();
    /// assert!((steps[1].l - 35.0).abs() <= 1e-10);
    /// assert!((steps[3].l - 65.0).abs() <= 1e-10);
    /// ```
    fn weighted_midpoint(self, other: Self, weight: f64) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.weighted_midpoint(&c2, weight))
    }

    /// Like `weighted_midpoint`, but with `weight = 0.5`: essentially, the `Color` representing the
    /// midpoint of the two inputs in 3D space.
    fn midpoint(self, other: Self) -> Self {
        self.weighted_midpoint(other, 0.5)
    }

    /// Returns the weighted average of a given set of colors. Weights will be normalized so that they
    /// sum to 1. Each component of the final value will be calculated by summing the components of
    /// each of the input colors multiplied by their given weight.
    /// # Errors
    /// Returns `ColorCalcError::MismatchedWeights` if the number of colors (`self` and anything in
    /// `others`) and the number of weights mismatch.
    fn weighted_average(self, others: &[Self], weights: &[f64]) -> Result<Self, ColorCalcError> {
        if others.len() + 1 != weights.len() {
            return Err(ColorCalcError::MismatchedWeights);
        }
        let norm: f64 = weights.iter().sum();
        let first: Coord = self.into();
        let coord = others
            .iter()
            .zip(weights[1..].iter())
            .fold(first * weights[0] / norm, |acc, (&color, &w)| {
                let c: Coord = color.into();
                acc + c * w / norm
            });
        Ok(Self::from(coord))
    }
}

impl<T: Color + Into<Coord> + From<Coord> + Clone + Copy> ColorPoint for T {}
