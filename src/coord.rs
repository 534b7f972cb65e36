//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every stage of the
//! HSLuv pipeline is a point in some 3D space, so this is the common ground between them: the color
//! matrices are stored as rows of `Coord`, and every color type converts to and from one.

use num;
use num::{Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// Casts a scalar to `f64`. Anything that can't be represented becomes NaN, which then propagates
/// like any other bad floating-point input would.
fn to_f64<U: Scalar>(s: U) -> f64 {
    num::cast(s).unwrap_or(f64::NAN)
}

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. Any color that converts to
/// and from a `Coord` matches its components with these axes in the order of the letters in its
/// name: for example, `HSLuvColor` maps to a coordinate such that `h` is on the x-axis, `s` is on
/// the y-axis, and `l` is on the z-axis.
///
/// # Examples
/// ## Basic Operations
/// ```
/// # use hsluv::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // componentwise addition and subtraction
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalars only go on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// assert_eq!(point_1.dot(&point_2), 7. + 16. + 21.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// This is a perfect analogue to numbers: for any Coords c1, c2, and c3, c1 + c2 = c3 implies
/// c3 - c2 = c1 and c3 - c1 = c2, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication and division: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = to_f64(rhs);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

/// Division by zero follows IEEE rules and gives infinities or NaN.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r = to_f64(rhs);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The dot product of two points treated as vectors from the origin. This is how a row of a
    /// color matrix is applied to a color.
    pub fn dot(&self, other: &Coord) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// The midpoint between two 3D points: returns a new Coord.
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0.25, y: 0., z: 1.};
    /// let point2 = Coord{x: 0.75, y: 1., z: 1.};
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.weighted_midpoint(other, 0.5)
    }
    /// The weighted midpoint: like the midpoint, but with weighted averages instead of the arithmetic
    /// mean. Very strange things may happen if the weight is not between 0 and 1. A weight of 1 gives
    /// back `self` and a weight of 0 gives back `other`.
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        Coord {
            x: self.x * weight + (1.0 - weight) * other.x,
            y: self.y * weight + (1.0 - weight) * other.y,
            z: self.z * weight + (1.0 - weight) * other.z,
        }
    }
    /// The Euclidean distance between two 3D points. In HSLuv this is only loosely related to how
    /// different two colors look: hue is an angle, so 359 and 1 are close even though the distance
    /// between them here is 358.
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let diff = *self - *other;
        diff.dot(&diff).sqrt()
    }
}
