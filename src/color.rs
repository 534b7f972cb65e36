//! This file defines the [`Color`] trait, the two device-side color types [`XYZColor`] and
//! [`RGBColor`], and the sRGB companding functions that connect them. XYZ is the hub: every color
//! type knows how to get to and from XYZ, and so every color type can be converted to every other
//! one with [`Color::convert`].
//!
//! Everything here is D65. sRGB is defined relative to D65 and HSLuv is built on CIELUV with a D65
//! reference white, so there is never any chromatic adaptation to do.

use std::fmt;

use consts::{M, M_INV};
use coord::Coord;

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point and scaled so that
/// white has `y = 1`. Although any point in XYZ coordinates is theoretically valid, in practice
/// XYZ colors are bounded: only colors with nonnegative coordinates are physically meaningful.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors in
    /// the human eye: the red receptors. Usually between 0 and 1.
    pub x: f64,
    /// The Y axis of the CIE 1931 XYZ space, roughly representing the middle-wavelength receptors in
    /// the human eye. In CIE 1931, this is fudged to correspond exactly with perceived luminance.
    pub y: f64,
    /// The Z axis of the CIE 1931 XYZ space, roughly representing the short-wavelength receptors in
    /// the human eye. Usually between 0 and 1.
    pub z: f64,
}

impl XYZColor {
    /// Returns `true` if every component is within a tiny tolerance of the other color's, and
    /// `false` otherwise. Meant for checking round trips, not for judging visual similarity.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-10, ulps = 4)
            && approx_eq!(f64, self.y, other.y, epsilon = 1e-10, ulps = 4)
            && approx_eq!(f64, self.z, other.z, epsilon = 1e-10, ulps = 4)
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931
/// XYZ color space. Implementors only need the two conversions: everything else is provided.
pub trait Color: Sized {
    /// Converts from a color in CIE 1931 XYZ to the given color type.
    ///
    /// # Example
    /// ```
    /// # use hsluv::prelude::*;
    /// # use hsluv::color::XYZColor;
    /// let white = XYZColor { x: 0.95045592705, y: 1.0, z: 1.08905775076 };
    /// let rgb = RGBColor::from_xyz(white);
    /// assert_eq!(rgb.to_string(), "#FFFFFF");
    /// ```
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from the given color type to a color in CIE 1931 XYZ space.
    fn to_xyz(&self) -> XYZColor;
    /// Converts generic colors from one representation to another. This is done by going back and
    /// forth from the CIE 1931 XYZ space, which every color type can reach.
    ///
    /// # Example
    /// ```
    /// # use hsluv::prelude::*;
    /// let red = RGBColor { r: 1., g: 0., b: 0. };
    /// let hsluv: HSLuvColor = red.convert();
    /// assert!((hsluv.h - 12.177).abs() <= 1e-3);
    /// assert!((hsluv.s - 100.0).abs() <= 1e-6);
    /// assert!((hsluv.l - 53.237).abs() <= 1e-3);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl Into<Coord> for XYZColor {
    fn into(self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// Takes a linear-light sRGB channel and applies the sRGB transfer curve, giving the
/// gamma-encoded value a display expects. The curve is linear below 0.0031308.
pub fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// The inverse of [`from_linear`]: takes a gamma-encoded sRGB channel and returns its linear-light
/// value. The curve is linear at or below 0.04045.
pub fn to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// A color with red, green, and blue primaries of specified intensity, specifically in the sRGB
/// gamut: most computer screens use this to display colors. The attributes `r`, `g`, and `b` are
/// gamma-encoded floating-point numbers from 0 to 1 for visible colors. Values outside that range
/// are kept as they are: nothing in this crate clamps unless asked to (see [`Bound`]).
///
/// [`Bound`]: ../bound/trait.Bound.html
/// # Example
/// ```
/// # use hsluv::prelude::*;
/// let lavender = RGBColor::from((0x6E, 0x66, 0xCC));
/// assert_eq!(lavender.int_rgb_tup(), (110, 102, 204));
/// assert_eq!(lavender.to_string(), "#6E66CC");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component. Ranges from 0 to 1 for numbers displayable by sRGB machines.
    pub r: f64,
    /// The green component. Ranges from 0 to 1 for numbers displayable by sRGB machines.
    pub g: f64,
    /// The blue component. Ranges from 0 to 1 for numbers displayable by sRGB machines.
    pub b: f64,
}

impl RGBColor {
    /// Gets the components as integers from 0 to 255, the way most file formats and APIs want
    /// them. Components are rounded to the nearest integer and clamped into range first.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        let to_int = |c: f64| (c * 255.0).round().max(0.0).min(255.0) as u8;
        (to_int(self.r), to_int(self.g), to_int(self.b))
    }
    /// Returns `true` if every component is within 1e-10 of the other color's.
    pub fn approx_equal(&self, other: &RGBColor) -> bool {
        approx_eq!(f64, self.r, other.r, epsilon = 1e-10, ulps = 4)
            && approx_eq!(f64, self.g, other.g, epsilon = 1e-10, ulps = 4)
            && approx_eq!(f64, self.b, other.b, epsilon = 1e-10, ulps = 4)
    }
}

impl Color for RGBColor {
    /// Linearizes each channel, then applies the sRGB to XYZ matrix.
    fn to_xyz(&self) -> XYZColor {
        let rgb_lin = Coord {
            x: to_linear(self.r),
            y: to_linear(self.g),
            z: to_linear(self.b),
        };
        XYZColor {
            x: M_INV[0].dot(&rgb_lin),
            y: M_INV[1].dot(&rgb_lin),
            z: M_INV[2].dot(&rgb_lin),
        }
    }
    /// Applies the XYZ to sRGB matrix, then gamma-encodes each channel. No clamping is done, so
    /// imaginary or out-of-gamut colors give components outside 0 to 1.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let xyz_c: Coord = xyz.into();
        RGBColor {
            r: from_linear(M[0].dot(&xyz_c)),
            g: from_linear(M[1].dot(&xyz_c)),
            b: from_linear(M[2].dot(&xyz_c)),
        }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

/// Formats the color as an uppercase HTML hex code, like `#6E66CC`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
