//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but with the difference that u and v are roughly
//! equivalent to red and green and luminance is then used to calculate the blue part. The thing
//! that makes it useful here is that straight lines in XYZ stay straight lines in the (u, v) plane
//! at a fixed lightness, so the edges of the sRGB gamut are simple to describe.

use color::{Color, XYZColor};
use consts::{EPSILON, KAPPA, NEAR_ZERO, REF_U, REF_V};
use coord::Coord;

/// Converts relative luminance (Y, with white at 1) to CIE lightness (L, with white at 100).
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

/// Converts CIE lightness back to relative luminance: the inverse of [`y_to_l`].
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

/// A similar color system to CIELAB, adapted at the same time and with similar goals. It attempts to
/// be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity relative to the D65 white point, which sits at u = v = 0.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::CIELUVColor;
/// let white: CIELUVColor = RGBColor{r: 1., g: 1., b: 1.}.convert();
/// assert!((white.l - 100.).abs() <= 1e-8);
/// assert!(white.u.abs() <= 1e-8);
/// assert!(white.v.abs() <= 1e-8);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The luminance component of LUV. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    /// Positive is red, negative is green.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is. Positive is
    /// yellow, negative is blue.
    pub v: f64,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color. Colors darker than 1e-8 lightness are given
    /// u = v = 0: their chromaticity is numerical noise.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let l = y_to_l(xyz.y);
        if l < NEAR_ZERO {
            return CIELUVColor { l, u: 0.0, v: 0.0 };
        }
        let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        let u_prime = 4.0 * xyz.x / denom;
        let v_prime = 9.0 * xyz.y / denom;
        CIELUVColor {
            l,
            u: 13.0 * l * (u_prime - REF_U),
            v: 13.0 * l * (v_prime - REF_V),
        }
    }
    /// Returns a new `XYZColor` that matches the given color. Anything at or below 1e-8 lightness is
    /// black, which would otherwise divide by zero.
    fn to_xyz(&self) -> XYZColor {
        if self.l <= NEAR_ZERO {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let u_prime = self.u / (13.0 * self.l) + REF_U;
        let v_prime = self.v / (13.0 * self.l) + REF_V;
        let y = l_to_y(self.l);
        let x = -(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime);
        let z = (9.0 * y - 15.0 * v_prime * y - v_prime * x) / (3.0 * v_prime);
        XYZColor { x, y, z }
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for CIELUVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.u,
            z: self.v,
        }
    }
}
