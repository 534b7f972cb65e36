//! This module implements HSLuv, a human-friendly alternative to HSL. Hue and lightness come
//! straight from CIELCHuv; saturation is chroma expressed as a percentage of the largest chroma
//! sRGB can display at that lightness and hue. Every (h, s, l) with s and l between 0 and 100 is
//! therefore a displayable color. Unlike HSL, lightness here actually tracks perceived lightness,
//! and unlike CIELCHuv, no combination of inputs falls off the gamut.
//!
//! The price is that saturation is not perceptually uniform across hues: 100% saturated blue is
//! much less chromatic than 100% saturated red at the same lightness, because sRGB reaches further
//! in some directions than others. [`HPLuvColor`](../hpluvcolor/struct.HPLuvColor.html) makes the
//! opposite trade.

use super::cielchuvcolor::CIELCHuvColor;
use color::{Color, XYZColor};
use consts::{NEAR_WHITE, NEAR_ZERO};
use coord::Coord;
use gamut::max_chroma_for_lh;

/// A color in HSLuv.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// // a ring of equally light, fully saturated colors
/// let ring: Vec<RGBColor> = (0..6u8)
///     .map(|i| HSLuvColor { h: f64::from(i) * 60.0, s: 100.0, l: 65.0 }.convert::<RGBColor>())
///     .collect();
/// for color in ring.iter() {
///     for &c in [color.r, color.g, color.b].iter() {
///         assert!(c >= -1e-9 && c <= 1.0 + 1e-9);
///     }
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// The hue component, in degrees from 0 to 360. The same as the hue of CIELCHuv.
    pub h: f64,
    /// The saturation component, from 0 (gray) to 100 (the most colorful sRGB can be at this
    /// lightness and hue).
    pub s: f64,
    /// The lightness component, from 0 (black) to 100 (white). The same as CIELUV lightness.
    pub l: f64,
}

impl HSLuvColor {
    /// Rescales chroma into saturation. Black and white (lightness within 1e-8 of 0, or above
    /// 99.9999999) have no gamut to speak of and get saturation 0; grays get hue 0.
    pub fn from_lch(lch: CIELCHuvColor) -> HSLuvColor {
        let s = if lch.l > NEAR_WHITE || lch.l < NEAR_ZERO {
            0.0
        } else {
            lch.c / max_chroma_for_lh(lch.l, lch.h) * 100.0
        };
        let h = if lch.c < NEAR_ZERO { 0.0 } else { lch.h };
        HSLuvColor { h, s, l: lch.l }
    }
    /// Rescales saturation back into chroma, with the same special cases as
    /// [`from_lch`](#method.from_lch): black and white get chroma 0, and anything with saturation
    /// below 1e-8 gets hue 0.
    pub fn to_lch(&self) -> CIELCHuvColor {
        let c = if self.l > NEAR_WHITE || self.l < NEAR_ZERO {
            0.0
        } else {
            max_chroma_for_lh(self.l, self.h) / 100.0 * self.s
        };
        let h = if self.s < NEAR_ZERO { 0.0 } else { self.h };
        CIELCHuvColor { l: self.l, c, h }
    }
}

impl Color for HSLuvColor {
    /// Converts from XYZ through CIELUV and CIELCHuv.
    fn from_xyz(xyz: XYZColor) -> HSLuvColor {
        HSLuvColor::from_lch(CIELCHuvColor::from_xyz(xyz))
    }
    /// Converts to XYZ through CIELCHuv and CIELUV.
    fn to_xyz(&self) -> XYZColor {
        self.to_lch().to_xyz()
    }
}

impl From<Coord> for HSLuvColor {
    fn from(c: Coord) -> HSLuvColor {
        HSLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HSLuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}
