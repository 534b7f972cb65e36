//! This module implements HPLuv, the pastel sibling of HSLuv. Saturation is chroma as a percentage
//! of the largest chroma that is displayable at this lightness for *every* hue, so equal saturation
//! means equal chroma no matter the hue. That keeps the space perceptually uniform, but only
//! pastel colors are reachable with saturation up to 100: anything more colorful comes out with
//! saturation above 100.

use super::cielchuvcolor::CIELCHuvColor;
use color::{Color, XYZColor};
use consts::{NEAR_WHITE, NEAR_ZERO};
use coord::Coord;
use gamut::max_safe_chroma_for_l;

/// A color in HPLuv.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// let red: HPLuvColor = RGBColor{r: 1., g: 0., b: 0.}.convert();
/// // pure red is far outside the pastel circle
/// assert!(red.s > 400.0);
/// let pastel = HPLuvColor{h: red.h, s: 100.0, l: red.l};
/// println!("{}", pastel.convert::<RGBColor>().to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// The hue component, in degrees from 0 to 360. The same as the hue of CIELCHuv.
    pub h: f64,
    /// The saturation component. 0 is gray and 100 is the most chroma available at this lightness
    /// regardless of hue. Larger values are meaningful, but may not be in gamut.
    pub s: f64,
    /// The lightness component, from 0 (black) to 100 (white). The same as CIELUV lightness.
    pub l: f64,
}

impl HPLuvColor {
    /// Rescales chroma into saturation. Black and white get saturation 0 and grays get hue 0, just
    /// like HSLuv.
    pub fn from_lch(lch: CIELCHuvColor) -> HPLuvColor {
        let s = if lch.l > NEAR_WHITE || lch.l < NEAR_ZERO {
            0.0
        } else {
            lch.c / max_safe_chroma_for_l(lch.l) * 100.0
        };
        let h = if lch.c < NEAR_ZERO { 0.0 } else { lch.h };
        HPLuvColor { h, s, l: lch.l }
    }
    /// Rescales saturation back into chroma.
    pub fn to_lch(&self) -> CIELCHuvColor {
        let c = if self.l > NEAR_WHITE || self.l < NEAR_ZERO {
            0.0
        } else {
            max_safe_chroma_for_l(self.l) / 100.0 * self.s
        };
        let h = if self.s < NEAR_ZERO { 0.0 } else { self.h };
        CIELCHuvColor { l: self.l, c, h }
    }
}

impl Color for HPLuvColor {
    fn from_xyz(xyz: XYZColor) -> HPLuvColor {
        HPLuvColor::from_lch(CIELCHuvColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_lch().to_xyz()
    }
}

impl From<Coord> for HPLuvColor {
    fn from(c: Coord) -> HPLuvColor {
        HPLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HPLuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;
    use colors::hsluvcolor::HSLuvColor;

    #[test]
    fn test_hpluv_rgb_conversion() {
        let red_rgb = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let red_hpluv: HPLuvColor = red_rgb.convert();
        assert!((red_hpluv.h - 12.177050630061776).abs() <= 1e-8);
        assert!((red_hpluv.s - 426.7467891831).abs() <= 1e-6);
        assert!((red_hpluv.l - 53.23711559542933).abs() <= 1e-8);
        let back: RGBColor = red_hpluv.convert();
        assert!(back.approx_equal(&red_rgb));
    }

    #[test]
    fn test_saturation_is_hue_independent() {
        // the same saturation and lightness gives the same chroma at every hue
        let chroma = HPLuvColor {
            h: 0.0,
            s: 70.0,
            l: 45.0,
        }.to_lch()
            .c;
        for h in 1..36u8 {
            let lch = HPLuvColor {
                h: f64::from(h) * 10.0,
                s: 70.0,
                l: 45.0,
            }.to_lch();
            assert!((lch.c - chroma).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_never_more_saturated_than_hsluv() {
        let colors = [
            RGBColor { r: 0.2, g: 0.7, b: 0.4 },
            RGBColor { r: 0.9, g: 0.1, b: 0.6 },
            RGBColor { r: 0.1, g: 0.1, b: 0.8 },
        ];
        for rgb in colors.iter() {
            let hpluv: HPLuvColor = rgb.convert();
            let hsluv: HSLuvColor = rgb.convert();
            assert!(hpluv.s >= hsluv.s);
        }
    }

    #[test]
    fn test_black_and_white_are_unsaturated() {
        for &l in [0.0, 100.0].iter() {
            let hpluv = HPLuvColor::from_lch(CIELCHuvColor { l, c: 12.0, h: 300.0 });
            assert_eq!(hpluv.s, 0.0);
            assert_eq!(HPLuvColor { h: 300.0, s: 50.0, l }.to_lch().c, 0.0);
        }
    }
}
