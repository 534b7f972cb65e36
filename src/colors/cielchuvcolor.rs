//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIELCH. HSLuv and HPLuv are both
//! rescalings of the chroma axis of this space.

use super::cieluvcolor::CIELUVColor;
use color::{Color, XYZColor};
use consts::NEAR_ZERO;
use coord::Coord;

/// The polar version of CIELUV, analogous to the relationship between CIELCH and CIELAB. Sometimes
/// referred to as CIEHCL, but this crate uses CIELCHuv to be explicit and avoid any confusion.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::CIELCHuvColor;
/// // hue-shift red to yellow, keeping the same lightness: it ends up brown
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let red_lch: CIELCHuvColor = red.convert();
/// let mut yellow = red_lch;
/// yellow.h = yellow.h + 60.;
/// println!("{}", red.to_string());
/// println!("{}", yellow.convert::<RGBColor>().to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The luminance component. Exactly the same as CIELUV. Varies between 0 and 100 by definition.
    pub l: f64,
    /// The chroma component: essentially, how colorful the color is compared to white. This is the
    /// radius in cylindrical coordinates, and how far it can go before leaving sRGB depends on both
    /// lightness and hue.
    pub c: f64,
    /// The hue component, in degrees from 0 to 360. This is the angle in cylindrical coordinates.
    /// Grays have no meaningful hue and are given 0.
    pub h: f64,
}

impl CIELCHuvColor {
    /// Converts a CIELUV color to polar form. The hue is normalized into [0, 360), and if the chroma
    /// is below 1e-8 the hue is set to 0.
    pub fn from_luv(luv: CIELUVColor) -> CIELCHuvColor {
        let c = luv.u.hypot(luv.v);
        let h = if c < NEAR_ZERO {
            // grays: disambiguate hue
            0.0
        } else {
            let unbounded_h = luv.v.atan2(luv.u).to_degrees();
            if unbounded_h < 0.0 {
                // a tiny negative angle can round up to exactly 360
                (unbounded_h + 360.0) % 360.0
            } else {
                unbounded_h
            }
        };
        CIELCHuvColor { l: luv.l, c, h }
    }
    /// Converts back to CIELUV.
    pub fn to_luv(&self) -> CIELUVColor {
        let rad_h = self.h.to_radians();
        CIELUVColor {
            l: self.l,
            u: self.c * rad_h.cos(),
            v: self.c * rad_h.sin(),
        }
    }
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        CIELCHuvColor::from_luv(CIELUVColor::from_xyz(xyz))
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        self.to_luv().to_xyz()
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for CIELCHuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cielchuv_xyz_conversion() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.6,
            z: 0.2,
        };
        let lchuv: CIELCHuvColor = xyz.convert();
        let xyz2: XYZColor = lchuv.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_hue_range() {
        let quadrants = [(1.0, 1.0, 45.0), (-1.0, 1.0, 135.0), (-1.0, -1.0, 225.0), (1.0, -1.0, 315.0)];
        for &(u, v, h) in quadrants.iter() {
            let lch = CIELCHuvColor::from_luv(CIELUVColor { l: 50.0, u, v });
            assert!((lch.h - h).abs() <= 1e-10);
            assert!((lch.c - 2f64.sqrt()).abs() <= 1e-10);
        }
        let tiny_negative = CIELCHuvColor::from_luv(CIELUVColor {
            l: 50.0,
            u: 1.0,
            v: -1e-300,
        });
        assert!(tiny_negative.h >= 0.0 && tiny_negative.h < 360.0);
    }

    #[test]
    fn test_gray_hue_is_zero() {
        let gray = CIELCHuvColor::from_luv(CIELUVColor {
            l: 50.0,
            u: -5e-9,
            v: -5e-9,
        });
        assert_eq!(gray.h, 0.0);
        assert!(gray.c < 1e-8);
    }

    #[test]
    fn test_luv_round_trip() {
        let luv = CIELUVColor {
            l: 62.0,
            u: -31.5,
            v: 48.25,
        };
        let luv2 = CIELCHuvColor::from_luv(luv).to_luv();
        assert!((luv.u - luv2.u).abs() <= 1e-10);
        assert!((luv.v - luv2.v).abs() <= 1e-10);
        assert_eq!(luv.l, luv2.l);
    }
}
