//! This module describes the Bound trait, which allows for a description of what values a color
//! space considers valid. None of the conversions in this crate clamp anything, so out-of-range
//! inputs carry through and give out-of-range outputs; `Bound` is how callers opt in to bringing a
//! color back into range.

use colorpoint::ColorPoint;
use colors::{HPLuvColor, HSLuvColor};
use color::RGBColor;
use coord::Coord;

/// Describes a color space in which the total space of representable colors has explicit bounds on
/// each component. For example, an sRGB color can't have negative values for any of its
/// components, and HSLuv saturation above 100 is outside of sRGB by definition.
/// # Example
/// Bound a clearly-problematic color within HSLuv, then convert it.
///
/// ```
/// # use hsluv::prelude::*;
/// let out_of_bounds = HSLuvColor{h: 30., s: 150., l: 60.};
/// // far outside sRGB: blue goes negative
/// assert!(out_of_bounds.convert::<RGBColor>().b < -1.0);
/// let in_bounds = HSLuvColor::clamp(out_of_bounds);
/// assert!((in_bounds.s - 100.).abs() <= 1e-9);
/// let rgb: RGBColor = in_bounds.convert();
/// assert_eq!(rgb.to_string(), "#E37100");
/// ```
pub trait Bound: ColorPoint {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN components stay NaN.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp(point.x, ranges[0]),
            y: clamp(point.y, ranges[1]),
            z: clamp(point.z, ranges[2]),
        }
    }
    /// Given a Color that can be embedded in 3D space, returns a new version of that color that is in
    /// the bounds of this color space, even if the coordinate systems of the two spaces differ. If
    /// the color is already in bounds, it simply returns a copy.
    fn clamp<T: ColorPoint>(color: T) -> T {
        let converted_color: Self = color.convert();
        let point: Coord = converted_color.into();
        Self::from(Self::clamp_coord(point)).convert()
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl Bound for HSLuvColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
}

/// HPLuv saturation is only guaranteed displayable up to 100, so that's the bound used here even
/// though plenty of sRGB colors sit above it.
impl Bound for HPLuvColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use color::{Color, RGBColor};
    use colors::{HPLuvColor, HSLuvColor};

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor {
            r: 0.1,
            g: -0.2,
            b: 1.2,
        };
        assert!(RGBColor::clamp(color1).approx_equal(&RGBColor {
            r: 0.1,
            g: 0.,
            b: 1.,
        }));
    }

    #[test]
    fn test_hue_bounds() {
        let color1 = HSLuvColor {
            h: -24.0,
            s: -0.2,
            l: 110.0,
        };
        let color2 = HPLuvColor {
            h: 375.0,
            s: 20.0,
            l: 50.0,
        };
        let clamped1 = HSLuvColor::clamp(color1);
        assert_eq!(
            clamped1,
            HSLuvColor {
                h: 0.,
                s: 0.,
                l: 100.,
            }
        );
        let clamped2 = HPLuvColor::clamp(color2);
        // hue wraps on the way through XYZ, so it's never clamped
        assert!((clamped2.h - 15.0).abs() <= 1e-9);
        assert!((clamped2.s - 20.0).abs() <= 1e-9);
        assert!((clamped2.l - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn test_clamp_across_spaces() {
        // a vivid HPLuv red is too saturated for HPLuv's bounds, but fine for RGB
        let red: HPLuvColor = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        }.convert();
        let still_red = RGBColor::clamp(red);
        assert!((still_red.s - red.s).abs() <= 1e-6);
        let pastel = HPLuvColor::clamp(red);
        assert!((pastel.s - 100.0).abs() <= 1e-9);
    }
}
