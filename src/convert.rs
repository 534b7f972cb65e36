//! Plain tuple versions of the four conversions this crate exists for. These are thin wrappers over
//! the typed API, handy when the numbers come from somewhere that has no use for the color structs
//! (a shader uniform, a slider, a config file). Nothing is clamped or validated: out-of-range input
//! goes through the same formulas and comes out out of range.

use color::{Color, RGBColor};
use colors::{HPLuvColor, HSLuvColor};

/// Converts HSLuv (hue in degrees, saturation and lightness from 0 to 100) to gamma-encoded sRGB
/// with channels from 0 to 1.
///
/// # Example
/// ```
/// let (r, g, b) = hsluv::hsluv_to_rgb(12.177050630061776, 100.0, 53.23711559542933);
/// assert!((r - 1.0).abs() <= 1e-10);
/// assert!(g.abs() <= 1e-10);
/// assert!(b.abs() <= 1e-10);
/// ```
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HSLuvColor { h, s, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts HPLuv (hue in degrees, saturation and lightness from 0 to 100) to gamma-encoded sRGB
/// with channels from 0 to 1.
pub fn hpluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HPLuvColor { h, s, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts gamma-encoded sRGB with channels from 0 to 1 to HSLuv, returned as `(h, s, l)`.
///
/// # Example
/// ```
/// let (h, s, l) = hsluv::rgb_to_hsluv(0.5, 0.5, 0.5);
/// assert_eq!(h, 0.0);
/// assert!(s.abs() <= 1e-8);
/// assert!((l - 53.38896474111432).abs() <= 1e-8);
/// ```
pub fn rgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hsluv: HSLuvColor = RGBColor { r, g, b }.convert();
    (hsluv.h, hsluv.s, hsluv.l)
}

/// Converts gamma-encoded sRGB with channels from 0 to 1 to HPLuv, returned as `(h, s, l)`.
/// Saturation goes above 100 for colors outside the pastel range.
pub fn rgb_to_hpluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hpluv: HPLuvColor = RGBColor { r, g, b }.convert();
    (hpluv.h, hpluv.s, hpluv.l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut::{max_chroma_for_lh, max_safe_chroma_for_l};

    fn grid(steps: u8) -> Vec<f64> {
        (0..=steps).map(|i| f64::from(i) / f64::from(steps)).collect()
    }

    fn assert_close(a: (f64, f64, f64), b: (f64, f64, f64), tol: f64) {
        assert!(
            (a.0 - b.0).abs() <= tol && (a.1 - b.1).abs() <= tol && (a.2 - b.2).abs() <= tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    // hue is an angle: 359.99999 and 0 are the same
    fn assert_hsl_close(a: (f64, f64, f64), b: (f64, f64, f64), tol: f64) {
        let dh = (a.0 - b.0).abs() % 360.0;
        assert!(
            dh.min(360.0 - dh) <= tol && (a.1 - b.1).abs() <= tol && (a.2 - b.2).abs() <= tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn assert_in_gamut(rgb: (f64, f64, f64)) {
        for &c in [rgb.0, rgb.1, rgb.2].iter() {
            assert!(c >= -1e-9 && c <= 1.0 + 1e-9, "{:?} out of gamut", rgb);
        }
    }

    #[test]
    fn test_rgb_round_trip() {
        let steps = grid(8);
        for &r in steps.iter() {
            for &g in steps.iter() {
                for &b in steps.iter() {
                    let (h, s, l) = rgb_to_hsluv(r, g, b);
                    assert_close(hsluv_to_rgb(h, s, l), (r, g, b), 1e-10);
                    let (h, s, l) = rgb_to_hpluv(r, g, b);
                    assert_close(hpluv_to_rgb(h, s, l), (r, g, b), 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_hsluv_round_trip() {
        // away from black, white and gray every HSLuv color comes back
        for h in 0..24u16 {
            for s in 1..10u8 {
                for l in 1..10u8 {
                    let hsl = (f64::from(h) * 15.0, f64::from(s) * 10.0, f64::from(l) * 10.0);
                    let (r, g, b) = hsluv_to_rgb(hsl.0, hsl.1, hsl.2);
                    assert_hsl_close(rgb_to_hsluv(r, g, b), hsl, 1e-8);
                    let (r, g, b) = hpluv_to_rgb(hsl.0, hsl.1, hsl.2);
                    assert_hsl_close(rgb_to_hpluv(r, g, b), hsl, 1e-8);
                }
            }
        }
    }

    #[test]
    fn test_gamut_containment() {
        for h in 0..36u16 {
            for s in 0..=10u8 {
                for l in 0..=10u8 {
                    let (h, s, l) = (f64::from(h) * 10.0, f64::from(s) * 10.0, f64::from(l) * 10.0);
                    assert_in_gamut(hsluv_to_rgb(h, s, l));
                    assert_in_gamut(hpluv_to_rgb(h, s, l));
                }
            }
        }
    }

    #[test]
    fn test_achromatic_axis() {
        for g in grid(20) {
            let (h, s, _) = rgb_to_hsluv(g, g, g);
            assert_eq!(h, 0.0);
            assert!(s.abs() <= 1e-8);
            let (h, s, _) = rgb_to_hpluv(g, g, g);
            assert_eq!(h, 0.0);
            assert!(s.abs() <= 1e-8);
        }
    }

    #[test]
    fn test_pole_agreement() {
        for h in 0..12u16 {
            for s in 0..=4u8 {
                let (h, s) = (f64::from(h) * 30.0, f64::from(s) * 25.0);
                assert_eq!(hsluv_to_rgb(h, s, 0.0), (0.0, 0.0, 0.0));
                assert_eq!(hpluv_to_rgb(h, s, 0.0), (0.0, 0.0, 0.0));
                assert_close(hsluv_to_rgb(h, s, 100.0), (1.0, 1.0, 1.0), 1e-10);
                assert_close(hpluv_to_rgb(h, s, 100.0), (1.0, 1.0, 1.0), 1e-10);
            }
        }
    }

    #[test]
    fn test_red_fixture() {
        let red = (12.177050630061776, 100.0, 53.23711559542933);
        assert_close(rgb_to_hsluv(1.0, 0.0, 0.0), red, 1e-8);
        assert_close(hsluv_to_rgb(red.0, red.1, red.2), (1.0, 0.0, 0.0), 1e-10);
    }

    #[test]
    fn test_known_colors() {
        // published reference values
        assert_close(
            rgb_to_hsluv(0.0, 0.0, 1.0),
            (265.8743202181779, 100.0, 32.30087290398002),
            1e-8,
        );
        assert_close(
            rgb_to_hsluv(0.0, 1.0, 0.0),
            (127.71501294924047, 100.0, 87.73551910965973),
            1e-8,
        );
        assert_close(
            rgb_to_hpluv(0.0, 1.0, 0.0),
            (127.71501294924047, 490.14537506371863, 87.73551910965973),
            1e-6,
        );
    }

    #[test]
    fn test_saturation_ordering() {
        // the hue-independent limit is never more generous than the hue-specific one, so HPLuv
        // saturation is always at least HSLuv saturation
        for l in 1..20u8 {
            let l = f64::from(l) * 5.0;
            for h in 0..36u16 {
                let h = f64::from(h) * 10.0;
                assert!(max_safe_chroma_for_l(l) <= max_chroma_for_lh(l, h) + 1e-9);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let (r, g, b) = hsluv_to_rgb(30.0, 150.0, 60.0);
        assert!(b < 0.0);
        assert!(r <= 1.0 && g <= 1.0);
        let (_, s, _) = rgb_to_hsluv(1.2, -0.1, 0.3);
        assert!(s > 100.0);
    }
}
