//! This module finds the edges of the sRGB gamut in CIELUV. For a fixed lightness, the set of
//! in-gamut colors is a convex hexagon in the (u, v) chroma plane: each RGB channel contributes two
//! edges, one where the channel is 0 and one where it is 1. The achromatic pole (u = v = 0) always
//! sits inside it, so chroma limits reduce to distances from the pole to these six lines.
//!
//! HSLuv uses the distance along a ray at a given hue ([`max_chroma_for_lh`]), which gives the
//! largest chroma available at that exact hue. HPLuv uses the radius of the largest circle centered
//! on the pole that fits in the hexagon ([`max_safe_chroma_for_l`]), which is the same for every
//! hue and so keeps hue and saturation perceptually independent, at the cost of some gamut.


use consts::{EPSILON, KAPPA, M};

/// A line in the (u, v) plane, in slope-intercept form: v = `slope` * u + `intercept`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    /// The slope of the line.
    pub slope: f64,
    /// Where the line crosses the v axis.
    pub intercept: f64,
}

impl Line {
    /// The u coordinate where this line crosses another one. Parallel lines give an infinity or NaN.
    pub fn intersect_line(&self, other: &Line) -> f64 {
        (self.intercept - other.intercept) / (other.slope - self.slope)
    }
    /// The distance from the pole to this line along a ray at `theta` radians. The result is negative
    /// if the ray points away from the line.
    pub fn ray_length_until_intersect(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }
    /// The distance from the pole to the closest point on this line.
    pub fn distance_from_pole(&self) -> f64 {
        // the perpendicular through the pole
        let perpendicular = Line {
            slope: -1.0 / self.slope,
            intercept: 0.0,
        };
        let u = self.intersect_line(&perpendicular);
        let v = self.intercept + u * self.slope;
        u.hypot(v)
    }
}

/// Computes the six lines bounding the sRGB gamut at lightness `l`. They come in channel order (red,
/// green, blue), and for each channel the line where the channel is 0 comes before the one where it
/// is 1.
///
/// Any lightness is accepted. Between 0 and 100 exclusive the lines enclose the pole; at the
/// extremes the hexagon collapses and the lines stop meaning anything useful, which is why the
/// HSLuv and HPLuv conversions treat black and white separately.
pub fn get_bounds(l: f64) -> [Line; 6] {
    // relative luminance for this lightness
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut bounds = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];
    for (channel, row) in M.iter().enumerate() {
        let (m1, m2, m3) = (row.x, row.y, row.z);
        for t in 0..2u8 {
            let t_f = f64::from(t);
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2
                - 769860.0 * t_f * l;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t_f;
            bounds[channel * 2 + t as usize] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    bounds
}

/// The largest chroma that stays in gamut at lightness `l` for every hue: the radius of the
/// biggest circle around the pole that fits inside the gamut hexagon. Negative distances are
/// ignored; if every candidate is ignored the result is `f64::MAX`.
///
/// # Example
/// ```
/// # use hsluv::gamut::{max_chroma_for_lh, max_safe_chroma_for_l};
/// let safe = max_safe_chroma_for_l(50.0);
/// for h in 0..12u8 {
///     assert!(safe <= max_chroma_for_lh(50.0, f64::from(h) * 30.0) + 1e-9);
/// }
/// ```
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    get_bounds(l)
        .iter()
        .map(Line::distance_from_pole)
        .filter(|&d| d >= 0.0)
        .fold(f64::MAX, f64::min)
}

/// The largest chroma that stays in gamut at lightness `l` and hue `h` (in degrees): how far a ray
/// from the pole at that hue gets before leaving the gamut hexagon. Lines the ray points away from
/// give negative lengths and are skipped; if every line is skipped the result is `f64::MAX`.
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let hrad = h.to_radians();
    get_bounds(l)
        .iter()
        .map(|line| line.ray_length_until_intersect(hrad))
        .filter(|&len| len >= 0.0)
        .fold(f64::MAX, f64::min)
}
