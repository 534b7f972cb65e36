//! This file provides the constants used for matrix multiplication and color space conversion. All
//! of them are compile-time literals: the sRGB primaries are fixed under D65, so unlike a general
//! color library there is nothing to invert or adapt at runtime. The two matrices are inverses of
//! each other to the precision written here, which is what keeps round trips through XYZ exact to
//! well under 1e-10.

use coord::Coord;

/// Rows of the XYZ to linear sRGB transform. Row `i` dotted with an XYZ point gives channel `i`.
pub const M: [Coord; 3] = [
    Coord {
        x: 3.2409699419045214,
        y: -1.5373831775700935,
        z: -0.49861076029300328,
    },
    Coord {
        x: -0.96924363628087983,
        y: 1.8759675015077207,
        z: 0.041555057407175613,
    },
    Coord {
        x: 0.055630079696993609,
        y: -0.20397695888897657,
        z: 1.0569715142428786,
    },
];

/// Rows of the linear sRGB to XYZ transform, the inverse of [`M`].
pub const M_INV: [Coord; 3] = [
    Coord {
        x: 0.41239079926595948,
        y: 0.35758433938387796,
        z: 0.18048078840183429,
    },
    Coord {
        x: 0.21263900587151036,
        y: 0.71516867876775593,
        z: 0.072192315360733715,
    },
    Coord {
        x: 0.019330818715591851,
        y: 0.11919477979462599,
        z: 0.95053215224966058,
    },
];

/// The u' chromaticity of the D65 white point.
pub const REF_U: f64 = 0.19783000664283681;
/// The v' chromaticity of the D65 white point.
pub const REF_V: f64 = 0.468319994938791;

/// (29/3)^3: the slope of the linear segment of the CIE lightness curve.
pub const KAPPA: f64 = 903.2962962962963;
/// (6/29)^3: the relative luminance where the CIE lightness curve switches from linear to cube root.
pub const EPSILON: f64 = 0.0088564516790356308;

/// Anything with lightness or chroma below this is treated as exactly black or gray.
pub const NEAR_ZERO: f64 = 0.00000001;
/// Anything with lightness above this is treated as exactly white.
pub const NEAR_WHITE: f64 = 99.9999999;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverses() {
        let cols = [
            Coord { x: 1., y: 0., z: 0. },
            Coord { x: 0., y: 1., z: 0. },
            Coord { x: 0., y: 0., z: 1. },
        ];
        for (j, col) in cols.iter().enumerate() {
            let xyz = Coord {
                x: M_INV[0].dot(col),
                y: M_INV[1].dot(col),
                z: M_INV[2].dot(col),
            };
            for (i, row) in M.iter().enumerate() {
                let expected = if i == j { 1. } else { 0. };
                assert!((row.dot(&xyz) - expected).abs() <= 1e-12);
            }
        }
    }

    #[test]
    fn test_white_point_chromaticity() {
        // D65 white is the image of RGB (1, 1, 1)
        let x: f64 = M_INV[0].x + M_INV[0].y + M_INV[0].z;
        let y: f64 = M_INV[1].x + M_INV[1].y + M_INV[1].z;
        let z: f64 = M_INV[2].x + M_INV[2].y + M_INV[2].z;
        let denom = x + 15.0 * y + 3.0 * z;
        assert!((4.0 * x / denom - REF_U).abs() <= 1e-9);
        assert!((9.0 * y / denom - REF_V).abs() <= 1e-9);
    }

    #[test]
    fn test_lightness_constants_agree() {
        // the two pieces of the lightness curve meet at EPSILON
        let linear = EPSILON * KAPPA;
        let cube_root = 116.0 * EPSILON.cbrt() - 16.0;
        assert!((linear - cube_root).abs() <= 1e-9);
        assert!((linear - 8.0).abs() <= 1e-9);
    }
}
