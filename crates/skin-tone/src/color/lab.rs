//! CIE L*a*b* color space
//!
//! Conversion path: 8-bit sRGB → linear RGB → XYZ (D65) → L*a*b*.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB), CIE 15:2004 (L*a*b*).

use super::linear_rgb::LinearRgb;
use super::sample::ColorSample;

/// D65 reference white, normalized so that Yn = 1.
const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Linear sRGB → XYZ under D65.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// (6/29)^3, below which the cube root is replaced by a line.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment, (29/6)^2 / 3.
const KAPPA_SLOPE: f64 = 7.787;

/// A color in CIE L*a*b* under the D65 illuminant.
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green(-) to red(+) axis
/// - `b`: blue(-) to yellow(+) axis
///
/// `a` and `b` are unbounded but fall roughly in -128..=127 for sRGB input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Distance from the neutral axis in the a/b plane.
    ///
    /// ```
    /// use skin_tone::Lab;
    /// assert_eq!(Lab::new(50.0, 3.0, 4.0).chroma(), 5.0);
    /// ```
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        let [xn, yn, zn] = D65_WHITE;
        let m = &SRGB_TO_XYZ;

        let x = m[0][0] * rgb.r + m[0][1] * rgb.g + m[0][2] * rgb.b;
        let y = m[1][0] * rgb.r + m[1][1] * rgb.g + m[1][2] * rgb.b;
        let z = m[2][0] * rgb.r + m[2][1] * rgb.g + m[2][2] * rgb.b;

        let fx = lab_f(x / xn);
        let fy = lab_f(y / yn);
        let fz = lab_f(z / zn);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<ColorSample> for Lab {
    fn from(sample: ColorSample) -> Self {
        Lab::from(LinearRgb::from(sample))
    }
}

/// Convert an 8-bit sRGB triple to CIE L*a*b* (D65).
///
/// Pure and total: every input triple has a defined result.
///
/// ```
/// use skin_tone::rgb_to_lab;
///
/// let white = rgb_to_lab(255, 255, 255);
/// assert!((white.l - 100.0).abs() < 1e-3);
/// ```
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    Lab::from(ColorSample::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
        assert!(
            (actual - expected).abs() < tol,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_black_and_white() {
        let black = rgb_to_lab(0, 0, 0);
        assert_close(black.l, 0.0, 1e-9, "black L");
        assert_close(black.a, 0.0, 1e-9, "black a");
        assert_close(black.b, 0.0, 1e-9, "black b");

        let white = rgb_to_lab(255, 255, 255);
        assert_close(white.l, 100.0, 1e-3, "white L");
        assert_close(white.a, 0.0, 1e-3, "white a");
        assert_close(white.b, 0.0, 1e-3, "white b");
    }

    #[test]
    fn test_grays_are_achromatic() {
        for v in 0..=255u8 {
            let lab = rgb_to_lab(v, v, v);
            assert!(lab.a.abs() < 1e-3, "gray {v} has a = {}", lab.a);
            assert!(lab.b.abs() < 1e-3, "gray {v} has b = {}", lab.b);
        }
    }

    #[test]
    fn test_lightness_strictly_increases_along_gray_ramp() {
        let mut prev = rgb_to_lab(0, 0, 0).l;
        for v in 1..=255u8 {
            let l = rgb_to_lab(v, v, v).l;
            assert!(l > prev, "L not increasing at {v}: {prev} -> {l}");
            prev = l;
        }
    }

    #[test]
    fn test_warm_skin_reference_value() {
        let lab = rgb_to_lab(210, 160, 120);
        assert_close(lab.l, 69.61, 0.01, "L");
        assert_close(lab.a, 13.44, 0.01, "a");
        assert_close(lab.b, 28.01, 0.01, "b");
        assert_close(lab.chroma(), 31.07, 0.01, "chroma");
    }

    #[test]
    fn test_primaries_have_expected_signs() {
        let red = rgb_to_lab(255, 0, 0);
        assert!(red.a > 70.0 && red.b > 60.0);

        let blue = rgb_to_lab(0, 0, 255);
        assert!(blue.b < -100.0);

        let green = rgb_to_lab(0, 255, 0);
        assert!(green.a < -80.0);
    }

    #[test]
    fn test_dark_values_use_linear_segment() {
        // Y for sRGB 5 is far below the 0.008856 knee
        let lab = rgb_to_lab(5, 5, 5);
        let y = LinearRgb::from(ColorSample::new(5, 5, 5)).r * 1.0000001;
        assert_close(lab.l, 116.0 * (7.787 * y + 16.0 / 116.0) - 16.0, 1e-9, "L");
    }
}
