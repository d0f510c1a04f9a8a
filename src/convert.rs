//! Conversions between gamma encoded RGB, linear light RGB and Oklab.
//!
//! The forward path is:
//!
//! 1. remove the sRGB curve to get linear light,
//! 2. multiply by [`LINEAR_SRGB_TO_LMS`],
//! 3. take the cube root of each cone response,
//! 4. multiply by [`LMS_TO_OKLAB`].
//!
//! The reverse path runs the same steps backwards using [`OKLAB_TO_LMS`] and
//! [`LMS_TO_LINEAR_SRGB`]. Alpha is carried through untouched in both
//! directions.

use crate::{
    math::{transform, transform_3x3, Matrix, Transform},
    Color, ColorF, Component, Oklab,
};

/// Linear light sRGB to approximate cone responses (M1).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LINEAR_SRGB_TO_LMS: Matrix = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube rooted cone responses to Oklab (M2).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LMS_TO_OKLAB: Matrix = [
    [0.2104542553,  0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050,  0.4505937099],
    [0.0259040371,  0.7827717662, -0.8086757660],
];

/// Oklab to cube rooted cone responses, the inverse of [`LMS_TO_OKLAB`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const OKLAB_TO_LMS: Matrix = [
    [1.0,  0.3963377774,  0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// Cone responses to linear light sRGB, the inverse of
/// [`LINEAR_SRGB_TO_LMS`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LMS_TO_LINEAR_SRGB: Matrix = [
    [ 4.0767416621, -3.3077115913,  0.2309699292],
    [-1.2684380046,  2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147,  1.7076147010],
];

const M1: Transform = transform_3x3(&LINEAR_SRGB_TO_LMS);
const M2: Transform = transform_3x3(&LMS_TO_OKLAB);
const M2_INV: Transform = transform_3x3(&OKLAB_TO_LMS);
const M1_INV: Transform = transform_3x3(&LMS_TO_LINEAR_SRGB);

impl Oklab {
    /// Convert a linear light sRGB color to Oklab.
    pub fn from_linear_color_f(linear: ColorF) -> Self {
        let lms = transform(&M1, linear.r, linear.g, linear.b).map(Component::cbrt);
        let [l, a, b] = transform(&M2, lms[0], lms[1], lms[2]);
        Self::new(l, a, b, linear.a)
    }

    /// Convert a gamma encoded sRGB color to Oklab.
    pub fn from_color_f(color: ColorF) -> Self {
        Self::from_linear_color_f(color.remove_srgb_curve())
    }

    /// Convert an 8-bit gamma encoded sRGB color to Oklab.
    pub fn from_color(color: Color) -> Self {
        Self::from_color_f(color.into())
    }

    /// Convert to linear light sRGB, without the sRGB curve applied. The
    /// channels are not clamped.
    pub fn to_linear_color_f(&self) -> ColorF {
        let lms = transform(&M2_INV, self.l, self.a, self.b).map(|v| v * v * v);
        let [r, g, b] = transform(&M1_INV, lms[0], lms[1], lms[2]);
        ColorF::new(r, g, b, self.alpha)
    }

    /// Convert to gamma encoded sRGB. The channels are not clamped, so colors
    /// outside of the sRGB gamut produce channels outside of `[0.0, 1.0]`.
    pub fn to_color_f(&self) -> ColorF {
        self.to_linear_color_f().apply_srgb_curve()
    }

    /// Same as [`Oklab::to_color_f`], with alpha replaced by `alpha`.
    pub fn to_color_f_with_alpha(&self, alpha: Component) -> ColorF {
        self.to_color_f().with_a(alpha)
    }

    /// Convert to 8-bit gamma encoded sRGB, clamping each channel.
    pub fn to_color(&self) -> Color {
        self.to_color_f().into()
    }

    /// Same as [`Oklab::to_color`], with alpha replaced by `alpha`.
    pub fn to_color_with_alpha(&self, alpha: u8) -> Color {
        self.to_color().with_a(alpha)
    }
}

impl From<Color> for Oklab {
    fn from(value: Color) -> Self {
        Self::from_color(value)
    }
}

impl From<ColorF> for Oklab {
    fn from(value: ColorF) -> Self {
        Self::from_color_f(value)
    }
}

impl From<Oklab> for Color {
    fn from(value: Oklab) -> Self {
        value.to_color()
    }
}

impl From<Oklab> for ColorF {
    fn from(value: Oklab) -> Self {
        value.to_color_f()
    }
}
