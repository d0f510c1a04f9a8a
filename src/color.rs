//! The RGB color types an [`Oklab`](crate::Oklab) converts from and to.
//!
//! [`Color`] stores gamma encoded channels as 8-bit integers, [`ColorF`]
//! stores them as floating point values in `[0.0, 1.0]`.

use bytemuck::{Pod, Zeroable};

use crate::gamma;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

oklab_macros::gen_model! {
    /// A gamma encoded RGBA color with 8 bits per channel.
    #[repr(C)]
    #[derive(PartialEq, Eq, Hash, Pod, Zeroable)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Color {
        /// The red channel.
        pub r: u8,
        /// The green channel.
        pub g: u8,
        /// The blue channel.
        pub b: u8,
        /// The alpha channel, 255 is fully opaque.
        pub a: u8,
    }
}

impl Color {
    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

/// Quantize a floating point channel to 8 bits, clamping to `[0.0, 1.0]`
/// first and rounding half up.
pub(crate) fn to_u8(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

impl From<ColorF> for Color {
    fn from(value: ColorF) -> Self {
        Self::new(
            to_u8(value.r),
            to_u8(value.g),
            to_u8(value.b),
            to_u8(value.a),
        )
    }
}

oklab_macros::gen_model! {
    /// An RGBA color with floating point channels. Whether the channels are
    /// gamma encoded or linear light depends on where the value came from.
    #[repr(C)]
    #[derive(PartialEq, Pod, Zeroable)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColorF {
        /// The red channel.
        pub r: Component,
        /// The green channel.
        pub g: Component,
        /// The blue channel.
        pub b: Component,
        /// The alpha channel, 1.0 is fully opaque.
        pub a: Component,
    }
}

impl ColorF {
    /// Create a fully opaque color.
    pub const fn rgb(r: Component, g: Component, b: Component) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Return new channels with each color channel mapped with the given
    /// function. Alpha is left untouched.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Convert gamma encoded sRGB channels to linear light.
    pub fn remove_srgb_curve(&self) -> Self {
        self.map(gamma::to_linear_light)
    }

    /// Convert linear light channels to gamma encoded sRGB.
    pub fn apply_srgb_curve(&self) -> Self {
        self.map(gamma::to_gamma_encoded)
    }
}

impl Default for ColorF {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl From<Color> for ColorF {
    fn from(value: Color) -> Self {
        let Color { r, g, b, a } = value;
        Self::new(
            r as Component / 255.0,
            g as Component / 255.0,
            b as Component / 255.0,
            a as Component / 255.0,
        )
    }
}
