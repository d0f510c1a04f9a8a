//! oklab provides a color value in the Oklab perceptual color space, along
//! with conversions to and from 8-bit and floating point sRGB colors.
//!
//! ```rust
//! use oklab::{Color, Oklab};
//!
//! let red = Oklab::from(Color::rgb(255, 0, 0));
//! let blue = Oklab::from(Color::rgb(0, 0, 255));
//!
//! // Mix in Oklab, then go back to sRGB for display.
//! let purple = red.lerp(&blue, 0.5).to_color();
//! assert_eq!(purple, Color::rgb(140, 83, 162));
//!
//! let text = format!("{:.2}", Oklab::opaque(0.5, -0.1, 0.1));
//! assert_eq!(text, "(0.50, -0.10, 0.10, 1.00)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod gamma;
mod interpolate;
mod math;
mod oklab;
mod text;

#[cfg(test)]
mod test;

pub use color::{Color, ColorF, Component};
pub use convert::{LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS};
pub use error::{Error, ParseError};
pub use gamma::{to_gamma_encoded, to_linear_light};
pub use math::{Matrix, Vec3, Vec4};
pub use oklab::Oklab;
