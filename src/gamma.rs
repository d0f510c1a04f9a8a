//! The sRGB transfer function.
//! <https://www.w3.org/Graphics/Color/srgb>

use crate::Component;

/// Gamma encoded values at or below this are on the linear segment.
const ENCODED_KNEE: Component = 0.04045;

/// Linear light values at or below this are on the linear segment.
const LINEAR_KNEE: Component = 0.0031308;

const SLOPE: Component = 12.92;
const OFFSET: Component = 0.055;
const SCALE: Component = 1.055;
const GAMMA: Component = 2.4;

/// Convert a gamma encoded sRGB channel to linear light.
pub fn to_linear_light(value: Component) -> Component {
    if value <= ENCODED_KNEE {
        value / SLOPE
    } else {
        ((value + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Convert a linear light channel to gamma encoded sRGB.
pub fn to_gamma_encoded(value: Component) -> Component {
    if value <= LINEAR_KNEE {
        value * SLOPE
    } else {
        SCALE * value.powf(1.0 / GAMMA) - OFFSET
    }
}
