use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{math::lerp, Component, Oklab};

impl Oklab {
    /// Linearly interpolate every component, including alpha, from this color
    /// to `other` using `t` as the progress between them. `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: Component) -> Self {
        Self::new(
            lerp(self.l, other.l, t),
            lerp(self.a, other.a, t),
            lerp(self.b, other.b, t),
            lerp(self.alpha, other.alpha, t),
        )
    }
}

impl Add for Oklab {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.l + rhs.l,
            self.a + rhs.a,
            self.b + rhs.b,
            self.alpha + rhs.alpha,
        )
    }
}

impl Sub for Oklab {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.l - rhs.l,
            self.a - rhs.a,
            self.b - rhs.b,
            self.alpha - rhs.alpha,
        )
    }
}

impl AddAssign for Oklab {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Oklab {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
